use std::hint::black_box;

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use pi_transcript::conversations::{Pagination, SessionStats, group_conversations};
use pi_transcript::parsers::parse_session_text;

/// Synthetic log where every user turn triggers `rounds` assistant/tool round trips
fn generate_session(num_turns: usize, rounds: usize) -> String {
    let mut content = String::new();
    for i in 0..num_turns {
        content.push_str(&format!(
            r#"{{"type":"message","id":"u{i}","message":{{"role":"user","content":"Prompt {i}"}}}}"#
        ));
        content.push('\n');
        for r in 0..rounds {
            content.push_str(&format!(
                r#"{{"type":"message","id":"a{i}-{r}","message":{{"role":"assistant","content":[{{"type":"toolCall","id":"c{r}","name":"read","arguments":{{}}}}],"usage":{{"cost":{{"total":0.002}}}}}}}}"#
            ));
            content.push('\n');
            content.push_str(&format!(
                r#"{{"type":"message","id":"t{i}-{r}","message":{{"role":"toolResult","toolCallId":"c{r}","toolName":"read","content":"data"}}}}"#
            ));
            content.push('\n');
        }
    }
    content
}

fn bench_group_conversations(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_conversations");

    for turns in [100, 1_000, 5_000].iter() {
        let entries = parse_session_text(&generate_session(*turns, 4)).entries;

        group.throughput(Throughput::Elements(entries.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(turns), turns, |b, _| {
            b.iter_batched(
                || entries.clone(),
                |entries| group_conversations(black_box(entries)),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_stats_and_pagination(c: &mut Criterion) {
    let conversations = group_conversations(parse_session_text(&generate_session(5_000, 4)).entries);

    c.bench_function("session_stats_5000", |b| {
        b.iter(|| SessionStats::from_conversations(black_box(&conversations)));
    });
    c.bench_function("pagination_pages_5000", |b| {
        b.iter(|| Pagination::with_default_size(black_box(conversations.len())).pages().count());
    });
}

criterion_group!(benches, bench_group_conversations, bench_stats_and_pagination);
criterion_main!(benches);
