use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use clap::{ArgAction, Parser, Subcommand};
use rayon::prelude::*;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::conversations::{Pagination, SessionStats, build_transcript};
use crate::discovery::discover_session_files;
use crate::models::{Conversation, Transcript};
use crate::utils::{
    format_cost, format_path_with_tilde, format_timestamp, get_sessions_dir, truncate_text,
};

const USER_TEXT_PREVIEW_CHARS: usize = 72;

#[derive(Parser)]
#[command(name = "pi-transcript")]
#[command(version)]
#[command(about = "Browse coding agent session logs as grouped conversations", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Sessions directory (defaults to $PI_AGENT_HOME/sessions or ~/.pi/agent/sessions)
    #[arg(long, global = true, value_name = "DIR")]
    pub sessions_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show statistics for one or more session files
    Stats {
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
    },
    /// List the conversations of a session file, one page at a time
    Conversations {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Page to show (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// List session files in the sessions directory
    Sessions,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Some(Commands::Stats { files }) => {
            show_stats(files)?;
        }
        Some(Commands::Conversations { file, page }) => {
            show_conversations(file, *page)?;
        }
        Some(Commands::Sessions) => {
            list_sessions(cli.sessions_dir.as_deref())?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

/// `RUST_LOG` is honoured only when no `-v` flag is given
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("pi_transcript=debug"),
        _ => EnvFilter::new("pi_transcript=trace"),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn show_stats(files: &[PathBuf]) -> Result<()> {
    // Each file is parsed independently; a file that cannot be read is skipped
    let results: Vec<(&PathBuf, Result<Transcript>)> =
        files.par_iter().map(|path| (path, build_transcript(path))).collect();

    let mut totals = SessionStats::default();
    let mut parsed_files = 0;

    println!("Session Statistics");
    println!("==================");

    for (path, result) in results {
        let transcript = match result {
            Ok(transcript) => transcript,
            Err(e) => {
                warn!(path = %path.display(), "skipping session file: {:#}", e);
                continue;
            }
        };
        parsed_files += 1;

        let stats = SessionStats::from_conversations(&transcript.conversations);
        println!(
            "{}: {} conversations, {} messages, {} tool calls, {}",
            format_path_with_tilde(path),
            stats.conversations,
            stats.messages,
            stats.tool_calls,
            format_cost(stats.total_cost)
        );
        if let Some(header) = &transcript.header {
            println!("  session {} in {}", header.id, header.cwd);
        }
        totals = totals.merge(stats);
    }

    if parsed_files == 0 {
        bail!("None of the {} session files could be read", files.len());
    }

    println!();
    println!("Files: {}", parsed_files);
    println!("Total conversations: {}", totals.conversations);
    println!("Total messages: {}", totals.messages);
    println!("Total tool calls: {}", totals.tool_calls);
    println!("Total cost: {}", format_cost(totals.total_cost));
    if !totals.models.is_empty() {
        let models: Vec<&str> = totals.models.iter().map(String::as_str).collect();
        println!("Models: {}", models.join(", "));
    }
    if let Some(first) = totals.first_timestamp {
        println!("First conversation: {}", format_timestamp(Some(first)));
    }
    if let Some(last) = totals.last_timestamp {
        println!("Last conversation: {}", format_timestamp(Some(last)));
    }

    Ok(())
}

fn show_conversations(file: &Path, page: usize) -> Result<()> {
    let transcript = build_transcript(file)?;
    let pagination = Pagination::with_default_size(transcript.conversations.len());

    let Some(range) = pagination.page_range(page) else {
        bail!("Page {} out of range (1-{})", page, pagination.total_pages());
    };

    if let Some(header) = &transcript.header {
        println!("Session {} ({})", header.id, header.cwd);
    }
    println!(
        "Page {} of {} ({} conversations)",
        page,
        pagination.total_pages(),
        pagination.total_items()
    );

    for index in range {
        let conversation = transcript
            .conversations
            .get(index)
            .with_context(|| format!("Conversation {} missing from page {}", index + 1, page))?;
        println!();
        print_conversation(index + 1, conversation);
    }

    Ok(())
}

fn print_conversation(number: usize, conversation: &Conversation) {
    println!(
        "#{}  {}  {}",
        number,
        format_timestamp(conversation.timestamp),
        truncate_text(&conversation.user_text, USER_TEXT_PREVIEW_CHARS)
    );

    let tools: Vec<String> = conversation
        .tool_counts
        .iter()
        .map(|(name, count)| format!("{} x{}", name, count))
        .collect();
    println!(
        "    model: {}  cost: {}  entries: {}  tools: {}",
        conversation.model.as_deref().unwrap_or("-"),
        format_cost(conversation.total_cost),
        conversation.messages.len(),
        if tools.is_empty() { "-".to_string() } else { tools.join(", ") }
    );
}

fn list_sessions(sessions_dir: Option<&Path>) -> Result<()> {
    let root = match sessions_dir {
        Some(dir) => dir.to_path_buf(),
        None => get_sessions_dir()?,
    };
    let files = discover_session_files(&root)?;

    if files.is_empty() {
        println!("No session files found in {}", format_path_with_tilde(&root));
        return Ok(());
    }

    println!("{} session files in {}", files.len(), format_path_with_tilde(&root));
    for file in &files {
        let relative = file.path.strip_prefix(&root).unwrap_or(&file.path);
        let modified = format_timestamp(file.modified.map(DateTime::<Utc>::from));
        println!("  {}  ({} bytes, modified {})", relative.display(), file.size_bytes, modified);
    }

    Ok(())
}
