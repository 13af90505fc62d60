use chrono::{DateTime, Utc};

/// Shorten `text` to at most `max_chars` characters, marking the cut with `...`
///
/// Newlines are flattened to spaces so the result fits on one line.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    let flat: String = text.chars().map(|c| if c == '\n' || c == '\r' { ' ' } else { c }).collect();
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let keep = max_chars.saturating_sub(3);
    let mut truncated: String = flat.chars().take(keep).collect();
    truncated.push_str("...");
    truncated
}

/// Dollar amount with four decimals, e.g. `$0.0123`
pub fn format_cost(cost: f64) -> String {
    format!("${:.4}", cost)
}

pub fn format_timestamp(timestamp: Option<DateTime<Utc>>) -> String {
    timestamp
        .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "unknown time".to_string())
}
