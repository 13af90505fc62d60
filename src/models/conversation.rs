use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::models::{Entry, SessionHeader};

/// Shown in place of the user text when the initiating message has none
pub const EMPTY_USER_TEXT: &str = "(empty message)";

/// One user turn plus every entry that followed it up to the next user turn
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    pub user_text: String,
    pub timestamp: Option<DateTime<Utc>>,
    /// Starts with the initiating user entry
    pub messages: Vec<Entry>,
    /// Last model name reported by an assistant message in this turn
    pub model: Option<String>,
    pub total_cost: f64,
    pub tool_counts: BTreeMap<String, usize>,
}

impl Conversation {
    /// Number of tool calls issued across all assistant messages
    pub fn tool_call_count(&self) -> usize {
        self.tool_counts.values().sum()
    }
}

/// Parsed and grouped view of a whole session file
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transcript {
    pub header: Option<SessionHeader>,
    pub conversations: Vec<Conversation>,
}
