use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::models::Conversation;

/// Totals over a set of conversations, recomputed on demand
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionStats {
    pub conversations: usize,
    /// Includes attached side entries, not just user and assistant turns
    pub messages: usize,
    pub tool_calls: usize,
    pub total_cost: f64,
    pub models: BTreeSet<String>,
    pub first_timestamp: Option<DateTime<Utc>>,
    pub last_timestamp: Option<DateTime<Utc>>,
}

impl SessionStats {
    pub fn from_conversations(conversations: &[Conversation]) -> Self {
        conversations.iter().fold(Self::default(), |mut stats, conversation| {
            stats.conversations += 1;
            stats.messages += conversation.messages.len();
            stats.tool_calls += conversation.tool_call_count();
            stats.total_cost += conversation.total_cost;
            if let Some(model) = &conversation.model {
                stats.models.insert(model.clone());
            }
            stats.observe_timestamp(conversation.timestamp);
            stats
        })
    }

    /// Combine totals from another session, e.g. across a batch of files
    pub fn merge(mut self, other: SessionStats) -> Self {
        self.conversations += other.conversations;
        self.messages += other.messages;
        self.tool_calls += other.tool_calls;
        self.total_cost += other.total_cost;
        self.models.extend(other.models);
        self.observe_timestamp(other.first_timestamp);
        self.observe_timestamp(other.last_timestamp);
        self
    }

    fn observe_timestamp(&mut self, timestamp: Option<DateTime<Utc>>) {
        let Some(timestamp) = timestamp else {
            return;
        };
        self.first_timestamp = Some(self.first_timestamp.map_or(timestamp, |t| t.min(timestamp)));
        self.last_timestamp = Some(self.last_timestamp.map_or(timestamp, |t| t.max(timestamp)));
    }
}
