//! Conversation grouping for parsed session entries.
//!
//! The grouping is a fold over the entry sequence carrying the finished
//! conversations and the one currently being accumulated:
//!
//! - **No active conversation**: only a user message does anything (it starts one).
//!   Model switches, assistant messages and tool results that arrive before the
//!   first user message have nothing to attach to and are dropped.
//! - **Active conversation**: a user message flushes it and starts the next one;
//!   every other message and every model/thinking-level switch is appended to it.
//!
//! Session headers and unknown entry tags are never attached. The last active
//! conversation is flushed at the end of the stream.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::models::{AssistantMessage, Conversation, EMPTY_USER_TEXT, Entry, Message, Transcript};
use crate::parsers::{ParsedSession, extract_text_from_content, parse_session_file};

/// Group an ordered entry sequence into conversations
///
/// Output order equals the order of the initiating user messages, and each
/// conversation's `messages[0]` is the user entry that started it.
pub fn group_conversations<I>(entries: I) -> Vec<Conversation>
where
    I: IntoIterator<Item = Entry>,
{
    let (mut conversations, active) =
        entries.into_iter().fold((Vec::new(), None), |(mut conversations, active), entry| {
            let active = step(&mut conversations, active, entry);
            (conversations, active)
        });

    conversations.extend(active);
    conversations
}

/// Apply one entry to the fold state, returning the new active conversation
fn step(
    conversations: &mut Vec<Conversation>,
    active: Option<Conversation>,
    entry: Entry,
) -> Option<Conversation> {
    match &entry {
        Entry::ModelChange(_) | Entry::ThinkingLevelChange(_) => attach(active, entry),
        Entry::Message(message_entry) => match &message_entry.message {
            Message::User(user) => {
                let user_text = extract_text_from_content(&user.content);
                let timestamp = message_entry.timestamp;
                conversations.extend(active);
                Some(start_conversation(user_text, timestamp, entry))
            }
            Message::Assistant(assistant) => {
                let mut conversation = active?;
                record_assistant(&mut conversation, assistant);
                conversation.messages.push(entry);
                Some(conversation)
            }
            Message::ToolResult(_) | Message::Other { .. } => attach(active, entry),
        },
        Entry::Session(_) | Entry::Other { .. } => active,
    }
}

fn start_conversation(
    user_text: String,
    timestamp: Option<DateTime<Utc>>,
    entry: Entry,
) -> Conversation {
    let user_text = if user_text.is_empty() { EMPTY_USER_TEXT.to_string() } else { user_text };

    Conversation {
        user_text,
        timestamp,
        messages: vec![entry],
        model: None,
        total_cost: 0.0,
        tool_counts: BTreeMap::new(),
    }
}

/// Append an entry with no aggregate effect; dropped when nothing is active
fn attach(active: Option<Conversation>, entry: Entry) -> Option<Conversation> {
    active.map(|mut conversation| {
        conversation.messages.push(entry);
        conversation
    })
}

fn record_assistant(conversation: &mut Conversation, assistant: &AssistantMessage) {
    match &assistant.model {
        Some(model) if !model.is_empty() => conversation.model = Some(model.clone()),
        // Sticky: keep the last known model
        Some(_) | None => {}
    }

    if let Some(cost) = assistant.cost_total()
        && cost != 0.0
    {
        conversation.total_cost += cost;
    }

    for name in assistant.tool_call_names() {
        *conversation.tool_counts.entry(name.to_string()).or_insert(0) += 1;
    }
}

/// Group an already parsed session
pub fn build_transcript_from_parsed(parsed: ParsedSession) -> Transcript {
    Transcript { header: parsed.header, conversations: group_conversations(parsed.entries) }
}

/// Read, parse and group a session file
///
/// # Errors
///
/// Returns an error only when the file itself cannot be read; see
/// [`parse_session_file`].
pub fn build_transcript(path: &Path) -> Result<Transcript> {
    let parsed = parse_session_file(path)?;
    Ok(build_transcript_from_parsed(parsed))
}
