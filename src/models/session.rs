use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Header record written once at the top of a session file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionHeader {
    pub id: String,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_optional_timestamp"
    )]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cwd: String,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_or_default")]
    pub version: Option<u32>,
}

/// One record of the session log, discriminated by its `type` field.
///
/// Deserialization lives in `parsers::deserializers`: known tags are decoded
/// strictly, any other tag is kept as [`Entry::Other`] with the raw record.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Session(SessionHeader),
    ModelChange(ModelChange),
    ThinkingLevelChange(ThinkingLevelChange),
    Message(MessageEntry),
    Other { entry_type: String, raw: Value },
}

impl Entry {
    /// Wire tag of this entry
    pub fn entry_type(&self) -> &str {
        match self {
            Entry::Session(_) => "session",
            Entry::ModelChange(_) => "model_change",
            Entry::ThinkingLevelChange(_) => "thinking_level_change",
            Entry::Message(_) => "message",
            Entry::Other { entry_type, .. } => entry_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelChange {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_optional_timestamp"
    )]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub model_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThinkingLevelChange {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_optional_timestamp"
    )]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub thinking_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_optional_timestamp"
    )]
    pub timestamp: Option<DateTime<Utc>>,
    pub message: Message,
}

/// Message payload, discriminated by its `role` field
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    User(UserMessage),
    Assistant(AssistantMessage),
    ToolResult(ToolResultMessage),
    Other { role: String, raw: Value },
}

impl Message {
    pub fn role(&self) -> &str {
        match self {
            Message::User(_) => "user",
            Message::Assistant(_) => "assistant",
            Message::ToolResult(_) => "toolResult",
            Message::Other { role, .. } => role,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct UserMessage {
    #[serde(default)]
    pub content: MessageContent,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantMessage {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_or_default")]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_or_default")]
    pub provider: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_or_default")]
    pub usage: Option<Usage>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_or_default")]
    pub stop_reason: Option<String>,
}

impl AssistantMessage {
    /// Cost total reported by the provider, if any
    pub fn cost_total(&self) -> Option<f64> {
        self.usage.as_ref().and_then(|u| u.cost.as_ref()).and_then(|c| c.total)
    }

    /// Names of every tool call issued by this message, in block order
    pub fn tool_call_names(&self) -> impl Iterator<Item = &str> {
        self.content.iter().filter_map(|block| match block {
            ContentBlock::ToolCall { name, .. } => Some(name.as_str()),
            ContentBlock::Text { .. }
            | ContentBlock::Thinking { .. }
            | ContentBlock::Image { .. }
            | ContentBlock::Unknown { .. } => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResultMessage {
    pub tool_call_id: String,
    pub tool_name: String,
    #[serde(default)]
    pub content: MessageContent,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_or_default")]
    pub is_error: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usage {
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_or_default")]
    pub input: u64,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_or_default")]
    pub output: u64,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_or_default")]
    pub cache_read: u64,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_or_default")]
    pub cache_write: u64,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_or_default")]
    pub total_tokens: u64,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_or_default")]
    pub cost: Option<Cost>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cost {
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_or_default")]
    pub input: f64,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_or_default")]
    pub output: f64,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_or_default")]
    pub cache_read: f64,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_or_default")]
    pub cache_write: f64,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_or_default")]
    pub total: Option<f64>,
}

/// Message content: either a plain string or a sequence of typed blocks.
///
/// Any other JSON shape is kept as [`MessageContent::Other`] so a record with
/// odd content still parses; it carries no extractable text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
    Other(Value),
}

impl Default for MessageContent {
    fn default() -> Self {
        MessageContent::Blocks(Vec::new())
    }
}

/// Smallest addressable unit of message content.
///
/// Unknown block kinds decode to [`ContentBlock::Unknown`] and are never rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Text { text: String },
    Thinking { thinking: String },
    ToolCall { id: String, name: String, arguments: Map<String, Value> },
    Image { data: String, mime_type: String },
    Unknown { block_type: String, raw: Value },
}
