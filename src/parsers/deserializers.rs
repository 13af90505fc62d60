use chrono::{DateTime, Utc};
use serde::de::Error;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::models::{
    AssistantMessage, ContentBlock, Entry, Message, MessageEntry, ModelChange, SessionHeader,
    ThinkingLevelChange, ToolResultMessage, UserMessage,
};

/// Custom deserializer for optional timestamps that accepts integers (ms) and RFC3339 strings
///
/// A timestamp never decides whether a record is valid: `null`, an unparsable
/// string, a fractional or out-of-range number, or any other shape all yield `None`.
pub fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let timestamp = match value {
        // Assume it's a Unix timestamp in milliseconds
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        Value::String(s) => s.parse::<DateTime<Utc>>().ok(),
        _ => None,
    };
    Ok(timestamp)
}

/// Deserializer for non-structural fields (counters, flags, labels)
///
/// A value of the wrong shape, including `null`, becomes `T::default()` instead of
/// failing the whole record.
pub fn deserialize_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

impl<'de> Deserialize<'de> for Entry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let entry_type = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| D::Error::missing_field("type"))?
            .to_owned();

        let entry = match entry_type.as_str() {
            "session" => {
                Entry::Session(SessionHeader::deserialize(&value).map_err(D::Error::custom)?)
            }
            "model_change" => {
                Entry::ModelChange(ModelChange::deserialize(&value).map_err(D::Error::custom)?)
            }
            "thinking_level_change" => Entry::ThinkingLevelChange(
                ThinkingLevelChange::deserialize(&value).map_err(D::Error::custom)?,
            ),
            "message" => {
                Entry::Message(MessageEntry::deserialize(&value).map_err(D::Error::custom)?)
            }
            other => Entry::Other { entry_type: other.to_owned(), raw: value },
        };

        Ok(entry)
    }
}

impl<'de> Deserialize<'de> for Message {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let role = value
            .get("role")
            .and_then(Value::as_str)
            .ok_or_else(|| D::Error::missing_field("role"))?
            .to_owned();

        let message = match role.as_str() {
            "user" => Message::User(UserMessage::deserialize(&value).map_err(D::Error::custom)?),
            "assistant" => {
                Message::Assistant(AssistantMessage::deserialize(&value).map_err(D::Error::custom)?)
            }
            "toolResult" => {
                let tool_result = ToolResultMessage::deserialize(&value).map_err(D::Error::custom)?;
                Message::ToolResult(tool_result)
            }
            other => Message::Other { role: other.to_owned(), raw: value },
        };

        Ok(message)
    }
}

/// Wire shape of the content blocks this crate understands
#[derive(Deserialize)]
#[serde(tag = "type")]
enum KnownBlock {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "thinking")]
    Thinking { thinking: String },
    #[serde(rename = "toolCall")]
    ToolCall {
        #[serde(default)]
        id: String,
        name: String,
        #[serde(default)]
        arguments: Map<String, Value>,
    },
    #[serde(rename = "image")]
    Image {
        #[serde(default)]
        data: String,
        #[serde(default, rename = "mimeType")]
        mime_type: String,
    },
}

impl<'de> Deserialize<'de> for ContentBlock {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(decode_content_block(value))
    }
}

/// Blocks never fail: an unrecognised or malformed block is kept as `Unknown`
fn decode_content_block(value: Value) -> ContentBlock {
    match KnownBlock::deserialize(&value) {
        Ok(KnownBlock::Text { text }) => ContentBlock::Text { text },
        Ok(KnownBlock::Thinking { thinking }) => ContentBlock::Thinking { thinking },
        Ok(KnownBlock::ToolCall { id, name, arguments }) => {
            ContentBlock::ToolCall { id, name, arguments }
        }
        Ok(KnownBlock::Image { data, mime_type }) => ContentBlock::Image { data, mime_type },
        Err(_) => {
            let block_type =
                value.get("type").and_then(Value::as_str).unwrap_or_default().to_owned();
            ContentBlock::Unknown { block_type, raw: value }
        }
    }
}
