//! Data models for agent session logs.
//!
//! - [`Entry`] - One record of the session log (header, model switch, message, ...)
//! - [`Message`] / [`ContentBlock`] - Message payloads and their content blocks
//! - [`Conversation`] - One user turn plus everything that followed it
//! - [`Transcript`] - Session header plus the ordered conversations of one file
//!
//! Tagged unions are decoded by hand in `parsers::deserializers` so that unknown
//! tags survive as opaque variants instead of failing the whole record.

pub mod conversation;
pub mod session;

pub use conversation::{Conversation, EMPTY_USER_TEXT, Transcript};
pub use session::{
    AssistantMessage, ContentBlock, Cost, Entry, Message, MessageContent, MessageEntry,
    ModelChange, SessionHeader, ThinkingLevelChange, ToolResultMessage, Usage, UserMessage,
};
