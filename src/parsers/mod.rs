//! JSONL parsing for agent session logs
//!
//! # Error Handling Strategy
//!
//! Parsing is split into two tiers:
//!
//! - **Fatal**: the file cannot be opened, is larger than the size limit, or is not
//!   valid UTF-8. These propagate as `anyhow` errors with the path in context so a
//!   batch caller can skip the file and carry on.
//!
//! - **Per-line**: a line that is not a structurally valid record is dropped
//!   silently. Logs are appended by a live process and a truncated last line is
//!   normal, so nothing is counted or reported.
//!
//! Unknown entry tags, message roles and content block kinds are not failures;
//! they decode to opaque variants that carry the raw JSON.

pub mod deserializers;
pub mod session;
pub mod text;

pub use session::{ParsedSession, parse_session_file, parse_session_text};
pub use text::{extract_text_from_blocks, extract_text_from_content};
