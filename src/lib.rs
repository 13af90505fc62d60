//! pi-transcript - Turn coding agent session logs into navigable conversations
//!
//! A session log is an append-only JSONL file written by the agent while it runs.
//! This library:
//!
//! - Parses the log into a session header plus ordered entries, dropping lines that
//!   are not valid records (the last line of a live log is often truncated)
//! - Groups the entries into conversations: one user turn plus everything up to the
//!   next user turn, with cost, model and tool-call counts per conversation
//! - Computes session totals and splits conversations into fixed-size pages
//!
//! # Example
//!
//! ```no_run
//! use pi_transcript::{Pagination, SessionStats, build_transcript};
//! use std::path::Path;
//!
//! let transcript = build_transcript(Path::new("session.jsonl"))?;
//! let stats = SessionStats::from_conversations(&transcript.conversations);
//! let pages = Pagination::with_default_size(transcript.conversations.len());
//! println!("{} conversations on {} pages", stats.conversations, pages.total_pages());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod conversations;
pub mod discovery;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use conversations::{
    PAGE_SIZE, Pagination, SessionStats, build_transcript, group_conversations,
};
pub use models::{Conversation, Entry, Transcript};
pub use parsers::{extract_text_from_content, parse_session_file, parse_session_text};
pub use utils::format_path_with_tilde;
