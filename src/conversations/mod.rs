//! Conversation grouping, statistics and pagination
//!
//! [`group_conversations`] folds the parsed entry stream into one [`Conversation`]
//! per user turn. [`SessionStats`] and [`Pagination`] are pure views over the
//! grouped output, used for summaries and page layout.
//!
//! [`Conversation`]: crate::models::Conversation

pub mod builder;
pub mod pagination;
pub mod stats;

pub use builder::{build_transcript, build_transcript_from_parsed, group_conversations};
pub use pagination::{PAGE_SIZE, Pagination};
pub use stats::SessionStats;
