//! Discovery of session log files on disk
//!
//! Session logs live under `~/.pi/agent/sessions/<encoded-cwd>/<timestamp>_<id>.jsonl`.
//! Discovery only locates files; nothing is parsed here. Unreadable directory
//! entries are logged and skipped so one bad directory does not hide the rest.

pub mod session_files;

pub use session_files::{SessionFile, discover_session_files};
