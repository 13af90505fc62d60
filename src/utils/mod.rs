pub mod display;
pub mod environment;
pub mod paths;

pub use display::{format_cost, format_timestamp, truncate_text};
pub use environment::get_sessions_dir;
pub use paths::{format_path_with_tilde, validate_file_size};
