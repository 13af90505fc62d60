use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::models::{Entry, SessionHeader};
use crate::utils::validate_file_size;

/// Header and ordered entries of one session log
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedSession {
    pub header: Option<SessionHeader>,
    /// Every non-header record, in line order
    pub entries: Vec<Entry>,
}

/// Parse the full text of a session log
///
/// Blank lines are skipped and lines that are not a structurally valid record
/// are dropped without error: the log may be written by a live process, so a
/// truncated final line is expected. A `session` record replaces any header
/// seen before it.
pub fn parse_session_text(text: &str) -> ParsedSession {
    let mut header: Option<SessionHeader> = None;
    let mut entries = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let Ok(entry) = serde_json::from_str::<Entry>(line) else {
            continue;
        };

        match entry {
            Entry::Session(next) => {
                if let Some(previous) = &header {
                    warn!(
                        previous = %previous.id,
                        replacement = %next.id,
                        "session log contains more than one header, keeping the last"
                    );
                }
                header = Some(next);
            }
            other => entries.push(other),
        }
    }

    ParsedSession { header, entries }
}

/// Read and parse a session log file
///
/// # Errors
///
/// Returns an error if the file cannot be opened, exceeds the size limit, or is
/// not valid UTF-8. Individual malformed lines never cause an error.
pub fn parse_session_file(path: &Path) -> Result<ParsedSession> {
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open session file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let mut text = String::new();
    file.read_to_string(&mut text)
        .with_context(|| format!("Failed to read session file: {}", path.display()))?;

    let parsed = parse_session_text(&text);
    debug!(
        path = %path.display(),
        entries = parsed.entries.len(),
        has_header = parsed.header.is_some(),
        "parsed session file"
    );

    Ok(parsed)
}
