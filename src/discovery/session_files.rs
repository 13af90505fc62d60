use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{Result, bail};
use tracing::warn;
use walkdir::WalkDir;

/// Maximum number of session files to collect (prevent resource exhaustion)
const MAX_SESSION_FILES: usize = 10_000;

/// Maximum directory depth below the sessions root
const MAX_DEPTH: usize = 4;

/// A session log found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionFile {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub modified: Option<SystemTime>,
}

/// Find all `*.jsonl` session logs below `root`, sorted by path
///
/// Symlinks are not followed. A missing root yields an empty list (not an error).
///
/// # Errors
///
/// Returns an error if more than [`MAX_SESSION_FILES`] files are found.
pub fn discover_session_files(root: &Path) -> Result<Vec<SessionFile>> {
    if !root.exists() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false).max_depth(MAX_DEPTH) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(root = %root.display(), error = %e, "skipping unreadable directory entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|ext| ext.to_str()) != Some("jsonl") {
            continue;
        }

        if files.len() >= MAX_SESSION_FILES {
            bail!(
                "Resource limit exceeded: Found more than {} session files under {}",
                MAX_SESSION_FILES,
                root.display()
            );
        }

        let metadata = entry.metadata().ok();
        files.push(SessionFile {
            path: entry.into_path(),
            size_bytes: metadata.as_ref().map_or(0, |m| m.len()),
            modified: metadata.and_then(|m| m.modified().ok()),
        });
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}
