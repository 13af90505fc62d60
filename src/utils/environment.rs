use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable that overrides the agent home directory
pub const AGENT_HOME_ENV: &str = "PI_AGENT_HOME";

/// Get the session log root
///
/// `$PI_AGENT_HOME/sessions` when the variable is set, `~/.pi/agent/sessions` otherwise.
pub fn get_sessions_dir() -> Result<PathBuf> {
    sessions_dir_from(env::var_os(AGENT_HOME_ENV).map(PathBuf::from), dirs::home_dir())
}

fn sessions_dir_from(agent_home: Option<PathBuf>, home: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(agent_home) = agent_home.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(agent_home.join("sessions"));
    }
    let home = home.context("Could not determine home directory")?;
    Ok(home.join(".pi").join("agent").join("sessions"))
}
