//! File logging for the picker.
//!
//! The terminal is owned by the TUI, so events go to a daily rolling file
//! under the user cache directory instead of stderr.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "SIMPLE_SELECT_LOG";
const LOG_FILE_PREFIX: &str = "simple-select.log";
const DEFAULT_LEVEL: &str = "info";

pub fn default_log_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("simple-select").join("logs"))
}

/// Picks the filter directive: env var first, then the configured level,
/// then `info`.
pub fn filter_directive(env_value: Option<String>, configured: Option<&str>) -> String {
    env_value
        .filter(|value| !value.trim().is_empty())
        .or_else(|| configured.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string())
}

/// Installs the global subscriber. The returned guard flushes pending
/// lines when dropped and must be held until the process exits.
pub fn init(log_dir: &Path, configured_level: Option<&str>) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let directive = filter_directive(std::env::var(LOG_ENV_VAR).ok(), configured_level);
    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("Invalid log filter: {}", directive))?;

    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    Ok(guard)
}
