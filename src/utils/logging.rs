//! Tracing subscriber setup for the binary.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";
const LOG_FILENAME: &str = "trudy-search.log";

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// CLI subcommands
    Stderr,
    /// The TUI owns the screen, so it logs to `trudy-search.log` in this directory
    File(PathBuf),
}

fn env_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose { "debug" } else { DEFAULT_FILTER };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the global subscriber; returns the log file path for [`LogTarget::File`]
///
/// Installing twice is not an error (the second call is ignored), which keeps
/// integration tests that call into the CLI repeatedly well-behaved.
pub fn init_logging(target: &LogTarget, verbose: bool) -> Result<Option<PathBuf>> {
    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter(verbose))
                .with_writer(std::io::stderr)
                .try_init();
            Ok(None)
        }
        LogTarget::File(dir) => {
            let path = open_log_path(dir)?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter(verbose))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
            Ok(Some(path))
        }
    }
}

fn open_log_path(dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
    Ok(dir.join(LOG_FILENAME))
}
