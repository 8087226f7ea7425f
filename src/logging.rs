//! Tracing subscriber set-up.
//!
//! The terminal UI owns stdout, so it logs to a file. Headless commands log
//! to stderr, leaving stdout for their output.

use crate::config::Config;
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Sends logs to the configured log file.
pub fn init_file(config: &Config) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(config.log_filter()))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Sends logs to stderr.
pub fn init_stderr(config: &Config) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(config.log_filter()))
        .with_writer(std::io::stderr)
        .try_init();
}
