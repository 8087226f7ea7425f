//! Front-end configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "noughts.toml";

/// Settings for the terminal front-end and logging.
///
/// Every field is optional in the TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File the terminal UI writes its log to.
    log_file: PathBuf,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    log_filter: String,

    /// Show the 1-9 key inside empty cells.
    show_cell_numbers: bool,

    /// Accept mouse clicks on cells.
    mouse: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("noughts.log"),
            log_filter: "info".to_string(),
            show_cell_numbers: true,
            mouse: true,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Turns mouse input off.
    pub fn without_mouse(mut self) -> Self {
        self.mouse = false;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
