//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use retrace_tictactoe::SIDE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Config {
    /// Board side length. Only 3 is supported.
    #[serde(default = "default_side")]
    side: usize,

    /// Show the history list newest first at startup.
    #[serde(default)]
    sort_descending: bool,

    /// Where the interactive UI writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_side() -> usize {
    SIDE
}

fn default_log_file() -> PathBuf {
    PathBuf::from("retrace.log")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            side: default_side(),
            sort_descending: false,
            log_file: default_log_file(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(side = config.side, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Overrides the startup sort order.
    pub fn with_sort_descending(mut self, sort_descending: bool) -> Self {
        self.sort_descending = sort_descending;
        self
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.side != SIDE {
            return Err(ConfigError::new(format!(
                "Unsupported board side {} (only {} is supported)",
                self.side, SIDE
            )));
        }
        Ok(self)
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
