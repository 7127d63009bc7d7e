//! Logging configuration

use crate::backend::OVERRIDE_TARGET;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Error type for logging configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration could not be deserialized
    #[error("configuration error: {0}")]
    Parse(String),

    /// The log level is not a valid filter directive
    #[error("invalid log level '{directive}': {reason}")]
    InvalidLevel { directive: String, reason: String },
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Where console output is written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    #[default]
    Stderr,
    Stdout,
}

impl LogOutput {
    pub fn make_writer(self) -> BoxMakeWriter {
        match self {
            LogOutput::Stderr => BoxMakeWriter::new(std::io::stderr),
            LogOutput::Stdout => BoxMakeWriter::new(std::io::stdout),
        }
    }
}

/// Configuration for the console subscriber behind bridged loggers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `warn,my_crate=debug`
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Print the logger name after the level
    #[serde(default = "default_show_logger_name")]
    pub show_logger_name: bool,

    #[serde(default)]
    pub output: LogOutput,

    /// Per-logger level overrides keyed by logger name, e.g. `"smoke": "debug"`
    ///
    /// A name without an entry inherits from its closest dotted (or `::`)
    /// parent, then falls back to `log_level`.
    #[serde(default)]
    pub loggers: BTreeMap<String, String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_show_logger_name() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            show_logger_name: default_show_logger_name(),
            output: LogOutput::default(),
            loggers: BTreeMap::new(),
        }
    }
}

impl LoggingConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> Result<Self, ConfigError> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Set the log level directive
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set the level for one logger name and its children
    pub fn with_logger_level(mut self, name: impl Into<String>, level: impl Into<String>) -> Self {
        self.loggers.insert(name.into(), level.into());
        self
    }

    /// Build the subscriber filter for the configured level
    ///
    /// When per-logger overrides exist, bridged events for overridden names
    /// are let through the filter; their own threshold decides instead.
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        let mut directives = self.log_level.clone();
        if !self.loggers.is_empty() {
            if !directives.is_empty() {
                directives.push(',');
            }
            directives.push_str(OVERRIDE_TARGET);
            directives.push_str("=trace");
        }

        EnvFilter::try_new(&directives).map_err(|e| ConfigError::InvalidLevel {
            directive: self.log_level.clone(),
            reason: e.to_string(),
        })
    }

    /// Parse the per-logger overrides
    pub fn logger_levels(&self) -> Result<LoggerLevels, ConfigError> {
        let levels = self
            .loggers
            .iter()
            .map(|(name, level)| {
                level
                    .parse::<LevelFilter>()
                    .map(|filter| (name.clone(), filter))
                    .map_err(|e| ConfigError::InvalidLevel {
                        directive: format!("{name}={level}"),
                        reason: e.to_string(),
                    })
            })
            .collect::<Result<_, _>>()?;
        Ok(LoggerLevels { levels })
    }
}

/// Parsed per-logger level thresholds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggerLevels {
    levels: BTreeMap<String, LevelFilter>,
}

impl LoggerLevels {
    /// Threshold for `name`, walking up `.` and `::` separated parents
    pub fn resolve(&self, name: &str) -> Option<LevelFilter> {
        let mut current = name;
        loop {
            if let Some(level) = self.levels.get(current) {
                return Some(*level);
            }
            let cut = current.rfind(['.', ':'])?;
            current = current[..cut].trim_end_matches(':');
        }
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
