//! Backend logger emitting through `tracing`

use logbridge_core::{BackendLevel, BackendLogger};
use std::error::Error;
use tracing::Level;
use tracing::level_filters::LevelFilter;

/// Event target for loggers carrying their own threshold
///
/// The subscriber filter lets this target through whenever overrides are
/// configured, so the per-logger threshold is what decides.
pub const OVERRIDE_TARGET: &str = "logbridge::override";

/// Backend logger that forwards to the current `tracing` dispatcher
///
/// The logger name travels in the `logger` field and an attached error in the
/// `error` field. Without a threshold, events are filtered by the active
/// subscriber alone; the callsite target is this module, not the logger name.
/// With a threshold, events use [`OVERRIDE_TARGET`] and must pass both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TracingBackend {
    name: String,
    threshold: Option<LevelFilter>,
}

impl TracingBackend {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            threshold: None,
        }
    }

    /// Create a backend with its own level threshold
    pub fn with_threshold(name: impl Into<String>, threshold: LevelFilter) -> Self {
        Self {
            name: name.into(),
            threshold: Some(threshold),
        }
    }

    pub fn threshold(&self) -> Option<LevelFilter> {
        self.threshold
    }

    /// Convert our BackendLevel to a tracing Level
    pub fn convert_level(level: BackendLevel) -> Level {
        match level {
            BackendLevel::Trace => Level::TRACE,
            BackendLevel::Debug => Level::DEBUG,
            BackendLevel::Info => Level::INFO,
            BackendLevel::Warn => Level::WARN,
            BackendLevel::Error => Level::ERROR,
        }
    }

    fn passes_threshold(threshold: LevelFilter, level: BackendLevel) -> bool {
        threshold >= Self::convert_level(level)
    }
}

impl BackendLogger for TracingBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self, level: BackendLevel) -> bool {
        // tracing callsites need a constant level and target
        match self.threshold {
            None => match level {
                BackendLevel::Trace => tracing::enabled!(Level::TRACE),
                BackendLevel::Debug => tracing::enabled!(Level::DEBUG),
                BackendLevel::Info => tracing::enabled!(Level::INFO),
                BackendLevel::Warn => tracing::enabled!(Level::WARN),
                BackendLevel::Error => tracing::enabled!(Level::ERROR),
            },
            Some(threshold) => {
                Self::passes_threshold(threshold, level)
                    && match level {
                        BackendLevel::Trace => tracing::enabled!(target: OVERRIDE_TARGET, Level::TRACE),
                        BackendLevel::Debug => tracing::enabled!(target: OVERRIDE_TARGET, Level::DEBUG),
                        BackendLevel::Info => tracing::enabled!(target: OVERRIDE_TARGET, Level::INFO),
                        BackendLevel::Warn => tracing::enabled!(target: OVERRIDE_TARGET, Level::WARN),
                        BackendLevel::Error => tracing::enabled!(target: OVERRIDE_TARGET, Level::ERROR),
                    }
            }
        }
    }

    fn emit(&self, level: BackendLevel, message: &str, thrown: Option<&(dyn Error + 'static)>) {
        let logger = self.name.as_str();
        match self.threshold {
            None => match level {
                BackendLevel::Trace => tracing::trace!(logger, error = thrown, "{message}"),
                BackendLevel::Debug => tracing::debug!(logger, error = thrown, "{message}"),
                BackendLevel::Info => tracing::info!(logger, error = thrown, "{message}"),
                BackendLevel::Warn => tracing::warn!(logger, error = thrown, "{message}"),
                BackendLevel::Error => tracing::error!(logger, error = thrown, "{message}"),
            },
            Some(threshold) if !Self::passes_threshold(threshold, level) => {}
            Some(_) => match level {
                BackendLevel::Trace => {
                    tracing::trace!(target: OVERRIDE_TARGET, logger, error = thrown, "{message}")
                }
                BackendLevel::Debug => {
                    tracing::debug!(target: OVERRIDE_TARGET, logger, error = thrown, "{message}")
                }
                BackendLevel::Info => {
                    tracing::info!(target: OVERRIDE_TARGET, logger, error = thrown, "{message}")
                }
                BackendLevel::Warn => {
                    tracing::warn!(target: OVERRIDE_TARGET, logger, error = thrown, "{message}")
                }
                BackendLevel::Error => {
                    tracing::error!(target: OVERRIDE_TARGET, logger, error = thrown, "{message}")
                }
            },
        }
    }
}

#[cfg(test)]
#[path = "backend/backend_tests.rs"]
mod backend_tests;
