//! Logger finder handing out one bridge per logger name

use crate::backend::TracingBackend;
use crate::config::{ConfigError, LoggerLevels, LoggingConfig};
use logbridge_core::{LevelBridge, PlatformLogger};
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Bridge over the tracing backend
pub type TracingBridge = LevelBridge<TracingBackend>;

/// Global finder instance
static FINDER: OnceCell<BridgeLoggerFinder> = OnceCell::new();

/// Registry of bridged loggers keyed by name
///
/// Repeated lookups of the same name return the same bridge. Names with a
/// configured override get a backend carrying that threshold.
#[derive(Default)]
pub struct BridgeLoggerFinder {
    levels: LoggerLevels,
    loggers: RwLock<HashMap<String, Arc<TracingBridge>>>,
}

impl BridgeLoggerFinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a finder applying the per-logger overrides of `config`
    pub fn from_config(config: &LoggingConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_levels(config.logger_levels()?))
    }

    pub fn with_levels(levels: LoggerLevels) -> Self {
        Self {
            levels,
            loggers: RwLock::default(),
        }
    }

    /// Get the global finder instance
    ///
    /// Falls back to a finder without overrides unless one was installed
    /// first with [`set_global`](Self::set_global) or `init_logging`.
    pub fn global() -> &'static BridgeLoggerFinder {
        FINDER.get_or_init(BridgeLoggerFinder::new)
    }

    /// Install the global finder, handing it back if one is already set
    pub fn set_global(finder: BridgeLoggerFinder) -> Result<(), BridgeLoggerFinder> {
        FINDER.set(finder)
    }

    /// Get the platform logger for `name`
    pub fn get_logger(&self, name: &str) -> Arc<dyn PlatformLogger> {
        self.bridge(name)
    }

    /// Get the concrete bridge for `name`, creating it on first use
    pub fn bridge(&self, name: &str) -> Arc<TracingBridge> {
        if let Some(bridge) = self.loggers.read().get(name) {
            return Arc::clone(bridge);
        }

        let (bridge, created) = {
            let mut loggers = self.loggers.write();
            match loggers.get(name) {
                Some(existing) => (Arc::clone(existing), false),
                None => {
                    let bridge = Arc::new(LevelBridge::new(self.backend_for(name)));
                    loggers.insert(name.to_string(), Arc::clone(&bridge));
                    (bridge, true)
                }
            }
        };

        // Registry lock is released; subscribers may look up loggers here
        if created {
            tracing::trace!(logger = name, "creating bridged logger");
        }
        bridge
    }

    fn backend_for(&self, name: &str) -> TracingBackend {
        match self.levels.resolve(name) {
            Some(threshold) => TracingBackend::with_threshold(name, threshold),
            None => TracingBackend::new(name),
        }
    }

    /// Number of loggers created so far
    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.read().is_empty()
    }
}
