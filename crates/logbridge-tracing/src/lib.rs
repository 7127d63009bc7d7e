//! logbridge-tracing - tracing backend for the level bridge
//!
//! This crate provides:
//! - [`TracingBackend`] backend logger emitting through `tracing`
//! - [`BridgeFormat`] console format (`LEVEL logger - message`)
//! - [`LoggingConfig`] and [`init_logging`] for subscriber setup
//! - [`BridgeLoggerFinder`] handing out one bridge per logger name

mod backend;
mod config;
mod finder;
mod format;
mod subscriber;

#[cfg(test)]
mod test_support;

pub use backend::{OVERRIDE_TARGET, TracingBackend};
pub use config::{ConfigError, LogOutput, LoggerLevels, LoggingConfig};
pub use finder::{BridgeLoggerFinder, TracingBridge};
pub use format::BridgeFormat;
pub use logbridge_core::{PlatformLevel, PlatformLogger};
pub use subscriber::{BridgeSubscriber, build_subscriber, init_logging};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BridgeLoggerFinder, LoggingConfig, PlatformLevel, PlatformLogger, TracingBackend,
        init_logging,
    };
}
