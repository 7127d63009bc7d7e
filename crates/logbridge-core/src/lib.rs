//! logbridge-core - Platform logging contract and level bridge
//!
//! This crate provides:
//! - [`PlatformLogger`] contract that call sites log through
//! - [`BackendLogger`] contract for the logger that actually emits
//! - [`LevelBridge`] adapter translating one onto the other
//! - [`ResourceBundle`] message key lookup, with [`MapBundle`]
//! - [`DiagnosticReporter`] side channel for bridge anomalies

mod backend;
mod bridge;
mod bundle;
mod diagnostics;
mod error;
mod format;
mod level;
mod platform;

pub use backend::BackendLogger;
pub use bridge::LevelBridge;
pub use bundle::{BundleError, BundleResult, MapBundle, ResourceBundle};
pub use diagnostics::{DiagnosticReporter, REPORT_PREFIX, StderrReporter, write_report};
pub use error::{BridgeError, BridgeResult};
pub use format::{format_message, message, resolve_message};
pub use level::{BackendLevel, PlatformLevel};
pub use platform::PlatformLogger;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BackendLevel, BackendLogger, BridgeError, BridgeResult, LevelBridge, MapBundle,
        PlatformLevel, PlatformLogger, ResourceBundle,
    };
}
