//! Error types for the level bridge

use thiserror::Error;

/// Result type alias for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Error type for bridge construction and level translation
///
/// Neither variant ever escapes a logging call. `MissingBackend` is returned
/// from construction only; `UnknownLevel` goes to the diagnostic reporter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// A bridge was requested without a backend logger
    #[error("backend logger must be present")]
    MissingBackend,

    /// A platform level with no backend counterpart reached the level mapping
    #[error("Unknown log level [{0}]")]
    UnknownLevel(String),
}
