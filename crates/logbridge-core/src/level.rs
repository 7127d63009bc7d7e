//! Platform and backend severity levels

use crate::error::BridgeError;
use std::cmp::Ordering;

/// Severity levels of the platform logging contract
///
/// `All` and `Off` are sentinel bounds rather than emission levels. Numeric
/// severities that match none of the named levels are carried as `Custom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformLevel {
    All,
    Trace,
    Debug,
    Info,
    Warning,
    Error,
    Off,
    Custom(i32),
}

impl PlatformLevel {
    /// Numeric severity of this level
    pub const fn severity(self) -> i32 {
        match self {
            PlatformLevel::All => i32::MIN,
            PlatformLevel::Trace => 400,
            PlatformLevel::Debug => 500,
            PlatformLevel::Info => 800,
            PlatformLevel::Warning => 900,
            PlatformLevel::Error => 1000,
            PlatformLevel::Off => i32::MAX,
            PlatformLevel::Custom(severity) => severity,
        }
    }

    /// Map a numeric severity back to a level, keeping unknown values as `Custom`
    pub const fn from_severity(severity: i32) -> Self {
        match severity {
            i32::MIN => PlatformLevel::All,
            400 => PlatformLevel::Trace,
            500 => PlatformLevel::Debug,
            800 => PlatformLevel::Info,
            900 => PlatformLevel::Warning,
            1000 => PlatformLevel::Error,
            i32::MAX => PlatformLevel::Off,
            other => PlatformLevel::Custom(other),
        }
    }

    /// Whether this is one of the `All`/`Off` bounds
    pub const fn is_sentinel(self) -> bool {
        matches!(self, PlatformLevel::All | PlatformLevel::Off)
    }
}

impl PartialOrd for PlatformLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.severity().cmp(&other.severity()) {
            // A `Custom` built with a named severity is not the named level.
            Ordering::Equal if self != other => None,
            ordering => Some(ordering),
        }
    }
}

impl std::fmt::Display for PlatformLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlatformLevel::All => write!(f, "ALL"),
            PlatformLevel::Trace => write!(f, "TRACE"),
            PlatformLevel::Debug => write!(f, "DEBUG"),
            PlatformLevel::Info => write!(f, "INFO"),
            PlatformLevel::Warning => write!(f, "WARNING"),
            PlatformLevel::Error => write!(f, "ERROR"),
            PlatformLevel::Off => write!(f, "OFF"),
            PlatformLevel::Custom(severity) => write!(f, "CUSTOM({severity})"),
        }
    }
}

/// Severity levels understood by backend loggers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BackendLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for BackendLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendLevel::Trace => write!(f, "TRACE"),
            BackendLevel::Debug => write!(f, "DEBUG"),
            BackendLevel::Info => write!(f, "INFO"),
            BackendLevel::Warn => write!(f, "WARN"),
            BackendLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Strict translation of the five emission levels.
///
/// Sentinels and custom severities have no backend counterpart and are
/// rejected; the bridge decides how to degrade.
impl TryFrom<PlatformLevel> for BackendLevel {
    type Error = BridgeError;

    // `Self::Error` would be ambiguous with the `Error` variant
    fn try_from(level: PlatformLevel) -> Result<Self, BridgeError> {
        match level {
            PlatformLevel::Trace => Ok(BackendLevel::Trace),
            PlatformLevel::Debug => Ok(BackendLevel::Debug),
            PlatformLevel::Info => Ok(BackendLevel::Info),
            PlatformLevel::Warning => Ok(BackendLevel::Warn),
            PlatformLevel::Error => Ok(BackendLevel::Error),
            other => Err(BridgeError::UnknownLevel(other.to_string())),
        }
    }
}
