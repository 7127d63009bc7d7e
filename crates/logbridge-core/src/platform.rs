//! Generic platform logging contract

use crate::bundle::ResourceBundle;
use crate::level::PlatformLevel;
use std::error::Error;
use std::fmt::Display;

/// Logging contract that call sites program against
///
/// Object safe; hold loggers as `Arc<dyn PlatformLogger>` to stay independent
/// of the backend adapter behind them.
pub trait PlatformLogger: Send + Sync {
    /// Name of this logger
    fn name(&self) -> &str;

    /// Whether a message at `level` would be emitted
    fn is_loggable(&self, level: PlatformLevel) -> bool;

    /// Log a message, or bundle key, with an optional attached error
    fn log(
        &self,
        level: PlatformLevel,
        bundle: Option<&dyn ResourceBundle>,
        msg: &str,
        thrown: Option<&(dyn Error + 'static)>,
    );

    /// Log a message, or bundle key, with positional `{N}` arguments
    fn log_args(
        &self,
        level: PlatformLevel,
        bundle: Option<&dyn ResourceBundle>,
        format: &str,
        args: &[&dyn Display],
    );

    fn log_msg(&self, level: PlatformLevel, msg: &str) {
        self.log(level, None, msg, None);
    }

    fn log_error(&self, level: PlatformLevel, msg: &str, thrown: &(dyn Error + 'static)) {
        self.log(level, None, msg, Some(thrown));
    }

    fn log_fmt(&self, level: PlatformLevel, format: &str, args: &[&dyn Display]) {
        self.log_args(level, None, format, args);
    }

    /// Log a lazily built message; `supplier` runs only when `level` is loggable
    fn log_with(&self, level: PlatformLevel, supplier: &dyn Fn() -> String) {
        if self.is_loggable(level) {
            self.log(level, None, &supplier(), None);
        }
    }
}
