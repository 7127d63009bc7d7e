//! Backend logger contract

use crate::level::BackendLevel;
use std::error::Error;
use std::sync::Arc;

/// A named logger that performs the actual emission
///
/// Implementors supply [`is_enabled`](Self::is_enabled) and
/// [`emit`](Self::emit); the per-severity predicates and emitters are
/// provided on top of them.
pub trait BackendLogger: Send + Sync {
    /// Name of this logger
    fn name(&self) -> &str;

    /// Whether messages at `level` would currently be emitted
    fn is_enabled(&self, level: BackendLevel) -> bool;

    /// Emit a fully formatted message with an optional attached error
    fn emit(&self, level: BackendLevel, message: &str, thrown: Option<&(dyn Error + 'static)>);

    fn is_trace_enabled(&self) -> bool {
        self.is_enabled(BackendLevel::Trace)
    }

    fn is_debug_enabled(&self) -> bool {
        self.is_enabled(BackendLevel::Debug)
    }

    fn is_info_enabled(&self) -> bool {
        self.is_enabled(BackendLevel::Info)
    }

    fn is_warn_enabled(&self) -> bool {
        self.is_enabled(BackendLevel::Warn)
    }

    fn is_error_enabled(&self) -> bool {
        self.is_enabled(BackendLevel::Error)
    }

    fn trace(&self, message: &str, thrown: Option<&(dyn Error + 'static)>) {
        self.emit(BackendLevel::Trace, message, thrown);
    }

    fn debug(&self, message: &str, thrown: Option<&(dyn Error + 'static)>) {
        self.emit(BackendLevel::Debug, message, thrown);
    }

    fn info(&self, message: &str, thrown: Option<&(dyn Error + 'static)>) {
        self.emit(BackendLevel::Info, message, thrown);
    }

    fn warn(&self, message: &str, thrown: Option<&(dyn Error + 'static)>) {
        self.emit(BackendLevel::Warn, message, thrown);
    }

    fn error(&self, message: &str, thrown: Option<&(dyn Error + 'static)>) {
        self.emit(BackendLevel::Error, message, thrown);
    }
}

impl<B: BackendLogger + ?Sized> BackendLogger for Arc<B> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_enabled(&self, level: BackendLevel) -> bool {
        (**self).is_enabled(level)
    }

    fn emit(&self, level: BackendLevel, message: &str, thrown: Option<&(dyn Error + 'static)>) {
        (**self).emit(level, message, thrown);
    }
}

impl<B: BackendLogger + ?Sized> BackendLogger for Box<B> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_enabled(&self, level: BackendLevel) -> bool {
        (**self).is_enabled(level)
    }

    fn emit(&self, level: BackendLevel, message: &str, thrown: Option<&(dyn Error + 'static)>) {
        (**self).emit(level, message, thrown);
    }
}
