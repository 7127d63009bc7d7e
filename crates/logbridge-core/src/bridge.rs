//! Level bridge from the platform contract onto a backend logger

use crate::backend::BackendLogger;
use crate::bundle::ResourceBundle;
use crate::diagnostics::{DiagnosticReporter, StderrReporter};
use crate::error::{BridgeError, BridgeResult};
use crate::format;
use crate::level::{BackendLevel, PlatformLevel};
use crate::platform::PlatformLogger;
use std::error::Error;
use std::fmt::{self, Display};
use std::sync::Arc;

/// Adapts a [`BackendLogger`] to [`PlatformLogger`]
///
/// The wrapped backend is fixed at construction. Enablement is checked again
/// right before every dispatch, so a message is only resolved and formatted
/// when the backend will actually take it.
pub struct LevelBridge<B> {
    backend: B,
    reporter: Arc<dyn DiagnosticReporter>,
}

impl<B: BackendLogger> LevelBridge<B> {
    /// Create a bridge reporting anomalies to stderr
    pub fn new(backend: B) -> Self {
        Self::with_reporter(backend, Arc::new(StderrReporter))
    }

    /// Create a bridge from a backend that may be absent
    pub fn try_new(backend: Option<B>) -> BridgeResult<Self> {
        backend.map(Self::new).ok_or(BridgeError::MissingBackend)
    }

    /// Create a bridge with a custom diagnostic reporter
    pub fn with_reporter(backend: B, reporter: Arc<dyn DiagnosticReporter>) -> Self {
        Self { backend, reporter }
    }

    /// The wrapped backend logger
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Translate a platform level for the backend.
    ///
    /// `All` and `Off` are intercepted by callers. Anything else without a
    /// backend counterpart is reported and treated as `Trace`.
    fn to_backend_level(&self, level: PlatformLevel) -> BackendLevel {
        match BackendLevel::try_from(level) {
            Ok(mapped) => mapped,
            Err(err) => {
                self.reporter.report("Unsupported log level", &err);
                BackendLevel::Trace
            }
        }
    }

    /// Single point of processing for both entry points
    fn log_record(
        &self,
        level: PlatformLevel,
        bundle: Option<&dyn ResourceBundle>,
        msg: &str,
        thrown: Option<&(dyn Error + 'static)>,
        args: &[&dyn Display],
    ) {
        let level = match level {
            PlatformLevel::Off => return,
            PlatformLevel::All => BackendLevel::Trace,
            other => self.to_backend_level(other),
        };
        self.perform_log(level, bundle, msg, thrown, args);
    }

    fn perform_log(
        &self,
        level: BackendLevel,
        bundle: Option<&dyn ResourceBundle>,
        msg: &str,
        thrown: Option<&(dyn Error + 'static)>,
        args: &[&dyn Display],
    ) {
        if !self.backend.is_enabled(level) {
            return;
        }
        let message = format::message(bundle, msg, args);
        self.backend.emit(level, &message, thrown);
    }
}

impl<B: BackendLogger> PlatformLogger for LevelBridge<B> {
    fn name(&self) -> &str {
        self.backend.name()
    }

    fn is_loggable(&self, level: PlatformLevel) -> bool {
        match level {
            PlatformLevel::All => true,
            PlatformLevel::Off => false,
            other => self.backend.is_enabled(self.to_backend_level(other)),
        }
    }

    fn log(
        &self,
        level: PlatformLevel,
        bundle: Option<&dyn ResourceBundle>,
        msg: &str,
        thrown: Option<&(dyn Error + 'static)>,
    ) {
        self.log_record(level, bundle, msg, thrown, &[]);
    }

    fn log_args(
        &self,
        level: PlatformLevel,
        bundle: Option<&dyn ResourceBundle>,
        format: &str,
        args: &[&dyn Display],
    ) {
        self.log_record(level, bundle, format, None, args);
    }
}

impl<B: BackendLogger> fmt::Debug for LevelBridge<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelBridge")
            .field("name", &self.backend.name())
            .finish_non_exhaustive()
    }
}
