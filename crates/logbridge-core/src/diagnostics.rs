//! Side channel for bridge anomalies
//!
//! Reports bypass the logging path entirely so a misbehaving bridge can never
//! recurse into itself.

use std::error::Error;
use std::io::{self, Write};
use std::sync::Arc;

/// Prefix on every line written by [`StderrReporter`]
pub const REPORT_PREFIX: &str = "LOGBRIDGE(W):";

/// Receiver for internal bridge anomalies
pub trait DiagnosticReporter: Send + Sync {
    /// Report a one-line description together with the anomaly
    fn report(&self, message: &str, error: &(dyn Error + 'static));
}

impl<R: DiagnosticReporter + ?Sized> DiagnosticReporter for Arc<R> {
    fn report(&self, message: &str, error: &(dyn Error + 'static)) {
        (**self).report(message, error);
    }
}

/// Reporter writing directly to the process's standard error
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrReporter;

impl DiagnosticReporter for StderrReporter {
    fn report(&self, message: &str, error: &(dyn Error + 'static)) {
        // Nothing sensible to do if stderr itself is gone
        let _ = write_report(&mut io::stderr().lock(), message, error);
    }
}

/// Render a report in the [`StderrReporter`] layout
pub fn write_report<W: Write + ?Sized>(
    out: &mut W,
    message: &str,
    error: &(dyn Error + 'static),
) -> io::Result<()> {
    writeln!(out, "{REPORT_PREFIX} {message}")?;
    writeln!(out, "Reported exception: {error}")?;
    let mut source = error.source();
    while let Some(cause) = source {
        writeln!(out, "Caused by: {cause}")?;
        source = cause.source();
    }
    Ok(())
}
