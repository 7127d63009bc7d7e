//! Console event format for bridged loggers

use std::error::Error;
use std::fmt;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Event format rendering `LEVEL logger - message`
///
/// Events without a `logger` field fall back to their target. Extra fields
/// follow the message as `key=value`; an attached `error` and its sources are
/// written on the following lines.
#[derive(Debug, Clone, Copy)]
pub struct BridgeFormat {
    show_logger_name: bool,
}

impl BridgeFormat {
    pub fn new() -> Self {
        Self {
            show_logger_name: true,
        }
    }

    /// Whether to print the logger name after the level
    pub fn with_logger_name(mut self, show: bool) -> Self {
        self.show_logger_name = show;
        self
    }
}

impl Default for BridgeFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, N> FormatEvent<S, N> for BridgeFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();
        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        write!(writer, "{}", metadata.level())?;
        if self.show_logger_name {
            let logger = visitor.logger.as_deref().unwrap_or(metadata.target());
            write!(writer, " {logger}")?;
        }
        write!(writer, " - {}", visitor.message)?;
        for (name, value) in &visitor.fields {
            write!(writer, " {name}={value}")?;
        }
        writeln!(writer)?;

        for line in &visitor.error_lines {
            writeln!(writer, "{line}")?;
        }
        Ok(())
    }
}

/// Visitor splitting an event into message, logger name, error and the rest
#[derive(Default)]
struct EventVisitor {
    message: String,
    logger: Option<String>,
    error_lines: Vec<String>,
    fields: Vec<(&'static str, String)>,
}

impl EventVisitor {
    fn record_text(&mut self, field: &Field, value: String) {
        match field.name() {
            "message" => self.message = value,
            "logger" => self.logger = Some(value),
            name => self.fields.push((name, value)),
        }
    }
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_text(field, value.to_string());
    }

    fn record_error(&mut self, field: &Field, value: &(dyn Error + 'static)) {
        if field.name() != "error" {
            self.record_text(field, value.to_string());
            return;
        }
        self.error_lines.push(value.to_string());
        let mut source = value.source();
        while let Some(cause) = source {
            self.error_lines.push(format!("Caused by: {cause}"));
            source = cause.source();
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.record_text(field, format!("{value:?}"));
    }
}
