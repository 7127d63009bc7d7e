//! Console subscriber setup

use crate::config::{ConfigError, LoggingConfig};
use crate::finder::BridgeLoggerFinder;
use crate::format::BridgeFormat;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::format::DefaultFields;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Subscriber rendering bridged events with [`BridgeFormat`]
pub type BridgeSubscriber<W = BoxMakeWriter> =
    tracing_subscriber::fmt::Subscriber<DefaultFields, BridgeFormat, EnvFilter, W>;

/// Build a subscriber for `config` writing to `writer`
pub fn build_subscriber<W>(config: &LoggingConfig, writer: W) -> Result<BridgeSubscriber<W>, ConfigError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let format = BridgeFormat::new().with_logger_name(config.show_logger_name);

    Ok(tracing_subscriber::fmt()
        .event_format(format)
        .with_env_filter(config.env_filter()?)
        .with_writer(writer)
        .finish())
}

/// Initialize the global subscriber from a configuration
///
/// Call this once during startup, before the first
/// [`BridgeLoggerFinder::global`] lookup, so per-logger overrides apply to the
/// global finder. An invalid level is an error; an already installed global
/// subscriber or finder is left in place.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ConfigError> {
    let finder = BridgeLoggerFinder::from_config(config)?;
    let subscriber = build_subscriber(config, config.output.make_writer())?;

    // Try to set as global default (ignore error if already set)
    let _ = tracing::subscriber::set_global_default(subscriber);
    let _ = BridgeLoggerFinder::set_global(finder);
    Ok(())
}
