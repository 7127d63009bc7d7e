#![allow(non_snake_case)]

use super::*;
use crate::config::LoggingConfig;
use crate::subscriber::build_subscriber;
use crate::test_support::CaptureWriter;
use test_case::test_case;

fn capture(level: &str) -> (crate::subscriber::BridgeSubscriber<CaptureWriter>, CaptureWriter) {
    let writer = CaptureWriter::default();
    let config = LoggingConfig::new().with_log_level(level);
    let subscriber = build_subscriber(&config, writer.clone()).unwrap();
    (subscriber, writer)
}

#[test_case(BackendLevel::Trace, Level::TRACE)]
#[test_case(BackendLevel::Debug, Level::DEBUG)]
#[test_case(BackendLevel::Info, Level::INFO)]
#[test_case(BackendLevel::Warn, Level::WARN)]
#[test_case(BackendLevel::Error, Level::ERROR)]
fn TracingBackend___convert_level___maps_each_level(level: BackendLevel, expected: Level) {
    assert_eq!(TracingBackend::convert_level(level), expected);
}

#[test]
fn TracingBackend___name___is_given_name() {
    let backend = TracingBackend::new("orders.service");

    assert_eq!(backend.name(), "orders.service");
}

#[test]
fn TracingBackend___is_enabled___follows_subscriber_filter() {
    let (subscriber, _writer) = capture("info");
    let backend = TracingBackend::new("filter");

    tracing::subscriber::with_default(subscriber, || {
        assert!(!backend.is_trace_enabled());
        assert!(!backend.is_debug_enabled());
        assert!(backend.is_info_enabled());
        assert!(backend.is_warn_enabled());
        assert!(backend.is_error_enabled());
    });
}

#[test]
fn TracingBackend___emit___renders_level_name_and_message() {
    let (subscriber, writer) = capture("trace");
    let backend = TracingBackend::new("smoke");

    tracing::subscriber::with_default(subscriber, || {
        backend.info("hello", None);
        backend.warn("careful", None);
    });

    assert_eq!(
        writer.lines(),
        vec!["INFO smoke - hello", "WARN smoke - careful"]
    );
}

#[test]
fn TracingBackend___emit_with_error___writes_error_after_message() {
    let (subscriber, writer) = capture("info");
    let backend = TracingBackend::new("throwTest");
    let err = std::io::Error::other("disk on fire");

    tracing::subscriber::with_default(subscriber, || {
        backend.error("we have a problem", Some(&err));
    });

    assert_eq!(
        writer.lines(),
        vec!["ERROR throwTest - we have a problem", "disk on fire"]
    );
}

#[test]
fn TracingBackend___emit_below_filter___writes_nothing() {
    let (subscriber, writer) = capture("warn");
    let backend = TracingBackend::new("quiet");

    tracing::subscriber::with_default(subscriber, || {
        backend.debug("hidden", None);
        backend.info("hidden", None);
    });

    assert!(writer.lines().is_empty());
}

#[test]
fn TracingBackend___message_with_braces___written_verbatim() {
    let (subscriber, writer) = capture("info");
    let backend = TracingBackend::new("braces");

    tracing::subscriber::with_default(subscriber, || {
        backend.info("map {a: 1} {0}", None);
    });

    assert_eq!(writer.lines(), vec!["INFO braces - map {a: 1} {0}"]);
}

fn capture_with_override(
    level: &str,
    name: &str,
    override_level: &str,
) -> (crate::subscriber::BridgeSubscriber<CaptureWriter>, CaptureWriter) {
    let writer = CaptureWriter::default();
    let config = LoggingConfig::new()
        .with_log_level(level)
        .with_logger_level(name, override_level);
    let subscriber = build_subscriber(&config, writer.clone()).unwrap();
    (subscriber, writer)
}

#[test]
fn TracingBackend___with_threshold___enables_below_global_level() {
    let (subscriber, _writer) = capture_with_override("warn", "smoke", "debug");
    let smoke = TracingBackend::with_threshold("smoke", LevelFilter::DEBUG);
    let orders = TracingBackend::new("orders");

    tracing::subscriber::with_default(subscriber, || {
        assert!(smoke.is_debug_enabled());
        assert!(smoke.is_info_enabled());
        assert!(!smoke.is_trace_enabled());
        assert!(!orders.is_debug_enabled());
        assert!(!orders.is_info_enabled());
        assert!(orders.is_warn_enabled());
    });
}

#[test]
fn TracingBackend___with_threshold___restricts_above_global_level() {
    let (subscriber, writer) = capture_with_override("info", "quiet", "error");
    let quiet = TracingBackend::with_threshold("quiet", LevelFilter::ERROR);

    tracing::subscriber::with_default(subscriber, || {
        assert!(!quiet.is_info_enabled());
        assert!(!quiet.is_warn_enabled());
        assert!(quiet.is_error_enabled());
        quiet.warn("hidden", None);
        quiet.error("shown", None);
    });

    assert_eq!(writer.lines(), vec!["ERROR quiet - shown"]);
}

#[test]
fn TracingBackend___with_threshold___emits_under_logger_name() {
    let (subscriber, writer) = capture_with_override("warn", "smoke", "debug");
    let smoke = TracingBackend::with_threshold("smoke", LevelFilter::DEBUG);
    let orders = TracingBackend::new("orders");

    tracing::subscriber::with_default(subscriber, || {
        smoke.debug("details", None);
        orders.debug("hidden", None);
        orders.warn("careful", None);
    });

    assert_eq!(
        writer.lines(),
        vec!["DEBUG smoke - details", "WARN orders - careful"]
    );
}

#[test]
fn TracingBackend___with_threshold_off___disables_every_level() {
    let (subscriber, writer) = capture_with_override("trace", "silent", "off");
    let silent = TracingBackend::with_threshold("silent", LevelFilter::OFF);

    tracing::subscriber::with_default(subscriber, || {
        assert!(!silent.is_error_enabled());
        silent.error("hidden", None);
    });

    assert_eq!(silent.threshold(), Some(LevelFilter::OFF));
    assert!(writer.lines().is_empty());
}
