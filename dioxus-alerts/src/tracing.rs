//! Tracing configuration for dioxus-alerts.
//!
//! Sets up the tracing subscriber with custom filtering to suppress noisy
//! webview events like `SelectionDidChange` that pollute the log output.
//!
//! Must be initialized BEFORE Dioxus launch to prevent dioxus-logger from
//! setting its own subscriber.

use std::fs::File;
use std::io;
use std::sync::Mutex;

use tracing::{Event, Subscriber};
use tracing_subscriber::{
    fmt::{self, format::Writer, FmtContext, FormatEvent, FormatFields},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::LoggingConfig;

/// Custom event formatter that drops messages containing suppressed patterns.
struct FilteringFormatter {
    inner: fmt::format::Format,
    patterns: Vec<String>,
}

impl FilteringFormatter {
    fn new(patterns: Vec<String>) -> Self {
        Self {
            inner: fmt::format::Format::default(),
            patterns,
        }
    }
}

impl<S, N> FormatEvent<S, N> for FilteringFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        // Format into a buffer first so the message can be inspected
        let mut message_buf = String::new();
        let capture_writer = Writer::new(&mut message_buf);
        self.inner.format_event(ctx, capture_writer, event)?;

        let suppressed = self
            .patterns
            .iter()
            .any(|pattern| message_buf.contains(pattern));

        if suppressed {
            Ok(())
        } else {
            write!(writer, "{message_buf}")
        }
    }
}

/// Initialize the tracing subscriber with custom filtering.
///
/// This sets up:
/// - Environment-based filtering via `RUST_LOG`, defaulting to the
///   configured level
/// - Message filtering for the configured suppressed patterns
/// - Output to the configured log file, falling back to stderr
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    let log_file = config.log_file.as_ref().and_then(|path| {
        File::create(path)
            .inspect_err(|err| eprintln!("Warning: cannot open log file {}: {err}", path.display()))
            .ok()
    });

    if let Some(file) = log_file {
        let fmt_layer = fmt::layer()
            .with_target(false)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .event_format(FilteringFormatter::new(config.suppressed_patterns.clone()));

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .init();
    } else {
        let fmt_layer = fmt::layer()
            .with_target(false)
            .with_writer(io::stderr)
            .event_format(FilteringFormatter::new(config.suppressed_patterns.clone()));

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .init();
    }
}
