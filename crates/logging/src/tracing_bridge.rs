//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the line logger.
//!
//! This module provides a tracing-subscriber layer that forwards tracing
//! events into a shared [`Logger`], so code instrumented with the standard
//! tracing macros (error!, warn!, info!, debug!, trace!) lands in the same
//! console/file fan-out as direct `log` calls.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use logging::{Logger, init_tracing};
//!
//! let logger = Arc::new(Logger::new());
//! logger.set_verbose(true);
//! init_tracing(logger);
//!
//! tracing::warn!("low disk space");
//! ```

use std::io::{Stdout, Write};
use std::sync::Arc;

use message::Severity;
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::logger::Logger;

/// A tracing layer that forwards events to a [`Logger`].
///
/// Each event's level is mapped to a [`Severity`] and its `message` field
/// becomes the single logged value. The logger's own gates still apply, so
/// an event that maps to a suppressed severity is dropped exactly like a
/// direct call would be. Sink failures are swallowed here: a tracing
/// callback has no caller to report them to.
pub struct LineLayer<W = Stdout> {
    logger: Arc<Logger<W>>,
}

impl<W> LineLayer<W> {
    /// Creates a layer forwarding into the given logger.
    #[must_use]
    pub const fn new(logger: Arc<Logger<W>>) -> Self {
        Self { logger }
    }

    /// Maps a tracing level to the severity used for the forwarded line.
    const fn level_to_severity(level: &Level) -> Severity {
        match *level {
            Level::ERROR => Severity::Error,
            Level::WARN => Severity::Warning,
            Level::INFO => Severity::Info,
            _ => Severity::Debug,
        }
    }
}

impl<S, W> Layer<S> for LineLayer<W>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: Write + Send + 'static,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let severity = Self::level_to_severity(event.metadata().level());

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(text) = visitor.message {
            let _ = self.logger.log(severity, &[&text]);
        }
    }
}

/// Visitor to extract the message field from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a global subscriber forwarding tracing events into `logger`.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use logging::{Logger, init_tracing};
///
/// let logger = Arc::new(Logger::new());
/// init_tracing(logger);
/// tracing::error!("went wrong");
/// ```
pub fn init_tracing(logger: Arc<Logger>) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LineLayer::new(logger))
        .init();
}

/// Installs the forwarding layer together with a custom filter layer.
///
/// Useful for combining the logger's gates with standard tracing filters
/// such as `EnvFilter`.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use logging::{Logger, init_tracing_with_filter};
/// use tracing_subscriber::EnvFilter;
///
/// let logger = Arc::new(Logger::new());
/// init_tracing_with_filter(logger, EnvFilter::from_default_env());
/// ```
pub fn init_tracing_with_filter<F>(logger: Arc<Logger>, filter: F)
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(LineLayer::new(logger))
        .init();
}
