//! Tracing library adapter implementation.

use crate::logger::{render_trace, Cause, Logger, Severity};

/// Logger implementation that delegates to the `tracing` crate.
///
/// Each record becomes one event at the matching level, with the tag and the
/// rendered cause trace as fields. Whatever subscriber the application
/// installed decides formatting and filtering.
///
/// ```ignore
/// use std::sync::Arc;
/// use logging_facade::logger::{Logger, TracingLogger};
///
/// // Assumes a tracing subscriber is already initialized
/// let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
/// logger.info("app", "using tracing backend", None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: Severity, tag: &str, message: &str, cause: Option<&Cause>) {
        let cause = cause.map(|c| render_trace(c));
        let cause = cause.as_deref();
        match level {
            Severity::Debug => tracing::debug!(tag, cause, "{}", message),
            Severity::Info => tracing::info!(tag, cause, "{}", message),
            Severity::Warn => tracing::warn!(tag, cause, "{}", message),
            Severity::Error => tracing::error!(tag, cause, "{}", message),
        }
    }
}
