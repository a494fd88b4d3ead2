//! The `Logger` capability.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::logger::Severity;
use crate::registry;

/// Error value attached to a log call.
///
/// Any `std::error::Error` qualifies; the chain is reachable through
/// [`Error::source`] and rendered by [`render_trace`].
pub type Cause = dyn Error + Send + Sync + 'static;

/// Logging interface implemented by every sink and every composite.
///
/// Implementors only need [`Logger::log`]. The level-specific operations
/// route to it by default; a sink may override them individually.
///
/// Calls must not panic for well-formed input (empty tags and messages are
/// legal) and should return quickly. A sink that needs slow I/O owns its own
/// buffering.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use logging_facade::logger::{combine, Cause, Logger, Severity, SystemLogger};
///
/// #[derive(Debug)]
/// struct Quiet;
///
/// impl Logger for Quiet {
///     fn log(&self, _level: Severity, _tag: &str, _message: &str, _cause: Option<&Cause>) {}
/// }
///
/// let logger = combine(Arc::new(Quiet), Arc::new(SystemLogger));
/// logger.info("app", "started", None);
/// ```
pub trait Logger: Send + Sync + fmt::Debug {
    /// Emit one record.
    fn log(&self, level: Severity, tag: &str, message: &str, cause: Option<&Cause>);

    fn debug(&self, tag: &str, message: &str, cause: Option<&Cause>) {
        self.log(Severity::Debug, tag, message, cause);
    }

    fn info(&self, tag: &str, message: &str, cause: Option<&Cause>) {
        self.log(Severity::Info, tag, message, cause);
    }

    fn warn(&self, tag: &str, message: &str, cause: Option<&Cause>) {
        self.log(Severity::Warn, tag, message, cause);
    }

    /// Warn with a cause and no message.
    fn warn_cause(&self, tag: &str, cause: &Cause) {
        self.warn(tag, "", Some(cause));
    }

    fn error(&self, tag: &str, message: &str, cause: Option<&Cause>) {
        self.log(Severity::Error, tag, message, cause);
    }

    /// Whether a lazily built record at `level` for `tag` would be used.
    ///
    /// Plain sinks answer with the process-wide default filter. Eager calls
    /// are never gated by this.
    fn enabled(&self, level: Severity, tag: &str) -> bool {
        registry::default_filter().allows(level, tag)
    }

    /// The `(head, tail)` children of a fan-out logger.
    fn constituents(&self) -> Option<(&Arc<dyn Logger>, &Arc<dyn Logger>)> {
        None
    }

    /// The wrapped logger of a filtering layer.
    fn unfiltered(&self) -> Option<&Arc<dyn Logger>> {
        None
    }

    /// The same filtering layer around a different `inner` logger.
    ///
    /// Layers that return `Some` from [`Logger::unfiltered`] implement this
    /// too, so tree edits can rebuild them.
    fn rewrap(&self, _inner: Arc<dyn Logger>) -> Option<Arc<dyn Logger>> {
        None
    }

    /// Whether this logger, or any logger below it, resolves the registry's
    /// default at call time. Such trees are never installed as the default.
    fn is_late_bound(&self) -> bool {
        if let Some((head, tail)) = self.constituents() {
            return head.is_late_bound() || tail.is_late_bound();
        }
        self.unfiltered().map_or(false, |inner| inner.is_late_bound())
    }
}

/// Render a cause and its `source()` chain as printable text.
///
/// ```text
/// connection reset
///   caused by: broken pipe
/// ```
pub fn render_trace(cause: &(dyn Error + 'static)) -> String {
    let mut out = cause.to_string();
    let mut source = cause.source();
    while let Some(err) = source {
        out.push_str("\n  caused by: ");
        out.push_str(&err.to_string());
        source = err.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("query failed")]
    struct QueryError {
        #[source]
        source: std::io::Error,
    }

    #[derive(Debug, Default)]
    struct Capture {
        entries: Mutex<Vec<(Severity, String, String, Option<String>)>>,
    }

    impl Logger for Capture {
        fn log(&self, level: Severity, tag: &str, message: &str, cause: Option<&Cause>) {
            self.entries.lock().unwrap().push((
                level,
                tag.to_string(),
                message.to_string(),
                cause.map(|c| c.to_string()),
            ));
        }
    }

    #[test]
    fn test_provided_methods_route_to_log() {
        let logger = Capture::default();
        logger.debug("t", "d", None);
        logger.info("t", "i", None);
        logger.warn("t", "w", None);
        logger.error("t", "e", None);

        let entries = logger.entries.lock().unwrap();
        let levels: Vec<Severity> = entries.iter().map(|e| e.0).collect();
        assert_eq!(levels, Severity::ALL.to_vec());
        assert_eq!(entries[3].2, "e");
    }

    #[test]
    fn test_warn_cause_has_empty_message() {
        let logger = Capture::default();
        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        logger.warn_cause("fs", &err);

        let entries = logger.entries.lock().unwrap();
        assert_eq!(entries[0].0, Severity::Warn);
        assert_eq!(entries[0].2, "");
        assert_eq!(entries[0].3.as_deref(), Some("disk full"));
    }

    // edge case: empty tag and message are legal
    #[test]
    fn test_empty_tag_and_message() {
        let logger = Capture::default();
        logger.info("", "", None);
        assert_eq!(logger.entries.lock().unwrap()[0].1, "");
    }

    #[test]
    fn test_render_trace_walks_source_chain() {
        let err = QueryError {
            source: std::io::Error::new(std::io::ErrorKind::TimedOut, "5s"),
        };
        assert_eq!(render_trace(&err), "query failed\n  caused by: 5s");
    }

    #[test]
    fn test_render_trace_without_source() {
        let err = std::fmt::Error;
        assert_eq!(render_trace(&err), err.to_string());
    }

    #[test]
    fn test_logger_is_object_safe() {
        let logger: Arc<dyn Logger> = Arc::new(Capture::default());
        assert!(logger.constituents().is_none());
        assert!(logger.unfiltered().is_none());
        assert!(logger.rewrap(Arc::new(Capture::default())).is_none());
        assert!(!logger.is_late_bound());
    }
}
