//! Deferred message construction.

use crate::filter::Content;
use crate::logger::{Logger, Severity};

/// Lazy counterparts of the [`Logger`] operations.
///
/// The closure runs only when [`Logger::enabled`] says the record would be
/// used, so expensive formatting is skipped for filtered records. It may
/// return anything convertible into [`Content`]: a `String`, a `&str`, or a
/// `Content` carrying a cause.
///
/// ```
/// use std::sync::Arc;
/// use logging_facade::filter::{with_filter, Filter, LazyLog};
/// use logging_facade::logger::{Logger, Severity, SystemLogger};
///
/// let logger = with_filter(Arc::new(SystemLogger), Filter::at_least(Severity::Warn));
/// logger.debug_lazy("app", || -> String { unreachable!("filtered out") });
/// ```
pub trait LazyLog: Logger {
    fn log_lazy<C, F>(&self, level: Severity, tag: &str, build: F)
    where
        C: Into<Content>,
        F: FnOnce() -> C,
    {
        if !self.enabled(level, tag) {
            return;
        }
        let content = build().into();
        let (message, cause) = (content.message(), content.cause());
        match level {
            Severity::Debug => self.debug(tag, message, cause),
            Severity::Info => self.info(tag, message, cause),
            Severity::Warn => self.warn(tag, message, cause),
            Severity::Error => self.error(tag, message, cause),
        }
    }

    fn debug_lazy<C, F>(&self, tag: &str, build: F)
    where
        C: Into<Content>,
        F: FnOnce() -> C,
    {
        self.log_lazy(Severity::Debug, tag, build);
    }

    fn info_lazy<C, F>(&self, tag: &str, build: F)
    where
        C: Into<Content>,
        F: FnOnce() -> C,
    {
        self.log_lazy(Severity::Info, tag, build);
    }

    fn warn_lazy<C, F>(&self, tag: &str, build: F)
    where
        C: Into<Content>,
        F: FnOnce() -> C,
    {
        self.log_lazy(Severity::Warn, tag, build);
    }

    fn error_lazy<C, F>(&self, tag: &str, build: F)
    where
        C: Into<Content>,
        F: FnOnce() -> C,
    {
        self.log_lazy(Severity::Error, tag, build);
    }
}

impl<L: Logger + ?Sized> LazyLog for L {}
