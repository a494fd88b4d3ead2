//! Logger wrapper that applies a [`Filter`].

use std::fmt;
use std::sync::Arc;

use crate::filter::Filter;
use crate::logger::{Cause, Logger, Severity};
use crate::registry;

/// Forwards only the records its filter allows.
///
/// Built with an explicit filter through [`with_filter`], or bound to the
/// process-wide default filter through [`with_default_filter`]. In the second
/// case the default is read on every call, so later changes apply.
pub struct FilteredLogger {
    inner: Arc<dyn Logger>,
    filter: Option<Filter>,
}

impl FilteredLogger {
    pub fn new(inner: Arc<dyn Logger>, filter: Filter) -> Self {
        Self {
            inner,
            filter: Some(filter),
        }
    }

    /// Wrapper that follows the process-wide default filter.
    pub fn following_default(inner: Arc<dyn Logger>) -> Self {
        Self {
            inner,
            filter: None,
        }
    }

    /// The explicit filter, `None` when following the default.
    pub fn filter(&self) -> Option<&Filter> {
        self.filter.as_ref()
    }

    pub fn inner(&self) -> &Arc<dyn Logger> {
        &self.inner
    }

    fn allows(&self, level: Severity, tag: &str) -> bool {
        match &self.filter {
            Some(filter) => filter.allows(level, tag),
            None => registry::default_filter().allows(level, tag),
        }
    }
}

impl Logger for FilteredLogger {
    fn log(&self, level: Severity, tag: &str, message: &str, cause: Option<&Cause>) {
        if self.allows(level, tag) {
            self.inner.log(level, tag, message, cause);
        }
    }

    fn debug(&self, tag: &str, message: &str, cause: Option<&Cause>) {
        if self.allows(Severity::Debug, tag) {
            self.inner.debug(tag, message, cause);
        }
    }

    fn info(&self, tag: &str, message: &str, cause: Option<&Cause>) {
        if self.allows(Severity::Info, tag) {
            self.inner.info(tag, message, cause);
        }
    }

    fn warn(&self, tag: &str, message: &str, cause: Option<&Cause>) {
        if self.allows(Severity::Warn, tag) {
            self.inner.warn(tag, message, cause);
        }
    }

    fn warn_cause(&self, tag: &str, cause: &Cause) {
        if self.allows(Severity::Warn, tag) {
            self.inner.warn_cause(tag, cause);
        }
    }

    fn error(&self, tag: &str, message: &str, cause: Option<&Cause>) {
        if self.allows(Severity::Error, tag) {
            self.inner.error(tag, message, cause);
        }
    }

    // Only this layer's filter counts; inner layers still filter eagerly.
    fn enabled(&self, level: Severity, tag: &str) -> bool {
        self.allows(level, tag)
    }

    fn unfiltered(&self) -> Option<&Arc<dyn Logger>> {
        Some(&self.inner)
    }

    fn rewrap(&self, inner: Arc<dyn Logger>) -> Option<Arc<dyn Logger>> {
        Some(Arc::new(Self {
            inner,
            filter: self.filter.clone(),
        }))
    }
}

impl fmt::Debug for FilteredLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("FilteredLogger");
        match &self.filter {
            Some(filter) => s.field("filter", filter),
            None => s.field("filter", &format_args!("<default>")),
        };
        s.field("logger", &self.inner).finish()
    }
}

/// Wrap `logger` so only records allowed by `filter` reach it.
///
/// Wrapping an already filtered logger stacks another layer.
pub fn with_filter(logger: Arc<dyn Logger>, filter: Filter) -> Arc<dyn Logger> {
    Arc::new(FilteredLogger::new(logger, filter))
}

/// Wrap `logger` with the process-wide default filter.
pub fn with_default_filter(logger: Arc<dyn Logger>) -> Arc<dyn Logger> {
    Arc::new(FilteredLogger::following_default(logger))
}

/// Peel one filtering layer off `logger`. Unfiltered loggers come back as is.
pub fn without_filter(logger: &Arc<dyn Logger>) -> Arc<dyn Logger> {
    match logger.unfiltered() {
        Some(inner) => Arc::clone(inner),
        None => Arc::clone(logger),
    }
}
