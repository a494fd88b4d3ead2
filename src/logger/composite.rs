//! Fan-out composition of loggers.
//!
//! # Responsibilities
//! - Combine two loggers into one that forwards every call to both
//! - Flatten fan-out trees into their leaf sinks
//! - Remove sinks from a tree without touching the original, looking through
//!   filtering layers
//!
//! # Design Decisions
//! - Delegation is synchronous, head first, depth-first through nesting
//! - Children are shared `Arc`s; one sink may sit in many composites
//! - Isolate-and-continue: a panicking child does not stop its siblings. Once
//!   every child ran, the first panic is resumed. Later panics are reported
//!   through `tracing` and dropped. Builds with `panic = "abort"` get no
//!   isolation.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::logger::{Cause, EmptyLogger, Logger, Severity};

/// Logger that forwards every call to `head`, then to `tail`.
pub struct CompositeLogger {
    head: Arc<dyn Logger>,
    tail: Arc<dyn Logger>,
}

impl CompositeLogger {
    pub fn new(head: Arc<dyn Logger>, tail: Arc<dyn Logger>) -> Self {
        Self { head, tail }
    }

    fn fan_out(&self, call: impl Fn(&dyn Logger)) {
        let head = panic::catch_unwind(AssertUnwindSafe(|| call(self.head.as_ref())));
        let tail = panic::catch_unwind(AssertUnwindSafe(|| call(self.tail.as_ref())));

        match (head, tail) {
            (Ok(()), Ok(())) => {}
            (Err(payload), Ok(())) | (Ok(()), Err(payload)) => panic::resume_unwind(payload),
            (Err(first), Err(second)) => {
                tracing::warn!(
                    dropped = %panic_message(second.as_ref()),
                    "Second sink panicked in the same call; resuming the first panic"
                );
                panic::resume_unwind(first)
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "<non-string panic payload>".to_string()
    }
}

impl Logger for CompositeLogger {
    fn log(&self, level: Severity, tag: &str, message: &str, cause: Option<&Cause>) {
        self.fan_out(|l| l.log(level, tag, message, cause));
    }

    fn debug(&self, tag: &str, message: &str, cause: Option<&Cause>) {
        self.fan_out(|l| l.debug(tag, message, cause));
    }

    fn info(&self, tag: &str, message: &str, cause: Option<&Cause>) {
        self.fan_out(|l| l.info(tag, message, cause));
    }

    fn warn(&self, tag: &str, message: &str, cause: Option<&Cause>) {
        self.fan_out(|l| l.warn(tag, message, cause));
    }

    fn warn_cause(&self, tag: &str, cause: &Cause) {
        self.fan_out(|l| l.warn_cause(tag, cause));
    }

    fn error(&self, tag: &str, message: &str, cause: Option<&Cause>) {
        self.fan_out(|l| l.error(tag, message, cause));
    }

    fn enabled(&self, level: Severity, tag: &str) -> bool {
        self.head.enabled(level, tag) || self.tail.enabled(level, tag)
    }

    fn constituents(&self) -> Option<(&Arc<dyn Logger>, &Arc<dyn Logger>)> {
        Some((&self.head, &self.tail))
    }
}

impl fmt::Debug for CompositeLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = Vec::new();
        collect_leaves(&self.head, &mut out);
        collect_leaves(&self.tail, &mut out);
        f.debug_list().entries(out).finish()
    }
}

/// Build a logger that forwards every call to `a`, then to `b`.
pub fn combine(a: Arc<dyn Logger>, b: Arc<dyn Logger>) -> Arc<dyn Logger> {
    Arc::new(CompositeLogger::new(a, b))
}

/// Left fold of [`combine`]. An empty input yields an [`EmptyLogger`] and a
/// single logger is returned as is.
pub fn combine_all<I>(loggers: I) -> Arc<dyn Logger>
where
    I: IntoIterator<Item = Arc<dyn Logger>>,
{
    let mut iter = loggers.into_iter();
    match iter.next() {
        None => Arc::new(EmptyLogger),
        Some(first) => iter.fold(first, combine),
    }
}

fn collect_leaves<'a>(logger: &'a Arc<dyn Logger>, out: &mut Vec<&'a Arc<dyn Logger>>) {
    match logger.constituents() {
        Some((head, tail)) => {
            collect_leaves(head, out);
            collect_leaves(tail, out);
        }
        None => out.push(logger),
    }
}

/// Leaf sinks of a fan-out tree, in delegation order.
///
/// Filtering layers count as leaves; their inner loggers are not listed.
pub fn leaves(logger: &Arc<dyn Logger>) -> Vec<Arc<dyn Logger>> {
    let mut out = Vec::new();
    collect_leaves(logger, &mut out);
    out.into_iter().cloned().collect()
}

/// Return `from` without any of the leaf sinks of `what`.
///
/// Sinks are matched by identity and every occurrence is dropped. See
/// [`remove_where`] for how the tree is rebuilt.
pub fn remove(from: &Arc<dyn Logger>, what: &Arc<dyn Logger>) -> Arc<dyn Logger> {
    let doomed = leaves(what);
    remove_where(from, |sink| doomed.iter().any(|d| Arc::ptr_eq(sink, d)))
}

/// Return `from` without the sinks for which `matches` returns true.
///
/// The predicate sees filtering layers first and, when it keeps them, the
/// sinks inside. A layer whose sinks are all removed goes with them; otherwise
/// it is rebuilt around what is left with the same filter. Fan-out nodes keep
/// their shape. Nothing left yields an [`EmptyLogger`], and a tree with no
/// match comes back as the same `Arc`. `from` is never modified.
///
/// ```
/// use std::sync::Arc;
/// use logging_facade::logger::{combine, remove_where, EmptyLogger, Logger, SystemLogger};
///
/// let logger = combine(Arc::new(SystemLogger), Arc::new(EmptyLogger));
/// let rest = remove_where(&logger, |sink| format!("{:?}", sink) == "SystemLogger");
/// assert_eq!(format!("{:?}", rest), "EmptyLogger");
/// ```
pub fn remove_where<F>(from: &Arc<dyn Logger>, matches: F) -> Arc<dyn Logger>
where
    F: Fn(&Arc<dyn Logger>) -> bool,
{
    match prune(from, &matches) {
        Some(kept) => kept,
        None => Arc::new(EmptyLogger),
    }
}

// None when nothing is left; untouched subtrees come back as the same Arc.
fn prune(
    logger: &Arc<dyn Logger>,
    matches: &dyn Fn(&Arc<dyn Logger>) -> bool,
) -> Option<Arc<dyn Logger>> {
    if let Some((head, tail)) = logger.constituents() {
        return match (prune(head, matches), prune(tail, matches)) {
            (Some(h), Some(t)) if Arc::ptr_eq(&h, head) && Arc::ptr_eq(&t, tail) => {
                Some(Arc::clone(logger))
            }
            (Some(h), Some(t)) => Some(combine(h, t)),
            (Some(kept), None) | (None, Some(kept)) => Some(kept),
            (None, None) => None,
        };
    }

    if matches(logger) {
        return None;
    }

    match logger.unfiltered() {
        Some(inner) => match prune(inner, matches) {
            Some(kept) if Arc::ptr_eq(&kept, inner) => Some(Arc::clone(logger)),
            Some(kept) => Some(logger.rewrap(kept).unwrap_or_else(|| Arc::clone(logger))),
            None => None,
        },
        None => Some(Arc::clone(logger)),
    }
}
