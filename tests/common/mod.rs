//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard};

use logging_facade::{Cause, Logger, Severity};

/// One operation received by a [`Recorder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub sink: &'static str,
    pub op: &'static str,
    pub tag: String,
    pub message: String,
    pub cause: Option<String>,
}

pub type Journal = Arc<Mutex<Vec<Call>>>;

/// Sink that records every operation into a shared journal.
///
/// Overrides each operation so tests can tell which one was called.
#[derive(Debug)]
pub struct Recorder {
    name: &'static str,
    journal: Journal,
}

impl Recorder {
    pub fn new(name: &'static str, journal: &Journal) -> Arc<Self> {
        Arc::new(Self {
            name,
            journal: journal.clone(),
        })
    }

    fn record(&self, op: &'static str, tag: &str, message: &str, cause: Option<&Cause>) {
        self.journal.lock().unwrap().push(Call {
            sink: self.name,
            op,
            tag: tag.to_string(),
            message: message.to_string(),
            cause: cause.map(|c| c.to_string()),
        });
    }
}

impl Logger for Recorder {
    fn log(&self, _level: Severity, tag: &str, message: &str, cause: Option<&Cause>) {
        self.record("log", tag, message, cause);
    }

    fn debug(&self, tag: &str, message: &str, cause: Option<&Cause>) {
        self.record("debug", tag, message, cause);
    }

    fn info(&self, tag: &str, message: &str, cause: Option<&Cause>) {
        self.record("info", tag, message, cause);
    }

    fn warn(&self, tag: &str, message: &str, cause: Option<&Cause>) {
        self.record("warn", tag, message, cause);
    }

    fn warn_cause(&self, tag: &str, cause: &Cause) {
        self.record("warn_cause", tag, "", Some(cause));
    }

    fn error(&self, tag: &str, message: &str, cause: Option<&Cause>) {
        self.record("error", tag, message, cause);
    }
}

/// Calls in the journal, skipping the registry's own announcements.
pub fn calls(journal: &Journal) -> Vec<Call> {
    journal
        .lock()
        .unwrap()
        .iter()
        .filter(|c| c.tag != "Logger")
        .cloned()
        .collect()
}

/// `(sink, op)` pairs in the journal, skipping announcements.
pub fn trace(journal: &Journal) -> Vec<(&'static str, &'static str)> {
    calls(journal).iter().map(|c| (c.sink, c.op)).collect()
}

static GLOBAL: Mutex<()> = Mutex::new(());

/// Serializes tests that touch the process-wide registry.
pub fn global_lock() -> MutexGuard<'static, ()> {
    GLOBAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug, thiserror::Error)]
#[error("timeout after {0}")]
pub struct TimeoutError(pub &'static str);
