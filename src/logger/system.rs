//! Built-in sinks that need no configuration.

use std::io::{self, Write};

use crate::logger::{render_trace, Cause, Logger, Severity};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Baseline sink, usable before any configuration.
///
/// Prints one line per record:
///
/// ```text
/// [2024-05-01 12:00:00.000] [INFO /net] connected
/// ```
///
/// followed by the cause trace when one is attached. Debug and Info go to
/// stdout; Warn and Error go to stderr. Write failures are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLogger;

impl SystemLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for SystemLogger {
    fn log(&self, level: Severity, tag: &str, message: &str, cause: Option<&Cause>) {
        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        let line = format_record(&timestamp, level, tag, message, cause);

        let result = if level >= Severity::Warn {
            writeln!(io::stderr().lock(), "{}", line)
        } else {
            writeln!(io::stdout().lock(), "{}", line)
        };
        // a closed pipe must not take the caller down
        let _ = result;
    }
}

/// Render a record the way [`SystemLogger`] prints it.
pub fn format_record(
    timestamp: &str,
    level: Severity,
    tag: &str,
    message: &str,
    cause: Option<&Cause>,
) -> String {
    let mut line = format!("[{}] [{:<5}/{}] {}", timestamp, level, tag, message);
    if let Some(cause) = cause {
        line.push('\n');
        line.push_str(&render_trace(cause));
    }
    line
}

/// Sink that discards every record.
///
/// What remains after every sink has been removed from a composite.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyLogger;

impl Logger for EmptyLogger {
    #[inline]
    fn log(&self, _level: Severity, _tag: &str, _message: &str, _cause: Option<&Cause>) {}

    fn enabled(&self, _level: Severity, _tag: &str) -> bool {
        false
    }
}
