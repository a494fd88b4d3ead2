//! Late-bound view of the default logger.

use crate::logger::{Cause, Logger, Severity};
use crate::registry;

/// Logger that resolves the installed default on every call.
///
/// Unlike the snapshot returned by [`registry::default_logger`], a
/// `DefaultLogger` follows every later [`registry::set_default`]. It reports
/// itself as late bound, so [`registry::set_default`] refuses it and any tree
/// containing it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, level: Severity, tag: &str, message: &str, cause: Option<&Cause>) {
        registry::default_logger().log(level, tag, message, cause);
    }

    fn debug(&self, tag: &str, message: &str, cause: Option<&Cause>) {
        registry::default_logger().debug(tag, message, cause);
    }

    fn info(&self, tag: &str, message: &str, cause: Option<&Cause>) {
        registry::default_logger().info(tag, message, cause);
    }

    fn warn(&self, tag: &str, message: &str, cause: Option<&Cause>) {
        registry::default_logger().warn(tag, message, cause);
    }

    fn warn_cause(&self, tag: &str, cause: &Cause) {
        registry::default_logger().warn_cause(tag, cause);
    }

    fn error(&self, tag: &str, message: &str, cause: Option<&Cause>) {
        registry::default_logger().error(tag, message, cause);
    }

    fn enabled(&self, level: Severity, tag: &str) -> bool {
        registry::default_logger().enabled(level, tag)
    }

    fn is_late_bound(&self) -> bool {
        true
    }
}
