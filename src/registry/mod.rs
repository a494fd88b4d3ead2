//! Process-wide default logger and default filter.
//!
//! # Data Flow
//! ```text
//! process start
//!     → holder.rs: lazily built DefaultLoggerHolder (state Unset)
//!     → default_logger() returns the system logger
//!
//! set_default(L)
//!     → refused with a warning if L contains a DefaultLogger
//!     → atomic swap of the logger slot (state Set)
//!     → L receives "Default logger changed to ..." at info
//!     → later default_logger() calls return L
//!
//! DefaultLogger (forwarder.rs)
//!     → resolves the installed logger on every call (late binding)
//! ```
//!
//! # Design Decisions
//! - All access goes through the functions below; the static is private
//! - Slots are `ArcSwap`s: readers never block and never see a torn value
//! - No lock is held while a sink runs
//! - A logger obtained from `default_logger()` is a snapshot and is never
//!   redirected by later swaps

pub mod forwarder;
pub mod holder;

use std::sync::{Arc, OnceLock};

use crate::filter::Filter;
use crate::logger::Logger;

pub use forwarder::DefaultLogger;
pub use holder::{DefaultLoggerHolder, State};

static HOLDER: OnceLock<DefaultLoggerHolder> = OnceLock::new();

fn holder() -> &'static DefaultLoggerHolder {
    HOLDER.get_or_init(DefaultLoggerHolder::new)
}

/// The always-available baseline logger. Same instance on every call.
pub fn system_logger() -> Arc<dyn Logger> {
    holder().system()
}

/// The currently installed default, or the system logger if none was set.
pub fn default_logger() -> Arc<dyn Logger> {
    holder().get()
}

/// Install `logger` as the default for all future reads.
///
/// Returns the logger it replaced. Loggers already handed out by
/// [`default_logger`] keep their original binding. A tree containing a
/// [`DefaultLogger`] is refused and the current default is returned.
pub fn set_default(logger: Arc<dyn Logger>) -> Arc<dyn Logger> {
    holder().set(logger)
}

/// Whether [`set_default`] has been called in this process.
pub fn state() -> State {
    holder().state()
}

/// The filter used by loggers without an explicit one.
pub fn default_filter() -> Arc<Filter> {
    holder().filter()
}

/// Replace the process-wide default filter. Returns the previous one.
pub fn set_default_filter(filter: Filter) -> Arc<Filter> {
    holder().set_filter(filter)
}
