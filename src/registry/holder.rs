//! The single-slot default holder.

use std::fmt;
use std::sync::Arc;

use arc_swap::{ArcSwap, ArcSwapOption};

use crate::filter::Filter;
use crate::logger::{Logger, SystemLogger};

const TAG: &str = "Logger";

/// Lifecycle of the default slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Nothing installed yet; reads return the system logger.
    Unset,
    /// A logger was installed at least once.
    Set,
}

// ArcSwap needs a sized payload.
struct Installed {
    logger: Arc<dyn Logger>,
}

/// Owns the default logger slot and the default filter slot.
///
/// The process-wide instance lives in [`crate::registry`]; standalone holders
/// are useful when a component wants its own swappable default.
pub struct DefaultLoggerHolder {
    system: Arc<dyn Logger>,
    current: ArcSwapOption<Installed>,
    filter: ArcSwap<Filter>,
}

impl DefaultLoggerHolder {
    pub fn new() -> Self {
        Self::with_system(Arc::new(SystemLogger))
    }

    /// Holder whose baseline is `system` instead of [`SystemLogger`].
    pub fn with_system(system: Arc<dyn Logger>) -> Self {
        Self {
            system,
            current: ArcSwapOption::empty(),
            filter: ArcSwap::from_pointee(Filter::All),
        }
    }

    pub fn system(&self) -> Arc<dyn Logger> {
        Arc::clone(&self.system)
    }

    pub fn get(&self) -> Arc<dyn Logger> {
        let guard = self.current.load();
        match &*guard {
            Some(installed) => Arc::clone(&installed.logger),
            None => self.system(),
        }
    }

    /// Swap in `logger` and announce the change through it. Returns the
    /// logger it replaced.
    ///
    /// A late-bound tree (see [`Logger::is_late_bound`]) would forward to
    /// itself once installed. It is refused with a warning: the slot keeps its
    /// current logger, which is returned, and nothing is announced.
    pub fn set(&self, logger: Arc<dyn Logger>) -> Arc<dyn Logger> {
        if logger.is_late_bound() {
            tracing::warn!(
                logger = ?logger,
                "Refusing a default logger that forwards to the default; keeping the current one"
            );
            return self.get();
        }

        let previous = self.current.swap(Some(Arc::new(Installed {
            logger: Arc::clone(&logger),
        })));

        // outside the swap: a slow sink must not hold up readers
        logger.info(TAG, &format!("Default logger changed to {:?}.", logger), None);

        match previous {
            Some(installed) => Arc::clone(&installed.logger),
            None => self.system(),
        }
    }

    pub fn state(&self) -> State {
        if self.current.load().is_some() {
            State::Set
        } else {
            State::Unset
        }
    }

    pub fn filter(&self) -> Arc<Filter> {
        self.filter.load_full()
    }

    pub fn set_filter(&self, filter: Filter) -> Arc<Filter> {
        self.filter.swap(Arc::new(filter))
    }
}

impl Default for DefaultLoggerHolder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DefaultLoggerHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultLoggerHolder")
            .field("state", &self.state())
            .field("current", &self.get())
            .field("filter", &self.filter())
            .finish()
    }
}
