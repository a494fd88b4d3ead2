//! Pluggable logging facade.
//!
//! Application code logs through the [`Logger`] trait without knowing which
//! sinks receive the records. Sinks compose into fan-out trees, and a
//! process-wide default can be swapped at runtime.
//!
//! ```text
//!   app code ──▶ DefaultLogger ──▶ registry (ArcSwap slot)
//!                                        │
//!                                        ▼
//!                              FilteredLogger (filter)
//!                                        │
//!                                        ▼
//!                           CompositeLogger (combine)
//!                               │               │
//!                               ▼               ▼
//!                         SystemLogger    TracingLogger / external sinks
//! ```
//!
//! ```
//! use std::sync::Arc;
//! use logging_facade::{combine, registry, DefaultLogger, Logger, SystemLogger, TracingLogger};
//!
//! registry::set_default(combine(Arc::new(SystemLogger), Arc::new(TracingLogger)));
//! DefaultLogger.info("app", "started", None);
//! ```

// Core
pub mod logger;
pub mod registry;

// Cross-cutting concerns
pub mod config;
pub mod filter;

pub use filter::{Content, Filter, LazyLog};
pub use logger::{
    combine, combine_all, remove, remove_where, Cause, EmptyLogger, Logger, Severity,
    SystemLogger, TracingLogger,
};
pub use registry::{default_logger, set_default, system_logger, DefaultLogger};
