//! Filtering and lazy logging.
//!
//! # Data Flow
//! ```text
//! eager call  → FilteredLogger (logger.rs)
//!     → Filter::allows(level, tag) (rule.rs)
//!     → forward to wrapped logger, or drop
//!
//! lazy call   → LazyLog (lazy.rs)
//!     → Logger::enabled(level, tag)
//!     → only then build Content (content.rs) and log it eagerly
//! ```
//!
//! # Design Decisions
//! - Plain sinks are never filtered eagerly; filtering is an explicit wrapper
//! - Wrappers stack: filtering an already filtered logger adds a layer
//! - A wrapper without its own filter reads the process-wide default filter
//!   at call time

pub mod content;
pub mod lazy;
pub mod logger;
pub mod rule;

pub use content::Content;
pub use lazy::LazyLog;
pub use logger::{with_default_filter, with_filter, without_filter, FilteredLogger};
pub use rule::Filter;
