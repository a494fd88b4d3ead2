//! Logger capability and its building blocks.
//!
//! # Data Flow
//! ```text
//! application code
//!     → Arc<dyn Logger> (sink, composite, filter wrapper, or DefaultLogger)
//!     → composite.rs fans out: head first, then tail, depth-first
//!     → leaf sinks:
//!         - system.rs (stdout/stderr printer, always available)
//!         - tracing_adapter.rs (forwards into the tracing ecosystem)
//!         - external sinks implementing the Logger trait
//! ```
//!
//! # Design Decisions
//! - One trait for sinks and composites, so fan-out trees nest freely
//! - Severity ordering is shared vocabulary; plain sinks never filter
//! - A panicking child never silences its siblings

pub mod composite;
pub mod severity;
pub mod sink;
pub mod system;
pub mod tracing_adapter;

pub use composite::{combine, combine_all, leaves, remove, remove_where, CompositeLogger};
pub use severity::{ParseSeverityError, Severity};
pub use sink::{render_trace, Cause, Logger};
pub use system::{EmptyLogger, SystemLogger};
pub use tracing_adapter::TracingLogger;
