//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//!
//! ```toml
//! [default]
//! sinks = ["system", "tracing"]
//!
//! [filter]
//! min_level = "info"
//! muted_tags = ["heartbeat"]
//!
//! [tracing]
//! env_filter = "info"
//! ```

use serde::{Deserialize, Serialize};

use crate::filter::Filter;
use crate::logger::Severity;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Sinks making up the default logger.
    pub default: DefaultConfig,

    /// Process-wide default filter.
    pub filter: FilterConfig,

    /// Subscriber settings for the tracing sink.
    pub tracing: TracingConfig,
}

/// Built-in sinks that can be named in a config file.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// The stdout/stderr system logger.
    System,
    /// Events into the `tracing` ecosystem.
    Tracing,
}

/// Default logger composition.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DefaultConfig {
    /// Combined left to right. Empty means silent.
    pub sinks: Vec<SinkKind>,
}

impl Default for DefaultConfig {
    fn default() -> Self {
        Self {
            sinks: vec![SinkKind::System],
        }
    }
}

/// Default filter settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct FilterConfig {
    /// Least severe level that passes.
    pub min_level: Severity,

    /// Tags that never pass.
    pub muted_tags: Vec<String>,

    /// When non-empty, only these tags pass.
    pub only_tags: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_level: Severity::Debug,
            muted_tags: Vec::new(),
            only_tags: Vec::new(),
        }
    }
}

impl FilterConfig {
    /// The filter these settings describe. Defaults yield [`Filter::All`].
    pub fn to_filter(&self) -> Filter {
        let mut filter = Filter::at_least(self.min_level);
        if !self.only_tags.is_empty() {
            filter = and_then(filter, Filter::tags(self.only_tags.clone()));
        }
        if !self.muted_tags.is_empty() {
            filter = and_then(filter, Filter::muted_tags(self.muted_tags.clone()));
        }
        filter
    }
}

fn and_then(current: Filter, next: Filter) -> Filter {
    if current.is_all() {
        next
    } else {
        current.and(next)
    }
}

/// Tracing subscriber settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TracingConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is unset. Reloaded with
    /// the rest of the file under `--watch`.
    pub env_filter: String,

    /// Colored output. Read when the subscriber is built; reloads keep the
    /// startup value.
    pub ansi: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            env_filter: "info".to_string(),
            ansi: true,
        }
    }
}
