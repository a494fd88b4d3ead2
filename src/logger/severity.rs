//! Severity levels.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Severity of a log record, ordered from least to most severe.
///
/// The core never filters on severity itself. Sinks and filters use this
/// ordering so that independently written sinks agree on what "more severe"
/// means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Verbose diagnostic output.
    Debug,
    /// General information.
    Info,
    /// Something unexpected that the program recovered from.
    Warn,
    /// A failure.
    Error,
}

/// Error returned when a severity name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity: {0:?} (expected debug, info, warn or error)")]
pub struct ParseSeverityError(pub String);

impl Severity {
    /// Every severity in rank order.
    pub const ALL: [Severity; 4] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
    ];

    /// Declaration rank: Debug=0, Info=1, Warn=2, Error=3.
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Compare two severities by rank.
    pub fn compare(a: Severity, b: Severity) -> Ordering {
        a.rank().cmp(&b.rank())
    }

    /// Upper-case name, e.g. `"WARN"`.
    pub const fn name(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so width/alignment flags work in sink formats
        f.pad(self.name())
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}
