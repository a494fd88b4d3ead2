//! Filter rules.

use std::fmt;
use std::ops::{BitAnd, BitOr};
use std::sync::Arc;

use crate::logger::Severity;

type LevelPredicate = Arc<dyn Fn(Severity) -> bool + Send + Sync>;
type TagPredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Decides whether a record with a given severity and tag passes.
///
/// Filters compose with [`Filter::or`] / [`Filter::and`] (also `|` and `&`).
#[derive(Clone)]
pub enum Filter {
    /// Every record passes.
    All,
    /// No record passes.
    None,
    /// Records at or above a severity pass.
    AtLeast(Severity),
    /// Custom predicate on the severity.
    Level(LevelPredicate),
    /// Custom predicate on the tag.
    Tag(TagPredicate),
    /// Passes when either side passes.
    Any(Box<Filter>, Box<Filter>),
    /// Passes when both sides pass.
    Both(Box<Filter>, Box<Filter>),
}

impl Filter {
    /// Records at `level` or more severe. `Debug` admits everything.
    pub fn at_least(level: Severity) -> Self {
        match level {
            Severity::Debug => Filter::All,
            _ => Filter::AtLeast(level),
        }
    }

    pub fn level<F>(predicate: F) -> Self
    where
        F: Fn(Severity) -> bool + Send + Sync + 'static,
    {
        Filter::Level(Arc::new(predicate))
    }

    pub fn tag<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Filter::Tag(Arc::new(predicate))
    }

    /// Only records whose tag is listed.
    pub fn tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: Vec<String> = tags.into_iter().map(Into::into).collect();
        Filter::tag(move |tag| tags.iter().any(|t| t == tag))
    }

    /// Every record except those whose tag is listed.
    pub fn muted_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: Vec<String> = tags.into_iter().map(Into::into).collect();
        Filter::tag(move |tag| !tags.iter().any(|t| t == tag))
    }

    pub fn or(self, other: Filter) -> Self {
        Filter::Any(Box::new(self), Box::new(other))
    }

    pub fn and(self, other: Filter) -> Self {
        Filter::Both(Box::new(self), Box::new(other))
    }

    pub fn allows(&self, level: Severity, tag: &str) -> bool {
        match self {
            Filter::All => true,
            Filter::None => false,
            Filter::AtLeast(min) => level >= *min,
            Filter::Level(predicate) => predicate(level),
            Filter::Tag(predicate) => predicate(tag),
            Filter::Any(a, b) => a.allows(level, tag) || b.allows(level, tag),
            Filter::Both(a, b) => a.allows(level, tag) && b.allows(level, tag),
        }
    }

    /// True for the trivial pass-everything filter.
    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }
}

impl Default for Filter {
    fn default() -> Self {
        Filter::All
    }
}

impl BitOr for Filter {
    type Output = Filter;

    fn bitor(self, rhs: Filter) -> Filter {
        self.or(rhs)
    }
}

impl BitAnd for Filter {
    type Output = Filter;

    fn bitand(self, rhs: Filter) -> Filter {
        self.and(rhs)
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("All"),
            Filter::None => f.write_str("None"),
            Filter::AtLeast(level) => write!(f, "AtLeast({})", level),
            Filter::Level(_) => f.write_str("Level(..)"),
            Filter::Tag(_) => f.write_str("Tag(..)"),
            Filter::Any(a, b) => write!(f, "({:?} | {:?})", a, b),
            Filter::Both(a, b) => write!(f, "({:?} & {:?})", a, b),
        }
    }
}
