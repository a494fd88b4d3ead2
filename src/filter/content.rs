//! Lazily built record payloads.

use std::fmt;

use crate::logger::Cause;

/// Message plus optional cause, produced by a lazy logging closure.
///
/// ```
/// use logging_facade::filter::Content;
///
/// let err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
/// let content = Content::with_cause("flush failed", err);
/// assert_eq!(content.message(), "flush failed");
/// assert!(content.cause().is_some());
/// ```
pub struct Content {
    message: String,
    cause: Option<Box<Cause>>,
}

impl Content {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause(message: impl Into<String>, cause: impl Into<Box<Cause>>) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_deref()
    }
}

impl From<String> for Content {
    fn from(message: String) -> Self {
        Content::new(message)
    }
}

impl From<&str> for Content {
    fn from(message: &str) -> Self {
        Content::new(message)
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Content")
            .field("message", &self.message)
            .field("cause", &self.cause.as_ref().map(|c| c.to_string()))
            .finish()
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
