//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject duplicate sinks and empty or contradictory tags
//! - Check `EnvFilter` directives before they reach the subscriber
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LoggingConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::{LoggingConfig, SinkKind};

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("sink {0:?} is listed more than once in default.sinks")]
    DuplicateSink(SinkKind),

    #[error("filter tags must not be empty")]
    EmptyTag,

    #[error("tag {0:?} is both muted and allowed")]
    ConflictingTag(String),

    #[error("invalid tracing.env_filter {directives:?}: {reason}")]
    InvalidEnvFilter { directives: String, reason: String },
}

/// Check a parsed configuration.
pub fn validate_config(config: &LoggingConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for sink in &config.default.sinks {
        if !seen.insert(*sink) {
            errors.push(ValidationError::DuplicateSink(*sink));
        }
    }

    let filter = &config.filter;
    if filter
        .muted_tags
        .iter()
        .chain(filter.only_tags.iter())
        .any(|t| t.trim().is_empty())
    {
        errors.push(ValidationError::EmptyTag);
    }
    for tag in &filter.muted_tags {
        if filter.only_tags.contains(tag) {
            errors.push(ValidationError::ConflictingTag(tag.clone()));
        }
    }

    if let Err(e) = EnvFilter::try_new(&config.tracing.env_filter) {
        errors.push(ValidationError::InvalidEnvFilter {
            directives: config.tracing.env_filter.clone(),
            reason: e.to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
