//! Turning a configuration into installed loggers.

use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{reload, EnvFilter};

use crate::config::schema::{LoggingConfig, SinkKind};
use crate::filter::with_default_filter;
use crate::logger::{combine_all, Logger, TracingLogger};
use crate::registry;

impl SinkKind {
    /// The sink this kind names. `System` is the shared system logger.
    pub fn build(self) -> Arc<dyn Logger> {
        match self {
            SinkKind::System => registry::system_logger(),
            SinkKind::Tracing => Arc::new(TracingLogger::new()),
        }
    }
}

/// Combine the configured sinks, left to right.
pub fn build_logger(config: &LoggingConfig) -> Arc<dyn Logger> {
    combine_all(config.default.sinks.iter().map(|kind| kind.build()))
}

/// Install `config` process-wide.
///
/// The default filter is replaced first, then the combined sinks are
/// installed behind a wrapper that follows that filter. Returns the logger
/// that was installed.
pub fn install(config: &LoggingConfig) -> Arc<dyn Logger> {
    let filter = config.filter.to_filter();
    tracing::debug!(filter = ?filter, sinks = ?config.default.sinks, "Installing logging config");

    registry::set_default_filter(filter);
    let logger = with_default_filter(build_logger(config));
    registry::set_default(Arc::clone(&logger));
    logger
}

/// Error swapping the subscriber's `EnvFilter`.
#[derive(Debug, Error)]
pub enum ReloadError {
    #[error("Invalid env_filter directives: {0}")]
    Directives(#[from] ParseError),

    #[error("Subscriber reload failed: {0}")]
    Subscriber(#[from] reload::Error),
}

/// Replace the `EnvFilter` behind `handle` with `config.tracing.env_filter`.
///
/// Only the directives are reloadable; `ansi` is fixed when the subscriber
/// is built.
pub fn reload_env_filter<S>(
    handle: &reload::Handle<EnvFilter, S>,
    config: &LoggingConfig,
) -> Result<(), ReloadError> {
    let filter = EnvFilter::try_new(&config.tracing.env_filter)?;
    handle.reload(filter)?;
    tracing::debug!(directives = %config.tracing.env_filter, "Tracing filter reloaded");
    Ok(())
}
