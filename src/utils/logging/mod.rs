//! Tracing subscriber setup
//!
//! `RUST_LOG` wins when set; otherwise the configured level applies to the
//! whole process.

use crate::config::LoggingConfig;
use crate::utils::error::{RelayError, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter used by the global subscriber
pub fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level)
        .map_err(|e| RelayError::logging(format!("Invalid log level '{}': {}", config.level, e)))
}

/// Install the global tracing subscriber
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = build_env_filter(config)?;

    let installed = if config.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(false)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(false)
            .try_init()
    };

    installed.map_err(|e| RelayError::logging(e.to_string()))
}
