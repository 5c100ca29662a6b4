//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::relay::RelayService;
use crate::utils::error::Result;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Cloned into every actix worker; all fields are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Relay configuration (shared read-only)
    pub config: Arc<Config>,
    /// Upload → transcode → relay pipeline
    pub relay: Arc<RelayService>,
}

impl AppState {
    /// Create a new AppState around an existing pipeline
    pub fn new(config: Config, relay: RelayService) -> Self {
        Self {
            config: Arc::new(config),
            relay: Arc::new(relay),
        }
    }

    /// Build the ffmpeg/HTTP backed pipeline from configuration
    pub fn from_config(config: Config) -> Result<Self> {
        let relay = RelayService::from_config(&config)?;
        Ok(Self::new(config, relay))
    }

    /// Get relay configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Largest `file` part accepted, in bytes
    pub fn max_upload_size(&self) -> usize {
        self.config.server().max_body_size
    }
}
