//! Configuration management for the relay
//!
//! Configuration comes from a YAML file, falls back to defaults when the file
//! does not exist, and is then overridden by `RELAY_*` environment variables.

pub mod loader;
pub mod models;

pub use models::*;

use crate::utils::error::{RelayError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/relay.yaml";

/// Main configuration struct for the relay
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Relay configuration
    pub relay: RelayConfig,
    /// File the configuration was read from, if any
    pub source: Option<PathBuf>,
}

impl Config {
    /// Load configuration from file
    ///
    /// The result is not validated; [`Config::load`] validates once overrides
    /// are applied.
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| RelayError::config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml_str(&content)?.with_source(path);

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let relay: RelayConfig = serde_yaml::from_str(content)
            .map_err(|e| RelayError::config(format!("Failed to parse config: {}", e)))?;

        Ok(Self {
            relay,
            source: None,
        })
    }

    /// Load the file when it exists, then apply environment overrides
    ///
    /// A missing file means defaults; a file that exists but does not parse
    /// is an error.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with(path, |key| std::env::var(key).ok()).await
    }

    /// [`Config::load`] with overrides read through `lookup`
    pub async fn load_with<P, F>(path: P, lookup: F) -> Result<Self>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();

        let base = if tokio::fs::try_exists(path).await.unwrap_or(false) {
            Self::from_file(path).await?
        } else {
            Self::default()
        };

        let relay = base.relay.apply_overrides_from(lookup)?;
        let config = Self {
            relay,
            source: base.source,
        };

        config.validate()?;
        Ok(config)
    }

    fn with_source(mut self, path: &Path) -> Self {
        self.source = Some(path.to_path_buf());
        self
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.relay.server
    }

    /// Get transcoder configuration
    pub fn transcoder(&self) -> &TranscoderConfig {
        &self.relay.transcoder
    }

    /// Get recognition service configuration
    pub fn recognition(&self) -> &RecognitionConfig {
        &self.relay.recognition
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.relay.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.relay
            .server
            .validate()
            .map_err(|e| RelayError::config(format!("Server config error: {}", e)))?;

        self.relay
            .transcoder
            .validate()
            .map_err(|e| RelayError::config(format!("Transcoder config error: {}", e)))?;

        self.relay
            .recognition
            .validate()
            .map_err(|e| RelayError::config(format!("Recognition config error: {}", e)))?;

        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.relay = self.relay.merge(other.relay);
        if other.source.is_some() {
            self.source = other.source;
        }
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.relay)
            .map_err(|e| RelayError::config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
