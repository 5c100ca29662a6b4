//! Remote recognition service configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Remote speech-recognition endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionConfig {
    /// URL the recognition payload is POSTed to
    #[serde(default = "default_recognition_endpoint")]
    pub endpoint: String,
    /// Seconds to wait for the remote response
    #[serde(default = "default_recognition_timeout")]
    pub timeout: u64,
    /// Client id used when the caller sends none
    #[serde(default = "default_client_id")]
    pub default_client_id: String,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            endpoint: default_recognition_endpoint(),
            timeout: default_recognition_timeout(),
            default_client_id: default_client_id(),
        }
    }
}

impl RecognitionConfig {
    pub fn merge(mut self, other: Self) -> Self {
        if other.endpoint != default_recognition_endpoint() {
            self.endpoint = other.endpoint;
        }
        if other.timeout != default_recognition_timeout() {
            self.timeout = other.timeout;
        }
        if other.default_client_id != default_client_id() {
            self.default_client_id = other.default_client_id;
        }
        self
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.is_empty() {
            return Err("Recognition endpoint cannot be empty".to_string());
        }

        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(format!(
                "Recognition endpoint must be an http(s) URL: {}",
                self.endpoint
            ));
        }

        if self.timeout == 0 {
            return Err("Recognition timeout cannot be 0".to_string());
        }

        if self.default_client_id.is_empty() {
            return Err("Default client id cannot be empty".to_string());
        }

        Ok(())
    }
}
