//! Top-level relay configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Everything the relay reads from `relay.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RelayConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Transcoder configuration
    #[serde(default)]
    pub transcoder: TranscoderConfig,
    /// Recognition service configuration
    #[serde(default)]
    pub recognition: RecognitionConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RelayConfig {
    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.server = self.server.merge(other.server);
        self.transcoder = self.transcoder.merge(other.transcoder);
        self.recognition = self.recognition.merge(other.recognition);
        self.logging = self.logging.merge(other.logging);
        self
    }
}
