//! Helper functions for creating specific error types

use super::types::RelayError;

impl RelayError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Server(message.into())
    }

    pub fn logging<S: Into<String>>(message: S) -> Self {
        Self::Logging(message.into())
    }

    /// Whether the error comes from the configuration layer
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Yaml(_))
    }
}
