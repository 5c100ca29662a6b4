//! Error types for the relay

use thiserror::Error;

/// Result type alias for the relay
pub type Result<T> = std::result::Result<T, RelayError>;

/// Errors raised while configuring and running the relay
#[derive(Error, Debug)]
pub enum RelayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Server errors
    #[error("Server error: {0}")]
    Server(String),

    /// Logging setup errors
    #[error("Logging error: {0}")]
    Logging(String),
}
