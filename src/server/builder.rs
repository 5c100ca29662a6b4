//! Server builder and run_server function

use crate::config::Config;
use crate::server::routes::API_PREFIX;
use crate::server::server::HttpServer;
use crate::utils::error::{RelayError, Result};
use tracing::{info, warn};

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| RelayError::config("Configuration is required"))?;

        HttpServer::new(&config)
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the server with an already loaded configuration
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting speech relay {}", env!("CARGO_PKG_VERSION"));

    match &config.source {
        Some(path) => info!("Configuration loaded from {}", path.display()),
        None => warn!("No configuration file found, running with defaults"),
    }

    let server = ServerBuilder::new().with_config(config.clone()).build()?;

    info!("Server starting at: http://{}", config.server().address());
    info!("Recognition endpoint: {}", config.recognition().endpoint);
    info!("Transcoder: {}", config.transcoder().binary);
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   POST {}/baidu/audio - Speech recognition relay", API_PREFIX);

    server.start().await
}
