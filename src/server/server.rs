//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::config::{Config, ServerConfig};
use crate::server::handlers::health_check;
use crate::server::middleware::RequestIdMiddleware;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{RelayError, Result};
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::{DefaultHeaders, Logger},
    web,
};
use tracing::info;

/// Access log line: peer, request line, status, size, request id, seconds
const ACCESS_LOG_FORMAT: &str = r#"%a "%r" %s %b %{x-request-id}o %T"#;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server backed by ffmpeg and the configured endpoint
    pub fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let state = AppState::from_config(config.clone())?;
        Ok(Self::with_state(config.server().clone(), state))
    }

    /// Create a server around an already built state
    pub fn with_state(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(state)
            .wrap(DefaultHeaders::new().add(("Server", "speech-relay")))
            .wrap(Logger::new(ACCESS_LOG_FORMAT))
            .wrap(RequestIdMiddleware)
            .route("/health", web::get().to(health_check))
            .configure(routes::configure_routes)
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let workers = self.config.worker_count();

        info!("Starting HTTP server on {} with {} workers", bind_addr, workers);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .workers(workers)
            .client_request_timeout(self.config.request_timeout())
            .bind(&bind_addr)
            .map_err(|e| Self::format_bind_error(e, &bind_addr))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| RelayError::server(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    fn format_bind_error(e: std::io::Error, bind_addr: &str) -> RelayError {
        match e.kind() {
            std::io::ErrorKind::AddrInUse => {
                RelayError::server(format!("Address {} is already in use", bind_addr))
            }
            std::io::ErrorKind::PermissionDenied => {
                RelayError::server(format!("Permission denied binding to {}", bind_addr))
            }
            _ => RelayError::server(format!("Failed to bind to {}: {}", bind_addr, e)),
        }
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
