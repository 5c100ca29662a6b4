//! HTTP route modules

pub mod audio;

pub use audio::relay_audio;

use actix_web::web;

/// Prefix shared by versioned endpoints
pub const API_PREFIX: &str = "/v1";

/// Configure relay routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(API_PREFIX).service(
            web::scope("/baidu")
                // Speech recognition relay
                .route("/audio", web::post().to(relay_audio)),
        ),
    );
}
