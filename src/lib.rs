//! # speech-relay
//!
//! HTTP relay in front of a remote speech-recognition API.
//!
//! A client uploads an audio file as multipart form data together with an
//! access token. The relay transcodes the audio with ffmpeg into raw 16 kHz
//! mono 16-bit PCM, wraps it in the recognition service's JSON envelope, and
//! returns whatever the service answers.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use speech_relay::{Config, server::builder::run_server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/relay.yaml").await?;
//!     run_server(config).await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::relay::{
    DeviceProfileId, FfmpegTranscoder, HttpRecognitionClient, RecognitionClient,
    RecognitionRequest, RecognitionResponse, RelayForm, RelayService, StageError, Transcoder,
    UploadedAudio,
};
pub use utils::error::{RelayError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Relay build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build time, seconds since the epoch
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
        }
    }
}

/// Version, build time and commit of this binary
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
