//! Configuration data models
//!
//! This module defines all configuration structures used by the relay.

pub mod logging;
pub mod recognition;
pub mod relay;
pub mod server;
pub mod transcoder;

pub use logging::*;
pub use recognition::*;
pub use relay::*;
pub use server::*;
pub use transcoder::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    7093
}

/// Default client request timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum upload size in bytes
pub fn default_max_body_size() -> usize {
    25 * 1024 * 1024 // 25MB
}

pub fn default_ffmpeg_binary() -> String {
    "ffmpeg".to_string()
}

pub fn default_work_dir() -> String {
    ".".to_string()
}

pub fn default_transcode_timeout() -> u64 {
    60
}

pub fn default_recognition_endpoint() -> String {
    "http://vop.baidu.com/server_api".to_string()
}

pub fn default_recognition_timeout() -> u64 {
    30
}

/// Client id sent when the caller leaves `client-id` empty
pub fn default_client_id() -> String {
    "nyan".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}
