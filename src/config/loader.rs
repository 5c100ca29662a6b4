//! Configuration loading utilities
//!
//! Environment variables override whatever the YAML file (or the defaults)
//! provided. Unparsable numeric values are configuration errors rather than
//! silently ignored.

use super::models::*;
use crate::utils::error::{RelayError, Result};
use std::str::FromStr;
use tracing::debug;

pub const ENV_HOST: &str = "RELAY_HOST";
pub const ENV_PORT: &str = "RELAY_PORT";
pub const ENV_WORKERS: &str = "RELAY_WORKERS";
pub const ENV_MAX_BODY_SIZE: &str = "RELAY_MAX_BODY_SIZE";
pub const ENV_FFMPEG_PATH: &str = "RELAY_FFMPEG_PATH";
pub const ENV_WORK_DIR: &str = "RELAY_WORK_DIR";
pub const ENV_TRANSCODE_TIMEOUT: &str = "RELAY_TRANSCODE_TIMEOUT";
pub const ENV_RECOGNITION_ENDPOINT: &str = "RELAY_RECOGNITION_ENDPOINT";
pub const ENV_RECOGNITION_TIMEOUT: &str = "RELAY_RECOGNITION_TIMEOUT";
pub const ENV_DEFAULT_CLIENT_ID: &str = "RELAY_DEFAULT_CLIENT_ID";
pub const ENV_LOG_LEVEL: &str = "RELAY_LOG_LEVEL";
pub const ENV_LOG_JSON: &str = "RELAY_LOG_JSON";

impl RelayConfig {
    /// Apply overrides from an arbitrary key lookup
    pub fn apply_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = get(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = get(ENV_PORT) {
            self.server.port = parse_var(ENV_PORT, &port)?;
        }
        if let Some(workers) = get(ENV_WORKERS) {
            self.server.workers = Some(parse_var(ENV_WORKERS, &workers)?);
        }
        if let Some(size) = get(ENV_MAX_BODY_SIZE) {
            self.server.max_body_size = parse_var(ENV_MAX_BODY_SIZE, &size)?;
        }

        if let Some(binary) = get(ENV_FFMPEG_PATH) {
            self.transcoder.binary = binary;
        }
        if let Some(dir) = get(ENV_WORK_DIR) {
            self.transcoder.work_dir = dir;
        }
        if let Some(timeout) = get(ENV_TRANSCODE_TIMEOUT) {
            self.transcoder.timeout = parse_var(ENV_TRANSCODE_TIMEOUT, &timeout)?;
        }

        if let Some(endpoint) = get(ENV_RECOGNITION_ENDPOINT) {
            self.recognition.endpoint = endpoint;
        }
        if let Some(timeout) = get(ENV_RECOGNITION_TIMEOUT) {
            self.recognition.timeout = parse_var(ENV_RECOGNITION_TIMEOUT, &timeout)?;
        }
        if let Some(client_id) = get(ENV_DEFAULT_CLIENT_ID) {
            self.recognition.default_client_id = client_id;
        }

        if let Some(level) = get(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        if let Some(json) = get(ENV_LOG_JSON) {
            self.logging.json = parse_bool(ENV_LOG_JSON, &json)?;
        }

        debug!("Applied environment overrides");
        Ok(self)
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| RelayError::config(format!("Invalid {}='{}': {}", key, value, e)))
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(RelayError::config(format!(
            "Invalid {}='{}': expected a boolean",
            key, value
        ))),
    }
}
