//! External transcoder configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// How the relay invokes ffmpeg and where it keeps request-scoped files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscoderConfig {
    /// Path or name of the ffmpeg binary
    #[serde(default = "default_ffmpeg_binary")]
    pub binary: String,
    /// Directory holding the working and transcoded files
    #[serde(default = "default_work_dir")]
    pub work_dir: String,
    /// Seconds before a running transcode is killed
    #[serde(default = "default_transcode_timeout")]
    pub timeout: u64,
}

impl Default for TranscoderConfig {
    fn default() -> Self {
        Self {
            binary: default_ffmpeg_binary(),
            work_dir: default_work_dir(),
            timeout: default_transcode_timeout(),
        }
    }
}

impl TranscoderConfig {
    pub fn merge(mut self, other: Self) -> Self {
        if other.binary != default_ffmpeg_binary() {
            self.binary = other.binary;
        }
        if other.work_dir != default_work_dir() {
            self.work_dir = other.work_dir;
        }
        if other.timeout != default_transcode_timeout() {
            self.timeout = other.timeout;
        }
        self
    }

    pub fn work_dir_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir)
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.binary.trim().is_empty() {
            return Err("Transcoder binary cannot be empty".to_string());
        }

        if self.work_dir.trim().is_empty() {
            return Err("Transcoder work_dir cannot be empty".to_string());
        }

        if self.timeout == 0 {
            return Err("Transcoder timeout cannot be 0".to_string());
        }

        Ok(())
    }
}
