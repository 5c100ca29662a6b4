//! External transcoder invocation
//!
//! ffmpeg is treated as a black box: any failure to start, a non-zero exit or
//! running past the deadline is a [`TranscoderError`].

use super::types::{CHANNELS, SAMPLE_RATE};
use crate::config::TranscoderConfig;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, warn};

/// Longest stderr excerpt kept on a failed run
const STDERR_EXCERPT_LEN: usize = 512;

#[derive(Error, Debug)]
pub enum TranscoderError {
    /// The binary could not be started
    #[error("could not start {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    /// The process exited unsuccessfully
    #[error("{binary} exited with {status}")]
    Failed {
        binary: String,
        status: String,
        stderr: String,
    },

    /// The process ran past the deadline and was killed
    #[error("{binary} timed out after {timeout:?}")]
    TimedOut { binary: String, timeout: Duration },
}

/// Converts an input media file into raw 16 kHz mono s16le PCM
#[async_trait]
pub trait Transcoder: Send + Sync {
    async fn transcode(&self, input: &Path, output: &Path) -> Result<(), TranscoderError>;
}

/// [`Transcoder`] backed by an ffmpeg subprocess
#[derive(Debug, Clone)]
pub struct FfmpegTranscoder {
    binary: PathBuf,
    timeout: Duration,
}

impl FfmpegTranscoder {
    pub fn new(binary: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            timeout,
        }
    }

    pub fn from_config(config: &TranscoderConfig) -> Self {
        Self::new(&config.binary, config.timeout_duration())
    }

    /// Fixed argument template: overwrite, s16le codec and container, mono, 16 kHz
    pub fn arguments(input: &Path, output: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::with_capacity(12);
        args.push("-y".into());
        args.push("-i".into());
        args.push(input.into());
        args.push("-acodec".into());
        args.push("pcm_s16le".into());
        args.push("-f".into());
        args.push("s16le".into());
        args.push("-ac".into());
        args.push(CHANNELS.to_string().into());
        args.push("-ar".into());
        args.push(SAMPLE_RATE.to_string().into());
        args.push(output.into());
        args
    }

    fn binary_name(&self) -> String {
        self.binary.display().to_string()
    }
}

#[async_trait]
impl Transcoder for FfmpegTranscoder {
    async fn transcode(&self, input: &Path, output: &Path) -> Result<(), TranscoderError> {
        let binary = self.binary_name();
        debug!(binary = %binary, input = ?input, output = ?output, "Starting transcoder");

        let mut command = Command::new(&self.binary);
        command
            .args(Self::arguments(input, output))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let result = tokio::time::timeout(self.timeout, command.output()).await;

        let output = match result {
            Ok(Ok(output)) => output,
            Ok(Err(source)) => return Err(TranscoderError::Spawn { binary, source }),
            Err(_) => {
                warn!(binary = %binary, timeout = ?self.timeout, "Transcoder timed out, killed");
                return Err(TranscoderError::TimedOut {
                    binary,
                    timeout: self.timeout,
                });
            }
        };

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            debug!(binary = %binary, stderr = %stderr, "Transcoder failed");
            return Err(TranscoderError::Failed {
                binary,
                status: output.status.to_string(),
                stderr: tail(&stderr, STDERR_EXCERPT_LEN),
            });
        }

        debug!(binary = %binary, "Transcoder finished");
        Ok(())
    }
}

/// Last `max` bytes of `text`, cut on a char boundary
fn tail(text: &str, max: usize) -> String {
    let text = text.trim_end();
    if text.len() <= max {
        return text.to_string();
    }

    let mut start = text.len() - max;
    while !text.is_char_boundary(start) {
        start += 1;
    }
    text[start..].to_string()
}
