//! Stub transcoders standing in for ffmpeg

use async_trait::async_trait;
use speech_relay::{Transcoder, core::relay::TranscoderError};
use std::path::Path;

/// Writes the upload unchanged as the "PCM" output
pub struct CopyTranscoder;

#[async_trait]
impl Transcoder for CopyTranscoder {
    async fn transcode(&self, input: &Path, output: &Path) -> Result<(), TranscoderError> {
        tokio::fs::copy(input, output)
            .await
            .map_err(|source| TranscoderError::Spawn {
                binary: "copy".to_string(),
                source,
            })?;
        Ok(())
    }
}

/// Writes a fixed number of zero bytes regardless of the input
pub struct SilenceTranscoder {
    pub bytes: usize,
}

impl SilenceTranscoder {
    /// One second of 16 kHz mono 16-bit silence
    pub fn one_second() -> Self {
        Self { bytes: 32_000 }
    }
}

#[async_trait]
impl Transcoder for SilenceTranscoder {
    async fn transcode(&self, _input: &Path, output: &Path) -> Result<(), TranscoderError> {
        tokio::fs::write(output, vec![0u8; self.bytes])
            .await
            .map_err(|source| TranscoderError::Spawn {
                binary: "silence".to_string(),
                source,
            })
    }
}

/// Always exits unsuccessfully, leaving a partial output behind
pub struct FailingTranscoder;

#[async_trait]
impl Transcoder for FailingTranscoder {
    async fn transcode(&self, _input: &Path, output: &Path) -> Result<(), TranscoderError> {
        let _ = tokio::fs::write(output, b"partial").await;
        Err(TranscoderError::Failed {
            binary: "stub".to_string(),
            status: "exit status: 1".to_string(),
            stderr: "Invalid data found when processing input".to_string(),
        })
    }
}
