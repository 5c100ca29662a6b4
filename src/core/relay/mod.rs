//! Upload → transcode → relay pipeline
//!
//! [`RelayService::relay`] runs the five stages of one request strictly in
//! order: file intake, working-file persistence, transcoding, payload
//! assembly with the remote call, and cleanup. The first failing stage ends
//! the request with its [`StageError`]; temporary files are removed on every
//! path by [`WorkingFiles::cleanup`].

mod errors;
mod recognition;
mod transcoder;
mod types;
mod working_file;

pub use errors::StageError;
pub use recognition::{HttpRecognitionClient, RecognitionClient, RecognitionError};
pub use transcoder::{FfmpegTranscoder, Transcoder, TranscoderError};
pub use types::{
    BYTES_PER_SAMPLE, CHANNELS, CLIENT_ID_FIELD, DEVICE_PROFILE_ID_FIELD, DeviceProfileId,
    FILE_FIELD, LEGACY_CLIENT_ID_FIELD, LEGACY_DEVICE_PROFILE_ID_FIELD, PCM_FORMAT,
    RecognitionRequest, RecognitionResponse, RelayForm, SAMPLE_RATE, TOKEN_FIELD, UploadedAudio,
};
pub use working_file::{TRANSCODED_SUFFIX, WorkingFiles};

use crate::config::{Config, default_client_id};
use crate::utils::error::Result;
use crate::utils::format_bytes;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Runs the relay pipeline for one request at a time; shared across workers
pub struct RelayService {
    transcoder: Arc<dyn Transcoder>,
    recognizer: Arc<dyn RecognitionClient>,
    work_dir: PathBuf,
    default_client_id: String,
}

impl RelayService {
    pub fn new(
        transcoder: Arc<dyn Transcoder>,
        recognizer: Arc<dyn RecognitionClient>,
        work_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            transcoder,
            recognizer,
            work_dir: work_dir.into(),
            default_client_id: default_client_id(),
        }
    }

    /// Wire the ffmpeg transcoder and HTTP recognition client from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let transcoder = FfmpegTranscoder::from_config(config.transcoder());
        let recognizer = HttpRecognitionClient::from_config(config.recognition())?;

        Ok(Self::new(
            Arc::new(transcoder),
            Arc::new(recognizer),
            config.transcoder().work_dir_path(),
        )
        .with_default_client_id(config.recognition().default_client_id.clone()))
    }

    pub fn with_default_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.default_client_id = client_id.into();
        self
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn default_client_id(&self) -> &str {
        &self.default_client_id
    }

    /// Client id sent downstream: the caller's, unless absent or empty
    pub fn resolve_client_id(&self, client_id: Option<String>) -> String {
        client_id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| self.default_client_id.clone())
    }

    /// Run the whole pipeline for one upload
    pub async fn relay(
        &self,
        form: RelayForm,
    ) -> std::result::Result<RecognitionResponse, StageError> {
        let RelayForm {
            file,
            token,
            device_profile_id,
            client_id,
        } = form;

        // Stage A: intake
        let upload = file.ok_or_else(|| {
            StageError::MissingFilePart(format!("multipart field `{}` is required", FILE_FIELD))
        })?;

        // Stage B: persist
        let files = WorkingFiles::allocate(&self.work_dir);
        info!(
            identity = %files.identity(),
            filename = upload.filename.as_deref().unwrap_or("-"),
            size = %format_bytes(upload.content.len() as u64),
            "Relaying upload"
        );

        let outcome = self
            .run_stages(&files, upload, token, device_profile_id, client_id)
            .await;

        // Stage E: cleanup, on success and failure alike
        files.cleanup().await;
        outcome
    }

    async fn run_stages(
        &self,
        files: &WorkingFiles,
        upload: UploadedAudio,
        token: Option<String>,
        device_profile_id: Option<String>,
        client_id: Option<String>,
    ) -> std::result::Result<RecognitionResponse, StageError> {
        files.persist(&upload).await?;
        drop(upload);

        // Stage C: transcode
        self.transcoder
            .transcode(files.source_path(), files.transcoded_path())
            .await
            .inspect_err(|e| {
                warn!(identity = %files.identity(), error = %e, "Transcoding failed");
            })?;

        // Stage D: assemble and call
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or(StageError::MissingToken)?;
        let client_id = self.resolve_client_id(client_id);
        let profile = DeviceProfileId::resolve(device_profile_id.as_deref());

        let pcm = files.read_transcoded().await?;
        let request = RecognitionRequest::new(token, client_id, profile, &pcm);
        drop(pcm);
        debug!(
            identity = %files.identity(),
            data_length = request.data_length,
            duration_secs = request.duration_secs(),
            device_profile_id = profile.value(),
            "Recognition payload assembled"
        );

        let response = self
            .recognizer
            .recognize(&request)
            .await
            .inspect_err(|e| {
                warn!(identity = %files.identity(), error = %e, "Recognition call failed");
            })?;

        info!(
            identity = %files.identity(),
            status = response.status,
            bytes = response.body.len(),
            "Recognition response received"
        );
        Ok(response)
    }
}
