//! Request-scoped temporary files
//!
//! [`WorkingFiles`] owns the upload copy and the transcoded PCM for one
//! request. [`WorkingFiles::cleanup`] removes both once the request has ended,
//! whichever stage it ended in; `Drop` covers requests whose future was
//! cancelled before reaching it.

use super::errors::StageError;
use super::types::UploadedAudio;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};
use uuid::Uuid;

/// Suffix appended to the working file identity for the PCM output
pub const TRANSCODED_SUFFIX: &str = ".pcm";

#[derive(Debug)]
pub struct WorkingFiles {
    identity: Uuid,
    source: PathBuf,
    transcoded: PathBuf,
    removed: bool,
}

impl WorkingFiles {
    /// Reserve a fresh identity under `work_dir`; nothing is created yet
    pub fn allocate(work_dir: &Path) -> Self {
        let identity = Uuid::new_v4();
        let name = identity.to_string();

        Self {
            identity,
            source: work_dir.join(&name),
            transcoded: work_dir.join(format!("{}{}", name, TRANSCODED_SUFFIX)),
            removed: false,
        }
    }

    pub fn identity(&self) -> Uuid {
        self.identity
    }

    /// Path holding the raw upload
    pub fn source_path(&self) -> &Path {
        &self.source
    }

    /// Path the transcoder writes PCM to
    pub fn transcoded_path(&self) -> &Path {
        &self.transcoded
    }

    /// Create the working file and copy the upload into it
    ///
    /// The file handle is closed before this returns, on success and on error.
    pub async fn persist(&self, upload: &UploadedAudio) -> Result<u64, StageError> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.source)
            .await
            .map_err(StageError::TempFileCreate)?;

        let mut reader: &[u8] = &upload.content;
        let copied = tokio::io::copy(&mut reader, &mut file)
            .await
            .map_err(StageError::Copy)?;
        file.flush().await.map_err(StageError::Copy)?;

        debug!(identity = %self.identity, bytes = copied, "Upload persisted");
        Ok(copied)
    }

    /// Read the transcoder output into memory
    pub async fn read_transcoded(&self) -> Result<Vec<u8>, StageError> {
        tokio::fs::read(&self.transcoded)
            .await
            .map_err(StageError::ReadTranscoded)
    }

    /// Remove both files; missing files are not an error
    pub async fn cleanup(mut self) {
        for path in [&self.source, &self.transcoded] {
            log_removal(path, tokio::fs::remove_file(path).await);
        }
        self.removed = true;
    }
}

impl Drop for WorkingFiles {
    fn drop(&mut self) {
        if self.removed {
            return;
        }
        // No runtime to await on here; cancelled requests only
        for path in [&self.source, &self.transcoded] {
            log_removal(path, std::fs::remove_file(path));
        }
    }
}

fn log_removal(path: &Path, result: std::io::Result<()>) {
    match result {
        Ok(()) => debug!(path = ?path, "Removed working file"),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => warn!(path = ?path, error = %e, "Failed to remove working file"),
    }
}
