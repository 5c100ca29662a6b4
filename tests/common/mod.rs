//! Common test utilities for speech-relay

pub mod fixtures;
pub mod transcoders;

pub use fixtures::{MultipartBody, silent_wav};
pub use transcoders::{CopyTranscoder, FailingTranscoder, SilenceTranscoder};

use actix_web::web;
use speech_relay::config::Config;
use speech_relay::server::AppState;
use speech_relay::{HttpRecognitionClient, RelayService, Transcoder};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Build application state around a transcoder and a recognition endpoint
pub fn relay_state(
    transcoder: Arc<dyn Transcoder>,
    endpoint: &str,
    work_dir: &Path,
) -> web::Data<AppState> {
    let recognizer = HttpRecognitionClient::new(endpoint, Duration::from_secs(5)).unwrap();
    let relay = RelayService::new(transcoder, Arc::new(recognizer), work_dir);
    web::Data::new(AppState::new(Config::default(), relay))
}

/// Entries left in a directory
pub fn leftover_files(dir: &Path) -> Vec<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

/// Skip test if a binary cannot be started
#[macro_export]
macro_rules! skip_without_binary {
    ($binary:expr) => {
        if std::process::Command::new($binary)
            .arg("-version")
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .status()
            .is_err()
        {
            eprintln!("Skipping test: {} is not available", $binary);
            return;
        }
    };
}
