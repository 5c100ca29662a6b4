//! Per-stage failure taxonomy of the relay pipeline
//!
//! Every variant carries a fixed numeric code that callers key on. Codes are
//! part of the public contract; 105 and 106 are intentionally out of pipeline
//! order.

use super::recognition::RecognitionError;
use super::transcoder::TranscoderError;
use crate::utils::error::ErrorResponse;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Terminal failure of one relay request
#[derive(Error, Debug)]
pub enum StageError {
    /// Multipart `file` field absent or the body unparsable
    #[error("Failed to get the uploaded file: {0}")]
    MissingFilePart(String),

    /// The uploaded part could not be read
    #[error("Failed to open the uploaded file: {0}")]
    FileOpen(String),

    /// The working file could not be created
    #[error("Failed to create the working file: {0}")]
    TempFileCreate(#[source] std::io::Error),

    /// Copying the upload into the working file failed
    #[error("Failed to copy the upload into the working file: {0}")]
    Copy(#[source] std::io::Error),

    /// The external transcoder failed
    #[error("Failed to transcode the upload: {0}")]
    Transcode(#[from] TranscoderError),

    /// The transcoded PCM could not be read back
    #[error("Failed to read the transcoded audio: {0}")]
    ReadTranscoded(#[source] std::io::Error),

    /// Required `token` field absent
    #[error("Missing required form field `token`")]
    MissingToken,

    /// The recognition service could not be reached
    #[error("Failed to call the recognition service: {0}")]
    RemoteCall(#[from] RecognitionError),
}

impl StageError {
    /// Numeric stage code reported to callers
    pub fn code(&self) -> u16 {
        match self {
            StageError::MissingFilePart(_) => 100,
            StageError::FileOpen(_) => 101,
            StageError::TempFileCreate(_) => 102,
            StageError::Copy(_) => 103,
            StageError::Transcode(_) => 104,
            StageError::ReadTranscoded(_) => 105,
            StageError::MissingToken => 106,
            StageError::RemoteCall(_) => 107,
        }
    }

    /// Machine readable kind
    pub fn kind(&self) -> &'static str {
        match self {
            StageError::MissingFilePart(_) => "MISSING_FILE_PART",
            StageError::FileOpen(_) => "FILE_OPEN_ERROR",
            StageError::TempFileCreate(_) => "TEMP_FILE_CREATE_ERROR",
            StageError::Copy(_) => "COPY_ERROR",
            StageError::Transcode(_) => "TRANSCODE_ERROR",
            StageError::ReadTranscoded(_) => "READ_TRANSCODED_ERROR",
            StageError::MissingToken => "MISSING_TOKEN",
            StageError::RemoteCall(_) => "REMOTE_CALL_ERROR",
        }
    }

    /// Whether the caller's request caused the failure
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    /// Build the JSON error response, tagged with the request id when known
    pub fn to_response(&self, request_id: Option<String>) -> HttpResponse {
        let body = ErrorResponse::new(self.code(), self.kind(), self.to_string())
            .with_request_id(request_id);
        HttpResponse::build(self.status_code()).json(body)
    }
}

impl ResponseError for StageError {
    fn status_code(&self) -> StatusCode {
        match self {
            StageError::MissingFilePart(_) | StageError::FileOpen(_) | StageError::MissingToken => {
                StatusCode::BAD_REQUEST
            }
            StageError::Transcode(_) => StatusCode::UNPROCESSABLE_ENTITY,
            StageError::TempFileCreate(_) | StageError::Copy(_) | StageError::ReadTranscoded(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            StageError::RemoteCall(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            StageError::RemoteCall(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        self.to_response(None)
    }
}
