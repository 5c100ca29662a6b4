//! JSON error body returned to HTTP callers

use serde::Serialize;

/// Standard error response format
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// Numeric stage code
    pub code: u16,
    /// Machine readable error kind
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub timestamp: i64,
    pub request_id: Option<String>,
}

impl ErrorResponse {
    pub fn new(code: u16, kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code,
                kind: kind.into(),
                message: message.into(),
                timestamp: chrono::Utc::now().timestamp(),
                request_id: None,
            },
        }
    }

    /// Attach the request id stamped by the request-id middleware
    pub fn with_request_id(mut self, request_id: Option<String>) -> Self {
        self.error.request_id = request_id;
        self
    }
}
