//! Remote speech-recognition client
//!
//! The response is never interpreted: any completed HTTP exchange, whatever
//! its status, is a success whose body gets relayed.

use super::types::{RecognitionRequest, RecognitionResponse};
use crate::config::RecognitionConfig;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("speech-relay/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum RecognitionError {
    /// No response within the configured timeout
    #[error("recognition service did not answer within {0:?}")]
    Timeout(Duration),

    /// Connection, TLS or body transfer failure
    #[error("recognition request failed: {0}")]
    Transport(#[source] reqwest::Error),
}

impl RecognitionError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, RecognitionError::Timeout(_))
    }
}

/// Sends a recognition payload and returns the raw answer
#[async_trait]
pub trait RecognitionClient: Send + Sync {
    async fn recognize(
        &self,
        request: &RecognitionRequest,
    ) -> Result<RecognitionResponse, RecognitionError>;
}

/// [`RecognitionClient`] posting JSON over HTTP
#[derive(Debug, Clone)]
pub struct HttpRecognitionClient {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpRecognitionClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        })
    }

    pub fn from_config(config: &RecognitionConfig) -> Result<Self, reqwest::Error> {
        Self::new(&config.endpoint, config.timeout_duration())
    }

    fn map_error(&self, error: reqwest::Error) -> RecognitionError {
        if error.is_timeout() {
            RecognitionError::Timeout(self.timeout)
        } else {
            RecognitionError::Transport(error)
        }
    }
}

#[async_trait]
impl RecognitionClient for HttpRecognitionClient {
    async fn recognize(
        &self,
        request: &RecognitionRequest,
    ) -> Result<RecognitionResponse, RecognitionError> {
        debug!(
            endpoint = %self.endpoint,
            data_length = request.data_length,
            device_profile_id = request.device_profile_id.value(),
            "Calling recognition service"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| self.map_error(e))?;

        let response = RecognitionResponse::new(status, body);
        if !response.is_success() {
            warn!(status, "Recognition service answered with a non-success status, relaying body");
        }

        Ok(response)
    }
}
