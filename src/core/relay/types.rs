//! Relay type definitions
//!
//! The inbound form, the outbound recognition payload and the opaque
//! recognition response.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// PCM container format announced to the recognition service
pub const PCM_FORMAT: &str = "pcm";
/// Sample rate the transcoder produces, in Hz
pub const SAMPLE_RATE: u32 = 16_000;
/// Channel count the transcoder produces
pub const CHANNELS: u8 = 1;
/// Bytes per PCM sample (signed 16-bit little endian)
pub const BYTES_PER_SAMPLE: usize = 2;

/// Multipart field names
pub const FILE_FIELD: &str = "file";
pub const TOKEN_FIELD: &str = "token";
pub const DEVICE_PROFILE_ID_FIELD: &str = "device-profile-id";
pub const CLIENT_ID_FIELD: &str = "client-id";
/// Legacy aliases still sent by older clients
pub const LEGACY_DEVICE_PROFILE_ID_FIELD: &str = "devPid";
pub const LEGACY_CLIENT_ID_FIELD: &str = "cuid";

/// The `file` part of an upload
#[derive(Debug, Clone)]
pub struct UploadedAudio {
    /// Filename from the content disposition, informational only
    pub filename: Option<String>,
    /// Raw uploaded bytes
    pub content: Bytes,
}

impl UploadedAudio {
    pub fn new(filename: Option<String>, content: impl Into<Bytes>) -> Self {
        Self {
            filename,
            content: content.into(),
        }
    }
}

/// Everything the caller sent, before any defaulting
#[derive(Debug, Clone, Default)]
pub struct RelayForm {
    pub file: Option<UploadedAudio>,
    pub token: Option<String>,
    pub device_profile_id: Option<String>,
    pub client_id: Option<String>,
}

impl RelayForm {
    pub fn with_file(mut self, file: UploadedAudio) -> Self {
        self.file = Some(file);
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_device_profile_id(mut self, id: impl Into<String>) -> Self {
        self.device_profile_id = Some(id.into());
        self
    }

    pub fn with_client_id(mut self, id: impl Into<String>) -> Self {
        self.client_id = Some(id.into());
        self
    }
}

/// Recognition model selector understood by the remote service
///
/// Anything outside the known set falls back to [`DeviceProfileId::DEFAULT`]
/// without raising an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceProfileId(u32);

impl DeviceProfileId {
    pub const ALLOWED: [u32; 6] = [1536, 1537, 1637, 1737, 1837, 1936];
    pub const DEFAULT: DeviceProfileId = DeviceProfileId(1537);

    /// Accept a known profile id, `None` otherwise
    pub fn new(value: u32) -> Option<Self> {
        Self::ALLOWED.contains(&value).then_some(Self(value))
    }

    /// Resolve a raw form value, substituting the default for anything unusable
    pub fn resolve(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.trim().parse::<u32>().ok())
            .and_then(Self::new)
            .unwrap_or(Self::DEFAULT)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for DeviceProfileId {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// JSON body POSTed to the recognition service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RecognitionRequest {
    pub format: String,
    pub rate: u32,
    pub device_profile_id: DeviceProfileId,
    pub channel: u8,
    pub auth_token: String,
    pub client_id: String,
    /// Byte count of the PCM before base64 encoding
    pub data_length: usize,
    /// Base64 (standard alphabet, padded) of the PCM bytes
    pub speech_data: String,
}

impl RecognitionRequest {
    pub fn new(
        auth_token: impl Into<String>,
        client_id: impl Into<String>,
        device_profile_id: DeviceProfileId,
        pcm: &[u8],
    ) -> Self {
        Self {
            format: PCM_FORMAT.to_string(),
            rate: SAMPLE_RATE,
            device_profile_id,
            channel: CHANNELS,
            auth_token: auth_token.into(),
            client_id: client_id.into(),
            data_length: pcm.len(),
            speech_data: STANDARD.encode(pcm),
        }
    }

    /// Decode `speech-data` back into PCM bytes
    pub fn decode_speech(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.speech_data)
    }

    /// Length of the audio in seconds implied by `data-length`
    pub fn duration_secs(&self) -> f64 {
        let samples = self.data_length / (BYTES_PER_SAMPLE * self.channel.max(1) as usize);
        samples as f64 / self.rate as f64
    }
}

/// Raw answer from the recognition service, never parsed
#[derive(Debug, Clone)]
pub struct RecognitionResponse {
    /// HTTP status the remote service answered with
    pub status: u16,
    /// Body bytes, relayed verbatim
    pub body: Bytes,
}

impl RecognitionResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
