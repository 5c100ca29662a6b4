//! Test fixtures
//!
//! Request bodies are built by hand so the tests control every byte.

use uuid::Uuid;

/// Builder for `multipart/form-data` request bodies
pub struct MultipartBody {
    boundary: String,
    body: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self {
            boundary: format!("relay-test-{}", Uuid::new_v4().simple()),
            body: Vec::new(),
        }
    }

    /// Add a text field
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.open_part(&format!("form-data; name=\"{}\"", name), None);
        self.body.extend_from_slice(value.as_bytes());
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// Add a file field
    pub fn file(mut self, name: &str, filename: &str, content: &[u8]) -> Self {
        self.open_part(
            &format!("form-data; name=\"{}\"; filename=\"{}\"", name, filename),
            Some("application/octet-stream"),
        );
        self.body.extend_from_slice(content);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// Value for the `Content-Type` header
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Finish the body
    pub fn build(mut self) -> (String, Vec<u8>) {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        (self.content_type(), self.body)
    }

    fn open_part(&mut self, disposition: &str, content_type: Option<&str>) {
        self.body
            .extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());
        self.body
            .extend_from_slice(format!("Content-Disposition: {}\r\n", disposition).as_bytes());
        if let Some(content_type) = content_type {
            self.body
                .extend_from_slice(format!("Content-Type: {}\r\n", content_type).as_bytes());
        }
        self.body.extend_from_slice(b"\r\n");
    }
}

impl Default for MultipartBody {
    fn default() -> Self {
        Self::new()
    }
}

/// A mono 16-bit PCM WAV file of silence
pub fn silent_wav(sample_rate: u32, seconds: u32) -> Vec<u8> {
    let data_len = sample_rate * seconds * 2;
    let mut wav = Vec::with_capacity(44 + data_len as usize);

    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_len).to_le_bytes());
    wav.extend_from_slice(b"WAVE");

    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // mono
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&(sample_rate * 2).to_le_bytes());
    wav.extend_from_slice(&2u16.to_le_bytes());
    wav.extend_from_slice(&16u16.to_le_bytes());

    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());
    wav.resize(44 + data_len as usize, 0);
    wav
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_wav_layout() {
        let wav = silent_wav(8000, 1);
        assert_eq!(wav.len(), 44 + 16000);
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
    }

    #[test]
    fn test_multipart_body_framing() {
        let (content_type, body) = MultipartBody::new().text("token", "abc").build();
        let boundary = content_type.split("boundary=").nth(1).unwrap();
        let text = String::from_utf8(body).unwrap();

        assert!(text.starts_with(&format!("--{}\r\n", boundary)));
        assert!(text.contains("name=\"token\"\r\n\r\nabc\r\n"));
        assert!(text.ends_with(&format!("--{}--\r\n", boundary)));
    }
}
