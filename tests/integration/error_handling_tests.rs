//! Error handling integration tests
//!
//! Stage codes and HTTP statuses are part of the public contract.

#[cfg(test)]
mod tests {
    use actix_web::ResponseError;
    use speech_relay::core::relay::{RecognitionError, StageError, TranscoderError};
    use speech_relay::utils::error::RelayError;
    use std::time::Duration;

    fn io_error() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only file system")
    }

    #[test]
    fn test_stage_codes_and_statuses() {
        let cases: Vec<(StageError, u16, u16)> = vec![
            (StageError::MissingFilePart("absent".into()), 100, 400),
            (StageError::FileOpen("truncated".into()), 101, 400),
            (StageError::TempFileCreate(io_error()), 102, 500),
            (StageError::Copy(io_error()), 103, 500),
            (
                StageError::Transcode(TranscoderError::TimedOut {
                    binary: "ffmpeg".into(),
                    timeout: Duration::from_secs(60),
                }),
                104,
                422,
            ),
            (StageError::ReadTranscoded(io_error()), 105, 500),
            (StageError::MissingToken, 106, 400),
            (
                StageError::RemoteCall(RecognitionError::Timeout(Duration::from_secs(30))),
                107,
                504,
            ),
        ];

        for (error, code, status) in cases {
            assert_eq!(error.code(), code, "{}", error);
            assert_eq!(error.status_code().as_u16(), status, "{}", error);
        }
    }

    #[actix_web::test]
    async fn test_error_body_shape() {
        let response = StageError::MissingToken.to_response(Some("req-9".to_string()));
        assert_eq!(response.status().as_u16(), 400);

        let bytes = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["error"]["code"], 106);
        assert_eq!(body["error"]["type"], "MISSING_TOKEN");
        assert_eq!(body["error"]["request_id"], "req-9");
        assert!(body["error"]["message"].as_str().unwrap().contains("token"));
    }

    #[test]
    fn test_transcoder_error_converts_to_stage() {
        let error: StageError = TranscoderError::Spawn {
            binary: "ffmpeg".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        }
        .into();

        assert_eq!(error.code(), 104);
        assert!(error.is_client_error());
        assert!(error.to_string().contains("ffmpeg"));
    }

    #[test]
    fn test_relay_error_classification() {
        assert!(RelayError::config("bad port").is_config());
        assert!(!RelayError::server("bind failed").is_config());
    }
}
