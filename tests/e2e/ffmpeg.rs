//! E2E tests running the real transcoder
//!
//! Skipped when `ffmpeg` is not on `PATH`.

#[cfg(test)]
mod tests {
    use crate::common::{MultipartBody, leftover_files, relay_state, silent_wav};
    use crate::skip_without_binary;
    use actix_web::test;
    use serde_json::Value;
    use speech_relay::server::HttpServer;
    use speech_relay::{FfmpegTranscoder, Transcoder};
    use std::sync::Arc;
    use std::time::Duration;
    use tempfile::TempDir;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn ffmpeg() -> FfmpegTranscoder {
        FfmpegTranscoder::new("ffmpeg", Duration::from_secs(30))
    }

    #[tokio::test]
    async fn test_wav_resampled_to_16k_mono() {
        skip_without_binary!("ffmpeg");

        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.wav");
        let output = dir.path().join("out.pcm");
        // 1 s at 8 kHz becomes 16000 samples of 2 bytes
        tokio::fs::write(&input, silent_wav(8_000, 1)).await.unwrap();

        ffmpeg().transcode(&input, &output).await.unwrap();

        let pcm = tokio::fs::read(&output).await.unwrap();
        assert_eq!(pcm.len(), 32_000);
        assert!(pcm.iter().all(|b| *b == 0));
    }

    #[tokio::test]
    async fn test_garbage_input_fails() {
        skip_without_binary!("ffmpeg");

        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.bin");
        let output = dir.path().join("out.pcm");
        tokio::fs::write(&input, b"this is not audio at all").await.unwrap();

        let result = ffmpeg().transcode(&input, &output).await;
        assert!(result.is_err());
    }

    #[actix_web::test]
    async fn test_relay_with_real_ffmpeg() {
        skip_without_binary!("ffmpeg");

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"err_no":0}"#))
            .expect(1)
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let state = relay_state(Arc::new(ffmpeg()), &server.uri(), dir.path());
        let app = test::init_service(HttpServer::create_app(state)).await;

        let (content_type, payload) = MultipartBody::new()
            .file("file", "speech.wav", &silent_wav(16_000, 1))
            .text("token", "tok")
            .build();
        let req = test::TestRequest::post()
            .uri("/v1/baidu/audio")
            .insert_header(("content-type", content_type))
            .set_payload(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let requests = server.received_requests().await.unwrap();
        let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(sent["data-length"], 32_000);
        assert!(leftover_files(dir.path()).is_empty());
    }
}
