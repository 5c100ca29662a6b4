//! Configuration loading integration tests

#[cfg(test)]
mod tests {
    use speech_relay::config::Config;
    use speech_relay::config::loader::{ENV_PORT, ENV_RECOGNITION_ENDPOINT};
    use speech_relay::server::AppState;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FULL_CONFIG: &str = r#"
server:
  host: "127.0.0.1"
  port: 8093
  workers: 4
  timeout: 60
  max_body_size: 1048576

transcoder:
  binary: "ffmpeg"
  work_dir: "/var/tmp/relay"
  timeout: 20

recognition:
  endpoint: "http://127.0.0.1:8081/server_api"
  timeout: 10
  default_client_id: "kiosk"

logging:
  level: "debug"
  json: true
"#;

    #[tokio::test]
    async fn test_full_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(FULL_CONFIG.as_bytes()).unwrap();

        let config = Config::from_file(file.path()).await.unwrap();

        assert_eq!(config.server().address(), "127.0.0.1:8093");
        assert_eq!(config.server().worker_count(), 4);
        assert_eq!(config.server().max_body_size, 1_048_576);
        assert_eq!(config.transcoder().work_dir, "/var/tmp/relay");
        assert_eq!(config.recognition().timeout, 10);
        assert_eq!(config.recognition().default_client_id, "kiosk");
        assert_eq!(config.logging().level, "debug");
        assert!(config.logging().json);
    }

    #[tokio::test]
    async fn test_state_built_from_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(FULL_CONFIG.as_bytes()).unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        let state = AppState::from_config(config).unwrap();

        assert_eq!(state.max_upload_size(), 1_048_576);
        assert_eq!(state.relay.default_client_id(), "kiosk");
        assert_eq!(state.relay.work_dir().to_str(), Some("/var/tmp/relay"));
    }

    #[tokio::test]
    async fn test_unknown_sections_are_ignored() {
        let config = Config::from_yaml_str("metrics:\n  enabled: true\nserver:\n  port: 9100\n")
            .unwrap();
        assert_eq!(config.server().port, 9100);
    }

    #[test]
    fn test_env_override_wins_over_file() {
        let config = Config::from_yaml_str("server:\n  port: 8093\n").unwrap();
        let relay = config
            .relay
            .apply_overrides_from(|key| match key {
                k if k == ENV_PORT => Some("9200".to_string()),
                k if k == ENV_RECOGNITION_ENDPOINT => {
                    Some("https://asr.internal/server_api".to_string())
                }
                _ => None,
            })
            .unwrap();

        assert_eq!(relay.server.port, 9200);
        assert_eq!(relay.recognition.endpoint, "https://asr.internal/server_api");
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let config =
            Config::from_yaml_str("recognition:\n  endpoint: \"vop.baidu.com\"\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.is_config());
    }
}
