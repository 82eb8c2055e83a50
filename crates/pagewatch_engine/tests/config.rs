use std::io::Write;
use std::time::Duration;

use pagewatch_engine::{Config, ConfigError};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn valid_config_loads() {
    let file = write_config(
        r#"{
            "sleep": 300,
            "webhooks": [
                {
                    "webhook": "https://discord.com/api/webhooks/1/token",
                    "urls": ["https://example.com/a", "https://example.com/b"]
                }
            ]
        }"#,
    );

    let config = Config::load(file.path()).expect("config loads");
    assert_eq!(config.sleep, 300);
    assert_eq!(config.poll_interval(), Duration::from_secs(300));
    assert_eq!(config.webhooks.len(), 1);
    assert_eq!(config.webhooks[0].urls.len(), 2);
}

#[test]
fn missing_file_is_fatal() {
    let err = Config::load(std::path::Path::new("/nonexistent/config.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn malformed_json_is_fatal() {
    let file = write_config("{ not json");
    let err = Config::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn missing_field_is_fatal() {
    let file = write_config(r#"{ "webhooks": [] }"#);
    let err = Config::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn invalid_watched_url_is_fatal() {
    let file = write_config(
        r#"{
            "sleep": 60,
            "webhooks": [
                { "webhook": "https://discord.com/api/webhooks/1/token", "urls": ["not a url"] }
            ]
        }"#,
    );

    let err = Config::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidUrl { .. }));
}

#[test]
fn empty_channel_list_is_allowed() {
    let file = write_config(r#"{ "sleep": 60, "webhooks": [] }"#);
    let config = Config::load(file.path()).expect("config loads");
    assert!(config.webhooks.is_empty());
}
