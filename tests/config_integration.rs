//! Integration tests for the taskpro-config crate.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use taskpro_config::persistence::find_config_file_in;
use taskpro_config::{ApiConfig, Config, ConfigError, LoggingConfig};

#[test]
fn config_load_from_json5_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("taskpro.json5");

    fs::write(
        &config_path,
        r#"
        {
            // Backend running on the NAS
            api: {
                base_url: "http://192.168.1.20:8000/api",
            },
            logging: { level: "debug" },
        }
        "#,
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();

    assert_eq!(config.api.base_url, "http://192.168.1.20:8000/api");
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.file.is_none());
}

#[test]
fn config_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json");

    let original = Config {
        api: ApiConfig::with_base_url("https://tasks.example.com/api"),
        logging: LoggingConfig {
            level: "warn".to_string(),
            file: Some(PathBuf::from("/var/log/taskpro.log")),
        },
    };

    original.save_to(&config_path).unwrap();

    // Written back as plain JSON.
    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&config_path).unwrap()).unwrap();
    assert_eq!(raw["api"]["base_url"], "https://tasks.example.com/api");

    let loaded = Config::load_from(&config_path).unwrap();
    assert_eq!(original, loaded);
}

#[test]
fn config_load_nonexistent_fails() {
    let result = Config::load_from("/nonexistent/path/config.json");
    assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
}

#[test]
fn config_rejects_non_http_url() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("taskpro.json");
    fs::write(&config_path, r#"{"api": {"base_url": "localhost:8000/api"}}"#).unwrap();

    assert!(matches!(
        Config::load_from(&config_path),
        Err(ConfigError::InvalidBaseUrl { .. })
    ));
}

#[test]
fn config_rejects_malformed_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("taskpro.json5");
    fs::write(&config_path, "{ api: ").unwrap();

    assert!(matches!(
        Config::load_from(&config_path),
        Err(ConfigError::ParseJson5(_))
    ));
}

#[test]
fn local_file_wins_over_user_file() {
    let local = TempDir::new().unwrap();
    let user = TempDir::new().unwrap();
    fs::create_dir(user.path().join("taskpro")).unwrap();
    fs::write(user.path().join("taskpro").join("config.json"), "{}").unwrap();

    assert_eq!(
        find_config_file_in(local.path(), Some(user.path())),
        Some(user.path().join("taskpro").join("config.json"))
    );

    fs::write(local.path().join("taskpro.json"), "{}").unwrap();
    assert_eq!(
        find_config_file_in(local.path(), Some(user.path())),
        Some(local.path().join("taskpro.json"))
    );

    fs::write(local.path().join("taskpro.json5"), "{}").unwrap();
    assert_eq!(
        find_config_file_in(local.path(), Some(user.path())),
        Some(local.path().join("taskpro.json5"))
    );
}

#[test]
fn no_config_file_found() {
    let local = TempDir::new().unwrap();
    assert_eq!(find_config_file_in(local.path(), None), None);
}

#[test]
fn environment_overrides_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("taskpro.json5");
    fs::write(&config_path, r#"{ api: { base_url: "http://from-file/api" } }"#).unwrap();

    let mut config = Config::load_from(&config_path).unwrap();
    config.apply_env_with(|key| match key {
        "TASKPRO_API_URL" => Some("http://from-env:9000/api".to_string()),
        _ => None,
    });

    assert_eq!(config.api.base_url, "http://from-env:9000/api");
    assert!(config.validate().is_ok());
}
