//! Configuration loading tests

use harbormaster::config::{LogFormat, load_config, load_config_from_str};
use harbormaster::error::ConfigError;

const FULL_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 9443

[engine]
timeout_secs = 60
verify_ssl = false

[store]
path = "/var/lib/harbormaster/store.json"

[logging]
level = "debug"
format = "json"
"#;

#[test]
fn test_full_config() {
    let config = load_config_from_str(FULL_CONFIG).unwrap();

    assert_eq!(config.server.bind_address(), "0.0.0.0:9443");
    assert_eq!(config.engine.timeout_secs, 60);
    assert!(!config.engine.verify_ssl);
    assert_eq!(config.store.path, "/var/lib/harbormaster/store.json");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn test_config_defaults() {
    let config = load_config_from_str("[server]\nport = 8080\n").unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.engine.timeout_secs, 30);
    assert!(config.engine.verify_ssl);
    assert_eq!(config.logging.format, LogFormat::Pretty);
}

#[test]
fn test_invalid_log_format() {
    let result = load_config_from_str("[logging]\nformat = \"xml\"\n");
    assert!(matches!(result, Err(ConfigError::Load(_))));
}

#[test]
fn test_zero_port() {
    let result = load_config_from_str("[server]\nport = 0\n");
    assert!(matches!(result, Err(ConfigError::Invalid { .. })));
}

#[test]
#[serial_test::serial]
fn test_file_config() {
    use std::fs;
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let config_path = dir.path().join("harbormaster.toml");
    fs::write(&config_path, FULL_CONFIG).unwrap();

    let config = load_config(Some(config_path.to_str().unwrap())).unwrap();
    assert_eq!(config.server.port, 9443);
    assert_eq!(config.store.path, "/var/lib/harbormaster/store.json");
}

#[test]
#[serial_test::serial]
fn test_env_var_overrides_file() {
    use std::env;
    use std::fs;
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let config_path = dir.path().join("harbormaster.toml");
    fs::write(&config_path, FULL_CONFIG).unwrap();

    unsafe {
        env::set_var("HARBORMASTER_SERVER__PORT", "7000");
        env::set_var("HARBORMASTER_STORE__PATH", "/tmp/other.json");
    }

    let config = load_config(Some(config_path.to_str().unwrap()));

    // Cleanup before asserting so a failure does not leak into other tests
    unsafe {
        env::remove_var("HARBORMASTER_SERVER__PORT");
        env::remove_var("HARBORMASTER_STORE__PATH");
    }

    let config = config.unwrap();
    assert_eq!(config.server.port, 7000);
    assert_eq!(config.store.path, "/tmp/other.json");
    assert_eq!(config.engine.timeout_secs, 60);
}

#[test]
#[serial_test::serial]
fn test_env_var_validation() {
    use std::env;
    use std::fs;
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let config_path = dir.path().join("harbormaster.toml");
    fs::write(&config_path, FULL_CONFIG).unwrap();

    unsafe {
        env::set_var("HARBORMASTER_ENGINE__TIMEOUT_SECS", "0");
    }

    let result = load_config(Some(config_path.to_str().unwrap()));

    unsafe {
        env::remove_var("HARBORMASTER_ENGINE__TIMEOUT_SECS");
    }

    assert!(matches!(result, Err(ConfigError::Invalid { .. })));
}

#[test]
fn test_missing_config_file() {
    let result = load_config(Some("/definitely/not/here.toml"));
    assert!(matches!(result, Err(ConfigError::Load(_))));
}
