//! Configuration loader with layered sources
//!
//! Loads configuration from multiple sources with the following precedence
//! (highest to lowest):
//! 1. Environment variables (HARBORMASTER_*)
//! 2. Configuration file (TOML)
//! 3. Default values

use crate::config::types::AppConfig;
use crate::error::ConfigError;
use config::{Config, Environment, File, FileFormat};
use std::path::Path;

/// Default configuration file paths to check (in order)
const DEFAULT_CONFIG_PATHS: &[&str] = &[
    "harbormaster.toml",
    ".harbormaster.toml",
    "~/.config/harbormaster/config.toml",
    "/etc/harbormaster/config.toml",
];

/// Load configuration from a TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from_str(toml_str, FileFormat::Toml))
        .build()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Load configuration from files and environment
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    if let Some(path) = config_path {
        // Explicit path provided - must exist
        let expanded = shellexpand::tilde(path);
        if !Path::new(expanded.as_ref()).exists() {
            return Err(ConfigError::Load(format!(
                "Configuration file not found: {}",
                path
            )));
        }
        builder = builder.add_source(File::new(&expanded, FileFormat::Toml));
    } else {
        // Try default paths (first existing one wins)
        for path in DEFAULT_CONFIG_PATHS {
            let expanded = shellexpand::tilde(path);
            if Path::new(expanded.as_ref()).exists() {
                builder = builder.add_source(File::new(&expanded, FileFormat::Toml));
                break;
            }
        }
    }

    // e.g., HARBORMASTER_SERVER__PORT, HARBORMASTER_STORE__PATH
    builder = builder.add_source(
        Environment::with_prefix("HARBORMASTER")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder
        .build()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Validate configuration values
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.store.path.trim().is_empty() {
        return Err(ConfigError::Missing {
            field: "store.path".to_string(),
        });
    }

    if config.engine.timeout_secs == 0 {
        return Err(ConfigError::Invalid {
            message: "engine.timeout_secs must be greater than 0".to_string(),
        });
    }

    if config.server.port == 0 {
        return Err(ConfigError::Invalid {
            message: "server.port must be greater than 0".to_string(),
        });
    }

    if config.server.host.is_empty() {
        return Err(ConfigError::Missing {
            field: "server.host".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogFormat;

    #[test]
    fn test_load_config_from_str_basic() {
        let toml = r#"
[server]
host = "0.0.0.0"
port = 9443

[engine]
timeout_secs = 10
verify_ssl = false

[store]
path = "/data/store.json"
"#;

        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9443);
        assert_eq!(config.engine.timeout_secs, 10);
        assert!(!config.engine.verify_ssl);
        assert_eq!(config.store.path, "/data/store.json");
    }

    #[test]
    fn test_load_config_from_str_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_logging_section() {
        let toml = r#"
[logging]
level = "debug"
format = "json"
"#;

        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let toml = r#"
[engine]
timeout_secs = 0
"#;

        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_empty_store_path_rejected() {
        let toml = r#"
[store]
path = ""
"#;

        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::Missing { field } if field == "store.path"));
    }

    #[test]
    fn test_invalid_toml() {
        let err = load_config_from_str("[server\nport = ").unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = load_config(Some("/nonexistent/harbormaster.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Load(msg) if msg.contains("not found")));
    }
}
