//! Configuration types for harbormaster
//!
//! This module defines the configuration structure that can be loaded from
//! TOML files and/or environment variables.

use serde::Deserialize;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Proxy listener settings
    pub server: ServerConfig,

    /// Upstream engine connection settings
    pub engine: EngineConfig,

    /// Persistence settings
    pub store: StoreConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Proxy listener configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,

    /// Bind port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 9000,
        }
    }
}

impl ServerConfig {
    /// Address the proxy listens on
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Engine connection configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Whether to verify TLS certificates of engines
    pub verify_ssl: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            verify_ssl: true,
        }
    }
}

/// Store configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// JSON snapshot file, `~` is expanded
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: "~/.local/share/harbormaster/store.json".to_string(),
        }
    }
}

impl StoreConfig {
    /// Store path with `~` expanded
    pub fn expanded_path(&self) -> String {
        shellexpand::tilde(&self.path).into_owned()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Output format (pretty, json)
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output
    #[default]
    Pretty,
    /// JSON structured output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_address(), "127.0.0.1:9000");
        assert_eq!(config.engine.timeout_secs, 30);
        assert!(config.engine.verify_ssl);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_store_path_expansion() {
        let config = StoreConfig {
            path: "/var/lib/harbormaster/store.json".to_string(),
        };
        assert_eq!(config.expanded_path(), "/var/lib/harbormaster/store.json");

        let config = StoreConfig::default();
        assert!(!config.expanded_path().starts_with('~'));
    }

    #[test]
    fn test_log_format_deserialize() {
        let format: LogFormat = serde_json::from_str(r#""json""#).unwrap();
        assert_eq!(format, LogFormat::Json);

        let format: LogFormat = serde_json::from_str(r#""pretty""#).unwrap();
        assert_eq!(format, LogFormat::Pretty);
    }
}
