// src/infrastructure/config.rs
use crate::constants::{DEFAULT_HOST, DEFAULT_PORT};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML configuration for the notes service
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Empty means any origin is allowed
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct StorageConfig {
    /// Database file; empty selects the per-user data directory
    #[serde(default)]
    pub database: String,
}

fn default_host() -> String { DEFAULT_HOST.to_string() }
fn default_port() -> u16 { DEFAULT_PORT }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_allowed_origins: vec![],
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Create default configuration file at path
    pub fn create_default(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn given_no_file_when_creating_default_then_creates_with_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("quirknotes.toml");

        let config = Config::create_default(&config_path).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 4000);
        assert!(config.server.cors_allowed_origins.is_empty());
        assert_eq!(config.storage.database, "");
        assert!(config_path.exists());
    }

    #[test]
    fn given_config_when_saving_then_writes_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        Config::default().save(&config_path).unwrap();

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[server]"));
        assert!(content.contains("[storage]"));
    }

    #[test]
    fn given_toml_file_when_loading_then_reads_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("load_test.toml");

        let toml_content = r#"
[server]
host = "0.0.0.0"
port = 8080
cors_allowed_origins = ["http://localhost:3000"]

[storage]
database = "/var/lib/quirknotes/notes.db"
"#;
        fs::write(&config_path, toml_content).unwrap();

        let config = Config::load(&config_path).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.cors_allowed_origins, vec!["http://localhost:3000"]);
        assert_eq!(config.storage.database, "/var/lib/quirknotes/notes.db");
    }

    #[test]
    fn given_partial_toml_when_loading_then_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("partial.toml");

        fs::write(&config_path, "[server]\nport = 5000\n").unwrap();

        let config = Config::load(&config_path).unwrap();

        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[test]
    fn given_nonexistent_file_when_loading_then_returns_error() {
        let result = Config::load("/nonexistent/path/config.toml");

        assert!(result.is_err());
    }

    #[test]
    fn given_invalid_port_when_loading_then_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.toml");
        fs::write(&config_path, "[server]\nport = \"not a port\"\n").unwrap();

        assert!(Config::load(&config_path).is_err());
    }
}
