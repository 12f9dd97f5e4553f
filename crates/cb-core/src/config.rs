//! Configuration management for comment-board

use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP service settings
    pub server: ServerConfig,
    /// Comment store client settings
    pub store: StoreConfig,
    /// Moderation provider settings
    pub moderation: ModerationConfig,
}

impl Config {
    /// Load configuration from a TOML file. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| BoardError::Toml(e.to_string()))
    }

    /// Load from the given path, or from the default location
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::load(&Self::default_path()),
        }
    }

    /// Write configuration as TOML, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = self.to_toml()?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Render as pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| BoardError::Toml(e.to_string()))
    }

    /// Default config file location
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "comment-board", "comment-board")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".comment-board")
            })
            .join("config.toml")
    }
}

/// HTTP service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Comment store client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Base URL of the comment service
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl StoreConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:3000".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Which moderation backend screens content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModerationProvider {
    /// Azure AI Content Safety
    ContentSafety,
    /// Local term list, for offline development
    Blocklist,
}

impl Default for ModerationProvider {
    fn default() -> Self {
        ModerationProvider::ContentSafety
    }
}

/// Moderation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModerationConfig {
    /// Provider to use
    pub provider: ModerationProvider,
    /// Content Safety resource endpoint
    pub endpoint: Option<String>,
    /// Content Safety subscription key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Content Safety API version
    pub api_version: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Terms rejected by the blocklist provider
    pub blocklist: Vec<String>,
}

impl ModerationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            provider: ModerationProvider::default(),
            endpoint: None,
            api_key: None,
            api_version: "2023-10-01".to_string(),
            timeout_secs: 10,
            blocklist: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.bind, "127.0.0.1:3000");
        assert_eq!(config.store.timeout(), Duration::from_secs(10));
        assert_eq!(config.moderation.provider, ModerationProvider::ContentSafety);
        assert_eq!(config.moderation.api_version, "2023-10-01");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[server]"));
        assert!(toml.contains("[moderation]"));
        assert!(toml.contains("provider = \"content-safety\""));

        let config2: Config = toml::from_str(&toml).unwrap();
        assert_eq!(config.store.url, config2.store.url);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [moderation]
            provider = "blocklist"
            blocklist = ["spam"]
            "#,
        )
        .unwrap();
        assert_eq!(config.moderation.provider, ModerationProvider::Blocklist);
        assert_eq!(config.moderation.blocklist, vec!["spam".to_string()]);
        assert_eq!(config.server.bind, "127.0.0.1:3000");
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.store.url, "http://127.0.0.1:3000");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.server.bind = "0.0.0.0:8080".to_string();
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.server.bind, "0.0.0.0:8080");
    }

    #[test]
    fn test_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[server\nbind = 1").unwrap();
        assert!(matches!(Config::load(&path), Err(BoardError::Toml(_))));
    }
}
