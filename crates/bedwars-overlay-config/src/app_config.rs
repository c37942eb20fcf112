//! Application configuration
//!
//! Loaded from `.bedwars-overlay.toml` in the CWD or `config.toml` in the
//! config directory. Every field has a default so partial files work.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable consulted when the config holds no API key
pub const API_KEY_ENV: &str = "HYPIXEL_API_KEY";

const MIN_POLL_INTERVAL_MS: u64 = 10;
const MAX_POLL_INTERVAL_MS: u64 = 100;

/// Application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Hypixel API key
    #[serde(default)]
    pub api_key: String,

    /// Minecraft client log file to watch
    #[serde(default = "default_log_path")]
    pub log_path: String,

    /// Your own username; seeing yourself join resets the roster
    #[serde(default)]
    pub own_player_name: String,

    /// Whether your own name is listed in the table
    #[serde(default = "default_true")]
    pub show_own_name: bool,

    /// Only forward `[CHAT]` lines from the log to the classifier
    #[serde(default = "default_true")]
    pub filter_chat_lines: bool,

    /// Delay between polls of the log file, in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_log_path() -> String {
    crate::paths::default_minecraft_log_path()
        .to_string_lossy()
        .to_string()
}

fn default_true() -> bool {
    true
}

fn default_poll_interval_ms() -> u64 {
    50
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            log_path: default_log_path(),
            own_player_name: String::new(),
            show_own_name: true,
            filter_chat_lines: true,
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then the config directory, or use defaults
    ///
    /// The `HYPIXEL_API_KEY` environment variable fills in a missing API key.
    pub fn load() -> Self {
        let config = match crate::load_config_file() {
            Some((path, content)) => match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Failed to parse config file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            None => {
                log::debug!("Using default app config");
                Self::default()
            }
        };

        config.with_env_api_key(std::env::var(API_KEY_ENV).ok())
    }

    fn with_env_api_key(mut self, env_key: Option<String>) -> Self {
        if self.api_key.is_empty() {
            if let Some(key) = env_key.filter(|key| !key.trim().is_empty()) {
                log::info!("Using API key from {}", API_KEY_ENV);
                self.api_key = key.trim().to_string();
            }
        }
        self
    }

    /// Persist the config to the file it is loaded from
    pub fn save(&self) -> Result<PathBuf> {
        let path = crate::writable_config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Could not serialize app config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Could not write config to {}", path.display()))?;
        log::info!("Saved app config to {}", path.display());
        Ok(())
    }

    /// Poll interval clamped to the supported range
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(
            self.poll_interval_ms
                .clamp(MIN_POLL_INTERVAL_MS, MAX_POLL_INTERVAL_MS),
        )
    }

    pub fn log_path(&self) -> PathBuf {
        PathBuf::from(&self.log_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.api_key.is_empty());
        assert!(config.log_path.ends_with("latest.log"));
        assert!(config.own_player_name.is_empty());
        assert!(config.show_own_name);
        assert!(config.filter_chat_lines);
        assert_eq!(config.poll_interval(), Duration::from_millis(50));
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            own_player_name = "Notch"
            show_own_name = false
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.own_player_name, "Notch");
        assert!(!config.show_own_name);
        // Other fields should use defaults
        assert!(config.api_key.is_empty());
        assert!(config.filter_chat_lines);
        assert!(config.log_path.ends_with("latest.log"));
    }

    #[test]
    fn test_poll_interval_is_clamped() {
        let mut config = AppConfig {
            poll_interval_ms: 1,
            ..AppConfig::default()
        };
        assert_eq!(config.poll_interval(), Duration::from_millis(10));
        config.poll_interval_ms = 5_000;
        assert_eq!(config.poll_interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_env_key_only_fills_missing_key() {
        let config = AppConfig::default().with_env_api_key(Some(" env-key ".to_string()));
        assert_eq!(config.api_key, "env-key");

        let config = AppConfig {
            api_key: "file-key".to_string(),
            ..AppConfig::default()
        }
        .with_env_api_key(Some("env-key".to_string()));
        assert_eq!(config.api_key, "file-key");

        let config = AppConfig::default().with_env_api_key(Some("   ".to_string()));
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = AppConfig {
            api_key: "abc".to_string(),
            log_path: "/tmp/latest.log".to_string(),
            own_player_name: "Steve".to_string(),
            show_own_name: false,
            filter_chat_lines: false,
            poll_interval_ms: 20,
        };

        config.save_to(&path).unwrap();
        let reloaded: AppConfig =
            toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(reloaded, config);
    }
}
