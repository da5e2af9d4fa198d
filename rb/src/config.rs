//! recordbot configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::watcher::WatcherConfig;

/// Main recordbot configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Recent-records feed configuration
    pub feed: FeedConfig,

    /// Posting endpoint configuration
    pub twitter: TwitterConfig,

    /// Poll loop configuration
    pub watcher: WatcherConfig,

    /// Storage configuration
    pub storage: StorageConfig,
}

impl Config {
    /// Validate configuration before use
    ///
    /// Checks that the posting token environment variable is set. Call
    /// this early in startup to fail fast with a clear error message.
    pub fn validate(&self) -> Result<()> {
        if std::env::var(&self.twitter.token_env).is_err() {
            return Err(eyre::eyre!(
                "Posting token not found. Set the {} environment variable.",
                self.twitter.token_env
            ));
        }
        Ok(())
    }

    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .recordbot.yml
        let local_config = PathBuf::from(".recordbot.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/recordbot/recordbot.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("recordbot").join("recordbot.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Recent-records feed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Base URL of the WCA Live instance
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: "https://live.worldcubeassociation.org".to_string(),
            timeout_ms: 30_000,
        }
    }
}

/// Posting endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TwitterConfig {
    /// API base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Environment variable containing the bearer token
    #[serde(rename = "token-env")]
    pub token_env: String,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl Default for TwitterConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.twitter.com".to_string(),
            token_env: "TWITTER_BEARER_TOKEN".to_string(),
            timeout_ms: 30_000,
        }
    }
}

impl TwitterConfig {
    /// Read the bearer token from the configured environment variable
    pub fn get_token(&self) -> Result<String> {
        std::env::var(&self.token_env).context(format!("{} environment variable not set", self.token_env))
    }
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for the snapshot store
    pub dir: String,
}

impl StorageConfig {
    /// Path of the snapshot database file
    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.dir).join("snapshots.db")
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        // Use XDG data directory (~/.local/share/recordbot on Linux)
        let dir = dirs::data_dir()
            .map(|d| d.join("recordbot"))
            .unwrap_or_else(|| PathBuf::from(".recordbot"))
            .to_string_lossy()
            .into_owned();

        Self { dir }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.feed.base_url, "https://live.worldcubeassociation.org");
        assert_eq!(config.twitter.token_env, "TWITTER_BEARER_TOKEN");
        assert_eq!(config.watcher.poll_interval_secs, 1200);
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
feed:
  base-url: https://live.example.org
  timeout-ms: 5000

twitter:
  base-url: https://api.example.com
  token-env: MY_TOKEN
  timeout-ms: 10000

watcher:
  poll-interval-secs: 60
  snapshot-name: test-records

storage:
  dir: /tmp/recordbot-test
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.feed.base_url, "https://live.example.org");
        assert_eq!(config.feed.timeout_ms, 5000);
        assert_eq!(config.twitter.token_env, "MY_TOKEN");
        assert_eq!(config.watcher.poll_interval_secs, 60);
        assert_eq!(config.watcher.snapshot_name, "test-records");
        assert_eq!(config.storage.dir, "/tmp/recordbot-test");
        assert_eq!(config.storage.db_path(), PathBuf::from("/tmp/recordbot-test/snapshots.db"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let yaml = r#"
watcher:
  poll-interval-secs: 300
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        // Specified value
        assert_eq!(config.watcher.poll_interval_secs, 300);

        // Defaults for unspecified
        assert_eq!(config.feed.base_url, "https://live.worldcubeassociation.org");
        assert_eq!(config.twitter.base_url, "https://api.twitter.com");
        assert_eq!(config.watcher.snapshot_name, "recent-records");
    }
}
