//! Watcher configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the RecordWatcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatcherConfig {
    /// Polling interval in seconds
    #[serde(rename = "poll-interval-secs", default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// Name the snapshot is persisted under
    #[serde(rename = "snapshot-name", default = "default_snapshot_name")]
    pub snapshot_name: String,
}

fn default_poll_interval_secs() -> u64 {
    1200
}

fn default_snapshot_name() -> String {
    "recent-records".to_string()
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: 1200,
            snapshot_name: "recent-records".to_string(),
        }
    }
}

impl WatcherConfig {
    /// Get the poll interval as a Duration
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WatcherConfig::default();
        assert_eq!(config.poll_interval_secs, 1200);
        assert_eq!(config.snapshot_name, "recent-records");
    }

    #[test]
    fn test_poll_interval_duration() {
        let config = WatcherConfig {
            poll_interval_secs: 60,
            ..Default::default()
        };
        assert_eq!(config.poll_interval(), Duration::from_secs(60));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: WatcherConfig = serde_yaml::from_str("poll-interval-secs: 90").unwrap();
        assert_eq!(config.poll_interval_secs, 90);
        assert_eq!(config.snapshot_name, "recent-records");
    }
}
