//! Integration tests for recordbot
//!
//! These tests exercise the full poll cycle - fetch, diff, announce,
//! persist - against scripted collaborators and a temporary store.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;

use recordbot::config::Config;
use recordbot::domain::{RecordEntry, RecordType, Snapshot};
use recordbot::feed::{FeedError, RecordFeed};
use recordbot::publish::{PublishError, Publisher};
use recordbot::watcher::{RecordWatcher, WatcherConfig};
use snapstore::SnapStore;

/// Feed returning a scripted sequence of snapshots, then failing
struct ScriptedFeed {
    snapshots: Mutex<Vec<Snapshot>>,
}

impl ScriptedFeed {
    fn new(mut snapshots: Vec<Snapshot>) -> Self {
        snapshots.reverse();
        Self {
            snapshots: Mutex::new(snapshots),
        }
    }
}

#[async_trait]
impl RecordFeed for ScriptedFeed {
    async fn recent_records(&self) -> Result<Snapshot, FeedError> {
        self.snapshots
            .lock()
            .unwrap()
            .pop()
            .ok_or_else(|| FeedError::MissingData("scripted feed exhausted".to_string()))
    }
}

/// Publisher recording every announcement
#[derive(Default)]
struct RecordingPublisher {
    published: Mutex<Vec<String>>,
}

impl RecordingPublisher {
    fn published(&self) -> Vec<String> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl Publisher for RecordingPublisher {
    async fn publish(&self, text: &str) -> Result<(), PublishError> {
        self.published.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

fn record(person: &str, event_id: &str, event_name: &str, attempt_result: i64) -> RecordEntry {
    RecordEntry {
        attempt_result,
        record_type: RecordType::Single,
        record_tag: "NR".to_string(),
        person_name: person.to_string(),
        person_country: "Japan".to_string(),
        event_id: event_id.to_string(),
        event_name: event_name.to_string(),
        competition_id: "1410".to_string(),
        competition_name: "Cube Open 2022".to_string(),
        round_id: "20659".to_string(),
    }
}

#[tokio::test]
async fn test_two_cycles_seed_then_announce() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = SnapStore::open(temp_dir.path().join("snapshots.db")).unwrap();

    let first = vec![record("Person A", "333", "3x3x3 Cube", 548)];
    let second = vec![
        record("Person B", "333mbf", "3x3x3 Multi-Blind", 520_348_604),
        record("Person A", "333", "3x3x3 Cube", 548),
    ];

    let feed = Arc::new(ScriptedFeed::new(vec![first, second.clone()]));
    let publisher = Arc::new(RecordingPublisher::default());

    let watcher = RecordWatcher::new(WatcherConfig::default(), feed, publisher.clone(), store);

    // First cycle seeds silently
    assert_eq!(watcher.check_once().await.unwrap(), 0);
    assert!(publisher.published().is_empty());

    // Second cycle announces only the new multi-blind record
    assert_eq!(watcher.check_once().await.unwrap(), 1);
    let published = publisher.published();
    assert_eq!(published.len(), 1);
    assert!(published[0].contains("Person B"));
    assert!(published[0].contains("3x3x3 Multi-Blind"));
    assert!(published[0].contains("(51/55 58:06)"));
    assert!(
        published[0].contains("https://live.worldcubeassociation.org/competitions/1410/rounds/20659"),
        "announcement should deep-link into WCA Live: {}",
        published[0]
    );
}

#[tokio::test]
async fn test_snapshot_survives_store_reopen() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("snapshots.db");

    let first = vec![record("Person A", "333", "3x3x3 Cube", 548)];
    let second = vec![record("Person B", "222", "2x2x2 Cube", 150)];

    // First process run: seed
    {
        let feed = Arc::new(ScriptedFeed::new(vec![first.clone()]));
        let publisher = Arc::new(RecordingPublisher::default());
        let store = SnapStore::open(&db_path).unwrap();
        let watcher = RecordWatcher::new(WatcherConfig::default(), feed, publisher.clone(), store);
        assert_eq!(watcher.check_once().await.unwrap(), 0);
    }

    // Second process run: the previous snapshot is still there, so the
    // diff announces only what changed since the first run
    {
        let feed = Arc::new(ScriptedFeed::new(vec![second]));
        let publisher = Arc::new(RecordingPublisher::default());
        let store = SnapStore::open(&db_path).unwrap();
        let watcher = RecordWatcher::new(WatcherConfig::default(), feed, publisher.clone(), store);
        assert_eq!(watcher.check_once().await.unwrap(), 1);
        assert!(publisher.published()[0].contains("Person B"));
    }
}

#[tokio::test]
async fn test_fetch_failure_leaves_everything_untouched() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = SnapStore::open(temp_dir.path().join("snapshots.db")).unwrap();

    let feed = Arc::new(ScriptedFeed::new(vec![]));
    let publisher = Arc::new(RecordingPublisher::default());
    let watcher = RecordWatcher::new(WatcherConfig::default(), feed, publisher.clone(), store);

    assert!(watcher.check_once().await.is_err());
    assert!(publisher.published().is_empty());
}

#[test]
fn test_config_defaults_are_runnable() {
    let config = Config::default();
    assert!(config.watcher.poll_interval_secs > 0);
    assert!(!config.watcher.snapshot_name.is_empty());
    assert!(config.feed.base_url.starts_with("https://"));
}
