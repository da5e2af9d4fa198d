//! Watcher module for the recent-records poll loop
//!
//! The RecordWatcher polls the feed periodically, diffs the fetched
//! snapshot against the last persisted one, and publishes an announcement
//! for every newly appeared record.

mod config;
mod record_watcher;

pub use config::WatcherConfig;
pub use record_watcher::RecordWatcher;
