//! recordbot - WCA Live record announcement bot
//!
//! Polls the WCA Live recent-records feed on a fixed cadence, diffs each
//! fetched snapshot against the last persisted one, and publishes an
//! announcement for every newly appeared record.
//!
//! # Core flow
//!
//! On each poll cycle: fetch the feed, load the previous snapshot from the
//! store, diff the two (identity is a fixed field tuple, there is no stable
//! record id upstream), publish one announcement per new entry in feed
//! order, and persist the fetched snapshot when anything new appeared. A
//! first run seeds the snapshot silently.
//!
//! # Modules
//!
//! - [`domain`] - record data model, cross-poll identity, snapshot diffing
//! - [`format`] - attempt result decoding and announcement text
//! - [`feed`] - WCA Live GraphQL client
//! - [`publish`] - posting endpoint client
//! - [`watcher`] - the poll loop
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod cli;
pub mod config;
pub mod daemon;
pub mod domain;
pub mod feed;
pub mod format;
pub mod publish;
pub mod watcher;

// Re-export commonly used types
pub use config::{Config, FeedConfig, StorageConfig, TwitterConfig};
pub use daemon::DaemonManager;
pub use domain::{RecordEntry, RecordKey, RecordType, Snapshot, diff};
pub use feed::{FeedError, RecordFeed, WcaLiveClient};
pub use format::{MbldAttempt, announcement, decode_mbld, format_attempt};
pub use publish::{NullPublisher, PublishError, Publisher, TwitterClient};
pub use watcher::{RecordWatcher, WatcherConfig};
