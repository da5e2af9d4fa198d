//! Record watcher implementation

use std::sync::Arc;

use eyre::Result;
use snapstore::SnapStore;
use tracing::{debug, error, info, warn};

use super::config::WatcherConfig;
use crate::domain::{Snapshot, diff};
use crate::feed::RecordFeed;
use crate::format::announcement;
use crate::publish::Publisher;

/// The RecordWatcher polls the feed and announces newly appeared records
///
/// One poll cycle runs as a single sequential unit of work: fetch, load
/// the previous snapshot, diff, publish each new entry in feed order, and
/// persist the fetched snapshot when at least one new entry appeared.
/// Overlapping cycles are not expected and not guarded against here; the
/// loop in [`RecordWatcher::run`] is strictly sequential.
pub struct RecordWatcher {
    config: WatcherConfig,
    feed: Arc<dyn RecordFeed>,
    publisher: Arc<dyn Publisher>,
    store: SnapStore,
    dry_run: bool,
}

impl RecordWatcher {
    /// Create a new RecordWatcher
    pub fn new(config: WatcherConfig, feed: Arc<dyn RecordFeed>, publisher: Arc<dyn Publisher>, store: SnapStore) -> Self {
        Self {
            config,
            feed,
            publisher,
            store,
            dry_run: false,
        }
    }

    /// Enable dry-run mode: log announcements, never publish or persist
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Check for new records and announce them
    ///
    /// Returns the number of announcements made. A fetch failure makes the
    /// whole cycle a no-op: no announcements, no persistence.
    async fn check_for_records(&self) -> Result<usize> {
        let current = self.feed.recent_records().await?;

        // First run: seed the snapshot silently so a fresh install does not
        // flood the posting endpoint with every recent record.
        let Some(previous) = self.store.load::<Snapshot>(&self.config.snapshot_name)? else {
            info!(count = current.len(), "No previous snapshot, seeding silently");
            if !self.dry_run {
                self.store.save(&self.config.snapshot_name, &current)?;
            }
            return Ok(0);
        };

        let new_records = diff(&previous, &current);
        if new_records.is_empty() {
            debug!("No new records");
            return Ok(0);
        }

        info!(count = new_records.len(), "New records detected");

        let mut announced = 0;
        for entry in &new_records {
            let text = announcement(entry);
            if self.dry_run {
                info!(%text, "Dry run, not publishing");
                announced += 1;
                continue;
            }
            match self.publisher.publish(&text).await {
                Ok(()) => {
                    debug!(
                        person = %entry.person_name,
                        event = %entry.event_name,
                        tag = %entry.record_tag,
                        "Announcement published"
                    );
                    announced += 1;
                }
                Err(e) => {
                    // A lost announcement is preferable to replaying the
                    // whole diff on every later cycle.
                    warn!(error = %e, person = %entry.person_name, "Failed to publish announcement");
                }
            }
        }

        if !self.dry_run {
            self.store.save(&self.config.snapshot_name, &current)?;
        }

        Ok(announced)
    }

    /// Run a single poll cycle (useful for testing and `rb once`)
    pub async fn check_once(&self) -> Result<usize> {
        self.check_for_records().await
    }

    /// Run the poll loop
    ///
    /// Runs until the process is stopped. Cycle failures are logged and
    /// the loop keeps going.
    pub async fn run(self) -> Result<()> {
        info!(
            interval_secs = self.config.poll_interval_secs,
            snapshot = %self.config.snapshot_name,
            "RecordWatcher started"
        );

        loop {
            match self.check_for_records().await {
                Ok(announced) => {
                    if announced > 0 {
                        info!(announced, "Poll cycle complete");
                    }
                }
                Err(e) => {
                    error!(error = %e, "Error checking for new records");
                }
            }

            // Sleep until next poll
            tokio::time::sleep(self.config.poll_interval()).await;
        }
    }
}
