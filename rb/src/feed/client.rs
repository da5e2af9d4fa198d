//! RecordFeed trait definition

use async_trait::async_trait;

use super::error::FeedError;
use crate::domain::Snapshot;

/// Read-only view of the remote recent-records feed.
///
/// Each call fetches a fresh snapshot; the feed keeps no state between
/// calls. Implementations map the wire shape into [`crate::domain::RecordEntry`]
/// before returning.
#[async_trait]
pub trait RecordFeed: Send + Sync {
    /// Fetch the current recent-records snapshot, in feed order
    async fn recent_records(&self) -> Result<Snapshot, FeedError>;
}
