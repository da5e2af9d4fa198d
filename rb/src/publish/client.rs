//! Publisher trait definition

use async_trait::async_trait;
use tracing::info;

use super::error::PublishError;

/// One-way sink for announcement text.
///
/// Implementations own their credentials and HTTP client; they are injected
/// into the poller rather than living in process-wide state.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publish one announcement
    async fn publish(&self, text: &str) -> Result<(), PublishError>;
}

/// Publisher that logs instead of posting.
///
/// Used for dry runs and for running without posting credentials.
pub struct NullPublisher;

#[async_trait]
impl Publisher for NullPublisher {
    async fn publish(&self, text: &str) -> Result<(), PublishError> {
        info!(%text, "NullPublisher: not publishing");
        Ok(())
    }
}
