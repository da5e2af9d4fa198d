//! WCA Live GraphQL client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::client::RecordFeed;
use super::error::FeedError;
use super::types::FeedResponse;
use crate::config::FeedConfig;
use crate::domain::Snapshot;

/// GraphQL query for the recent-records feed
const RECENT_RECORDS_QUERY: &str = "{ recentRecords { type tag attemptResult result { person { name country { name } } \
     round { id competitionEvent { event { id name } competition { id name } } } } } }";

/// HTTP client for the WCA Live GraphQL API
pub struct WcaLiveClient {
    base_url: String,
    http: Client,
}

impl WcaLiveClient {
    /// Create a new client from feed configuration
    pub fn from_config(config: &FeedConfig) -> Result<Self, FeedError> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(FeedError::Network)?;

        Ok(Self {
            base_url: config.base_url.clone(),
            http,
        })
    }
}

#[async_trait]
impl RecordFeed for WcaLiveClient {
    async fn recent_records(&self) -> Result<Snapshot, FeedError> {
        debug!(base_url = %self.base_url, "recent_records: called");
        let url = format!("{}/api", self.base_url);
        let body = serde_json::json!({ "query": RECENT_RECORDS_QUERY });

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let message = response.text().await.unwrap_or_default();
            debug!(status, "recent_records: API error");
            return Err(FeedError::ApiError { status, message });
        }

        let parsed: FeedResponse = response.json().await?;
        let data = parsed
            .data
            .ok_or_else(|| FeedError::MissingData("response has no data field".to_string()))?;

        let snapshot: Snapshot = data.recent_records.into_iter().map(Into::into).collect();
        debug!(count = snapshot.len(), "recent_records: fetched snapshot");
        Ok(snapshot)
    }
}
