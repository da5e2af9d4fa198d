//! Twitter API v2 client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::client::Publisher;
use super::error::PublishError;
use crate::config::TwitterConfig;

/// HTTP client posting announcements as tweets
pub struct TwitterClient {
    base_url: String,
    token: String,
    http: Client,
}

impl TwitterClient {
    /// Create a new client from twitter configuration
    ///
    /// Reads the bearer token from the environment variable named in the
    /// config; fails fast when it is unset.
    pub fn from_config(config: &TwitterConfig) -> Result<Self, PublishError> {
        let token = config
            .get_token()
            .map_err(|e| PublishError::Credentials(e.to_string()))?;

        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(PublishError::Network)?;

        Ok(Self {
            base_url: config.base_url.clone(),
            token,
            http,
        })
    }
}

#[async_trait]
impl Publisher for TwitterClient {
    async fn publish(&self, text: &str) -> Result<(), PublishError> {
        debug!(chars = text.len(), "publish: called");
        let url = format!("{}/2/tweets", self.base_url);
        let body = serde_json::json!({ "text": text });

        let response = self.http.post(&url).bearer_auth(&self.token).json(&body).send().await?;

        let status = response.status().as_u16();

        if status == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(60);
            debug!(retry_after, "publish: rate limited");
            return Err(PublishError::RateLimited {
                retry_after: Duration::from_secs(retry_after),
            });
        }

        if !response.status().is_success() {
            let message = response.text().await.unwrap_or_default();
            debug!(status, "publish: API error");
            return Err(PublishError::ApiError { status, message });
        }

        debug!("publish: posted");
        Ok(())
    }
}
