//! Feed error types

use thiserror::Error;

/// Errors that can occur while fetching the recent-records feed
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing data in response: {0}")]
    MissingData(String),
}
