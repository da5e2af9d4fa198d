//! Publish error types

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while publishing an announcement
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Missing credentials: {0}")]
    Credentials(String),

    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Duration },

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
