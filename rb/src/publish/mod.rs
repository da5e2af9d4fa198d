//! Announcement publishing
//!
//! Thin client for the posting endpoint. Publishing is fire-and-forget from
//! the poller's perspective; failures are logged and never abort a cycle.

pub mod client;
mod error;
mod twitter;

pub use client::{NullPublisher, Publisher};
pub use error::PublishError;
pub use twitter::TwitterClient;
