//! Recent-records feed client
//!
//! Fetches the recent-records feed from WCA Live and maps the nested wire
//! shape into flat [`crate::domain::RecordEntry`] values.

pub mod client;
mod error;
mod types;
mod wca_live;

pub use client::RecordFeed;
pub use error::FeedError;
pub use wca_live::WcaLiveClient;
