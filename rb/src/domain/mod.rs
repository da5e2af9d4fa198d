//! Domain types and logic for record tracking

mod diff;
mod record;

pub use diff::diff;
pub use record::{RecordEntry, RecordKey, RecordType, Snapshot};
