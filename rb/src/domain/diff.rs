//! Snapshot diffing

use std::collections::HashSet;

use tracing::debug;

use super::record::RecordEntry;

/// Entries in `current` with no identity match in `previous`, in current order.
///
/// An empty `previous` means every current entry is new; the first-run policy
/// (seed silently vs announce everything) is the caller's decision.
pub fn diff<'a>(previous: &[RecordEntry], current: &'a [RecordEntry]) -> Vec<&'a RecordEntry> {
    let seen: HashSet<_> = previous.iter().map(RecordEntry::key).collect();
    let new_entries: Vec<_> = current.iter().filter(|entry| !seen.contains(&entry.key())).collect();
    debug!(
        previous = previous.len(),
        current = current.len(),
        new = new_entries.len(),
        "Computed snapshot diff"
    );
    new_entries
}
