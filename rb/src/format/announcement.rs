//! Announcement text for newly appeared records

use crate::domain::{RecordEntry, RecordType};

use super::attempt::format_attempt;

/// Base URL for deep links into WCA Live
const LIVE_BASE_URL: &str = "https://live.worldcubeassociation.org";

/// Build the announcement sentence for one new record.
///
/// Fixed template; length is unbounded here and constrained by the posting
/// endpoint, not by this function.
pub fn announcement(entry: &RecordEntry) -> String {
    let is_average = entry.record_type == RecordType::Average;
    let result = format_attempt(entry.attempt_result, &entry.event_id, is_average);

    format!(
        "{} (from {}) just got the {} {} {} ({}) at {} {}/competitions/{}/rounds/{}",
        entry.person_name,
        entry.person_country,
        entry.event_name,
        entry.record_type,
        entry.record_tag,
        result,
        entry.competition_name,
        LIVE_BASE_URL,
        entry.competition_id,
        entry.round_id,
    )
}
