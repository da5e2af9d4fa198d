//! Wire types for the recent-records GraphQL response
//!
//! The feed nests each record under result -> round -> competitionEvent;
//! these types mirror that shape and flatten into [`RecordEntry`].

use serde::Deserialize;

use crate::domain::{RecordEntry, RecordType};

#[derive(Debug, Deserialize)]
pub(super) struct FeedResponse {
    pub data: Option<FeedData>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FeedData {
    #[serde(rename = "recentRecords")]
    pub recent_records: Vec<WireRecord>,
}

#[derive(Debug, Deserialize)]
pub(super) struct WireRecord {
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub tag: String,
    #[serde(rename = "attemptResult")]
    pub attempt_result: i64,
    pub result: WireResult,
}

#[derive(Debug, Deserialize)]
pub(super) struct WireResult {
    pub person: WirePerson,
    pub round: WireRound,
}

#[derive(Debug, Deserialize)]
pub(super) struct WirePerson {
    pub name: String,
    pub country: WireCountry,
}

#[derive(Debug, Deserialize)]
pub(super) struct WireCountry {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct WireRound {
    pub id: String,
    #[serde(rename = "competitionEvent")]
    pub competition_event: WireCompetitionEvent,
}

#[derive(Debug, Deserialize)]
pub(super) struct WireCompetitionEvent {
    pub event: WireEvent,
    pub competition: WireCompetition,
}

#[derive(Debug, Deserialize)]
pub(super) struct WireEvent {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct WireCompetition {
    pub id: String,
    pub name: String,
}

impl From<WireRecord> for RecordEntry {
    fn from(wire: WireRecord) -> Self {
        let round = wire.result.round;
        let competition_event = round.competition_event;
        Self {
            attempt_result: wire.attempt_result,
            record_type: wire.record_type,
            record_tag: wire.tag,
            person_name: wire.result.person.name,
            person_country: wire.result.person.country.name,
            event_id: competition_event.event.id,
            event_name: competition_event.event.name,
            competition_id: competition_event.competition.id,
            competition_name: competition_event.competition.name,
            round_id: round.id,
        }
    }
}
