//! Record entry data model and cross-poll identity

use serde::{Deserialize, Serialize};

/// All recent records reported by the feed at one point in time, in feed order
pub type Snapshot = Vec<RecordEntry>;

/// Whether a record was set on a single attempt or a round average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Single,
    Average,
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Average => write!(f, "average"),
        }
    }
}

/// One reported record from the recent-records feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordEntry {
    /// Raw encoded result; interpretation depends on the event (see format module)
    pub attempt_result: i64,
    pub record_type: RecordType,
    /// Record scope label, e.g. "NR", "CR", "WR"
    pub record_tag: String,
    pub person_name: String,
    pub person_country: String,
    /// Stable short event code, e.g. "333", "333mbf", "333fm"
    pub event_id: String,
    /// Display name of the event, e.g. "3x3x3 Cube"
    pub event_name: String,
    pub competition_id: String,
    pub competition_name: String,
    pub round_id: String,
}

/// Identity of a record across polls.
///
/// The feed carries no stable per-record id, so identity is inferred from a
/// fixed field tuple. The comparison is deliberately strict on attempt_result
/// and person_name: a false match would silently suppress a genuinely new
/// record, while a false mismatch only repeats an announcement.
///
/// Note the tuple uses the display event_name, not event_id, matching the
/// upstream comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordKey<'a> {
    competition_id: &'a str,
    event_name: &'a str,
    record_type: RecordType,
    record_tag: &'a str,
    attempt_result: i64,
    person_name: &'a str,
}

impl RecordEntry {
    /// The identity tuple used to match this entry across polls
    pub fn key(&self) -> RecordKey<'_> {
        RecordKey {
            competition_id: &self.competition_id,
            event_name: &self.event_name,
            record_type: self.record_type,
            record_tag: &self.record_tag,
            attempt_result: self.attempt_result,
            person_name: &self.person_name,
        }
    }

    /// Whether two entries represent the same record occurrence
    pub fn same_record(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::entry;
    use super::*;

    #[test]
    fn test_same_record_identical() {
        let a = entry("Leo Borromeo", "3x3x3 Cube", 548);
        let b = a.clone();
        assert!(a.same_record(&b));
    }

    #[test]
    fn test_same_record_ignores_non_identity_fields() {
        let a = entry("Leo Borromeo", "3x3x3 Cube", 548);
        let mut b = a.clone();
        b.person_country = "Philippines".to_string();
        b.competition_name = "Renamed Open 2022".to_string();
        b.round_id = "99999".to_string();
        b.event_id = "333oh".to_string();
        assert!(a.same_record(&b));
    }

    #[test]
    fn test_different_attempt_result_is_different_record() {
        let a = entry("Leo Borromeo", "3x3x3 Cube", 548);
        let mut b = a.clone();
        b.attempt_result = 547;
        assert!(!a.same_record(&b));
    }

    #[test]
    fn test_different_tag_is_different_record() {
        let a = entry("Leo Borromeo", "3x3x3 Cube", 548);
        let mut b = a.clone();
        b.record_tag = "WR".to_string();
        assert!(!a.same_record(&b));
    }

    #[test]
    fn test_different_record_type_is_different_record() {
        let a = entry("Leo Borromeo", "3x3x3 Cube", 548);
        let mut b = a.clone();
        b.record_type = RecordType::Average;
        assert!(!a.same_record(&b));
    }

    #[test]
    fn test_record_type_wire_values() {
        assert_eq!(serde_json::to_string(&RecordType::Single).unwrap(), "\"single\"");
        assert_eq!(
            serde_json::from_str::<RecordType>("\"average\"").unwrap(),
            RecordType::Average
        );
    }
}
