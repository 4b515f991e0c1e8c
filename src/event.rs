//! Upload event type and its JSON wire format.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single upload performed by a user at a local (naive) point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UploadEvent {
    pub user_id: u64,
    pub timestamp: NaiveDateTime,
}

impl UploadEvent {
    #[must_use]
    pub const fn new(user_id: u64, timestamp: NaiveDateTime) -> Self {
        Self { user_id, timestamp }
    }
}

/// Serializes events as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn events_to_json(events: &[UploadEvent]) -> crate::Result<String> {
    Ok(serde_json::to_string_pretty(events)?)
}

/// Parses a JSON array of `{"user_id", "timestamp"}` objects.
///
/// Timestamps use the ISO-8601 form `YYYY-MM-DDTHH:MM:SS[.ffffff]`.
///
/// # Errors
///
/// Returns an error if the payload is not a valid event array.
pub fn events_from_json(payload: &str) -> crate::Result<Vec<UploadEvent>> {
    Ok(serde_json::from_str(payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn parses_iso_timestamps_with_and_without_fraction() {
        let payload = r#"[
            {"user_id": 1, "timestamp": "2024-03-01T08:15:30"},
            {"user_id": 2, "timestamp": "2024-03-02T23:59:59.123456"}
        ]"#;
        let events = events_from_json(payload).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], UploadEvent::new(1, at(2024, 3, 1, 8, 15, 30)));
        assert_eq!(events[1].user_id, 2);
        assert_eq!(events[1].timestamp.date(), NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
    }

    #[test]
    fn serialized_payload_uses_iso_strings() {
        let events = vec![UploadEvent::new(1, at(2024, 1, 5, 9, 0, 0))];
        let json = events_to_json(&events).unwrap();
        assert!(json.contains("\"timestamp\": \"2024-01-05T09:00:00\""));
        assert!(json.contains("\"user_id\": 1"));
    }

    #[test]
    fn rejects_malformed_timestamp() {
        let payload = r#"[{"user_id": 1, "timestamp": "yesterday"}]"#;
        assert!(matches!(events_from_json(payload), Err(crate::Error::Json(_))));
    }

    #[test]
    fn empty_array_is_valid() {
        assert!(events_from_json("[]").unwrap().is_empty());
    }
}
