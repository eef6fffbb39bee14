use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Id carried by a note that has not been stored yet.
pub const UNSET_ID: i64 = -1;

/// Timestamp carried by a note that has never been stamped.
pub const UNSET_TIMESTAMP: i64 = -1;

/// A titled, timestamped text record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl Note {
    /// A note that has not been persisted yet (no id, no timestamp).
    pub fn new(title: Option<String>, content: Option<String>) -> Self {
        Self {
            id: UNSET_ID,
            title,
            content,
            timestamp: UNSET_TIMESTAMP,
        }
    }

    /// A note with all of its data, as read back from storage.
    pub fn full(id: i64, title: Option<String>, content: Option<String>, timestamp: i64) -> Self {
        Self {
            id,
            title,
            content,
            timestamp,
        }
    }

    /// A note is valid when it has a title that is not blank.
    pub fn is_valid(&self) -> bool {
        self.title
            .as_deref()
            .map(|t| !t.trim().is_empty())
            .unwrap_or(false)
    }

    pub fn is_persisted(&self) -> bool {
        self.id != UNSET_ID
    }

    /// Set the timestamp to the current wall-clock time.
    pub fn stamp_now(&mut self) {
        self.timestamp = Utc::now().timestamp_millis();
    }

    pub fn timestamp_as_datetime(&self) -> Option<DateTime<Utc>> {
        if self.timestamp == UNSET_TIMESTAMP {
            return None;
        }
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

/// Body of a create/update request. Only title and content are taken from
/// the client; `id` and `timestamp` keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotePayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl NotePayload {
    pub fn into_new_note(self) -> Note {
        Note::new(self.title, self.content)
    }

    /// Note addressed by an id taken from the request path.
    pub fn into_note_with_id(self, id: i64) -> Note {
        Note::full(id, self.title, self.content, UNSET_TIMESTAMP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity_requires_non_blank_title() {
        assert!(Note::new(Some("Groceries".to_string()), None).is_valid());
        assert!(Note::new(Some("  x  ".to_string()), Some(String::new())).is_valid());
        assert!(!Note::new(Some(String::new()), Some("x".to_string())).is_valid());
        assert!(!Note::new(Some(" \t\n".to_string()), Some("x".to_string())).is_valid());
        assert!(!Note::new(None, Some("x".to_string())).is_valid());
    }

    #[test]
    fn test_new_note_is_unset() {
        let note = Note::new(Some("A".to_string()), Some("B".to_string()));
        assert_eq!(note.id, UNSET_ID);
        assert_eq!(note.timestamp, UNSET_TIMESTAMP);
        assert!(!note.is_persisted());
        assert!(note.timestamp_as_datetime().is_none());
    }

    #[test]
    fn test_stamp_now() {
        let before = Utc::now().timestamp_millis();
        let mut note = Note::new(Some("A".to_string()), None);
        note.stamp_now();
        let after = Utc::now().timestamp_millis();

        assert!(note.timestamp >= before && note.timestamp <= after);
        let dt = note.timestamp_as_datetime().expect("stamped note has a date");
        assert_eq!(dt.timestamp_millis(), note.timestamp);
    }

    #[test]
    fn test_json_shape() {
        let note = Note::full(7, Some("A".to_string()), Some("B".to_string()), 1_700_000_000_000);
        let value = serde_json::to_value(&note).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 7,
                "title": "A",
                "content": "B",
                "timestamp": 1_700_000_000_000i64
            })
        );
    }

    #[test]
    fn test_payload_ignores_client_id_and_timestamp() {
        let payload: NotePayload = serde_json::from_str(
            r#"{"id": 99, "title": "A", "content": "B", "timestamp": 12345}"#,
        )
        .unwrap();

        let created = payload.clone().into_new_note();
        assert_eq!(created.id, UNSET_ID);
        assert_eq!(created.timestamp, UNSET_TIMESTAMP);

        let updated = payload.into_note_with_id(3);
        assert_eq!(updated.id, 3);
        assert_eq!(updated.timestamp, UNSET_TIMESTAMP);
        assert_eq!(updated.title.as_deref(), Some("A"));
    }

    #[test]
    fn test_payload_missing_fields() {
        let payload: NotePayload = serde_json::from_str("{}").unwrap();
        let note = payload.into_new_note();
        assert!(note.title.is_none());
        assert!(note.content.is_none());
        assert!(!note.is_valid());
    }
}
