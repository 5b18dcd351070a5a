//! Quick note domain model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display format for a note's creation time on the dashboard.
pub const NOTE_TIMESTAMP_FORMAT: &str = "%b %d %H:%M";

/// A single quick note.
///
/// Notes are immutable after creation. `created_at` is local wall time and is
/// stored under the `ts` key of the export document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique note identifier (UUID format)
    pub id: String,
    /// Note body, never empty
    pub text: String,
    /// Local creation time
    #[serde(rename = "ts")]
    pub created_at: NaiveDateTime,
}

impl Note {
    /// Creates a note from user input.
    ///
    /// The text is trimmed; blank input yields `None`.
    pub fn new(text: &str, created_at: NaiveDateTime) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            created_at,
        })
    }

    /// Creation time formatted for display.
    pub fn display_timestamp(&self) -> String {
        self.created_at.format(NOTE_TIMESTAMP_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(12, 5, 0)
            .unwrap()
    }

    #[test]
    fn test_new_trims_text() {
        let note = Note::new("  buy milk \n", noon()).unwrap();
        assert_eq!(note.text, "buy milk");
        assert!(!note.id.is_empty());
    }

    #[test]
    fn test_new_rejects_blank() {
        assert!(Note::new("", noon()).is_none());
        assert!(Note::new("   \t", noon()).is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Note::new("a", noon()).unwrap();
        let b = Note::new("a", noon()).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_display_timestamp() {
        let note = Note::new("x", noon()).unwrap();
        assert_eq!(note.display_timestamp(), "Mar 09 12:05");
    }

    #[test]
    fn test_wire_uses_ts_key() {
        let json = r#"{"id":"n1","text":"hello","ts":"2024-03-09T12:05:00.123456"}"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.text, "hello");

        let value = serde_json::to_value(&note).unwrap();
        assert_eq!(value["ts"], "2024-03-09T12:05:00.123456");
        assert!(value.get("created_at").is_none());
    }
}
