//! Staff activity attached to a student: internal notes and reminders.

use serde::{Deserialize, Serialize};

use crate::de;
use crate::timestamp::Timestamp;

/// Staff-authored free-text annotation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(default, deserialize_with = "de::opt_text")]
    pub id: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub student_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

/// Body of `POST /internal_notes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNote {
    pub content: String,
    pub student_id: String,
    pub author: String,
}

/// Scheduled follow-up task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    #[serde(default, deserialize_with = "de::opt_text")]
    pub id: Option<String>,
    #[serde(default, rename = "type")]
    pub reminder_type: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default, alias = "schedule_date")]
    pub due_date: Option<Timestamp>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub student_id: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub author_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

/// Body of `POST /reminders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReminder {
    pub student_id: String,
    #[serde(rename = "type")]
    pub reminder_type: String,
    /// RFC 3339, UTC.
    pub due_date: String,
    pub notes: String,
    pub reason: String,
    pub author_id: String,
    pub status: String,
}

impl NewReminder {
    pub const PENDING: &str = "pending";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reminder_accepts_schedule_date_alias() {
        let reminder: Reminder = serde_json::from_str(
            r#"{"id": "r1", "type": "call_student", "reason": "call_student",
                "schedule_date": {"_seconds": 1760868000}}"#,
        )
        .unwrap();
        assert_eq!(reminder.reminder_type.as_deref(), Some("call_student"));
        assert_eq!(reminder.due_date, Some(Timestamp::from_seconds(1_760_868_000)));
    }

    #[test]
    fn test_new_reminder_serializes_type_key() {
        let reminder = NewReminder {
            student_id: "s1".to_string(),
            reminder_type: "send_documents".to_string(),
            due_date: "2026-10-20T09:30:00.000Z".to_string(),
            notes: String::new(),
            reason: "send_documents".to_string(),
            author_id: "admin-1".to_string(),
            status: NewReminder::PENDING.to_string(),
        };
        let json = serde_json::to_value(&reminder).unwrap();
        assert_eq!(json["type"], "send_documents");
        assert_eq!(json["status"], "pending");
        assert!(json.get("reminder_type").is_none());
    }
}
