//! Student (prospect) record.

use serde::{Deserialize, Serialize};

use crate::de;
use crate::status::StudentStatus;
use crate::timestamp::Timestamp;

/// A recruitment prospect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(default, deserialize_with = "de::text")]
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "phone")]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub grade: Option<String>,
    #[serde(default)]
    pub status: Option<StudentStatus>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
    #[serde(default)]
    pub last_contact: Option<Timestamp>,
    #[serde(default)]
    pub last_active: Option<Timestamp>,
}

impl Student {
    /// "First Last", only when both parts are present.
    pub fn full_name(&self) -> Option<String> {
        match (non_empty(&self.first_name), non_empty(&self.last_name)) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            _ => None,
        }
    }

    /// Avatar initials, only when both name parts are present.
    pub fn initials(&self) -> Option<String> {
        let first = non_empty(&self.first_name)?.chars().next()?;
        let last = non_empty(&self.last_name)?.chars().next()?;
        Some(format!("{first}{last}"))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
