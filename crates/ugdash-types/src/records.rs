//! Read-only records shown on the student profile.

use serde::{Deserialize, Serialize};

use crate::de;
use crate::status::StudentStatus;
use crate::timestamp::Timestamp;

/// A university application. Reuses the student status stages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Application {
    #[serde(default, deserialize_with = "de::opt_text")]
    pub id: Option<String>,
    #[serde(default)]
    pub program: Option<String>,
    #[serde(default)]
    pub university_name: Option<String>,
    #[serde(default)]
    pub status: Option<StudentStatus>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default, alias = "submittedAt")]
    pub submitted_at: Option<Timestamp>,
}

/// An uploaded file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, deserialize_with = "de::opt_text")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default, alias = "download_url", alias = "url")]
    pub file_url: Option<String>,
    #[serde(default, alias = "size", deserialize_with = "de::opt_text")]
    pub file_size: Option<String>,
    #[serde(default, alias = "created_at")]
    pub uploaded_at: Option<Timestamp>,
}

impl Document {
    /// Display name, preferring the friendly name over the stored file name.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().or(self.file_name.as_deref())
    }
}
