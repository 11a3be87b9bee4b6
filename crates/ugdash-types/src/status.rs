//! Student pipeline stages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stage a student occupies in the recruitment pipeline.
///
/// Unknown values from the backend are preserved in [`StudentStatus::Other`]
/// so a new stage never breaks decoding of a whole student list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StudentStatus {
    Exploring,
    Shortlisting,
    Applying,
    Submitted,
    /// Older records use this instead of `exploring`.
    HigherIntent,
    Archived,
    Other(String),
}

impl StudentStatus {
    /// Pipeline stages in order, used for progress display.
    pub const STAGES: [StudentStatus; 4] = [
        StudentStatus::Exploring,
        StudentStatus::Shortlisting,
        StudentStatus::Applying,
        StudentStatus::Submitted,
    ];

    /// Wire value of this status.
    pub fn as_str(&self) -> &str {
        match self {
            StudentStatus::Exploring => "exploring",
            StudentStatus::Shortlisting => "shortlisting",
            StudentStatus::Applying => "applying",
            StudentStatus::Submitted => "submitted",
            StudentStatus::HigherIntent => "higher_intent",
            StudentStatus::Archived => "archived",
            StudentStatus::Other(value) => value,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> String {
        match self {
            StudentStatus::Exploring | StudentStatus::HigherIntent => "Higher Intent".to_string(),
            StudentStatus::Shortlisting => "Shortlisting".to_string(),
            StudentStatus::Applying => "Applying".to_string(),
            StudentStatus::Submitted => "Submitted".to_string(),
            StudentStatus::Archived => "Archived".to_string(),
            StudentStatus::Other(value) => value.replace('_', " "),
        }
    }

    /// Position in [`StudentStatus::STAGES`], if this is a pipeline stage.
    pub fn stage_index(&self) -> Option<usize> {
        Self::STAGES.iter().position(|stage| stage == self)
    }

    pub fn is_higher_intent(&self) -> bool {
        matches!(self, StudentStatus::Exploring | StudentStatus::HigherIntent)
    }
}

impl From<String> for StudentStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "exploring" => StudentStatus::Exploring,
            "shortlisting" => StudentStatus::Shortlisting,
            "applying" => StudentStatus::Applying,
            "submitted" => StudentStatus::Submitted,
            "higher_intent" => StudentStatus::HigherIntent,
            "archived" => StudentStatus::Archived,
            _ => StudentStatus::Other(value),
        }
    }
}

impl From<StudentStatus> for String {
    fn from(status: StudentStatus) -> Self {
        match status {
            StudentStatus::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for StudentStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err("status cannot be empty".to_string());
        }
        Ok(StudentStatus::from(trimmed.to_ascii_lowercase()))
    }
}

impl fmt::Display for StudentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_values_decode() {
        let parsed: Vec<StudentStatus> =
            serde_json::from_str(r#"["applying","higher_intent","waitlisted"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                StudentStatus::Applying,
                StudentStatus::HigherIntent,
                StudentStatus::Other("waitlisted".to_string()),
            ]
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(StudentStatus::Exploring.label(), "Higher Intent");
        assert_eq!(StudentStatus::Submitted.label(), "Submitted");
        assert_eq!(
            StudentStatus::Other("on_hold".to_string()).label(),
            "on hold"
        );
    }

    #[test]
    fn test_stage_index() {
        assert_eq!(StudentStatus::Exploring.stage_index(), Some(0));
        assert_eq!(StudentStatus::Submitted.stage_index(), Some(3));
        assert_eq!(StudentStatus::Archived.stage_index(), None);
    }

    #[test]
    fn test_from_str_normalizes_case() {
        assert_eq!(
            "Shortlisting".parse::<StudentStatus>().unwrap(),
            StudentStatus::Shortlisting
        );
        assert!("  ".parse::<StudentStatus>().is_err());
    }
}
