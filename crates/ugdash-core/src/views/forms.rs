//! Note and reminder forms.
//!
//! Both validate locally before touching the network, submit through
//! [`CrmApi`], and on success hand control to a caller-supplied refresh so the
//! owning view can re-fetch the list the new record belongs to.

use std::fmt;

use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use ugdash_types::{NewNote, NewReminder};

use crate::api::{ApiError, CrmApi};

/// Author recorded when no admin id is known.
pub const UNKNOWN_AUTHOR: &str = "unknown";

pub const DEFAULT_REMINDER_TYPE: &str = "call_student";

/// Reminder types offered by the form. Other values are sent verbatim.
pub const REMINDER_TYPES: &[&str] = &[
    "call_student",
    "review_application",
    "send_documents",
    "follow_up_check",
];

const EMPTY_NOTE: &str = "Please enter a note";
const NOTE_FAILED: &str = "Failed to create note. Please try again.";
const MISSING_DUE_DATE: &str = "Please select a due date";
const INVALID_DUE_DATE: &str = "Please enter a valid due date";
const REMINDER_FAILED: &str = "Failed to create reminder. Please try again.";

/// Submission status shared by both forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub submitting: bool,
    pub error: Option<String>,
    pub success: bool,
}

impl FormState {
    fn begin(&mut self) {
        self.submitting = true;
        self.error = None;
        self.success = false;
    }

    fn fail(&mut self, err: &FormError) {
        self.submitting = false;
        self.error = Some(err.to_string());
    }
}

#[derive(Debug)]
pub enum FormError {
    /// Rejected locally; nothing was sent.
    Invalid(&'static str),
    /// The backend refused or could not be reached.
    Rejected {
        message: &'static str,
        source: ApiError,
    },
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Invalid(message) | FormError::Rejected { message, .. } => {
                write!(f, "{message}")
            }
        }
    }
}

impl std::error::Error for FormError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormError::Invalid(_) => None,
            FormError::Rejected { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NoteForm {
    pub content: String,
    pub state: FormState,
}

impl NoteForm {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            state: FormState::default(),
        }
    }

    /// Creates the note, clears the content, then awaits `refresh`.
    ///
    /// # Errors
    /// [`FormError::Invalid`] for blank content (no request is made),
    /// [`FormError::Rejected`] when the API call fails. The content is kept
    /// in both cases.
    pub async fn submit<A: CrmApi>(
        &mut self,
        api: &A,
        student_id: &str,
        author: Option<&str>,
        refresh: impl AsyncFnOnce(),
    ) -> Result<(), FormError> {
        if self.content.trim().is_empty() {
            let err = FormError::Invalid(EMPTY_NOTE);
            self.state.error = Some(err.to_string());
            return Err(err);
        }

        self.state.begin();
        let note = NewNote {
            content: self.content.trim().to_string(),
            student_id: student_id.to_string(),
            author: author.unwrap_or(UNKNOWN_AUTHOR).to_string(),
        };

        if let Err(source) = api.create_note(&note).await {
            tracing::warn!(student_id, error = %source, "note creation failed");
            let err = FormError::Rejected {
                message: NOTE_FAILED,
                source,
            };
            self.state.fail(&err);
            return Err(err);
        }

        self.content.clear();
        self.state.submitting = false;
        self.state.success = true;
        refresh().await;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ReminderForm {
    pub reminder_type: String,
    /// RFC 3339 or local `YYYY-MM-DDTHH:MM[:SS]`
    pub due_date: String,
    pub notes: String,
    pub state: FormState,
}

impl Default for ReminderForm {
    fn default() -> Self {
        Self {
            reminder_type: DEFAULT_REMINDER_TYPE.to_string(),
            due_date: String::new(),
            notes: String::new(),
            state: FormState::default(),
        }
    }
}

impl ReminderForm {
    /// Creates the reminder, resets the fields, then awaits `refresh`.
    ///
    /// # Errors
    /// [`FormError::Invalid`] for a missing or unparseable due date (no
    /// request is made), [`FormError::Rejected`] when the API call fails.
    pub async fn submit<A: CrmApi>(
        &mut self,
        api: &A,
        student_id: &str,
        author: Option<&str>,
        refresh: impl AsyncFnOnce(),
    ) -> Result<(), FormError> {
        let due = match self.validated_due_date() {
            Ok(due) => due,
            Err(err) => {
                self.state.error = Some(err.to_string());
                return Err(err);
            }
        };

        self.state.begin();
        let reminder_type = match self.reminder_type.trim() {
            "" => DEFAULT_REMINDER_TYPE,
            other => other,
        };
        let reminder = NewReminder {
            student_id: student_id.to_string(),
            reminder_type: reminder_type.to_string(),
            due_date: due.to_rfc3339_opts(SecondsFormat::Millis, true),
            notes: self.notes.clone(),
            reason: reminder_type.to_string(),
            author_id: author.unwrap_or(UNKNOWN_AUTHOR).to_string(),
            status: NewReminder::PENDING.to_string(),
        };

        if let Err(source) = api.create_reminder(&reminder).await {
            tracing::warn!(student_id, error = %source, "reminder creation failed");
            let err = FormError::Rejected {
                message: REMINDER_FAILED,
                source,
            };
            self.state.fail(&err);
            return Err(err);
        }

        *self = Self {
            state: FormState {
                success: true,
                ..FormState::default()
            },
            ..Self::default()
        };
        refresh().await;
        Ok(())
    }

    fn validated_due_date(&self) -> Result<DateTime<Utc>, FormError> {
        let raw = self.due_date.trim();
        if raw.is_empty() {
            return Err(FormError::Invalid(MISSING_DUE_DATE));
        }
        parse_due_date(raw).ok_or(FormError::Invalid(INVALID_DUE_DATE))
    }
}

/// Parses an RFC 3339 instant, or a local wall-clock time as produced by a
/// `datetime-local` input. Nonexistent local times (DST gaps) are `None`.
pub fn parse_due_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    let naive = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}
