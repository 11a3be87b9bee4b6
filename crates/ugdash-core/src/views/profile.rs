//! Student profile: the student record plus every section attached to it.

use std::fmt;
use std::path::Path;

use ugdash_types::{Application, Document, Note, Reminder, Student, StudentStatus};

use super::ViewError;
use super::forms::{FormError, NoteForm, ReminderForm};
use crate::api::{ApiResult, CrmApi};
use crate::format::title_case_tag;

const STUDENT_NOT_FOUND: &str = "Student not found";
const STUDENT_LOAD_FAILED: &str = "Failed to load student data";

/// A list section of the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Notes,
    Applications,
    Reminders,
    Documents,
}

impl Section {
    pub fn label(self) -> &'static str {
        match self {
            Section::Notes => "notes",
            Section::Applications => "applications",
            Section::Reminders => "reminders",
            Section::Documents => "documents",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone)]
pub struct StudentProfile {
    pub student: Student,
    pub notes: Vec<Note>,
    pub applications: Vec<Application>,
    pub reminders: Vec<Reminder>,
    pub documents: Vec<Document>,
    /// Sections whose fetch failed and are shown empty.
    pub degraded: Vec<Section>,
}

impl StudentProfile {
    /// Loads the student, then all four sections concurrently.
    ///
    /// # Errors
    /// Only the student fetch is fatal. A failed section is left empty and
    /// listed in [`StudentProfile::degraded`].
    pub async fn load<A: CrmApi>(api: &A, id: &str) -> Result<Self, ViewError> {
        let student = api.student(id).await.map_err(|err| {
            tracing::warn!(student_id = id, error = %err, "student fetch failed");
            let message = if err.is_not_found() {
                STUDENT_NOT_FOUND
            } else {
                STUDENT_LOAD_FAILED
            };
            ViewError::new(Some(err.kind), message)
        })?;

        let (notes, applications, reminders, documents) = futures_util::join!(
            api.notes(id),
            api.applications(id),
            api.reminders(id),
            api.documents(id),
        );

        let mut degraded = Vec::new();
        let notes = section(notes, Section::Notes, &mut degraded);
        let applications = section(applications, Section::Applications, &mut degraded);
        let reminders = section(reminders, Section::Reminders, &mut degraded);
        let documents = section(documents, Section::Documents, &mut degraded);
        Ok(Self {
            student,
            notes,
            applications,
            reminders,
            documents,
            degraded,
        })
    }

    pub fn is_degraded(&self, section: Section) -> bool {
        self.degraded.contains(&section)
    }

    pub async fn refresh_notes<A: CrmApi>(&mut self, api: &A) {
        let result = api.notes(&self.student.id).await;
        self.notes = self.settle(result, Section::Notes);
    }

    pub async fn refresh_reminders<A: CrmApi>(&mut self, api: &A) {
        let result = api.reminders(&self.student.id).await;
        self.reminders = self.settle(result, Section::Reminders);
    }

    /// Submits `form` for this student and re-fetches the notes on success.
    ///
    /// # Errors
    /// Whatever [`NoteForm::submit`] reports.
    pub async fn add_note<A: CrmApi>(
        &mut self,
        api: &A,
        form: &mut NoteForm,
        author: Option<&str>,
    ) -> Result<(), FormError> {
        let id = self.student.id.clone();
        form.submit(api, &id, author, async || self.refresh_notes(api).await)
            .await
    }

    /// Submits `form` for this student and re-fetches the reminders on success.
    ///
    /// # Errors
    /// Whatever [`ReminderForm::submit`] reports.
    pub async fn add_reminder<A: CrmApi>(
        &mut self,
        api: &A,
        form: &mut ReminderForm,
        author: Option<&str>,
    ) -> Result<(), FormError> {
        let id = self.student.id.clone();
        form.submit(api, &id, author, async || self.refresh_reminders(api).await)
            .await
    }

    pub fn progress(&self) -> ApplicationProgress {
        application_progress(self.student.status.as_ref())
    }

    fn settle<T>(&mut self, result: ApiResult<Vec<T>>, which: Section) -> Vec<T> {
        self.degraded.retain(|s| *s != which);
        section(result, which, &mut self.degraded)
    }
}

fn section<T>(result: ApiResult<Vec<T>>, which: Section, degraded: &mut Vec<Section>) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(section = %which, error = %err, "profile section unavailable");
            degraded.push(which);
            Vec::new()
        }
    }
}

/// Position of a student in the four-stage pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplicationProgress {
    pub percent: u8,
    pub current_index: usize,
    pub total: usize,
}

/// Unknown or missing statuses count as the first stage.
pub fn application_progress(status: Option<&StudentStatus>) -> ApplicationProgress {
    let total = StudentStatus::STAGES.len();
    let current_index = status.and_then(StudentStatus::stage_index).unwrap_or(0);
    let percent = u8::try_from((current_index + 1) * 100 / total).unwrap_or(100);
    ApplicationProgress {
        percent,
        current_index,
        total,
    }
}

/// `call_student` → `Call Student`; missing → `Unknown`.
pub fn reminder_type_label(tag: Option<&str>) -> String {
    match tag {
        Some(tag) if !tag.trim().is_empty() => title_case_tag(tag),
        _ => "Unknown".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Word,
    Spreadsheet,
    Presentation,
    Image,
    Archive,
    Other,
    Unknown,
}

impl DocumentKind {
    pub fn from_file_name(name: Option<&str>) -> Self {
        let Some(name) = name.filter(|n| !n.trim().is_empty()) else {
            return DocumentKind::Unknown;
        };
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("pdf") => DocumentKind::Pdf,
            Some("doc" | "docx") => DocumentKind::Word,
            Some("xls" | "xlsx") => DocumentKind::Spreadsheet,
            Some("ppt" | "pptx") => DocumentKind::Presentation,
            Some("jpg" | "jpeg" | "png" | "gif") => DocumentKind::Image,
            Some("zip" | "rar") => DocumentKind::Archive,
            _ => DocumentKind::Other,
        }
    }

    pub fn of(document: &Document) -> Self {
        Self::from_file_name(document.file_name.as_deref().or(document.name.as_deref()))
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Pdf => "PDF Document",
            DocumentKind::Word => "Word Document",
            DocumentKind::Spreadsheet => "Excel Spreadsheet",
            DocumentKind::Presentation => "PowerPoint Presentation",
            DocumentKind::Image => "Image File",
            DocumentKind::Archive => "Archive File",
            DocumentKind::Other => "Document",
            DocumentKind::Unknown => "Unknown",
        }
    }
}
