//! Per-screen state and derivations.
//!
//! Each view fetches its own data through [`CrmApi`](crate::api::CrmApi),
//! keeps it locally, and derives what gets displayed. No view reads another
//! view's state.

pub mod dashboard;
pub mod forms;
pub mod login;
pub mod profile;
pub mod students;

use std::fmt;

use crate::api::{ApiError, ApiErrorKind};

/// Lifecycle of a view's primary fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Failed(ViewError),
    Ready(T),
}

impl<T> LoadState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ViewError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// A failure already translated into what the user should read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewError {
    /// Underlying API error kind, when the failure came from the API
    pub kind: Option<ApiErrorKind>,
    pub message: String,
}

impl ViewError {
    pub fn new(kind: Option<ApiErrorKind>, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Uses the generic per-kind message of `err`.
    pub fn from_api(err: &ApiError) -> Self {
        Self::new(Some(err.kind), err.user_message())
    }
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ViewError {}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory `CrmApi` for view tests.

    use std::cell::RefCell;
    use std::collections::HashMap;

    use ugdash_types::{
        Admin, Application, Document, LoginRequest, LoginResponse, NewNote, NewReminder, Note,
        Reminder, Student,
    };

    use crate::api::{ApiError, ApiErrorKind, ApiResult, CrmApi};

    #[derive(Default)]
    pub(crate) struct FakeApi {
        pub students: Vec<Student>,
        pub notes: RefCell<Vec<Note>>,
        pub reminders: RefCell<Vec<Reminder>>,
        pub applications: Vec<Application>,
        pub documents: Vec<Document>,
        /// Operation name → error kind to fail with.
        pub failures: RefCell<HashMap<&'static str, ApiErrorKind>>,
        /// Operation names in call order.
        pub calls: RefCell<Vec<&'static str>>,
        pub created_reminders: RefCell<Vec<NewReminder>>,
    }

    impl FakeApi {
        pub fn with_students(students: Vec<Student>) -> Self {
            Self {
                students,
                ..Default::default()
            }
        }

        pub fn fail(&self, op: &'static str, kind: ApiErrorKind) {
            self.failures.borrow_mut().insert(op, kind);
        }

        pub fn heal(&self, op: &'static str) {
            self.failures.borrow_mut().remove(op);
        }

        pub fn call_count(&self, op: &str) -> usize {
            self.calls.borrow().iter().filter(|c| **c == op).count()
        }

        fn enter(&self, op: &'static str) -> ApiResult<()> {
            self.calls.borrow_mut().push(op);
            match self.failures.borrow().get(op) {
                Some(ApiErrorKind::Unauthorized) => Err(ApiError::http_status(401, "")),
                Some(ApiErrorKind::NotFound) => Err(ApiError::http_status(404, "")),
                Some(ApiErrorKind::Network) => Err(ApiError::http_status(503, "")),
                Some(ApiErrorKind::Api) => Err(ApiError::http_status(400, "")),
                None => Ok(()),
            }
        }
    }

    pub(crate) fn student(id: &str, first: &str, last: &str, status: &str) -> Student {
        Student {
            id: id.to_string(),
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            email: Some(format!("{}@example.com", first.to_lowercase())),
            status: Some(status.to_string().into()),
            ..Default::default()
        }
    }

    fn for_student<T: Clone>(items: &[T], id: &str, get: impl Fn(&T) -> Option<&str>) -> Vec<T> {
        items.iter().filter(|i| get(i) == Some(id)).cloned().collect()
    }

    impl CrmApi for FakeApi {
        async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
            self.enter("login")?;
            Ok(LoginResponse {
                token: format!("token-for-{}", request.email),
                admin_id: Some("admin-1".to_string()),
                admin: None,
            })
        }

        async fn students(&self) -> ApiResult<Vec<Student>> {
            self.enter("students")?;
            Ok(self.students.clone())
        }

        async fn student(&self, id: &str) -> ApiResult<Student> {
            self.enter("student")?;
            self.students
                .iter()
                .find(|s| s.id == id)
                .cloned()
                .ok_or_else(|| ApiError::http_status(404, r#"{"error": "Student not found"}"#))
        }

        async fn notes(&self, student_id: &str) -> ApiResult<Vec<Note>> {
            self.enter("notes")?;
            Ok(for_student(&self.notes.borrow(), student_id, |n| {
                n.student_id.as_deref()
            }))
        }

        async fn create_note(&self, note: &NewNote) -> ApiResult<()> {
            self.enter("create_note")?;
            let next_id = self.notes.borrow().len() + 1;
            self.notes.borrow_mut().push(Note {
                id: Some(format!("n{next_id}")),
                content: note.content.clone(),
                author: Some(note.author.clone()),
                student_id: Some(note.student_id.clone()),
                created_at: None,
            });
            Ok(())
        }

        async fn applications(&self, _student_id: &str) -> ApiResult<Vec<Application>> {
            self.enter("applications")?;
            Ok(self.applications.clone())
        }

        async fn reminders(&self, student_id: &str) -> ApiResult<Vec<Reminder>> {
            self.enter("reminders")?;
            Ok(for_student(&self.reminders.borrow(), student_id, |r| {
                r.student_id.as_deref()
            }))
        }

        async fn create_reminder(&self, reminder: &NewReminder) -> ApiResult<()> {
            self.enter("create_reminder")?;
            self.created_reminders.borrow_mut().push(reminder.clone());
            self.reminders.borrow_mut().push(Reminder {
                reminder_type: Some(reminder.reminder_type.clone()),
                reason: Some(reminder.reason.clone()),
                notes: Some(reminder.notes.clone()),
                status: Some(reminder.status.clone()),
                student_id: Some(reminder.student_id.clone()),
                author_id: Some(reminder.author_id.clone()),
                ..Default::default()
            });
            Ok(())
        }

        async fn documents(&self, _student_id: &str) -> ApiResult<Vec<Document>> {
            self.enter("documents")?;
            Ok(self.documents.clone())
        }

        async fn admin(&self, admin_id: &str) -> ApiResult<Admin> {
            self.enter("admin")?;
            Ok(Admin {
                id: admin_id.to_string(),
                name: Some("Ops Admin".to_string()),
                ..Default::default()
            })
        }
    }
}
