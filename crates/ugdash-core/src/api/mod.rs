//! Typed data-access layer for the CRM backend.
//!
//! Views depend on [`CrmApi`] rather than on the HTTP client so each one can be
//! exercised against an in-memory implementation.

mod client;
mod error;

use std::future::Future;

pub use client::{ApiClient, USER_AGENT};
pub use error::{ApiError, ApiErrorKind, ApiResult};
use ugdash_types::{
    Admin, Application, Document, LoginRequest, LoginResponse, NewNote, NewReminder, Note,
    Reminder, Student,
};

/// Every backend operation the dashboard uses.
pub trait CrmApi {
    /// `POST /auth/login`
    fn login(&self, request: &LoginRequest) -> impl Future<Output = ApiResult<LoginResponse>>;

    /// `GET /students`
    fn students(&self) -> impl Future<Output = ApiResult<Vec<Student>>>;

    /// `GET /students/{id}`
    fn student(&self, id: &str) -> impl Future<Output = ApiResult<Student>>;

    /// `GET /internal_notes?student_id=`
    fn notes(&self, student_id: &str) -> impl Future<Output = ApiResult<Vec<Note>>>;

    /// `POST /internal_notes`
    fn create_note(&self, note: &NewNote) -> impl Future<Output = ApiResult<()>>;

    /// `GET /applications?student_id=`
    fn applications(&self, student_id: &str) -> impl Future<Output = ApiResult<Vec<Application>>>;

    /// `GET /reminders?student_id=`
    fn reminders(&self, student_id: &str) -> impl Future<Output = ApiResult<Vec<Reminder>>>;

    /// `POST /reminders`
    fn create_reminder(&self, reminder: &NewReminder) -> impl Future<Output = ApiResult<()>>;

    /// `GET /documents?student_id=`
    fn documents(&self, student_id: &str) -> impl Future<Output = ApiResult<Vec<Document>>>;

    /// `GET /admins?admin_id=`
    fn admin(&self, admin_id: &str) -> impl Future<Output = ApiResult<Admin>>;
}
