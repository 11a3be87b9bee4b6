//! Wire records shared by the ugdash client crates.
//!
//! Every record mirrors what the CRM backend returns. Fields other than
//! identifiers are optional because the backend omits them freely.

mod de;

pub mod activity;
pub mod payload;
pub mod records;
pub mod session;
pub mod status;
pub mod student;
pub mod timestamp;

pub use activity::{NewNote, NewReminder, Note, Reminder};
pub use payload::Payload;
pub use records::{Application, Document};
pub use session::{Admin, LoginRequest, LoginResponse};
pub use status::StudentStatus;
pub use student::Student;
pub use timestamp::Timestamp;
