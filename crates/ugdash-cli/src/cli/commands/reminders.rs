//! Reminder command handlers.

use anyhow::Result;
use ugdash_core::api::{ApiClient, CrmApi};
use ugdash_core::auth::AuthContext;
use ugdash_core::format::{DateStyle, format_timestamp, or_na};
use ugdash_core::views::ViewError;
use ugdash_core::views::forms::ReminderForm;
use ugdash_core::views::profile::reminder_type_label;
use ugdash_types::Reminder;

use super::{table, view_failure};

/// Raw reminder fields from the command line.
pub struct Draft {
    pub reminder_type: String,
    pub due: String,
    pub notes: String,
}

pub async fn list(api: &ApiClient, student_id: &str) -> Result<()> {
    let reminders = api
        .reminders(student_id)
        .await
        .map_err(|err| view_failure(&ViewError::from_api(&err)))?;
    print_reminders(&reminders);
    Ok(())
}

pub async fn add(
    api: &ApiClient,
    auth: &AuthContext,
    student_id: &str,
    draft: Draft,
) -> Result<()> {
    let mut form = ReminderForm {
        reminder_type: draft.reminder_type,
        due_date: draft.due,
        notes: draft.notes,
        ..Default::default()
    };
    form.submit(api, student_id, auth.admin_id(), async || {
        println!("Reminder scheduled.");
        match api.reminders(student_id).await {
            Ok(reminders) => print_reminders(&reminders),
            Err(err) => tracing::warn!(error = %err, "could not refresh reminders"),
        }
    })
    .await
    .map_err(|err| anyhow::anyhow!("{err}"))
}

fn print_reminders(reminders: &[Reminder]) {
    if reminders.is_empty() {
        println!("No reminders scheduled");
        return;
    }
    let mut t = table(&["Type", "Due", "Status", "Notes"]);
    for reminder in reminders {
        t.add_row(vec![
            reminder_type_label(reminder.reminder_type.as_deref()),
            format_timestamp(reminder.due_date.as_ref(), DateStyle::DateTime),
            or_na(reminder.status.as_deref()).to_string(),
            or_na(reminder.notes.as_deref()).to_string(),
        ]);
    }
    println!("{t}");
}
