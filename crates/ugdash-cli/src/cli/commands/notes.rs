//! Note command handlers.

use anyhow::Result;
use ugdash_core::api::{ApiClient, CrmApi};
use ugdash_core::auth::AuthContext;
use ugdash_core::format::{DateStyle, format_timestamp, or_na};
use ugdash_core::views::ViewError;
use ugdash_core::views::forms::NoteForm;
use ugdash_types::Note;

use super::view_failure;

pub async fn list(api: &ApiClient, student_id: &str) -> Result<()> {
    let notes = api
        .notes(student_id)
        .await
        .map_err(|err| view_failure(&ViewError::from_api(&err)))?;
    print_notes(&notes);
    Ok(())
}

pub async fn add(
    api: &ApiClient,
    auth: &AuthContext,
    student_id: &str,
    content: String,
) -> Result<()> {
    let mut form = NoteForm::new(content);
    form.submit(api, student_id, auth.admin_id(), async || {
        println!("Note added.");
        match api.notes(student_id).await {
            Ok(notes) => print_notes(&notes),
            Err(err) => tracing::warn!(error = %err, "could not refresh notes"),
        }
    })
    .await
    .map_err(|err| anyhow::anyhow!("{err}"))
}

fn print_notes(notes: &[Note]) {
    if notes.is_empty() {
        println!("No notes yet");
        return;
    }
    for note in notes {
        println!(
            "[{}] {}: {}",
            format_timestamp(note.created_at.as_ref(), DateStyle::ShortDateTime),
            or_na(note.author.as_deref()),
            note.content
        );
    }
}
