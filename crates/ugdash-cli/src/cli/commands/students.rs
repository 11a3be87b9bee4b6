//! Student command handlers.

use anyhow::{Result, anyhow};
use ugdash_core::api::ApiClient;
use ugdash_core::format::{DateStyle, NOT_AVAILABLE, format_timestamp, or_na};
use ugdash_core::views::profile::{DocumentKind, Section, StudentProfile, reminder_type_label};
use ugdash_core::views::students::{StudentFilter, StudentsView};
use ugdash_types::{Student, StudentStatus};

use super::{table, view_failure};

pub fn build_filter(
    search: Option<String>,
    status: Option<String>,
    country: Option<String>,
    grade: Option<String>,
) -> Result<StudentFilter> {
    let status = status
        .map(|s| s.parse::<StudentStatus>().map_err(|e| anyhow!("--status: {e}")))
        .transpose()?;
    Ok(StudentFilter {
        search: search.unwrap_or_default().trim().to_string(),
        status,
        country: country.unwrap_or_default().trim().to_string(),
        grade: grade.unwrap_or_default().trim().to_string(),
    })
}

pub async fn list(api: &ApiClient, filter: StudentFilter) -> Result<()> {
    let mut view = StudentsView::new(filter);
    view.load(api).await;
    if let Some(err) = view.state.error() {
        return Err(view_failure(err));
    }

    if let Some((title, hint)) = view.empty_message() {
        println!("{title}");
        println!("{hint}");
        return Ok(());
    }

    let visible = view.visible();
    let mut t = table(&["Name", "Email", "Country", "Grade", "Status", "ID"]);
    for student in &visible {
        t.add_row(vec![
            display_name(student),
            or_na(student.email.as_deref()).to_string(),
            or_na(student.country.as_deref()).to_string(),
            or_na(student.grade.as_deref()).to_string(),
            status_label(student.status.as_ref()),
            student.id.clone(),
        ]);
    }
    println!("{t}");
    println!("{} of {} students", visible.len(), view.all().len());
    Ok(())
}

pub async fn show(api: &ApiClient, id: &str) -> Result<()> {
    let profile = StudentProfile::load(api, id)
        .await
        .map_err(|err| view_failure(&err))?;
    let student = &profile.student;

    println!("{}", display_name(student));
    println!("  ID:           {}", student.id);
    println!("  Email:        {}", or_na(student.email.as_deref()));
    println!("  Phone:        {}", or_na(student.phone_number.as_deref()));
    println!("  Country:      {}", or_na(student.country.as_deref()));
    println!("  Grade:        {}", or_na(student.grade.as_deref()));
    println!("  Status:       {}", status_label(student.status.as_ref()));
    println!(
        "  Created:      {}",
        format_timestamp(student.created_at.as_ref(), DateStyle::Date)
    );
    println!(
        "  Last contact: {}",
        format_timestamp(student.last_contact.as_ref(), DateStyle::Date)
    );

    let progress = profile.progress();
    println!(
        "  Progress:     stage {} of {} ({}%)",
        progress.current_index + 1,
        progress.total,
        progress.percent
    );

    heading(&profile, Section::Applications, "Applications");
    if profile.applications.is_empty() {
        println!("  No applications yet");
    }
    for app in &profile.applications {
        println!(
            "  {} - {} [{}] submitted {}",
            or_na(app.university_name.as_deref()),
            or_na(app.program.as_deref()),
            status_label(app.status.as_ref()),
            format_timestamp(app.submitted_at.as_ref(), DateStyle::Date)
        );
    }

    heading(&profile, Section::Notes, "Internal Notes");
    if profile.notes.is_empty() {
        println!("  No notes yet");
    }
    for note in &profile.notes {
        println!(
            "  [{}] {}: {}",
            format_timestamp(note.created_at.as_ref(), DateStyle::ShortDateTime),
            or_na(note.author.as_deref()),
            note.content
        );
    }

    heading(&profile, Section::Reminders, "Reminders");
    if profile.reminders.is_empty() {
        println!("  No reminders scheduled");
    }
    for reminder in &profile.reminders {
        println!(
            "  {} due {} ({})",
            reminder_type_label(reminder.reminder_type.as_deref()),
            format_timestamp(reminder.due_date.as_ref(), DateStyle::DateTime),
            or_na(reminder.status.as_deref())
        );
    }

    heading(&profile, Section::Documents, "Documents");
    if profile.documents.is_empty() {
        println!("  No documents uploaded");
    }
    for doc in &profile.documents {
        println!(
            "  {} ({}) uploaded {}",
            or_na(doc.display_name()),
            DocumentKind::of(doc).label(),
            format_timestamp(doc.uploaded_at.as_ref(), DateStyle::Date)
        );
    }

    Ok(())
}

fn heading(profile: &StudentProfile, section: Section, title: &str) {
    println!();
    if profile.is_degraded(section) {
        println!("{title} (could not load {section})");
    } else {
        println!("{title}");
    }
}

fn display_name(student: &Student) -> String {
    student
        .full_name()
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn status_label(status: Option<&StudentStatus>) -> String {
    status.map_or_else(|| NOT_AVAILABLE.to_string(), StudentStatus::label)
}
