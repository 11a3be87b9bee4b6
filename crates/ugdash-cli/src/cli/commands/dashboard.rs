//! Dashboard command handler.

use anyhow::Result;
use ugdash_core::api::ApiClient;
use ugdash_core::format::{NOT_AVAILABLE, or_na};
use ugdash_core::views::dashboard::DashboardView;

use super::{table, view_failure};

pub async fn show(api: &ApiClient, recent_limit: usize) -> Result<()> {
    let mut view = DashboardView::default();
    view.load(api).await;
    if let Some(err) = view.state.error() {
        return Err(view_failure(err));
    }

    let stats = view.stats();
    println!("Total Students   {}", stats.total);
    println!("Higher Intent    {}", stats.higher_intent);
    println!("Shortlisting     {}", stats.shortlisting);
    println!("Applying         {}", stats.applying);
    println!("Submitted        {}", stats.submitted);
    println!();

    let recent = view.recent(recent_limit);
    if recent.is_empty() {
        println!("No students yet.");
        return Ok(());
    }

    println!("Recent Students");
    let mut t = table(&["Name", "Email", "Status", "ID"]);
    for student in recent {
        t.add_row(vec![
            student
                .full_name()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            or_na(student.email.as_deref()).to_string(),
            student
                .status
                .as_ref()
                .map_or_else(|| NOT_AVAILABLE.to_string(), |s| s.label()),
            student.id.clone(),
        ]);
    }
    println!("{t}");
    Ok(())
}
