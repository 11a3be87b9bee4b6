//! CLI command handlers.

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod notes;
pub mod reminders;
pub mod students;

use anyhow::Result;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use ugdash_core::auth::AuthContext;
use ugdash_core::views::ViewError;

/// Stops protected commands before any request is made.
pub fn require_session(auth: &AuthContext) -> Result<()> {
    if !auth.is_authenticated() {
        anyhow::bail!("Not signed in. Run `ugdash login --email <EMAIL>` first.");
    }
    Ok(())
}

/// Table with a bold header row, sized to the terminal when there is one.
pub fn table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold)),
        );
    table
}

/// Turns a view failure into the error printed on exit.
pub fn view_failure(err: &ViewError) -> anyhow::Error {
    anyhow::anyhow!("{}", err.message)
}
