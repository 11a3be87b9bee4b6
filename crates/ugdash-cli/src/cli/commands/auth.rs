//! Session command handlers.

use anyhow::Result;
use ugdash_core::api::{ApiClient, CrmApi};
use ugdash_core::auth::{AuthContext, redact_token};
use ugdash_core::views::login::LoginView;

pub async fn login(
    api: &ApiClient,
    auth: &mut AuthContext,
    email: String,
    password: String,
) -> Result<()> {
    let mut view = LoginView::new(email, password);
    if let Err(err) = view.submit(api, auth).await {
        tracing::debug!(error = ?err, "login failed");
        anyhow::bail!("{}", err.user_message());
    }

    println!("Signed in as {}", view.email.trim());
    println!("Session saved to {}", auth.path().display());
    Ok(())
}

pub fn logout(auth: &mut AuthContext) -> Result<()> {
    if !auth.is_authenticated() {
        println!("Not signed in.");
        return Ok(());
    }
    auth.logout()?;
    println!("Signed out.");
    Ok(())
}

pub async fn whoami(api: &ApiClient, auth: &AuthContext) -> Result<()> {
    let Some(token) = auth.token() else {
        println!("Not signed in.");
        return Ok(());
    };

    let Some(admin_id) = auth.admin_id() else {
        println!("Signed in (token {})", redact_token(token));
        return Ok(());
    };

    // The profile lookup is cosmetic; a failure still reports the session.
    match api.admin(admin_id).await {
        Ok(admin) => println!("Signed in as {} ({admin_id})", admin.display_name()),
        Err(err) => {
            tracing::debug!(error = %err, "admin lookup failed");
            println!("Signed in ({admin_id})");
        }
    }
    Ok(())
}
