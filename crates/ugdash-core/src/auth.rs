//! Auth context: the signed-in session and its persistent storage.
//!
//! The session lives in `<home>/session.json` with restricted permissions
//! (0600). The token is never logged or displayed in full.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::paths;

/// Persisted session contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_id: Option<String>,
}

/// Process-wide auth state, created once at startup and passed explicitly to
/// whatever needs it.
#[derive(Debug, Clone)]
pub struct AuthContext {
    path: PathBuf,
    session: Session,
}

impl AuthContext {
    /// Loads the session stored at the default location.
    ///
    /// # Errors
    /// Returns an error if the session file exists but cannot be read.
    pub fn init_default() -> Result<Self> {
        Self::init(paths::session_path())
    }

    /// Loads the session stored at `path`. A missing file means signed out.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn init(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let session = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read session from {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse session from {}", path.display()))?
        } else {
            Session::default()
        };
        Ok(Self { path, session })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    pub fn admin_id(&self) -> Option<&str> {
        self.session.admin_id.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.token.is_some()
    }

    /// Stores a new session and writes it back immediately.
    ///
    /// The in-memory session only changes once the file is written.
    ///
    /// # Errors
    /// Returns an error if the session file cannot be written.
    pub fn login(&mut self, token: String, admin_id: Option<String>) -> Result<()> {
        let session = Session {
            token: Some(token),
            admin_id,
        };
        self.save(&session)?;
        tracing::info!(admin_id = ?session.admin_id, "session stored");
        self.session = session;
        Ok(())
    }

    /// Clears the session in memory and on disk.
    ///
    /// # Errors
    /// Returns an error if the session file exists but cannot be removed.
    pub fn logout(&mut self) -> Result<()> {
        self.session = Session::default();
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove {}", self.path.display()))?;
        }
        tracing::info!("session cleared");
        Ok(())
    }

    fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents =
            serde_json::to_string_pretty(session).context("Failed to serialize session")?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&self.path)
                .with_context(|| format!("Failed to open {} for writing", self.path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        #[cfg(not(unix))]
        {
            fs::write(&self.path, contents)
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        Ok(())
    }
}

/// Shortens a token for display: first 6 chars followed by an ellipsis.
pub fn redact_token(token: &str) -> String {
    let prefix: String = token.chars().take(6).collect();
    format!("{prefix}…")
}
