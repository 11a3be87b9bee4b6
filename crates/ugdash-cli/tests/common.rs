//! Shared helpers for CLI integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Creates a temp UGDASH_HOME directory for test isolation.
pub fn temp_home() -> TempDir {
    TempDir::new().expect("create temp ugdash home")
}

/// Writes a signed-in session into `home`.
pub fn sign_in(home: &Path) {
    fs::write(
        home.join("session.json"),
        r#"{"token": "test-token", "admin_id": "admin-1"}"#,
    )
    .expect("write session");
}

/// `ugdash` pointed at `home` and `base_url`, with no ambient credentials.
pub fn ugdash(home: &Path, base_url: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("ugdash");
    cmd.env("UGDASH_HOME", home)
        .env("UGDASH_BASE_URL", base_url)
        .env_remove("UGDASH_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

pub fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

/// Base URL of a local port with nothing listening.
pub fn dead_url() -> String {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|l| l.local_addr())
        .map_or(9, |addr| addr.port());
    format!("http://127.0.0.1:{port}")
}
