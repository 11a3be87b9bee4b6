//! Note and reminder forms driven from the command line.

mod common;

use common::{can_bind_localhost, sign_in, temp_home, ugdash};
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_blank_note_makes_no_request() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    sign_in(home.path());
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/internal_notes"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    ugdash(home.path(), &server.uri())
        .args(["notes", "add", "s1", "--content", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a note"));
}

#[tokio::test]
async fn test_add_note_then_lists_refetched_notes() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    sign_in(home.path());
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/internal_notes"))
        .and(body_partial_json(json!({
            "content": "Sent brochure",
            "student_id": "s1",
            "author": "admin-1"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "n2"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/internal_notes"))
        .and(query_param("student_id", "s1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "n2", "content": "Sent brochure", "author": "admin-1"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    ugdash(home.path(), &server.uri())
        .args(["notes", "add", "s1", "--content", "Sent brochure"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note added."))
        .stdout(predicate::str::contains("admin-1: Sent brochure"));
}

#[tokio::test]
async fn test_note_failure_message() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    sign_in(home.path());
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/internal_notes"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    ugdash(home.path(), &server.uri())
        .args(["notes", "add", "s1", "--content", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Failed to create note. Please try again.",
        ));
}

#[tokio::test]
async fn test_empty_notes_list() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    sign_in(home.path());
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/internal_notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    ugdash(home.path(), &server.uri())
        .args(["notes", "list", "s1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes yet"));
}

#[tokio::test]
async fn test_reminder_validation_and_payload() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    sign_in(home.path());
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/reminders"))
        .and(body_partial_json(json!({
            "student_id": "s1",
            "type": "send_documents",
            "reason": "send_documents",
            "due_date": "2026-10-20T09:30:00.000Z",
            "status": "pending",
            "author_id": "admin-1"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/reminders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "r1", "type": "send_documents", "status": "pending",
             "due_date": {"_seconds": 1792488600}}
        ])))
        .mount(&server)
        .await;

    ugdash(home.path(), &server.uri())
        .args(["reminders", "add", "s1", "--due", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a valid due date"));

    ugdash(home.path(), &server.uri())
        .args([
            "reminders",
            "add",
            "s1",
            "--due",
            "2026-10-20T09:30:00Z",
            "--type",
            "send_documents",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reminder scheduled."))
        .stdout(predicate::str::contains("Send Documents"));
}
