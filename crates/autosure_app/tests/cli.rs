use std::fs;
use std::path::PathBuf;

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("autosure").unwrap();
    cmd.env_remove("AUTOSURE_ENDPOINT");
    cmd
}

fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, bytes).unwrap();
    path
}

async fn analysis_server(body: &'static str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;
    server
}

#[test]
fn nothing_selected_fails_without_network() {
    cmd()
        .args(["--endpoint", "http://127.0.0.1:9/upload"])
        .assert()
        .failure()
        .stdout(contains("Please select a document or image."))
        .stdout(contains("State: Idle"));
}

#[test]
fn unsupported_document_is_rejected_before_submit() {
    let dir = TempDir::new().unwrap();
    let notes = write_file(&dir, "notes.txt", b"plain text");

    cmd()
        .arg("--document")
        .arg(&notes)
        .args(["--endpoint", "http://127.0.0.1:9/upload"])
        .assert()
        .failure()
        .stdout(contains("Only PDF or DOCX files are allowed."))
        .stdout(contains("Please select a document or image."));
}

#[test]
fn unreadable_file_is_reported_and_skipped() {
    cmd()
        .args(["--image", "does/not/exist.png"])
        .args(["--endpoint", "http://127.0.0.1:9/upload"])
        .assert()
        .failure()
        .stderr(contains("does/not/exist.png"))
        .stdout(contains("Please select a document or image."));
}

#[tokio::test(flavor = "multi_thread")]
async fn image_result_lands_in_image_card() {
    let server = analysis_server(
        r#"{"summary":"a house with a red roof","risk":"Low","compliance":"Compliant","confidence":0.91,"status":"Completed"}"#,
    )
    .await;
    let dir = TempDir::new().unwrap();
    let image = write_file(&dir, "roof.png", b"\x89PNG");
    let endpoint = format!("{}/upload", server.uri());

    let output = tokio::task::spawn_blocking(move || {
        cmd()
            .arg("--image")
            .arg(&image)
            .args(["--endpoint", endpoint.as_str()])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    output
        .assert()
        .success()
        .stdout(contains("Selected File: roof.png"))
        .stdout(contains("[Analyzing...] (disabled)"))
        .stdout(contains("Upload successful!"))
        .stdout(contains("-- Image Analysis --"))
        .stdout(contains("Confidence: 91.0%"))
        .stdout(contains("Summary: a house with a red roof"))
        .stdout(contains("-- Document Analysis --").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_response_fails_submission() {
    let server = analysis_server(
        r#"{"error":"Unsupported file type. Upload PDF, DOCX, JPG, or PNG."}"#,
    )
    .await;
    let dir = TempDir::new().unwrap();
    let document = write_file(&dir, "lease.pdf", b"%PDF-1.7");
    let endpoint = format!("{}/upload", server.uri());

    let output = tokio::task::spawn_blocking(move || {
        cmd()
            .arg("--document")
            .arg(&document)
            .args(["--endpoint", endpoint.as_str()])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    output
        .assert()
        .failure()
        .stdout(contains("Upload failed."))
        .stdout(contains("State: Failed"))
        .stdout(contains("Analysis --").not());
}
