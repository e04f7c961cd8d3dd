//! Integration tests for the `folio` CLI binary.
//!
//! Argument parsing, help output, completions and config handling run with
//! no backend at all; the data commands run against a wiremock server.
#![allow(clippy::unwrap_used)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `folio` binary with env isolation.
///
/// Clears all `FOLIO_*` env vars and points config directories at `home`
/// so tests never touch the user's real configuration.
fn folio_cmd_in(home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("folio");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("FOLIO_PROFILE")
        .env_remove("FOLIO_DEFAULT_PROFILE")
        .env_remove("FOLIO_API_URL")
        .env_remove("FOLIO_OUTPUT")
        .env_remove("FOLIO_TIMEOUT")
        .env_remove("FOLIO_RETRIES")
        .env_remove("FOLIO_SEARCH_POLICY");
    cmd
}

fn folio_cmd() -> assert_cmd::Command {
    folio_cmd_in(Path::new("/tmp/folio-cli-test-nonexistent"))
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn project(id: u64, title: &str, status: &str, tech: &[&str]) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "description": "",
        "technologies": tech,
        "status": status,
        "difficulty": "Intermediate",
        "team": { "type": "solo" }
    })
}

async fn backend() -> (MockServer, String) {
    let server = MockServer::start().await;
    let api = format!("{}/api", server.uri());
    (server, api)
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = folio_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    folio_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("portfolio")
            .and(predicate::str::contains("projects"))
            .and(predicate::str::contains("blog"))
            .and(predicate::str::contains("certifications")),
    );
}

#[test]
fn test_version_flag() {
    folio_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("folio"));
}

#[test]
fn test_completions_zsh() {
    folio_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_invalid_status_is_a_usage_error() {
    let output = folio_cmd()
        .args(["projects", "list", "--status", "archived"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_zero_timeout_is_a_usage_error() {
    let output = folio_cmd()
        .args(["--timeout", "0", "hero"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("timeout"));
}

// ── Media (offline) ─────────────────────────────────────────────────

#[test]
fn test_media_normalize_drive_link() {
    folio_cmd()
        .args([
            "media",
            "normalize",
            "https://drive.google.com/file/d/1AbCdEfGhIjKlMnOpQrStUvWxYz012345/view?usp=sharing",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://drive.google.com/file/d/1AbCdEfGhIjKlMnOpQrStUvWxYz012345/preview",
        ));
}

#[test]
fn test_media_normalize_rejects_garbage() {
    let output = folio_cmd()
        .args(["media", "normalize", "not a url"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("not a usable image URL"));
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_path_under_home() {
    let home = tempfile::tempdir().unwrap();
    let output = folio_cmd_in(home.path())
        .args(["config", "path"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.trim().ends_with("config.toml"), "got: {stdout}");
    assert!(stdout.contains(home.path().to_str().unwrap()), "got: {stdout}");
}

#[test]
fn test_config_init_then_profiles() {
    let home = tempfile::tempdir().unwrap();

    folio_cmd_in(home.path())
        .args(["config", "init", "--name", "prod", "--url", "https://api.example.com/api"])
        .assert()
        .success();

    folio_cmd_in(home.path())
        .args(["config", "profiles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("prod *"));

    let again = folio_cmd_in(home.path())
        .args(["config", "init", "--name", "prod"])
        .output()
        .unwrap();
    assert_eq!(again.status.code(), Some(1));
    assert!(combined_output(&again).contains("already exists"));
}

#[test]
fn test_unknown_profile_is_a_usage_error() {
    let home = tempfile::tempdir().unwrap();
    let output = folio_cmd_in(home.path())
        .args(["--profile", "staging", "hero"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("Profile 'staging' not found"));
}

// ── Backend-bound commands ──────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_projects_list_applies_filters() {
    let (server, api) = backend().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "featured": [project(1, "Cloud Audit", "Completed", &["Go"])],
            "categories": {
                "web": [
                    project(2, "Cloud Storage", "Planned", &["React"]),
                    project(3, "Portfolio", "Completed", &["React"])
                ]
            }
        })))
        .mount(&server)
        .await;

    folio_cmd()
        .args(["--api-url", &api, "-o", "plain"])
        .args(["projects", "list", "--status", "completed"])
        .assert()
        .success()
        .stdout("1\n3\n");

    folio_cmd()
        .args(["--api-url", &api, "-o", "plain"])
        .args(["projects", "list", "--status", "completed", "--search", "CLOUD"])
        .assert()
        .success()
        .stdout("1\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_project_exits_not_found() {
    let (server, api) = backend().await;
    Mock::given(method("GET"))
        .and(path("/api/projects/9"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let output = folio_cmd()
        .args(["--api-url", &api, "projects", "show", "9"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
    assert!(combined_output(&output).contains("Project with ID 9 not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_blog_list_pages_newest_first() {
    let (server, api) = backend().await;
    Mock::given(method("GET"))
        .and(path("/api/blog/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "posts": [
                { "id": 1, "slug": "old", "title": "Old", "category": "Cloud", "publishedDate": "2024-01-01" },
                { "id": 2, "slug": "new", "title": "New", "category": "cloud", "publishedDate": "2024-03-01" },
                { "id": 3, "slug": "rust", "title": "Rust", "category": "Rust", "publishedDate": "2024-04-01" }
            ]
        })))
        .mount(&server)
        .await;

    folio_cmd()
        .args(["--api-url", &api, "-o", "plain"])
        .args(["blog", "list", "--category", "Cloud"])
        .assert()
        .success()
        .stdout("new\nold\n");

    let output = folio_cmd()
        .args(["--api-url", &api, "-o", "json"])
        .args(["blog", "list", "--query", "page=2"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let page: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(page["page"], 2);
    assert_eq!(page["total_items"], 3);
    assert_eq!(page["items"].as_array().unwrap().len(), 0);
}

#[test]
fn test_unreachable_backend_exits_connection() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let output = folio_cmd()
        .args(["--api-url", &format!("http://127.0.0.1:{port}/api"), "hero"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(7));
    assert!(combined_output(&output).contains("No response received from server"));
}
