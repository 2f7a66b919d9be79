//! Integration tests for the `download` command.

mod common;

use common::{VARIABLES_PATH, gitlab_secrets_cmd_with_url, list_response, variable_json};
use predicates::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer};

async fn server_with(variables: Vec<serde_json::Value>) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(VARIABLES_PATH))
        .respond_with(list_response(variables))
        .mount(&server)
        .await;
    server
}

fn sample() -> Vec<serde_json::Value> {
    vec![
        variable_json("ZETA", "last"),
        variable_json("ALPHA", "first\nsecond line"),
    ]
}

#[tokio::test]
async fn test_download_yaml_redacted_by_default() {
    let server = server_with(sample()).await;
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("secrets.yml");

    gitlab_secrets_cmd_with_url(&server.uri())
        .args(["--quiet", "download", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("✓ Downloaded 2 variables to"))
        .stderr(predicate::str::contains("Format: yaml"))
        .stderr(predicate::str::contains("Values excluded for security"));

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("# GitLab CI/CD Variables\n# Total: 2\n# Sorted by: key\n\n"));
    assert!(content.contains("ALPHA: ''\n"));
    assert!(!content.contains("first"));
    assert!(content.find("ALPHA").unwrap() < content.find("ZETA").unwrap());
}

#[tokio::test]
async fn test_download_yaml_with_values_uses_literal_block() {
    let server = server_with(sample()).await;
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("nested").join("secrets.yaml");

    gitlab_secrets_cmd_with_url(&server.uri())
        .args(["--quiet", "download", "--include-values", "--output"])
        .arg(&output)
        .assert()
        .success();

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.contains("ALPHA: |-\n  first\n  second line\n"));
    assert!(content.contains("ZETA: last\n"));
}

#[tokio::test]
async fn test_download_format_inferred_from_extension() {
    let server = server_with(sample()).await;
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("vars.json");

    gitlab_secrets_cmd_with_url(&server.uri())
        .args(["--quiet", "download", "--include-values", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("Format: json"));

    let content = std::fs::read_to_string(&output).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(doc["total"], 2);
    assert_eq!(doc["sorted_by"], "key");
    assert_eq!(doc["variables"][0]["key"], "ALPHA");
    assert_eq!(doc["variables"][0]["value"], "first\nsecond line");
}

#[tokio::test]
async fn test_explicit_format_wins_over_extension() {
    let server = server_with(sample()).await;
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("vars.yml");

    gitlab_secrets_cmd_with_url(&server.uri())
        .args(["--quiet", "download", "--format", "env", "--output"])
        .arg(&output)
        .assert()
        .success();

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.contains("ALPHA=\n"));
    assert!(content.contains("ZETA=\n"));
}

#[tokio::test]
async fn test_download_default_path_follows_format() {
    let server = server_with(sample()).await;
    let dir = tempfile::tempdir().unwrap();

    gitlab_secrets_cmd_with_url(&server.uri())
        .current_dir(dir.path())
        .args(["--quiet", "download", "--format", "json"])
        .assert()
        .success();

    assert!(dir.path().join("secrets.json").exists());
    assert!(!dir.path().join("secrets.yml").exists());
}

#[tokio::test]
async fn test_download_structured_yaml() {
    let server = server_with(sample()).await;
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("secrets.yml");

    gitlab_secrets_cmd_with_url(&server.uri())
        .args([
            "--quiet",
            "download",
            "--structured",
            "--sort",
            "key",
            "--reverse",
            "--output",
        ])
        .arg(&output)
        .assert()
        .success();

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("variables:\n- key: ZETA\n"));
    assert!(!content.contains("value:"));
    assert!(content.ends_with("total: 2\nsorted_by: key\n"));
}

#[tokio::test]
async fn test_download_nothing_to_export_writes_no_file() {
    let server = server_with(sample()).await;
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("secrets.yml");

    gitlab_secrets_cmd_with_url(&server.uri())
        .args(["--quiet", "download", "--filter", "^NOTHING", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("No variables match the filter pattern"));

    assert!(!output.exists());
}

#[tokio::test]
async fn test_download_empty_project_writes_no_file() {
    let server = server_with(Vec::new()).await;
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("secrets.yml");

    gitlab_secrets_cmd_with_url(&server.uri())
        .args(["--quiet", "download", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("No variables found"));

    assert!(!output.exists());
}
