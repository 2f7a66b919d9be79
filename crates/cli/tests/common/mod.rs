//! Shared test utilities for gitlab-secrets integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Provide GitLab-shaped JSON payloads for mock responses.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - `GITLAB_TOKEN` is "test-token" and `GITLAB_PROJECT_ID` is "42" unless overridden.

use assert_cmd::Command;
use serde_json::{Value, json};

/// Token sent by every hermetic command.
#[allow(dead_code)]
pub const TOKEN: &str = "test-token";

/// Path of the variables collection for the hermetic project.
#[allow(dead_code)]
pub const VARIABLES_PATH: &str = "/api/v4/projects/42/variables";

/// Returns a hermetic `gitlab-secrets` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `GITLAB_TOKEN` and `GITLAB_PROJECT_ID` are set to satisfy config validation.
/// - Other GitLab env vars are cleared to ensure no leakage from the host.
pub fn gitlab_secrets_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("gitlab-secrets");

    cmd.env("DOTENV_DISABLED", "1");

    cmd.env("GITLAB_TOKEN", TOKEN);
    cmd.env("GITLAB_PROJECT_ID", "42");

    cmd.env_remove("GITLAB_URL")
        .env_remove("GITLAB_TIMEOUT")
        .env_remove("GITLAB_SKIP_VERIFY")
        .env_remove("GITLAB_PER_PAGE")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `gitlab-secrets` command pointed at `url`.
#[allow(dead_code)]
pub fn gitlab_secrets_cmd_with_url(url: &str) -> Command {
    let mut cmd = gitlab_secrets_cmd();
    cmd.env("GITLAB_URL", url);
    cmd
}

/// A variable as GitLab returns it.
#[allow(dead_code)]
pub fn variable_json(key: &str, value: &str) -> Value {
    json!({
        "variable_type": "env_var",
        "key": key,
        "value": value,
        "protected": false,
        "masked": false,
        "raw": false,
        "environment_scope": "*",
        "description": null
    })
}

/// Path of one variable for the hermetic project.
#[allow(dead_code)]
pub fn variable_path(key: &str) -> String {
    format!("{}/{}", VARIABLES_PATH, key)
}

/// A single-page list response.
#[allow(dead_code)]
pub fn list_response(variables: Vec<Value>) -> wiremock::ResponseTemplate {
    wiremock::ResponseTemplate::new(200)
        .insert_header("x-total-pages", "1")
        .insert_header("x-next-page", "")
        .set_body_json(Value::Array(variables))
}
