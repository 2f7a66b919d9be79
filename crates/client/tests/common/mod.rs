//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use std::path::Path;

#[allow(unused_imports)]
pub use gitlab_secrets_client::{ClientError, GitLabClient, Variable, VariableUpdate, endpoints};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use secrecy::SecretString;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Project id used by every mock.
#[allow(dead_code)]
pub const PROJECT_ID: &str = "42";

/// Token used by every mock.
#[allow(dead_code)]
pub const TOKEN: &str = "glpat-test-token";

/// Load a JSON fixture relative to `fixtures/`.
#[allow(dead_code)]
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let full_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// Client pointed at a mock server.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> GitLabClient {
    client_with_page_size(server, 100)
}

/// Client pointed at a mock server with a custom page size.
#[allow(dead_code)]
pub fn client_with_page_size(server: &MockServer, per_page: u32) -> GitLabClient {
    GitLabClient::builder()
        .base_url(server.uri())
        .token(SecretString::new(TOKEN.to_string().into()))
        .project_id(PROJECT_ID.to_string())
        .per_page(per_page)
        .build()
        .expect("client should build")
}

/// Path of the variables collection for `PROJECT_ID`.
#[allow(dead_code)]
pub fn variables_path() -> String {
    format!("/api/v4/projects/{PROJECT_ID}/variables")
}
