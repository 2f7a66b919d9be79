//! Client builder for constructing [`GitLabClient`] instances.
//!
//! Responsibilities:
//! - Collect connection settings directly or from a loaded [`Config`].
//! - Build the underlying `reqwest::Client` with timeout, redirect and TLS policy.
//!
//! Does NOT handle:
//! - Reading environment variables (see the config crate).
//!
//! Invariants:
//! - `base_url` has no trailing slash after `build()`.
//! - `skip_verify` only relaxes certificate checks for https URLs.

use secrecy::SecretString;
use std::time::Duration;

use crate::client::GitLabClient;
use crate::error::{ClientError, Result};
use gitlab_secrets_config::{
    Config,
    constants::{DEFAULT_GITLAB_URL, DEFAULT_MAX_REDIRECTS, DEFAULT_PER_PAGE, DEFAULT_TIMEOUT_SECS},
};

/// Builder for [`GitLabClient`].
pub struct GitLabClientBuilder {
    base_url: Option<String>,
    token: Option<SecretString>,
    project_id: Option<String>,
    skip_verify: bool,
    timeout: Duration,
    per_page: u32,
}

impl Default for GitLabClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            token: None,
            project_id: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl GitLabClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    pub fn token(mut self, token: SecretString) -> Self {
        self.token = Some(token);
        self
    }

    pub fn project_id(mut self, project_id: String) -> Self {
        self.project_id = Some(project_id);
        self
    }

    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Copy every setting from a loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.token = Some(config.auth.token.clone());
        self.project_id = Some(config.project_id.clone());
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self.per_page = config.connection.per_page;
        self
    }

    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    pub fn build(self) -> Result<GitLabClient> {
        let base_url = Self::normalize_base_url(
            self.base_url
                .unwrap_or_else(|| DEFAULT_GITLAB_URL.to_string()),
        );
        if base_url.is_empty() {
            return Err(ClientError::InvalidUrl("base_url is required".to_string()));
        }

        let token = self
            .token
            .ok_or_else(|| ClientError::InvalidUrl("token is required".to_string()))?;

        let project_id = self
            .project_id
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| ClientError::InvalidUrl("project_id is required".to_string()))?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(GitLabClient {
            http,
            base_url,
            token,
            project_id,
            per_page: self.per_page.max(1),
        })
    }
}
