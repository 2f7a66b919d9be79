//! Main GitLab REST API client.
//!
//! This module provides the primary [`GitLabClient`] for managing the CI/CD
//! variables of a single project.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `variables`: Variable CRUD methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Loading configuration (see the config crate)
//!
//! # Invariants
//! - Keys are validated before any request is sent.
//! - The token is only exposed when a request header is built.

pub mod builder;
mod variables;

use secrecy::SecretString;

/// GitLab project variables client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use gitlab_secrets_client::GitLabClient;
///
/// let client = GitLabClient::builder()
///     .base_url("https://gitlab.com".to_string())
///     .token(SecretString::new("glpat-...".to_string().into()))
///     .project_id("group/project".to_string())
///     .build()?;
/// ```
#[derive(Debug)]
pub struct GitLabClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) token: SecretString,
    pub(crate) project_id: String,
    pub(crate) per_page: u32,
}

impl GitLabClient {
    /// Create a new client builder.
    pub fn builder() -> builder::GitLabClientBuilder {
        builder::GitLabClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the project id or path.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Page size used when listing.
    pub fn per_page(&self) -> u32 {
        self.per_page
    }
}
