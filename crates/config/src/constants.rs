//! Centralized constants for the GitLab secrets workspace.
//!
//! Default values shared by the config, client and CLI crates.

// =============================================================================
// Connection Defaults
// =============================================================================

/// Public GitLab instance used when `GITLAB_URL` is not set.
pub const DEFAULT_GITLAB_URL: &str = "https://gitlab.com";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Pagination
// =============================================================================

/// Page size requested when listing variables. GitLab caps `per_page` at 100.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Largest `per_page` value GitLab accepts.
pub const MAX_PER_PAGE: u32 = 100;

/// Upper bound on pages fetched by a single list call.
///
/// Guards against a provider that ignores the `page` parameter and never
/// returns an empty page.
pub const MAX_LIST_PAGES: u32 = 10_000;

// =============================================================================
// Environment Variable Names
// =============================================================================

pub const ENV_GITLAB_URL: &str = "GITLAB_URL";
pub const ENV_GITLAB_TOKEN: &str = "GITLAB_TOKEN";
pub const ENV_GITLAB_PROJECT_ID: &str = "GITLAB_PROJECT_ID";
pub const ENV_GITLAB_TIMEOUT: &str = "GITLAB_TIMEOUT";
pub const ENV_GITLAB_SKIP_VERIFY: &str = "GITLAB_SKIP_VERIFY";
pub const ENV_GITLAB_PER_PAGE: &str = "GITLAB_PER_PAGE";
