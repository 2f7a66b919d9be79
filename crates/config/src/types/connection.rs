//! Connection configuration types.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeout, page size).
//! - Define the main `Config` structure combining connection, auth and project.
//! - Provide convenience constructors for tests and embedding.
//!
//! Does NOT handle:
//! - Configuration loading from files/env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - `base_url` is stored without a trailing slash.
//! - The token is never exposed through `Debug`.

use secrecy::SecretString;
use std::time::Duration;

use crate::constants::{DEFAULT_GITLAB_URL, DEFAULT_PER_PAGE, DEFAULT_TIMEOUT_SECS};

/// Connection configuration for a GitLab instance.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the GitLab instance (e.g., https://gitlab.com)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Request timeout
    pub timeout: Duration,
    /// Page size used when listing variables
    pub per_page: u32,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GITLAB_URL.to_string(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Authentication settings.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Personal, project or group access token sent as `PRIVATE-TOKEN`.
    pub token: SecretString,
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
    /// Numeric project id or full `group/project` path
    pub project_id: String,
}

impl Config {
    /// Create a config with default connection settings.
    pub fn new(base_url: String, token: SecretString, project_id: String) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                ..ConnectionConfig::default()
            },
            auth: AuthConfig { token },
            project_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_connection_config() {
        let connection = ConnectionConfig::default();
        assert_eq!(connection.base_url, "https://gitlab.com");
        assert!(!connection.skip_verify);
        assert_eq!(connection.timeout, Duration::from_secs(30));
        assert_eq!(connection.per_page, 100);
    }

    #[test]
    fn test_config_new_uses_defaults() {
        let config = Config::new(
            "https://gitlab.example.com".to_string(),
            SecretString::new("glpat-test".to_string().into()),
            "42".to_string(),
        );
        assert_eq!(config.connection.base_url, "https://gitlab.example.com");
        assert_eq!(config.project_id, "42");
        assert_eq!(config.connection.per_page, 100);
    }

    #[test]
    fn test_debug_does_not_expose_token() {
        let config = Config::new(
            "https://gitlab.example.com".to_string(),
            SecretString::new("glpat-super-secret".to_string().into()),
            "42".to_string(),
        );
        let debug = format!("{:?}", config);
        assert!(!debug.contains("glpat-super-secret"));
    }
}
