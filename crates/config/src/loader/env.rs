//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read the `GITLAB_*` variables and apply them to a `ConfigLoader`.
//! - Provide a helper for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Range validation (see `ConfigLoader::build`).
//! - .env file loading (handled by `ConfigLoader::load_dotenv`).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Unparseable numeric or boolean values return `ConfigError::InvalidValue`.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_GITLAB_PER_PAGE, ENV_GITLAB_PROJECT_ID, ENV_GITLAB_SKIP_VERIFY, ENV_GITLAB_TIMEOUT,
    ENV_GITLAB_TOKEN, ENV_GITLAB_URL,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Parse a boolean flag the way shells usually spell them.
pub(crate) fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be true or false".to_string(),
        }),
    }
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none(ENV_GITLAB_URL) {
        loader.set_base_url(Some(url));
    }
    if let Some(token) = env_var_or_none(ENV_GITLAB_TOKEN) {
        loader.set_token(Some(SecretString::new(token.into())));
    }
    if let Some(project_id) = env_var_or_none(ENV_GITLAB_PROJECT_ID) {
        loader.set_project_id(Some(project_id));
    }
    if let Some(skip) = env_var_or_none(ENV_GITLAB_SKIP_VERIFY) {
        loader.set_skip_verify(Some(parse_bool(ENV_GITLAB_SKIP_VERIFY, &skip)?));
    }
    if let Some(timeout) = env_var_or_none(ENV_GITLAB_TIMEOUT) {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_GITLAB_TIMEOUT.to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(per_page) = env_var_or_none(ENV_GITLAB_PER_PAGE) {
        let value: u32 = per_page.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_GITLAB_PER_PAGE.to_string(),
            message: "must be a positive integer".to_string(),
        })?;
        loader.set_per_page(Some(value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_accepts_common_spellings() {
        for raw in ["true", "TRUE", "1", "yes", "on"] {
            assert!(parse_bool("X", raw).unwrap(), "{raw}");
        }
        for raw in ["false", "False", "0", "no", "off"] {
            assert!(!parse_bool("X", raw).unwrap(), "{raw}");
        }
    }

    #[test]
    fn test_parse_bool_rejects_garbage() {
        let err = parse_bool("GITLAB_SKIP_VERIFY", "maybe").unwrap_err();
        assert!(err.to_string().contains("GITLAB_SKIP_VERIFY"));
    }
}
