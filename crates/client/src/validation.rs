//! Local validation of CI/CD variable keys.
//!
//! GitLab accepts keys made of ASCII letters, digits and underscores on a
//! single line. Checking locally keeps obviously bad keys from ever reaching
//! the network.

use std::collections::BTreeSet;

use crate::error::{ClientError, Result};

/// Validate a variable key.
///
/// # Errors
///
/// Returns `ClientError::InvalidKey` when the key is empty or whitespace-only,
/// contains any whitespace, or contains characters outside `[A-Za-z0-9_]`.
pub fn validate_variable_key(key: &str) -> Result<()> {
    if key.trim().is_empty() {
        return Err(ClientError::InvalidKey(
            "Variable key cannot be empty or whitespace only".to_string(),
        ));
    }

    if key.chars().any(char::is_whitespace) {
        return Err(ClientError::InvalidKey(format!(
            "Invalid variable key '{key}'. Variable keys must consist of one line without spaces."
        )));
    }

    let invalid: BTreeSet<char> = key.chars().filter(|c| !is_key_char(*c)).collect();
    if !invalid.is_empty() {
        let listed = invalid
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        return Err(ClientError::InvalidKey(format!(
            "Invalid variable key '{key}'. Key contains invalid characters: {listed}. \
             Variable keys can only contain letters, numbers, and underscores."
        )));
    }

    Ok(())
}

fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
