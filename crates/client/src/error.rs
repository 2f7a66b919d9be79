//! Error types for the GitLab client.
//!
//! Responsibilities:
//! - Classify provider responses into auth, not-found, conflict and validation failures.
//! - Carry transport failures from `reqwest` unchanged.
//!
//! Invariants:
//! - Messages never contain the access token.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during GitLab client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The token was rejected (401) or lacks permission (403).
    #[error("Authentication failed ({status}): {message}")]
    Unauthorized { status: u16, message: String },

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A variable with the same key and environment scope already exists.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The provider rejected the request payload (400/422).
    #[error("Validation failed ({status}): {message}")]
    Validation { status: u16, message: String },

    /// The variable key failed local validation; no request was sent.
    #[error("Invalid variable key: {0}")]
    InvalidKey(String),

    /// Transport-level failure (connect, TLS, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Any other non-success status.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Response body could not be decoded.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL or missing client setting.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Check if this error indicates authentication or authorization failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Check if this error reports a duplicate key.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }

    /// Check if this error reports a missing resource.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// HTTP status attached to the error, when there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status, .. }
            | Self::Validation { status, .. }
            | Self::ApiError { status, .. } => Some(*status),
            Self::NotFound(_) => Some(404),
            Self::Conflict(_) => Some(409),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidKey(_) | Self::InvalidResponse(_) | Self::InvalidUrl(_) => None,
        }
    }

    /// Message without the variant prefix, suitable for per-item reports.
    pub fn detail(&self) -> String {
        match self {
            Self::Unauthorized { message, .. }
            | Self::Validation { message, .. }
            | Self::ApiError { message, .. } => message.clone(),
            Self::NotFound(m)
            | Self::Conflict(m)
            | Self::InvalidKey(m)
            | Self::InvalidResponse(m)
            | Self::InvalidUrl(m) => m.clone(),
            Self::Http(e) => e.to_string(),
        }
    }
}
