//! CLI errors and exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ClientError`, `CodecError` and `CliError` to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-6 mirror the categories of the provider error taxonomy.
//! - Exit code 10 is reserved for bulk runs where at least one item failed.

use gitlab_secrets_client::ClientError;
use thiserror::Error;

use crate::input::CodecError;

/// Errors raised by the command layer itself.
#[derive(Debug, Error)]
pub enum CliError {
    /// A bulk run finished, but some items were not applied.
    #[error("{failed} of {total} variables failed")]
    BulkFailed { failed: usize, total: usize },

    /// The `--filter` pattern is not a valid regular expression.
    #[error("Invalid regex pattern: {0}")]
    InvalidFilter(#[from] regex::Error),

    /// Arguments are syntactically valid but do not describe an operation.
    #[error("{0}")]
    MissingArgument(String),
}

/// Structured exit codes for gitlab-secrets.
///
/// These codes enable scripts to distinguish between different failure modes
/// and take appropriate action (refresh credentials, fix input, retry, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - I/O, configuration or unclassified failure.
    GeneralError = 1,

    /// Authentication failure - token missing, invalid or expired (401).
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, or DNS failure.
    ///
    /// Scripts may retry.
    ConnectionError = 3,

    /// Variable or project not found (404).
    NotFound = 4,

    /// Validation error - rejected payload, invalid key, malformed input file.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// Permission denied - token lacks access to the project (403).
    PermissionDenied = 6,

    /// The variable already exists and `--upsert` was not given.
    Conflict = 9,

    /// A bulk run completed with at least one failed item.
    PartialFailure = 10,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::Unauthorized { status: 403, .. } => ExitCode::PermissionDenied,
            ClientError::Unauthorized { .. } => ExitCode::AuthenticationFailed,

            ClientError::NotFound(_) => ExitCode::NotFound,
            ClientError::Conflict(_) => ExitCode::Conflict,

            ClientError::Validation { .. } | ClientError::InvalidKey(_) => {
                ExitCode::ValidationError
            }

            ClientError::Http(e) => {
                if e.is_connect() || e.is_timeout() || e.is_request() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }

            ClientError::ApiError { status: 404, .. } => ExitCode::NotFound,
            ClientError::ApiError { .. }
            | ClientError::InvalidResponse(_)
            | ClientError::InvalidUrl(_) => ExitCode::GeneralError,
        }
    }
}

impl From<&CodecError> for ExitCode {
    fn from(err: &CodecError) -> Self {
        match err {
            CodecError::Malformed(_) | CodecError::UnsupportedFormat(_) => {
                ExitCode::ValidationError
            }
            CodecError::Io { .. } => ExitCode::GeneralError,
        }
    }
}

impl From<&CliError> for ExitCode {
    fn from(err: &CliError) -> Self {
        match err {
            CliError::BulkFailed { .. } => ExitCode::PartialFailure,
            CliError::InvalidFilter(_) | CliError::MissingArgument(_) => ExitCode::ValidationError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<CliError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<CodecError>() {
                return ExitCode::from(err);
            }
        }

        ExitCode::GeneralError
    }
}
