//! GitLab CI/CD variables REST API client.
//!
//! This crate provides a typed async client for the project variables
//! endpoints of the GitLab REST API v4: paginated listing, get, create,
//! partial update and delete, with local key validation and a small error
//! taxonomy (auth, not found, conflict, validation, transport).

pub mod client;
pub mod error;
pub mod models;
mod serde_helpers;
pub mod validation;

pub mod endpoints;

pub use client::GitLabClient;
pub use client::builder::GitLabClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    DEFAULT_ENVIRONMENT_SCOPE, UpdateDefaults, Variable, VariableDefaults, VariableSpec,
    VariableUpdate,
};
pub use validation::validate_variable_key;
