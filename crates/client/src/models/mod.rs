//! Data models for GitLab API requests and responses.

pub mod errors;
pub mod variable;

pub use errors::ApiErrorBody;
pub use variable::{
    DEFAULT_ENVIRONMENT_SCOPE, UpdateDefaults, Variable, VariableDefaults, VariableSpec,
    VariableUpdate,
};
