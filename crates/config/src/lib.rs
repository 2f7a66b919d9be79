//! Configuration management for the GitLab secrets CLI.
//!
//! This crate provides types and loaders for resolving the GitLab instance URL,
//! access token and project identifier from `.env` files, environment
//! variables and command-line overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, Config, ConnectionConfig};
