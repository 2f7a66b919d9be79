//! Project variable client methods.
//!
//! Responsibilities:
//! - High-level API for variable CRUD.
//! - Validate keys before delegating to `endpoints::variables`.

use secrecy::ExposeSecret;

use crate::client::GitLabClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Variable, VariableUpdate};
use crate::validation::validate_variable_key;

impl GitLabClient {
    /// List every variable of the project across all pages.
    pub async fn list(&self) -> Result<Vec<Variable>> {
        endpoints::list_variables(
            &self.http,
            &self.base_url,
            self.token.expose_secret(),
            &self.project_id,
            self.per_page,
        )
        .await
    }

    /// Get a single variable by key.
    ///
    /// # Returns
    /// The `Variable` if found, or `ClientError::NotFound` if it doesn't exist.
    pub async fn get(&self, key: &str) -> Result<Variable> {
        validate_variable_key(key)?;
        endpoints::get_variable(
            &self.http,
            &self.base_url,
            self.token.expose_secret(),
            &self.project_id,
            key,
        )
        .await
    }

    /// Create a new variable.
    ///
    /// Fails with `ClientError::Conflict` when the key already exists in the
    /// same environment scope.
    pub async fn create(&self, variable: &Variable) -> Result<Variable> {
        validate_variable_key(&variable.key)?;
        endpoints::create_variable(
            &self.http,
            &self.base_url,
            self.token.expose_secret(),
            &self.project_id,
            variable,
        )
        .await
    }

    /// Update an existing variable; only the `Some` fields are changed.
    pub async fn update(&self, key: &str, update: &VariableUpdate) -> Result<Variable> {
        validate_variable_key(key)?;
        endpoints::update_variable(
            &self.http,
            &self.base_url,
            self.token.expose_secret(),
            &self.project_id,
            key,
            update,
        )
        .await
    }

    /// Delete a variable.
    ///
    /// # Returns
    /// `true` when deleted, `false` when the variable was already absent.
    pub async fn delete(&self, key: &str) -> Result<bool> {
        validate_variable_key(key)?;
        endpoints::delete_variable(
            &self.http,
            &self.base_url,
            self.token.expose_secret(),
            &self.project_id,
            key,
        )
        .await
    }
}
