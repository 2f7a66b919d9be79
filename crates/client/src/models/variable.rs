//! CI/CD variable models for the GitLab REST API.
//!
//! Responsibilities:
//! - Define the variable record returned by and sent to `/projects/:id/variables`.
//! - Define partial updates and loosely typed bulk-input items.
//!
//! Non-responsibilities:
//! - Does not handle HTTP requests (see endpoints module).
//! - Does not parse files (see the cli crate).

use serde::{Deserialize, Serialize};

use crate::serde_helpers::{
    opt_bool_from_bool_or_string, opt_string_from_scalar, string_from_scalar,
};

/// Environment scope meaning "all environments".
pub const DEFAULT_ENVIRONMENT_SCOPE: &str = "*";

fn default_environment_scope() -> String {
    DEFAULT_ENVIRONMENT_SCOPE.to_string()
}

/// A project CI/CD variable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Variable {
    pub key: String,
    #[serde(default, deserialize_with = "string_from_scalar")]
    pub value: String,
    /// Only exposed to protected branches and tags
    #[serde(default)]
    pub protected: bool,
    /// Value hidden in job logs
    #[serde(default)]
    pub masked: bool,
    /// Value not expanded by the runner
    #[serde(default)]
    pub raw: bool,
    #[serde(default = "default_environment_scope")]
    pub environment_scope: String,
}

impl Variable {
    /// Create a variable with default flags and scope.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            protected: false,
            masked: false,
            raw: false,
            environment_scope: default_environment_scope(),
        }
    }
}

/// Partial update sent with `PUT /projects/:id/variables/:key`.
///
/// Only `Some` fields are serialized.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct VariableUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub masked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_scope: Option<String>,
}

impl VariableUpdate {
    /// True when no field would be changed.
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
            && self.protected.is_none()
            && self.masked.is_none()
            && self.raw.is_none()
            && self.environment_scope.is_none()
    }
}

impl From<&Variable> for VariableUpdate {
    fn from(variable: &Variable) -> Self {
        Self {
            value: Some(variable.value.clone()),
            protected: Some(variable.protected),
            masked: Some(variable.masked),
            raw: Some(variable.raw),
            environment_scope: Some(variable.environment_scope.clone()),
        }
    }
}

/// Fallback attributes applied to bulk items that do not set them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDefaults {
    pub protected: bool,
    pub masked: bool,
    pub raw: bool,
    pub environment_scope: String,
}

impl Default for VariableDefaults {
    fn default() -> Self {
        Self {
            protected: false,
            masked: false,
            raw: false,
            environment_scope: default_environment_scope(),
        }
    }
}

/// Attributes applied to bulk update items that do not set them.
///
/// `None` leaves the attribute untouched on the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateDefaults {
    pub protected: Option<bool>,
    pub masked: Option<bool>,
    pub raw: Option<bool>,
    pub environment_scope: Option<String>,
}

/// One entry of a bulk input file.
///
/// Every attribute except `key` is optional so that a file can leave
/// attributes to the command-line defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct VariableSpec {
    #[serde(default, deserialize_with = "string_from_scalar")]
    pub key: String,
    #[serde(default, deserialize_with = "string_from_scalar")]
    pub value: String,
    #[serde(default, deserialize_with = "opt_bool_from_bool_or_string")]
    pub protected: Option<bool>,
    #[serde(default, deserialize_with = "opt_bool_from_bool_or_string")]
    pub masked: Option<bool>,
    #[serde(default, deserialize_with = "opt_bool_from_bool_or_string")]
    pub raw: Option<bool>,
    #[serde(default, deserialize_with = "opt_string_from_scalar")]
    pub environment_scope: Option<String>,
}

impl VariableSpec {
    /// Item with only a key and value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    /// Full record for a create, item attributes first, then `defaults`.
    pub fn resolve(&self, defaults: &VariableDefaults) -> Variable {
        Variable {
            key: self.key.clone(),
            value: self.value.clone(),
            protected: self.protected.unwrap_or(defaults.protected),
            masked: self.masked.unwrap_or(defaults.masked),
            raw: self.raw.unwrap_or(defaults.raw),
            environment_scope: self
                .environment_scope
                .clone()
                .unwrap_or_else(|| defaults.environment_scope.clone()),
        }
    }

    /// Partial update carrying the value plus whichever attributes are set.
    pub fn to_update(&self, defaults: &UpdateDefaults) -> VariableUpdate {
        VariableUpdate {
            value: Some(self.value.clone()),
            protected: self.protected.or(defaults.protected),
            masked: self.masked.or(defaults.masked),
            raw: self.raw.or(defaults.raw),
            environment_scope: self
                .environment_scope
                .clone()
                .or_else(|| defaults.environment_scope.clone()),
        }
    }
}
