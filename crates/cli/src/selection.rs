//! Filtering and ordering of fetched variables.
//!
//! Responsibilities:
//! - Compile the `--filter` pattern (case-insensitive, unanchored search on the key).
//! - Sort variables by a selected field with the key as tie-break.
//!
//! Does NOT handle:
//! - Fetching variables (see `commands`).
//! - Rendering (see `formatters`).
//!
//! Invariants:
//! - Filtering happens before sorting and before any total is computed.
//! - The sort is stable; `reverse` inverts the fully sorted sequence.

use clap::ValueEnum;
use gitlab_secrets_client::Variable;
use regex::{Regex, RegexBuilder};
use std::cmp::Ordering;
use std::fmt;

use crate::error::CliError;

/// Field used to order variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortField {
    #[default]
    Key,
    Protected,
    Masked,
    Raw,
    #[value(name = "environment_scope", alias = "environment-scope")]
    EnvironmentScope,
}

impl SortField {
    /// Name as written in export headers and `sorted_by`.
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Key => "key",
            SortField::Protected => "protected",
            SortField::Masked => "masked",
            SortField::Raw => "raw",
            SortField::EnvironmentScope => "environment_scope",
        }
    }

    fn compare(self, a: &Variable, b: &Variable) -> Ordering {
        match self {
            SortField::Key => Ordering::Equal,
            SortField::Protected => a.protected.cmp(&b.protected),
            SortField::Masked => a.masked.cmp(&b.masked),
            SortField::Raw => a.raw.cmp(&b.raw),
            SortField::EnvironmentScope => a.environment_scope.cmp(&b.environment_scope),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compile a key filter.
pub fn compile_filter(pattern: &str) -> Result<Regex, CliError> {
    Ok(RegexBuilder::new(pattern).case_insensitive(true).build()?)
}

/// Keep only variables whose key matches `filter` anywhere.
pub fn filter_variables(variables: Vec<Variable>, filter: Option<&Regex>) -> Vec<Variable> {
    match filter {
        Some(re) => variables
            .into_iter()
            .filter(|v| re.is_match(&v.key))
            .collect(),
        None => variables,
    }
}

/// Sort by `field`, then by key ascending; `reverse` flips the result.
pub fn sort_variables(variables: &mut [Variable], field: SortField, reverse: bool) {
    variables.sort_by(|a, b| field.compare(a, b).then_with(|| a.key.cmp(&b.key)));
    if reverse {
        variables.reverse();
    }
}
