//! Common utilities for formatters.
//!
//! Responsibilities:
//! - Export record shape shared by JSON and structured YAML.
//! - Comment header shared by simple YAML and env exports.
//! - Atomic file writing.
//!
//! Does NOT handle:
//! - Format-specific logic (lives in respective formatter modules).

use anyhow::{Context, Result};
use gitlab_secrets_client::Variable;
use serde::Serialize;

use crate::selection::SortField;

/// One variable as written to JSON and structured YAML exports.
///
/// `value` is `None` when values are excluded and is then omitted entirely.
#[derive(Debug, Serialize)]
pub struct ExportRecord<'a> {
    pub key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<&'a str>,
    pub protected: bool,
    pub masked: bool,
    pub raw: bool,
    pub environment_scope: &'a str,
}

impl<'a> ExportRecord<'a> {
    pub fn new(variable: &'a Variable, include_values: bool) -> Self {
        Self {
            key: &variable.key,
            value: include_values.then_some(variable.value.as_str()),
            protected: variable.protected,
            masked: variable.masked,
            raw: variable.raw,
            environment_scope: &variable.environment_scope,
        }
    }
}

/// Full export document: `{ variables, total, sorted_by }`.
#[derive(Debug, Serialize)]
pub struct ExportDocument<'a> {
    pub variables: Vec<ExportRecord<'a>>,
    pub total: usize,
    pub sorted_by: &'static str,
}

impl<'a> ExportDocument<'a> {
    pub fn new(variables: &'a [Variable], sorted_by: SortField, include_values: bool) -> Self {
        Self {
            variables: variables
                .iter()
                .map(|v| ExportRecord::new(v, include_values))
                .collect(),
            total: variables.len(),
            sorted_by: sorted_by.as_str(),
        }
    }
}

/// Comment header written above simple YAML and env exports.
pub fn export_header(total: usize, sorted_by: SortField) -> String {
    format!(
        "# GitLab CI/CD Variables\n# Total: {}\n# Sorted by: {}\n\n",
        total, sorted_by
    )
}

/// Write formatted output to a file atomically.
///
/// Creates parent directories if needed, writes to temp file then renames
/// for atomicity. Returns error with helpful context on failure.
pub fn write_to_file(content: &str, path: &std::path::Path) -> Result<()> {
    use std::fs;
    use std::io::Write;
    use tempfile::NamedTempFile;

    // A bare file name ("secrets.yml") has an empty parent
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => std::path::Path::new("."),
    };

    if parent_dir != std::path::Path::new(".") {
        fs::create_dir_all(parent_dir)
            .with_context(|| format!("Failed to create directory: {}", parent_dir.display()))?;
    }

    let mut temp_file = NamedTempFile::new_in(parent_dir)
        .with_context(|| format!("Failed to create temp file in: {}", parent_dir.display()))?;

    temp_file
        .write_all(content.as_bytes())
        .with_context(|| "Failed to write to temp file")?;
    temp_file
        .flush()
        .with_context(|| "Failed to flush temp file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}
