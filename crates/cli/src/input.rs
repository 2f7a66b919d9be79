//! Bulk input file parsing.
//!
//! Responsibilities:
//! - Detect the input format from the file path.
//! - Parse YAML/JSON documents (`variables` list, flat mapping, or top-level list).
//! - Parse `.env` files with a restricted `KEY=value` grammar.
//!
//! Does NOT handle:
//! - Key validation (done per item by the bulk runner).
//! - Network calls; parse failures surface before any request is made.
//!
//! Invariants:
//! - Items are returned in file order.
//! - `.env` values are trimmed but never unquoted, unescaped or expanded.
//! - Error messages never echo variable values.

use gitlab_secrets_client::VariableSpec;
use serde_yaml::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading a bulk input file.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The document does not describe a list of variables.
    #[error("Malformed input: {0}")]
    Malformed(String),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported file format: {}. Use .yaml, .yml, .json or .env files", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Format of a bulk input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Yaml,
    Json,
    Env,
}

impl InputFormat {
    /// Detect the format from the file name.
    ///
    /// `.yml`/`.yaml` and `.json` are matched by extension; `.env` files and
    /// any name containing `env` (e.g. `.env.production`) are env files.
    pub fn detect(path: &Path) -> Result<Self, CodecError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();

        match extension.as_deref() {
            Some("yml") | Some("yaml") => Ok(InputFormat::Yaml),
            Some("json") => Ok(InputFormat::Json),
            Some("env") => Ok(InputFormat::Env),
            _ if name.contains("env") => Ok(InputFormat::Env),
            _ => Err(CodecError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Read and parse a bulk input file.
pub fn read_variable_file(path: &Path) -> Result<Vec<VariableSpec>, CodecError> {
    let format = InputFormat::detect(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| CodecError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), ?format, "Parsing variable file");
    parse_variables(&content, format)
}

/// Parse file content in the given format.
pub fn parse_variables(content: &str, format: InputFormat) -> Result<Vec<VariableSpec>, CodecError> {
    match format {
        InputFormat::Env => Ok(parse_env(content)),
        InputFormat::Yaml => {
            let doc: Value = serde_yaml::from_str(content)
                .map_err(|e| CodecError::Malformed(format!("invalid YAML: {}", e)))?;
            specs_from_document(doc)
        }
        InputFormat::Json => {
            // serde_yaml's Value keeps mapping order, unlike serde_json's default map
            let doc: Value = serde_json::from_str(content)
                .map_err(|e| CodecError::Malformed(format!("invalid JSON: {}", e)))?;
            specs_from_document(doc)
        }
    }
}

/// Parse `.env` content.
///
/// Blank lines, `#` comments and lines without `=` are skipped. The line is
/// split on the first `=`; both sides are trimmed.
pub fn parse_env(content: &str) -> Vec<VariableSpec> {
    content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }
            let (key, value) = line.split_once('=')?;
            Some(VariableSpec::new(key.trim(), value.trim()))
        })
        .collect()
}

fn specs_from_document(doc: Value) -> Result<Vec<VariableSpec>, CodecError> {
    match doc {
        Value::Mapping(mut mapping) => match mapping.remove("variables") {
            Some(Value::Sequence(items)) => specs_from_items(items),
            Some(_) => Err(CodecError::Malformed(
                "`variables` must be a list of variable entries".to_string(),
            )),
            None => mapping
                .into_iter()
                .map(|(key, value)| {
                    let key = scalar_to_string(key).ok_or_else(|| {
                        CodecError::Malformed("mapping keys must be scalars".to_string())
                    })?;
                    let value = scalar_to_string(value).ok_or_else(|| {
                        CodecError::Malformed(format!("value of '{}' must be a scalar", key))
                    })?;
                    Ok(VariableSpec::new(key, value))
                })
                .collect(),
        },
        Value::Sequence(items) => specs_from_items(items),
        Value::Tagged(tagged) => specs_from_document(tagged.value),
        _ => Err(CodecError::Malformed(
            "expected a mapping or a list of variables".to_string(),
        )),
    }
}

fn specs_from_items(items: Vec<Value>) -> Result<Vec<VariableSpec>, CodecError> {
    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| {
            serde_yaml::from_value::<VariableSpec>(numbers_as_text(item))
                .map_err(|e| CodecError::Malformed(format!("entry {}: {}", idx + 1, e)))
        })
        .collect()
}

/// Render numeric text fields the way the flat mapping does (`1.0` stays `1.0`).
fn numbers_as_text(item: Value) -> Value {
    let Value::Mapping(mut mapping) = item else {
        return item;
    };
    for field in ["key", "value", "environment_scope"] {
        if let Some(Value::Number(n)) = mapping.get(field) {
            let text = Value::String(n.to_string());
            mapping.insert(Value::from(field), text);
        }
    }
    Value::Mapping(mapping)
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s),
        Value::Tagged(tagged) => scalar_to_string(tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}
