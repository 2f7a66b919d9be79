//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide the output formats: Table, YAML (simple/structured), JSON and env.
//! - Resolve the export format from `--format` and the output path.
//! - Write exports to disk atomically.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//! - Filtering and sorting (see `selection`).
//!
//! Invariants:
//! - Without `include_values` no formatter emits a variable value.
//! - An explicit format always wins over the output path extension.
//!
//! ## Redaction
//!
//! | Format | Values excluded |
//! |--------|-----------------|
//! | Table | no VALUE column |
//! | YAML simple | `KEY: ''` |
//! | YAML structured | `value` omitted |
//! | JSON | `value` omitted |
//! | env | `KEY=` |

use anyhow::Result;
use clap::ValueEnum;
use gitlab_secrets_client::Variable;
use std::path::Path;

mod common;
mod env;
mod json;
mod table;
mod yaml;

pub use common::write_to_file;
pub use env::EnvFormatter;
pub use json::JsonFormatter;
pub use table::{TableFormatter, format_variable_details};
pub use yaml::YamlFormatter;

use crate::selection::SortField;

/// Supported output formats for `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Yaml,
    Json,
    Env,
}

/// Supported file formats for `download`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Yaml,
    Json,
    Env,
}

impl ExportFormat {
    /// Infer the format from a path's extension.
    ///
    /// `.env` itself counts as an env file even though it has no extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_ascii_lowercase();
        if name.ends_with(".yml") || name.ends_with(".yaml") {
            Some(ExportFormat::Yaml)
        } else if name.ends_with(".json") {
            Some(ExportFormat::Json)
        } else if name.ends_with(".env") {
            Some(ExportFormat::Env)
        } else {
            None
        }
    }

    /// File written when no `--output` is given.
    pub fn default_path(self) -> &'static str {
        match self {
            ExportFormat::Yaml => "secrets.yml",
            ExportFormat::Json => "secrets.json",
            ExportFormat::Env => ".env",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Yaml => "yaml",
            ExportFormat::Json => "json",
            ExportFormat::Env => "env",
        }
    }
}

impl From<ExportFormat> for OutputFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Yaml => OutputFormat::Yaml,
            ExportFormat::Json => OutputFormat::Json,
            ExportFormat::Env => OutputFormat::Env,
        }
    }
}

/// Pick the export format.
///
/// An explicit format is used unconditionally. Otherwise a recognised
/// extension on `path` decides, and `default` covers everything else.
pub fn resolve_export_format(
    explicit: Option<ExportFormat>,
    path: Option<&Path>,
    default: ExportFormat,
) -> ExportFormat {
    if let Some(format) = explicit {
        return format;
    }
    path.and_then(ExportFormat::from_path).unwrap_or(default)
}

/// Layout of YAML exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YamlStyle {
    /// Flat `KEY: value` mapping under a comment header.
    #[default]
    Simple,
    /// `variables` list with every attribute, plus `total` and `sorted_by`.
    Structured,
}

/// Options shared by every formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub sorted_by: SortField,
    pub include_values: bool,
    pub yaml_style: YamlStyle,
}

/// Trait for formatting variable lists.
pub trait Formatter {
    fn format_variables(&self, variables: &[Variable], options: &RenderOptions) -> Result<String>;
}

/// Get a formatter for the specified format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Yaml => Box::new(YamlFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Env => Box::new(EnvFormatter),
    }
}
