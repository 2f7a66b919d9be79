//! Download command implementation.
//!
//! Responsibilities:
//! - Export every project variable to a YAML, JSON or .env file.
//! - Resolve the format from `--format`, then the output extension, then YAML.
//!
//! Does NOT handle:
//! - Merging with an existing file; the target is replaced.
//!
//! Invariants:
//! - Values are only written with `--include-values`.
//! - Nothing is written when there is nothing to export.
//! - The file is written atomically (temp file + rename).

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

use super::{Selection, fetch_selection};
use crate::formatters::{
    ExportFormat, RenderOptions, YamlStyle, get_formatter, resolve_export_format, write_to_file,
};
use crate::selection::SortField;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    config: gitlab_secrets_config::Config,
    output: Option<PathBuf>,
    format: Option<ExportFormat>,
    sort: SortField,
    reverse: bool,
    include_values: bool,
    filter: Option<String>,
    yaml_style: YamlStyle,
    quiet: bool,
) -> Result<()> {
    let format = resolve_export_format(format, output.as_deref(), ExportFormat::Yaml);
    let path = output.unwrap_or_else(|| PathBuf::from(format.default_path()));

    info!(path = %path.display(), format = format.as_str(), "Downloading variables");

    let client = crate::commands::build_client_from_config(&config)?;

    let variables = match fetch_selection(&client, filter.as_deref(), sort, reverse, quiet).await? {
        Selection::Empty => {
            eprintln!("No variables found in project");
            return Ok(());
        }
        Selection::NoMatch => {
            eprintln!(
                "No variables match the filter pattern: {}",
                filter.as_deref().unwrap_or_default()
            );
            return Ok(());
        }
        Selection::Variables(variables) => variables,
    };

    let options = RenderOptions {
        sorted_by: sort,
        include_values,
        yaml_style,
    };
    let content = get_formatter(format.into()).format_variables(&variables, &options)?;
    write_to_file(&content, &path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    eprintln!(
        "✓ Downloaded {} variables to {}",
        variables.len(),
        path.display()
    );
    eprintln!("  Format: {}", format.as_str());
    eprintln!("  Sorted by: {}", sort);
    if !include_values {
        eprintln!("  Note: Values excluded for security. Use --include-values to include them.");
    }
    Ok(())
}
