//! List command implementation.
//!
//! Responsibilities:
//! - Show every project variable, filtered by key and sorted.
//! - Render as a table (default), YAML, JSON or env.
//!
//! Invariants:
//! - Values are only printed with `--show-values`, and a warning goes to stderr.
//! - No variables, or none matching the filter, is a notice and exit code 0.

use anyhow::Result;
use tracing::info;

use super::{Selection, fetch_selection};
use crate::formatters::{OutputFormat, RenderOptions, YamlStyle, get_formatter};
use crate::selection::SortField;

pub async fn run(
    config: gitlab_secrets_config::Config,
    sort: SortField,
    reverse: bool,
    show_values: bool,
    filter: Option<String>,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    info!(sort = %sort, reverse, "Listing variables");

    let client = crate::commands::build_client_from_config(&config)?;

    let variables = match fetch_selection(&client, filter.as_deref(), sort, reverse, quiet).await? {
        Selection::Empty => {
            eprintln!("No variables found");
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

    if let Some(pattern) = &filter {
        eprintln!("Filtered by pattern: {}", pattern);
    }

    let options = RenderOptions {
        sorted_by: sort,
        include_values: show_values,
        yaml_style: YamlStyle::Simple,
    };
    let output = get_formatter(format).format_variables(&variables, &options)?;
    print!("{}", output);

    if format == OutputFormat::Table {
        println!("\nTotal: {} variables", variables.len());
    }
    if show_values {
        eprintln!("Warning: Sensitive values are being displayed");
    }
    Ok(())
}
