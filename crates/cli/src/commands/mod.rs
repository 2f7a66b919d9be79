//! CLI command implementations.
//!
//! Responsibilities:
//! - One module per subcommand.
//! - Shared helpers: client construction, fetch-filter-sort, bulk reporting.

pub mod create;
pub mod delete;
pub mod download;
pub mod list;
pub mod read;
pub mod update;

use anyhow::{Context, Result};
use gitlab_secrets_client::{GitLabClient, Variable, VariableSpec};
use gitlab_secrets_config::Config;
use std::path::Path;

use crate::bulk::{BulkAction, BulkReport, ItemResult, Outcome, run_bulk};
use crate::error::CliError;
use crate::input::read_variable_file;
use crate::progress::Spinner;
use crate::selection::{SortField, compile_filter, filter_variables, sort_variables};

pub fn build_client_from_config(config: &Config) -> Result<GitLabClient> {
    Ok(GitLabClient::builder().from_config(config).build()?)
}

/// Variables to show after filtering and sorting.
pub(crate) enum Selection {
    /// The project has no variables at all.
    Empty,
    /// Variables exist, but none matched the filter.
    NoMatch,
    Variables(Vec<Variable>),
}

/// Fetch every variable, then filter by key and sort.
pub(crate) async fn fetch_selection(
    client: &GitLabClient,
    filter: Option<&str>,
    sort: SortField,
    reverse: bool,
    quiet: bool,
) -> Result<Selection> {
    let filter = filter.map(compile_filter).transpose()?;

    let spinner = Spinner::new(!quiet, "Fetching variables...");
    let variables = client.list().await.context("Failed to list variables")?;
    spinner.finish();

    if variables.is_empty() {
        return Ok(Selection::Empty);
    }

    let mut variables = filter_variables(variables, filter.as_ref());
    if variables.is_empty() {
        return Ok(Selection::NoMatch);
    }

    sort_variables(&mut variables, sort, reverse);
    Ok(Selection::Variables(variables))
}

/// Read `path` and apply `action` to each entry, printing one line per item.
///
/// Fails with `CliError::BulkFailed` when any item failed.
pub(crate) async fn run_bulk_file(
    client: &GitLabClient,
    path: &Path,
    action: &BulkAction,
) -> Result<()> {
    let specs: Vec<VariableSpec> = read_variable_file(path)?;

    if specs.is_empty() {
        eprintln!("No variables found in file");
        return Ok(());
    }

    let verb = match action {
        BulkAction::Create { .. } => "Creating",
        BulkAction::Update { .. } => "Updating",
    };
    println!("{} {} variables...", verb, specs.len());

    let report = run_bulk(client, &specs, action, print_item).await?;
    print_summary(&report, action);

    if report.failed() > 0 {
        return Err(CliError::BulkFailed {
            failed: report.failed(),
            total: report.items().len(),
        }
        .into());
    }
    Ok(())
}

fn print_item(item: &ItemResult) {
    match &item.outcome {
        Outcome::Created => println!("  ✓ Created: {}", item.key),
        Outcome::Updated => println!("  ✓ Updated: {}", item.key),
        Outcome::Failed(message) if item.key.is_empty() => println!("  ✗ {}", message),
        Outcome::Failed(message) => println!("  ✗ {}: {}", item.key, message),
    }
}

fn print_summary(report: &BulkReport, action: &BulkAction) {
    println!();
    match action {
        BulkAction::Create { .. } => {
            println!("Successfully created: {}", report.created());
            if report.updated() > 0 {
                println!("Updated (already existed): {}", report.updated());
            }
        }
        BulkAction::Update { .. } => println!("Successfully updated: {}", report.updated()),
    }
    if report.failed() > 0 {
        println!("Failed: {}", report.failed());
    }
}
