//! Create command implementation.
//!
//! Responsibilities:
//! - Create a single variable from KEY and VALUE.
//! - Bulk create from a YAML/JSON/.env file.
//! - Fall back to an update on duplicate keys when `--upsert` is given.
//!
//! Does NOT handle:
//! - File parsing (see `input`) or the per-item loop (see `bulk`).
//!
//! Invariants:
//! - Attributes set on a file entry win over the command-line flags.
//! - Without `--upsert` a duplicate key is an error (exit code 9).

use anyhow::{Context, Result};
use gitlab_secrets_client::{VariableDefaults, VariableSpec, VariableUpdate};
use std::path::PathBuf;
use tracing::info;

use crate::bulk::BulkAction;
use crate::error::CliError;
use crate::formatters::format_variable_details;
use crate::progress::Spinner;

pub async fn run(
    config: gitlab_secrets_config::Config,
    key: Option<String>,
    value: Option<String>,
    defaults: VariableDefaults,
    file: Option<PathBuf>,
    upsert: bool,
    quiet: bool,
) -> Result<()> {
    let client = crate::commands::build_client_from_config(&config)?;

    if let Some(path) = file {
        info!(path = %path.display(), upsert, "Bulk creating variables");
        let action = BulkAction::Create { defaults, upsert };
        return crate::commands::run_bulk_file(&client, &path, &action).await;
    }

    let (Some(key), Some(value)) = (key.filter(|k| !k.is_empty()), value) else {
        return Err(CliError::MissingArgument(
            "Both KEY and VALUE are required to create a single variable (use --file for bulk creation)"
                .to_string(),
        )
        .into());
    };

    info!("Creating variable: {}", key);

    let variable = VariableSpec::new(key, value).resolve(&defaults);
    let spinner = Spinner::new(!quiet, format!("Creating {}...", variable.key));

    let (created, title) = match client.create(&variable).await {
        Ok(created) => {
            spinner.finish();
            eprintln!("✓ Successfully created variable: {}", created.key);
            (created, "Variable Details")
        }
        Err(err) if err.is_conflict() && upsert => {
            info!("Variable {} exists, updating instead", variable.key);
            let updated = client
                .update(&variable.key, &VariableUpdate::from(&variable))
                .await
                .with_context(|| format!("Failed to update variable '{}'", variable.key))?;
            spinner.finish();
            eprintln!(
                "✓ Successfully updated variable: {} (already exists)",
                updated.key
            );
            (updated, "Updated Variable Details")
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("Failed to create variable '{}'", variable.key));
        }
    };

    print!("{}", format_variable_details(title, &created, false));
    Ok(())
}
