//! Update command implementation.
//!
//! Responsibilities:
//! - Update the value and/or attributes of one variable.
//! - Bulk update from a YAML/JSON/.env file.
//!
//! Does NOT handle:
//! - Creating missing variables; a missing key fails (exit code 4, or a failed
//!   item in bulk mode).
//!
//! Invariants:
//! - Only the fields given on the command line (or in the file entry) are sent.

use anyhow::{Context, Result};
use gitlab_secrets_client::{UpdateDefaults, VariableUpdate};
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
    defaults: UpdateDefaults,
    file: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    let client = crate::commands::build_client_from_config(&config)?;

    if let Some(path) = file {
        info!(path = %path.display(), "Bulk updating variables");
        let action = BulkAction::Update { defaults };
        return crate::commands::run_bulk_file(&client, &path, &action).await;
    }

    let Some(key) = key.filter(|k| !k.is_empty()) else {
        return Err(CliError::MissingArgument(
            "KEY is required to update a single variable (use --file for bulk updates)"
                .to_string(),
        )
        .into());
    };

    let update = VariableUpdate {
        value,
        protected: defaults.protected,
        masked: defaults.masked,
        raw: defaults.raw,
        environment_scope: defaults.environment_scope,
    };
    if update.is_empty() {
        return Err(CliError::MissingArgument(format!(
            "Nothing to update for '{}': give a VALUE or at least one of --protected, --masked, --raw, --environment-scope",
            key
        ))
        .into());
    }

    info!("Updating variable: {}", key);

    let spinner = Spinner::new(!quiet, format!("Updating {}...", key));
    let variable = client
        .update(&key, &update)
        .await
        .with_context(|| format!("Failed to update variable '{}'", key))?;
    spinner.finish();

    eprintln!("✓ Successfully updated variable: {}", variable.key);
    print!(
        "{}",
        format_variable_details("Updated Variable Details", &variable, false)
    );
    Ok(())
}
