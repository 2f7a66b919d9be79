//! Delete command implementation.
//!
//! Responsibilities:
//! - Delete one variable after confirmation (skipped with `--yes`).
//!
//! Invariants:
//! - A variable that is already absent is a warning, not a failure.

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::progress::Spinner;

pub async fn run(
    config: gitlab_secrets_config::Config,
    key: &str,
    yes: bool,
    quiet: bool,
) -> Result<()> {
    gitlab_secrets_client::validate_variable_key(key)?;

    if !yes && !crate::interactive::confirm_delete(key)? {
        return Ok(());
    }

    info!("Deleting variable: {}", key);

    let client = crate::commands::build_client_from_config(&config)?;

    let spinner = Spinner::new(!quiet, format!("Deleting {}...", key));
    let deleted = client
        .delete(key)
        .await
        .with_context(|| format!("Failed to delete variable '{}'", key))?;
    spinner.finish();

    if deleted {
        eprintln!("✓ Successfully deleted variable: {}", key);
    } else {
        warn!("Variable {} was already absent", key);
        eprintln!("Warning: Variable '{}' not found", key);
    }
    Ok(())
}
