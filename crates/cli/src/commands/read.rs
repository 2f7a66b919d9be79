//! Read command implementation.
//!
//! Responsibilities:
//! - Fetch one variable and print all of its attributes, value included.
//!
//! Invariants:
//! - A missing variable is an error (exit code 4).

use anyhow::{Context, Result};
use tracing::info;

use crate::formatters::format_variable_details;
use crate::progress::Spinner;

pub async fn run(config: gitlab_secrets_config::Config, key: &str, quiet: bool) -> Result<()> {
    info!("Reading variable: {}", key);

    let client = crate::commands::build_client_from_config(&config)?;

    let spinner = Spinner::new(!quiet, format!("Fetching {}...", key));
    let variable = client
        .get(key)
        .await
        .with_context(|| format!("Failed to read variable '{}'", key))?;
    spinner.finish();

    print!(
        "{}",
        format_variable_details(&format!("Variable: {}", variable.key), &variable, true)
    );
    Ok(())
}
