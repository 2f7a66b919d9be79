//! gitlab-secrets - Command-line interface for GitLab CI/CD project variables.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Execute variable operations via the shared client library.
//! - Render results as tables or export files and map failures to exit codes.
//!
//! Does NOT handle:
//! - REST API details (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Global options (like `--url`) are applied consistently across all subcommands.
//! - Logs and progress go to stderr; stdout carries only command output.

mod args;
mod bulk;
mod commands;
mod dispatch;
mod error;
mod formatters;
mod input;
mod interactive;
mod progress;
mod selection;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use gitlab_secrets_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut loader = match ConfigLoader::new().from_env() {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to load configuration from environment: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    // Apply CLI overrides (highest priority); blank values fall back to the environment
    if let Some(url) = non_blank(&cli.url) {
        loader = loader.with_base_url(url);
    }
    if let Some(token) = non_blank(&cli.token) {
        loader = loader.with_token(token);
    }
    if let Some(project_id) = non_blank(&cli.project_id) {
        loader = loader.with_project_id(project_id);
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }

    let config = match loader.build() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            eprintln!(
                "Set GITLAB_TOKEN and GITLAB_PROJECT_ID (environment, .env, or --token/--project-id)."
            );
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    if config.connection.skip_verify {
        tracing::warn!("TLS certificate verification is disabled");
    }

    let exit_code = match run_command(cli, config).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
