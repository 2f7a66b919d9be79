//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not build the client configuration (see `main` and `gitlab_secrets_config`).

use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::formatters::{ExportFormat, OutputFormat};
use crate::selection::SortField;

#[derive(Parser)]
#[command(name = "gitlab-secrets")]
#[command(about = "Manage GitLab CI/CD project variables from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  gitlab-secrets list --sort protected\n  gitlab-secrets create API_KEY s3cr3t --masked --protected\n  gitlab-secrets create --file secrets.yml --upsert\n  gitlab-secrets update API_KEY --masked false\n  gitlab-secrets download --output secrets.json --include-values\n  gitlab-secrets delete OLD_KEY --yes\n"
)]
pub struct Cli {
    /// GitLab instance URL (default: https://gitlab.com)
    #[arg(long, global = true, env = "GITLAB_URL")]
    pub url: Option<String>,

    /// Personal, project or group access token
    #[arg(long, global = true, env = "GITLAB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Numeric project ID or URL-encoded path (e.g. group%2Fproject)
    #[arg(long, global = true, env = "GITLAB_PROJECT_ID")]
    pub project_id: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "GITLAB_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true, env = "GITLAB_SKIP_VERIFY")]
    pub skip_verify: bool,

    /// Suppress progress spinners.
    ///
    /// Note: Spinners always write to STDERR; this flag disables them entirely.
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a variable, or bulk create from a YAML/JSON/.env file
    Create {
        /// Variable key (letters, digits and underscores)
        #[arg(conflicts_with = "file")]
        key: Option<String>,

        /// Variable value
        #[arg(conflicts_with = "file", allow_hyphen_values = true)]
        value: Option<String>,

        /// Only expose the variable to protected branches and tags
        #[arg(long)]
        protected: bool,

        /// Mask the value in job logs
        #[arg(long)]
        masked: bool,

        /// Do not expand `$VAR` references in the value
        #[arg(long)]
        raw: bool,

        /// Environment scope
        #[arg(long, default_value = "*")]
        environment_scope: String,

        /// Read variables from a YAML, JSON or .env file
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Update variables that already exist instead of failing
        #[arg(long)]
        upsert: bool,
    },

    /// Show one variable, including its value
    Read {
        /// Variable key
        key: String,
    },

    /// Update a variable, or bulk update from a YAML/JSON/.env file
    Update {
        /// Variable key
        #[arg(conflicts_with = "file")]
        key: Option<String>,

        /// New value (left unchanged when omitted)
        #[arg(conflicts_with = "file", allow_hyphen_values = true)]
        value: Option<String>,

        /// Set the protected flag (true/false)
        #[arg(long, value_name = "BOOL", value_parser = BoolishValueParser::new())]
        protected: Option<bool>,

        /// Set the masked flag (true/false)
        #[arg(long, value_name = "BOOL", value_parser = BoolishValueParser::new())]
        masked: Option<bool>,

        /// Set the raw flag (true/false)
        #[arg(long, value_name = "BOOL", value_parser = BoolishValueParser::new())]
        raw: Option<bool>,

        /// Set the environment scope
        #[arg(long)]
        environment_scope: Option<String>,

        /// Read updates from a YAML, JSON or .env file
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Delete a variable
    Delete {
        /// Variable key
        key: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List variables
    List {
        /// Sort by field
        #[arg(short, long, value_enum, default_value_t = SortField::Key)]
        sort: SortField,

        /// Reverse the sort order
        #[arg(short, long)]
        reverse: bool,

        /// Include values in the output
        #[arg(long)]
        show_values: bool,

        /// Only show keys matching this regex (case-insensitive)
        #[arg(short, long, value_name = "REGEX")]
        filter: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Export variables to a YAML, JSON or .env file
    Download {
        /// Output file (default: secrets.yml, secrets.json or .env by format)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// File format (inferred from the output extension when omitted)
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        /// Sort by field
        #[arg(short, long, value_enum, default_value_t = SortField::Key)]
        sort: SortField,

        /// Reverse the sort order
        #[arg(short, long)]
        reverse: bool,

        /// Write values (excluded by default)
        #[arg(long)]
        include_values: bool,

        /// Only export keys matching this regex (case-insensitive)
        #[arg(short, long, value_name = "REGEX")]
        filter: Option<String>,

        /// Flat `KEY: value` YAML (default)
        #[arg(long, conflicts_with = "structured")]
        simple: bool,

        /// YAML with a `variables` list and per-variable attributes
        #[arg(long)]
        structured: bool,
    },
}
