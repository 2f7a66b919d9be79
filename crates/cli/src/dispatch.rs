//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//! - Turn flag groups into the defaults each handler expects.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;
use gitlab_secrets_client::{UpdateDefaults, VariableDefaults};
use gitlab_secrets_config::Config;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::formatters::YamlStyle;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(cli: Cli, config: Config) -> Result<()> {
    let quiet = cli.quiet;

    match cli.command {
        Commands::Create {
            key,
            value,
            protected,
            masked,
            raw,
            environment_scope,
            file,
            upsert,
        } => {
            let defaults = VariableDefaults {
                protected,
                masked,
                raw,
                environment_scope,
            };
            commands::create::run(config, key, value, defaults, file, upsert, quiet).await?;
        }
        Commands::Read { key } => {
            commands::read::run(config, &key, quiet).await?;
        }
        Commands::Update {
            key,
            value,
            protected,
            masked,
            raw,
            environment_scope,
            file,
        } => {
            let defaults = UpdateDefaults {
                protected,
                masked,
                raw,
                environment_scope,
            };
            commands::update::run(config, key, value, defaults, file, quiet).await?;
        }
        Commands::Delete { key, yes } => {
            commands::delete::run(config, &key, yes, quiet).await?;
        }
        Commands::List {
            sort,
            reverse,
            show_values,
            filter,
            format,
        } => {
            commands::list::run(config, sort, reverse, show_values, filter, format, quiet).await?;
        }
        Commands::Download {
            output,
            format,
            sort,
            reverse,
            include_values,
            filter,
            simple: _,
            structured,
        } => {
            let yaml_style = if structured {
                YamlStyle::Structured
            } else {
                YamlStyle::Simple
            };
            commands::download::run(
                config,
                output,
                format,
                sort,
                reverse,
                include_values,
                filter,
                yaml_style,
                quiet,
            )
            .await?;
        }
    }

    Ok(())
}
