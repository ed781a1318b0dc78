//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//! - Resolve the `--output` format once for every command.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Assembling the secrets source (see `main()`).

use anyhow::Result;
use docker_secrets_config::SecretsSource;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::formatters::OutputFormat;

/// Run the selected subcommand against `source` and return its output.
pub(crate) fn run_command(cli: &Cli, source: &SecretsSource) -> Result<String> {
    let format: OutputFormat = cli.output.parse()?;

    match &cli.command {
        Commands::List { show_values } => commands::list::run(source, *show_values, format),
        Commands::Get { key } => commands::get::run(source, key, format),
        Commands::Explain => commands::explain::run(source, format),
    }
}
