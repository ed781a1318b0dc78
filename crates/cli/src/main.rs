//! docker-secrets - inspect configuration loaded from mounted Docker secrets.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Build a `SecretsSource` and run the selected command against it.
//! - Map failures to structured exit codes.
//!
//! Does NOT handle:
//! - Scanning or key derivation (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` values are visible
//!   to the environment layer.
//! - Precedence is flags, then environment, then `.env`, then defaults.
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::{Cli, LogFormat};
use clap::Parser;
use dispatch::run_command;
use docker_secrets_config::SecretsSource;
use error::{CliError, ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so later layers see its values
    let builder = match SecretsSource::builder().load_dotenv() {
        Ok(builder) => builder,
        Err(e) => {
            eprintln!("Failed to load environment: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let cli = Cli::parse();
    init_logging(cli.log_format);

    let builder = match builder.from_env() {
        Ok(builder) => builder,
        Err(e) => {
            let err = anyhow::Error::new(CliError::from(e));
            eprintln!("Failed to load configuration from environment: {:#}", err);
            std::process::exit(err.exit_code().as_i32());
        }
    };

    let source = cli.apply_overrides(builder).build();
    tracing::debug!(
        path = %source.secrets_path().display(),
        namespaces = ?source.expected_namespaces(),
        "Resolved secrets source"
    );

    match run_command(&cli, &source) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(e.exit_code().as_i32());
        }
    }
}

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}
