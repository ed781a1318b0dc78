//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Apply flag overrides on top of an environment-derived source builder.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not read `DOCKER_SECRETS_*` variables itself (see `SecretsSourceBuilder::from_env`).

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use docker_secrets_config::{SecretsSourceBuilder, ValuePolicy};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docker-secrets")]
#[command(about = "Inspect the configuration produced from mounted Docker secrets", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  docker-secrets list\n  docker-secrets --namespace PaymentWallet list --show-values\n  docker-secrets get ConnectionStrings:Default\n  docker-secrets --output json explain\n"
)]
pub struct Cli {
    /// Directory containing secret files (default: /run/secrets)
    #[arg(long, global = true, value_name = "DIR")]
    pub secrets_path: Option<PathBuf>,

    /// Accept secrets in this namespace (repeatable; replaces DOCKER_SECRETS_NAMESPACES)
    #[arg(short = 'n', long = "namespace", global = true, value_name = "NAME")]
    pub namespaces: Vec<String>,

    /// Separator between namespace and key in file names (default: ".")
    #[arg(long, global = true, value_name = "DELIM", allow_hyphen_values = true)]
    pub namespace_delimiter: Option<String>,

    /// Separator between key segments in file names (default: "__")
    #[arg(long, global = true, value_name = "DELIM", allow_hyphen_values = true)]
    pub key_delimiter: Option<String>,

    /// Also load files without a namespace prefix when namespaces are given
    /// (`--include-empty-namespace=false` overrides the environment)
    #[arg(
        long,
        global = true,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub include_empty_namespace: Option<bool>,

    /// Keep leading/trailing whitespace in secret values
    #[arg(long, global = true)]
    pub preserve_whitespace: bool,

    /// Output format (json, table)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    /// Log output format written to stderr
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List configuration keys produced from the secrets directory
    List {
        /// Print secret values next to their keys
        #[arg(long)]
        show_values: bool,
    },

    /// Print the value of a single configuration key
    Get {
        /// Configuration key, e.g. ConnectionStrings:Default (case-insensitive)
        key: String,
    },

    /// Show how each entry in the secrets directory was handled
    Explain,
}

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl Cli {
    /// Apply flags on top of `builder`; flags win over environment values.
    pub fn apply_overrides(&self, mut builder: SecretsSourceBuilder) -> SecretsSourceBuilder {
        if let Some(ref path) = self.secrets_path {
            builder = builder.with_secrets_path(path.clone());
        }
        if !self.namespaces.is_empty() {
            builder = builder.with_namespaces(self.namespaces.iter().cloned());
        }
        if let Some(ref delimiter) = self.namespace_delimiter {
            builder = builder.with_namespace_delimiter(delimiter.clone());
        }
        if let Some(ref delimiter) = self.key_delimiter {
            builder = builder.with_key_delimiter(delimiter.clone());
        }
        if let Some(include) = self.include_empty_namespace {
            builder = builder.with_include_empty_namespace(include);
        }
        if self.preserve_whitespace {
            builder = builder.with_value_policy(ValuePolicy::Preserve);
        }
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docker_secrets_config::SecretsSource;
    use std::path::Path;

    #[test]
    fn test_flags_override_builder_values() {
        let cli = Cli::parse_from([
            "docker-secrets",
            "--secrets-path",
            "/mnt/secrets",
            "-n",
            "Test",
            "--namespace",
            "Other",
            "--namespace-delimiter",
            "$",
            "--key-delimiter",
            "::",
            "--preserve-whitespace",
            "list",
        ]);

        let source = cli
            .apply_overrides(SecretsSource::builder().with_namespace("FromEnv"))
            .build();

        assert_eq!(source.secrets_path(), Path::new("/mnt/secrets"));
        assert_eq!(
            source.expected_namespaces(),
            &["Test".to_string(), "Other".to_string()]
        );
        assert_eq!(source.namespace_delimiter(), "$");
        assert_eq!(source.key_delimiter(), "::");
        assert_eq!(source.value_policy(), ValuePolicy::Preserve);
    }

    #[test]
    fn test_absent_flags_keep_builder_values() {
        let cli = Cli::parse_from(["docker-secrets", "explain"]);

        let source = cli
            .apply_overrides(SecretsSource::builder().with_secrets_path("/from/env"))
            .build();

        assert_eq!(source.secrets_path(), Path::new("/from/env"));
        assert_eq!(source.value_policy(), ValuePolicy::Trim);
    }

    #[test]
    fn test_include_empty_namespace_flag_forms() {
        let bare = Cli::parse_from(["docker-secrets", "--include-empty-namespace", "list"]);
        let off = Cli::parse_from(["docker-secrets", "--include-empty-namespace=false", "list"]);
        let absent = Cli::parse_from(["docker-secrets", "list"]);

        assert_eq!(bare.include_empty_namespace, Some(true));
        assert_eq!(off.include_empty_namespace, Some(false));
        assert_eq!(absent.include_empty_namespace, None);
        assert!(matches!(bare.command, Commands::List { show_values: false }));
    }

    #[test]
    fn test_include_empty_namespace_false_overrides_builder() {
        let cli = Cli::parse_from([
            "docker-secrets",
            "-n",
            "Test",
            "--include-empty-namespace=false",
            "list",
        ]);

        let source = cli
            .apply_overrides(
                SecretsSource::builder()
                    .with_namespace("Test")
                    .with_include_empty_namespace(true),
            )
            .build();

        assert!(!source.include_empty_namespace());
    }

    #[test]
    fn test_global_flags_accepted_after_subcommand() {
        let cli = Cli::parse_from(["docker-secrets", "get", "Db:Password", "--output", "json"]);

        assert_eq!(cli.output, "json");
        assert!(matches!(cli.command, Commands::Get { ref key } if key == "Db:Password"));
    }
}
