//! CLI errors and exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define the errors raised by command handlers.
//! - Map errors to structured exit codes scripts can branch on.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - A missing or unreadable secrets directory is never an error; it yields an
//!   empty result and exit code 0.

use docker_secrets_config::ConfigError;
use thiserror::Error;

/// Errors raised by `docker-secrets` commands.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration key not found: {0}")]
    KeyNotFound(String),

    #[error("Invalid output format: {0}. Valid options: json, table")]
    InvalidOutputFormat(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Structured exit codes for docker-secrets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// The requested configuration key is not present.
    NotFound = 4,

    /// Invalid flags or environment overrides.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&CliError> for ExitCode {
    fn from(err: &CliError) -> Self {
        match err {
            CliError::KeyNotFound(_) => ExitCode::NotFound,
            CliError::InvalidOutputFormat(_) => ExitCode::ValidationError,
            CliError::Config(ConfigError::InvalidValue { .. }) => ExitCode::ValidationError,
            CliError::Config(_) => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no CliError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<CliError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
