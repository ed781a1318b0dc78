//! Environment variable parsing for registration parameters.
//!
//! Responsibilities:
//! - Read `DOCKER_SECRETS_*` variables and apply them to a `SecretsSourceBuilder`.
//! - Provide a helper for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Building the final `SecretsSource` (see builder.rs).
//! - .env file loading (handled by `SecretsSourceBuilder::load_dotenv`).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed, so whitespace cannot be used as a delimiter here.
//! - Invalid boolean or policy values return `ConfigError::InvalidValue`.

use std::path::PathBuf;

use super::builder::SecretsSourceBuilder;
use super::error::ConfigError;
use super::value::ValuePolicy;
use crate::constants::{
    ENV_INCLUDE_EMPTY_NAMESPACE, ENV_KEY_DELIMITER, ENV_NAMESPACE_DELIMITER, ENV_NAMESPACES,
    ENV_SECRETS_PATH, ENV_VALUE_POLICY, NAMESPACE_LIST_SEPARATOR,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Split a comma-separated namespace list, dropping blank entries.
fn parse_namespace_list(raw: &str) -> Vec<String> {
    raw.split(NAMESPACE_LIST_SEPARATOR)
        .map(str::trim)
        .filter(|ns| !ns.is_empty())
        .map(str::to_string)
        .collect()
}

/// Apply environment variable configuration to the builder.
pub fn apply_env(builder: &mut SecretsSourceBuilder) -> Result<(), ConfigError> {
    if let Some(path) = env_var_or_none(ENV_SECRETS_PATH) {
        builder.set_secrets_path(PathBuf::from(path));
    }
    if let Some(namespaces) = env_var_or_none(ENV_NAMESPACES) {
        builder.set_expected_namespaces(parse_namespace_list(&namespaces));
    }
    if let Some(delimiter) = env_var_or_none(ENV_NAMESPACE_DELIMITER) {
        builder.set_namespace_delimiter(delimiter);
    }
    if let Some(delimiter) = env_var_or_none(ENV_KEY_DELIMITER) {
        builder.set_key_delimiter(delimiter);
    }
    if let Some(include) = env_var_or_none(ENV_INCLUDE_EMPTY_NAMESPACE) {
        builder.set_include_empty_namespace(include.parse().map_err(|_| {
            ConfigError::InvalidValue {
                var: ENV_INCLUDE_EMPTY_NAMESPACE.to_string(),
                message: "must be true or false".to_string(),
            }
        })?);
    }
    if let Some(policy) = env_var_or_none(ENV_VALUE_POLICY) {
        builder.set_value_policy(policy.parse::<ValuePolicy>()?);
    }

    Ok(())
}
