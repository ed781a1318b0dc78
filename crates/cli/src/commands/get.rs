//! `get` command: print the value of one configuration key.

use anyhow::Result;
use docker_secrets_config::{SecretsSource, load};
use secrecy::ExposeSecret;

use crate::error::CliError;
use crate::formatters::{EntryOutput, OutputFormat, get_formatter};

/// Look up `key` case-insensitively.
///
/// Returns `CliError::KeyNotFound` when no secret produced the key.
pub fn run(source: &SecretsSource, key: &str, format: OutputFormat) -> Result<String> {
    let mapping = load(source);

    let Some((stored_key, value)) = mapping.get_key_value(key) else {
        return Err(CliError::KeyNotFound(key.to_string()).into());
    };

    let entry = EntryOutput {
        key: stored_key.to_string(),
        value: Some(value.expose_secret().to_string()),
    };
    get_formatter(format).format_entry(&entry)
}
