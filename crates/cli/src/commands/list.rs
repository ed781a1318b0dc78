//! `list` command: print the keys produced from the secrets directory.

use anyhow::Result;
use docker_secrets_config::{SecretsSource, load};
use secrecy::ExposeSecret;

use crate::formatters::{EntryOutput, OutputFormat, get_formatter};

pub fn run(source: &SecretsSource, show_values: bool, format: OutputFormat) -> Result<String> {
    let mapping = load(source);
    tracing::debug!(count = mapping.len(), show_values, "Listing secrets");

    let entries: Vec<EntryOutput> = mapping
        .iter()
        .map(|(key, value)| EntryOutput {
            key: key.to_string(),
            value: show_values.then(|| value.expose_secret().to_string()),
        })
        .collect();

    get_formatter(format).format_entries(&entries)
}
