//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format entries as aligned key/value columns.
//! - Describe load events one per line for `explain`.
//!
//! Does NOT handle:
//! - Other output formats.

use anyhow::Result;
use docker_secrets_config::LoadEvent;
use std::fmt::Write;

use crate::formatters::{EntryOutput, ExplainOutput, Formatter};

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_entries(&self, entries: &[EntryOutput]) -> Result<String> {
        if entries.is_empty() {
            return Ok("No secrets loaded.".to_string());
        }

        let show_values = entries.iter().any(|entry| entry.value.is_some());
        let width = entries
            .iter()
            .map(|entry| entry.key.len())
            .chain(std::iter::once("KEY".len()))
            .max()
            .unwrap_or_default();

        let mut output = String::new();
        if show_values {
            writeln!(output, "{:<width$}  VALUE", "KEY")?;
            for entry in entries {
                writeln!(
                    output,
                    "{:<width$}  {}",
                    entry.key,
                    entry.value.as_deref().unwrap_or_default()
                )?;
            }
        } else {
            writeln!(output, "KEY")?;
            for entry in entries {
                writeln!(output, "{}", entry.key)?;
            }
        }
        output.pop();
        Ok(output)
    }

    fn format_entry(&self, entry: &EntryOutput) -> Result<String> {
        Ok(entry.value.clone().unwrap_or_default())
    }

    fn format_explain(&self, report: &ExplainOutput<'_>) -> Result<String> {
        let source = report.source;
        let namespaces = if source.expected_namespaces().is_empty() {
            "(none)".to_string()
        } else {
            source.expected_namespaces().join(", ")
        };

        let mut output = String::new();
        writeln!(output, "Secrets path:            {}", source.secrets_path().display())?;
        writeln!(output, "Expected namespaces:     {}", namespaces)?;
        writeln!(output, "Namespace delimiter:     {:?}", source.namespace_delimiter())?;
        writeln!(output, "Key delimiter:           {:?}", source.key_delimiter())?;
        writeln!(output, "Include empty namespace: {}", source.include_empty_namespace())?;
        writeln!(output, "Value policy:            {}", source.value_policy())?;
        writeln!(output)?;
        writeln!(output, "Events:")?;
        for event in report.events {
            writeln!(output, "  {}", describe_event(event))?;
        }
        output.pop();
        Ok(output)
    }
}

fn describe_event(event: &LoadEvent) -> String {
    match event {
        LoadEvent::DirectoryMissing { path } => {
            format!("missing     {} (not a directory)", path.display())
        }
        LoadEvent::DirectoryUnreadable { path, error } => {
            format!("unreadable  {} ({})", path.display(), error)
        }
        LoadEvent::NotAFile { path } => format!("skipped     {} (not a file)", path.display()),
        LoadEvent::InvalidFileName { path } => {
            format!("skipped     {} (unusable name)", path.display())
        }
        LoadEvent::NamespaceRejected { file, namespace } => {
            format!("rejected    {} (namespace {:?})", file, namespace)
        }
        LoadEvent::Loaded { file, key } => format!("loaded      {} -> {}", file, key),
        LoadEvent::ReadFailed { path, error } => {
            format!("failed      {} ({})", path.display(), error)
        }
        LoadEvent::Completed { path, count } => {
            format!("completed   {} ({} keys)", path.display(), count)
        }
    }
}
