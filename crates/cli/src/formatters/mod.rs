//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide JSON and table renderings of loaded entries and load reports.
//! - Parse the `--output` flag into an `OutputFormat`.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//! - Deciding whether values are shown (callers pass `None` to hide them).
//!
//! Invariants:
//! - JSON output is always valid JSON, including for empty results (`[]`).
//! - Table output prints a human message when there is nothing to show.

use anyhow::Result;
use docker_secrets_config::{LoadEvent, SecretsSource};
use serde::Serialize;
use std::str::FromStr;

use crate::error::CliError;

mod json;
mod table;


pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Output format selected with `--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => Err(CliError::InvalidOutputFormat(s.to_string())),
        }
    }
}

/// One configuration entry as printed by `list` and `get`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryOutput {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Report printed by `explain`.
#[derive(Debug, Serialize)]
pub struct ExplainOutput<'a> {
    pub source: &'a SecretsSource,
    pub events: &'a [LoadEvent],
}

/// Renders command results.
pub trait Formatter {
    /// Format the entries produced by a load pass.
    fn format_entries(&self, entries: &[EntryOutput]) -> Result<String>;

    /// Format a single looked-up entry.
    fn format_entry(&self, entry: &EntryOutput) -> Result<String>;

    /// Format the effective source and the events of one load pass.
    fn format_explain(&self, report: &ExplainOutput<'_>) -> Result<String>;
}

/// Get a formatter for the given output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
    }
}
