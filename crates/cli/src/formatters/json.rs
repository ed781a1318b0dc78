//! JSON formatter implementation.

use anyhow::Result;

use crate::formatters::{EntryOutput, ExplainOutput, Formatter};

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_entries(&self, entries: &[EntryOutput]) -> Result<String> {
        Ok(serde_json::to_string_pretty(entries)?)
    }

    fn format_entry(&self, entry: &EntryOutput) -> Result<String> {
        Ok(serde_json::to_string_pretty(entry)?)
    }

    fn format_explain(&self, report: &ExplainOutput<'_>) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}
