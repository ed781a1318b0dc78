//! `explain` command: show the effective source and how each directory
//! entry was handled during one load pass.

use anyhow::Result;
use docker_secrets_config::{RecordingDiagnostics, SecretsSource, load_with};

use crate::formatters::{ExplainOutput, OutputFormat, get_formatter};

pub fn run(source: &SecretsSource, format: OutputFormat) -> Result<String> {
    let recorder = RecordingDiagnostics::new();
    load_with(source, &recorder);
    let events = recorder.take();

    let report = ExplainOutput {
        source,
        events: &events,
    };
    get_formatter(format).format_explain(&report)
}
