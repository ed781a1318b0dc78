//! Tests for the secrets directory loader.
//!
//! Responsibilities:
//! - Test namespace filtering and key transform against real directories.
//! - Test that per-file failures skip only the offending file.
//! - Test the events reported to diagnostics sinks and `tracing`.
//!
//! Invariants:
//! - Every test builds its own secrets directory under `tempfile`.

use secrecy::ExposeSecret;
use std::path::Path;
use tempfile::TempDir;

use crate::mapping::ConfigurationMapping;

pub mod scan_tests;

/// Create a temporary secrets directory holding `files`.
pub fn secrets_dir(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for (name, contents) in files {
        write_secret(temp_dir.path(), name, contents);
    }
    temp_dir
}

pub fn write_secret(dir: &Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).unwrap();
}

/// Exposed `(key, value)` pairs in mapping order.
pub fn exposed(mapping: &ConfigurationMapping) -> Vec<(String, String)> {
    mapping
        .iter()
        .map(|(k, v)| (k.to_string(), v.expose_secret().to_string()))
        .collect()
}
