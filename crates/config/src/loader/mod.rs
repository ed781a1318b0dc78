//! Secrets directory loader.
//!
//! Responsibilities:
//! - Enumerate the files directly inside the secrets directory.
//! - Apply the file-name policy (namespace filter + key transform) to each file.
//! - Read file contents into a `ConfigurationMapping`.
//!
//! Does NOT handle:
//! - Assembling registration parameters (see `source`).
//! - Layering the result with other providers (see `provider`).
//!
//! Invariants / Assumptions:
//! - A missing secrets directory yields an empty mapping, never an error.
//! - A failure on one file skips that file and never aborts the pass.
//! - Entries are processed in ascending file-name order, so when two files
//!   produce the same key the one sorting last wins.
//! - Subdirectories are not descended into; symlinks are followed.

pub mod diagnostics;
pub mod name;

#[cfg(test)]
mod tests;

use secrecy::SecretString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::mapping::ConfigurationMapping;
use crate::source::SecretsSource;
use diagnostics::{Diagnostics, LoadEvent, TracingDiagnostics};
use name::Classification;

/// Load secrets described by `source`, logging through `tracing`.
pub fn load(source: &SecretsSource) -> ConfigurationMapping {
    load_with(source, &TracingDiagnostics)
}

/// Load secrets described by `source`, reporting to `diagnostics`.
pub fn load_with(source: &SecretsSource, diagnostics: &dyn Diagnostics) -> ConfigurationMapping {
    let mut mapping = ConfigurationMapping::new();
    let dir = source.secrets_path();

    if !dir.is_dir() {
        diagnostics.record(&LoadEvent::DirectoryMissing {
            path: dir.to_path_buf(),
        });
        return mapping;
    }

    let Some(entries) = list_entries(dir, diagnostics) else {
        return mapping;
    };

    for path in entries {
        load_file(source, &path, &mut mapping, diagnostics);
    }

    diagnostics.record(&LoadEvent::Completed {
        path: dir.to_path_buf(),
        count: mapping.len(),
    });
    mapping
}

/// List directory entries sorted by file name.
///
/// Returns `None` when the directory cannot be opened. Individual entries
/// that fail to resolve are reported and skipped.
fn list_entries(dir: &Path, diagnostics: &dyn Diagnostics) -> Option<Vec<PathBuf>> {
    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(e) => {
            diagnostics.record(&LoadEvent::DirectoryUnreadable {
                path: dir.to_path_buf(),
                error: e.to_string(),
            });
            return None;
        }
    };

    let mut paths = Vec::new();
    for entry in read_dir {
        match entry {
            Ok(entry) => paths.push(entry.path()),
            Err(e) => diagnostics.record(&LoadEvent::ReadFailed {
                path: dir.to_path_buf(),
                error: e.to_string(),
            }),
        }
    }
    paths.sort();
    Some(paths)
}

fn load_file(
    source: &SecretsSource,
    path: &Path,
    mapping: &mut ConfigurationMapping,
    diagnostics: &dyn Diagnostics,
) {
    let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
        diagnostics.record(&LoadEvent::InvalidFileName {
            path: path.to_path_buf(),
        });
        return;
    };

    match fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => {}
        Ok(_) => {
            diagnostics.record(&LoadEvent::NotAFile {
                path: path.to_path_buf(),
            });
            return;
        }
        Err(e) => {
            diagnostics.record(&LoadEvent::ReadFailed {
                path: path.to_path_buf(),
                error: e.to_string(),
            });
            return;
        }
    }

    let key = match source.classify(file_name) {
        Classification::Accepted { key } => key,
        Classification::Rejected { namespace } => {
            diagnostics.record(&LoadEvent::NamespaceRejected {
                file: file_name.to_string(),
                namespace,
            });
            return;
        }
        Classification::EmptyKey => {
            diagnostics.record(&LoadEvent::InvalidFileName {
                path: path.to_path_buf(),
            });
            return;
        }
    };

    match fs::read_to_string(path) {
        Ok(raw) => {
            let value = source.value_policy().apply(raw);
            diagnostics.record(&LoadEvent::Loaded {
                file: file_name.to_string(),
                key: key.clone(),
            });
            mapping.insert(key, SecretString::new(value.into()));
        }
        Err(e) => diagnostics.record(&LoadEvent::ReadFailed {
            path: path.to_path_buf(),
            error: e.to_string(),
        }),
    }
}
