//! Diagnostics sink for secret loading.
//!
//! Responsibilities:
//! - Define the events a load pass reports (`LoadEvent`).
//! - Provide the `Diagnostics` trait and its tracing, no-op, and recording sinks.
//!
//! Does NOT handle:
//! - Deciding whether a file is loaded (see `name.rs`).
//! - Surfacing errors to the caller. Load failures are only ever observed here.
//!
//! Invariants:
//! - Events carry file names, paths, and keys, never secret values.

use serde::Serialize;
use std::path::PathBuf;
use std::sync::Mutex;

/// Something that happened while scanning the secrets directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LoadEvent {
    /// The secrets path is not an existing directory.
    DirectoryMissing { path: PathBuf },
    /// The secrets directory exists but could not be listed.
    DirectoryUnreadable { path: PathBuf, error: String },
    /// A directory entry is not a regular file.
    NotAFile { path: PathBuf },
    /// The file name is not valid UTF-8 or yields an empty key.
    InvalidFileName { path: PathBuf },
    /// The file's namespace is not accepted.
    NamespaceRejected { file: String, namespace: String },
    /// The file was loaded under `key`.
    Loaded { file: String, key: String },
    /// The file or directory entry could not be read.
    ReadFailed { path: PathBuf, error: String },
    /// The pass finished with `count` keys.
    Completed { path: PathBuf, count: usize },
}

/// Receives events from a load pass.
pub trait Diagnostics: Send + Sync {
    /// Record one event.
    fn record(&self, event: &LoadEvent);
}

/// Logs events through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn record(&self, event: &LoadEvent) {
        match event {
            LoadEvent::DirectoryMissing { path } => {
                tracing::debug!(
                    path = %path.display(),
                    "Secrets path does not exist; no secrets loaded"
                );
            }
            LoadEvent::DirectoryUnreadable { path, error } => {
                tracing::warn!(
                    path = %path.display(),
                    error = %error,
                    "Could not list secrets directory; no secrets loaded"
                );
            }
            LoadEvent::NotAFile { path } => {
                tracing::debug!(path = %path.display(), "Skipping non-file entry");
            }
            LoadEvent::InvalidFileName { path } => {
                tracing::warn!(
                    path = %path.display(),
                    "Skipping secret file with unusable name"
                );
            }
            LoadEvent::NamespaceRejected { file, namespace } => {
                tracing::debug!(
                    file = %file,
                    namespace = %namespace,
                    "Skipping secret outside expected namespaces"
                );
            }
            LoadEvent::Loaded { file, key } => {
                tracing::debug!(file = %file, key = %key, "Loaded secret");
            }
            LoadEvent::ReadFailed { path, error } => {
                tracing::warn!(
                    path = %path.display(),
                    error = %error,
                    "Could not read secret file; skipping"
                );
            }
            LoadEvent::Completed { path, count } => {
                tracing::debug!(
                    path = %path.display(),
                    count = *count,
                    "Finished loading secrets"
                );
            }
        }
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {
    fn record(&self, _event: &LoadEvent) {}
}

/// Keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    events: Mutex<Vec<LoadEvent>>,
}

impl RecordingDiagnostics {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the events recorded so far.
    pub fn events(&self) -> Vec<LoadEvent> {
        self.lock().clone()
    }

    /// Remove and return the events recorded so far.
    pub fn take(&self) -> Vec<LoadEvent> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<LoadEvent>> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn record(&self, event: &LoadEvent) {
        self.lock().push(event.clone());
    }
}
