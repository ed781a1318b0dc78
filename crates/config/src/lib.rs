//! Docker secrets as a configuration source.
//!
//! This crate scans a directory of mounted secret files (by default
//! `/run/secrets`), derives a namespace and configuration key from each file
//! name, and returns the file contents as a flat key/value mapping that a host
//! configuration system can layer with its other sources.
//!
//! A file named `Test.ApplicationSettings__EncryptionKey` is loaded under the
//! key `ApplicationSettings:EncryptionKey` when `Test` is an expected namespace.

pub mod constants;
pub mod loader;
mod mapping;
pub mod provider;
mod source;

pub use loader::diagnostics::{
    Diagnostics, LoadEvent, NoopDiagnostics, RecordingDiagnostics, TracingDiagnostics,
};
pub use loader::name::{Classification, NamespaceFilter, SecretName, split_namespace, to_config_key};
pub use loader::{load, load_with};
pub use mapping::ConfigurationMapping;
pub use provider::{ConfigurationBuilder, ConfigurationProvider, MemoryProvider, SecretsProvider};
pub use source::{ConfigError, SecretsSource, SecretsSourceBuilder, ValuePolicy, env_var_or_none};
