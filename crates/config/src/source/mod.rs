//! Source descriptor for the Docker secrets configuration source.
//!
//! Responsibilities:
//! - Hold the immutable registration parameters (`SecretsSource`).
//! - Provide a builder-pattern `SecretsSourceBuilder` with documented defaults.
//! - Read overrides from `.env` files and environment variables.
//!
//! Does NOT handle:
//! - Scanning the secrets directory (see `loader`).
//! - Validating paths or delimiters. Empty delimiters and missing
//!   directories are legal and handled by the loader.
//!
//! Invariants / Assumptions:
//! - A source with no expected namespaces always includes un-namespaced files.
//! - Builder methods take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;
mod value;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use builder::SecretsSourceBuilder;
pub use env::env_var_or_none;
pub use error::ConfigError;
pub use value::ValuePolicy;

use crate::loader::name::{Classification, NamespaceFilter, split_namespace, to_config_key};

/// Immutable description of where secrets live and how file names map to keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SecretsSourceBuilder")]
pub struct SecretsSource {
    secrets_path: PathBuf,
    expected_namespaces: Vec<String>,
    namespace_delimiter: String,
    key_delimiter: String,
    include_empty_namespace: bool,
    value_policy: ValuePolicy,
}

impl Default for SecretsSource {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl From<SecretsSourceBuilder> for SecretsSource {
    fn from(builder: SecretsSourceBuilder) -> Self {
        builder.build()
    }
}

impl SecretsSource {
    /// Start building a source from the default registration parameters.
    pub fn builder() -> SecretsSourceBuilder {
        SecretsSourceBuilder::new()
    }

    pub(crate) fn from_parts(
        secrets_path: PathBuf,
        expected_namespaces: Vec<String>,
        namespace_delimiter: String,
        key_delimiter: String,
        include_empty_namespace: bool,
        value_policy: ValuePolicy,
    ) -> Self {
        let include_empty_namespace = include_empty_namespace || expected_namespaces.is_empty();
        Self {
            secrets_path,
            expected_namespaces,
            namespace_delimiter,
            key_delimiter,
            include_empty_namespace,
            value_policy,
        }
    }

    /// Directory scanned for secret files.
    pub fn secrets_path(&self) -> &Path {
        &self.secrets_path
    }

    /// Accepted namespaces, compared case-insensitively.
    pub fn expected_namespaces(&self) -> &[String] {
        &self.expected_namespaces
    }

    /// Separator between namespace and key in a file name.
    pub fn namespace_delimiter(&self) -> &str {
        &self.namespace_delimiter
    }

    /// Separator between key segments, translated to `:`.
    pub fn key_delimiter(&self) -> &str {
        &self.key_delimiter
    }

    /// Whether files without a namespace prefix are loaded.
    pub fn include_empty_namespace(&self) -> bool {
        self.include_empty_namespace
    }

    /// Policy applied to file contents.
    pub fn value_policy(&self) -> ValuePolicy {
        self.value_policy
    }

    /// Namespace filter derived from this source.
    pub fn namespace_filter(&self) -> NamespaceFilter<'_> {
        NamespaceFilter::new(&self.expected_namespaces, self.include_empty_namespace)
    }

    /// Decide whether a file name is loaded and, if so, under which key.
    pub fn classify(&self, file_name: &str) -> Classification {
        let name = split_namespace(file_name, &self.namespace_delimiter);

        if !self.namespace_filter().accepts(name.namespace) {
            return Classification::Rejected {
                namespace: name.namespace.to_string(),
            };
        }

        let key = to_config_key(name.remainder, &self.key_delimiter);
        // Never publish a value under the empty key.
        if key.is_empty() {
            return Classification::EmptyKey;
        }

        Classification::Accepted { key }
    }
}
