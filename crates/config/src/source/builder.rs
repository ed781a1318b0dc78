//! Builder for `SecretsSource`.
//!
//! Responsibilities:
//! - Collect registration parameters from defaults, `.env`, environment, and builder calls.
//! - Produce an immutable `SecretsSource`, applying the empty-namespace rule.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Any filesystem access to the secrets directory.
//!
//! Invariants / Assumptions:
//! - Later calls override earlier ones, so `load_dotenv()?.from_env()?` followed
//!   by `with_*` calls yields CLI > env > `.env` > defaults precedence.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use serde::Deserialize;
use std::path::PathBuf;

use super::SecretsSource;
use super::env::apply_env;
use super::error::ConfigError;
use super::value::ValuePolicy;
use crate::constants::{
    DEFAULT_KEY_DELIMITER, DEFAULT_NAMESPACE_DELIMITER, DEFAULT_SECRETS_PATH, ENV_DOTENV_DISABLED,
};

/// Builder that assembles a `SecretsSource`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SecretsSourceBuilder {
    secrets_path: PathBuf,
    expected_namespaces: Vec<String>,
    namespace_delimiter: String,
    key_delimiter: String,
    include_empty_namespace: bool,
    value_policy: ValuePolicy,
}

impl Default for SecretsSourceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretsSourceBuilder {
    /// Create a builder holding the documented defaults.
    pub fn new() -> Self {
        Self {
            secrets_path: PathBuf::from(DEFAULT_SECRETS_PATH),
            expected_namespaces: Vec::new(),
            namespace_delimiter: DEFAULT_NAMESPACE_DELIMITER.to_string(),
            key_delimiter: DEFAULT_KEY_DELIMITER.to_string(),
            include_empty_namespace: false,
            value_policy: ValuePolicy::default(),
        }
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read registration parameters from `DOCKER_SECRETS_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the directory to scan.
    pub fn with_secrets_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.secrets_path = path.into();
        self
    }

    /// Accept one more namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.expected_namespaces.push(namespace.into());
        self
    }

    /// Replace the accepted namespaces.
    pub fn with_namespaces<I, S>(mut self, namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expected_namespaces = namespaces.into_iter().map(Into::into).collect();
        self
    }

    /// Set the namespace delimiter.
    pub fn with_namespace_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.namespace_delimiter = delimiter.into();
        self
    }

    /// Set the key delimiter.
    pub fn with_key_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.key_delimiter = delimiter.into();
        self
    }

    /// Set whether un-namespaced files are loaded.
    ///
    /// Ignored (treated as `true`) when no namespaces are expected.
    pub fn with_include_empty_namespace(mut self, include: bool) -> Self {
        self.include_empty_namespace = include;
        self
    }

    /// Set the value policy.
    pub fn with_value_policy(mut self, policy: ValuePolicy) -> Self {
        self.value_policy = policy;
        self
    }

    /// Build the immutable source.
    pub fn build(self) -> SecretsSource {
        SecretsSource::from_parts(
            self.secrets_path,
            self.expected_namespaces,
            self.namespace_delimiter,
            self.key_delimiter,
            self.include_empty_namespace,
            self.value_policy,
        )
    }

    // Internal mutators for use by env.rs

    pub(crate) fn set_secrets_path(&mut self, path: PathBuf) {
        self.secrets_path = path;
    }

    pub(crate) fn set_expected_namespaces(&mut self, namespaces: Vec<String>) {
        self.expected_namespaces = namespaces;
    }

    pub(crate) fn set_namespace_delimiter(&mut self, delimiter: String) {
        self.namespace_delimiter = delimiter;
    }

    pub(crate) fn set_key_delimiter(&mut self, delimiter: String) {
        self.key_delimiter = delimiter;
    }

    pub(crate) fn set_include_empty_namespace(&mut self, include: bool) {
        self.include_empty_namespace = include;
    }

    pub(crate) fn set_value_policy(&mut self, policy: ValuePolicy) {
        self.value_policy = policy;
    }
}
