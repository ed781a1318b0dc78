//! Centralized constants for the Docker secrets configuration source.
//!
//! This module contains default registration parameters and the environment
//! variable names used to override them.

// =============================================================================
// Registration Defaults
// =============================================================================

/// Default directory where Docker and Swarm mount secrets.
pub const DEFAULT_SECRETS_PATH: &str = "/run/secrets";

/// Default separator between the namespace and the key part of a file name.
pub const DEFAULT_NAMESPACE_DELIMITER: &str = ".";

/// Default separator between key segments inside a file name.
pub const DEFAULT_KEY_DELIMITER: &str = "__";

/// Hierarchical separator used in configuration keys (`Section:Key`).
pub const CONFIG_KEY_SEPARATOR: &str = ":";

/// Separator for list-valued environment variables.
pub const NAMESPACE_LIST_SEPARATOR: char = ',';

// =============================================================================
// Environment Variables
// =============================================================================

/// Overrides the secrets directory.
pub const ENV_SECRETS_PATH: &str = "DOCKER_SECRETS_PATH";

/// Comma-separated list of accepted namespaces.
pub const ENV_NAMESPACES: &str = "DOCKER_SECRETS_NAMESPACES";

/// Overrides the namespace delimiter.
pub const ENV_NAMESPACE_DELIMITER: &str = "DOCKER_SECRETS_NAMESPACE_DELIMITER";

/// Overrides the key delimiter.
pub const ENV_KEY_DELIMITER: &str = "DOCKER_SECRETS_KEY_DELIMITER";

/// `true`/`false`: accept files without a namespace prefix.
pub const ENV_INCLUDE_EMPTY_NAMESPACE: &str = "DOCKER_SECRETS_INCLUDE_EMPTY_NAMESPACE";

/// `trim`/`preserve`: how file contents become values.
pub const ENV_VALUE_POLICY: &str = "DOCKER_SECRETS_VALUE_POLICY";

/// Set to `1` or `true` to skip `.env` loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
