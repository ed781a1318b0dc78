//! Shared test utilities for docker-secrets integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Create throwaway secrets directories.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - No `DOCKER_SECRETS_*` variable leaks in from the host.

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

/// Returns a hermetic `docker-secrets` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Every `DOCKER_SECRETS_*` variable is cleared.
pub fn secrets_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("docker-secrets");

    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("DOCKER_SECRETS_PATH")
        .env_remove("DOCKER_SECRETS_NAMESPACES")
        .env_remove("DOCKER_SECRETS_NAMESPACE_DELIMITER")
        .env_remove("DOCKER_SECRETS_KEY_DELIMITER")
        .env_remove("DOCKER_SECRETS_INCLUDE_EMPTY_NAMESPACE")
        .env_remove("DOCKER_SECRETS_VALUE_POLICY")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic command pointed at `dir` through `--secrets-path`.
#[allow(dead_code)]
pub fn secrets_cmd_in(dir: &Path) -> Command {
    let mut cmd = secrets_cmd();
    cmd.arg("--secrets-path").arg(dir);
    cmd
}

/// Create a temporary secrets directory holding `files`.
#[allow(dead_code)]
pub fn secrets_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, contents) in files {
        std::fs::write(dir.path().join(name), contents).unwrap();
    }
    dir
}
