//! Tests for the secrets source descriptor.
//!
//! Responsibilities:
//! - Test builder defaults and the empty-namespace rule.
//! - Test environment variable overrides and their precedence.
//! - Test `.env` loading behaviour.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
