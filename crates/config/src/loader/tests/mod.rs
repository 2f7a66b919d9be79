//! Tests for the configuration loader builder.
//!
//! Invariants:
//! - Tests touching process env use `serial_test` and `env_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod dotenv_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable `from_env` reads, all unset.
pub fn cleared_gitlab_env() -> Vec<(&'static str, Option<&'static str>)> {
    vec![
        ("GITLAB_URL", None),
        ("GITLAB_TOKEN", None),
        ("GITLAB_PROJECT_ID", None),
        ("GITLAB_TIMEOUT", None),
        ("GITLAB_SKIP_VERIFY", None),
        ("GITLAB_PER_PAGE", None),
    ]
}

/// Clears all GitLab variables, then applies `overrides` on top.
pub fn with_gitlab_env<F: FnOnce()>(overrides: &[(&'static str, &'static str)], f: F) {
    let mut vars = cleared_gitlab_env();
    for (key, value) in overrides {
        if let Some(slot) = vars.iter_mut().find(|(k, _)| *k == *key) {
            slot.1 = Some(*value);
        }
    }
    temp_env::with_vars(vars, f);
}
