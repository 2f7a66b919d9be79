//! Tests for dotenv loading behavior.
//!
//! Invariants / Assumptions:
//! - Tests serialize mutations to process-global state (cwd/env).
//! - Error messages must never contain secret values from `.env` files.

use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use super::env_lock;
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

/// RAII guard for temporarily changing the current working directory.
struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    fn new(temp_dir: &TempDir) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(temp_dir.path()).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

fn write_env_file(dir: &TempDir, contents: &str) {
    fs::write(dir.path().join(".env"), contents).unwrap();
}

#[test]
#[serial]
fn test_missing_dotenv_is_ok() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    temp_env::with_var_unset("DOTENV_DISABLED", || {
        assert!(ConfigLoader::new().load_dotenv().is_ok());
    });
}

#[test]
#[serial]
fn test_valid_dotenv_populates_env() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);
    write_env_file(&temp_dir, "GITLAB_SECRETS_DOTENV_PROBE=loaded\n");

    temp_env::with_vars(
        [
            ("DOTENV_DISABLED", None::<&str>),
            ("GITLAB_SECRETS_DOTENV_PROBE", None),
        ],
        || {
            assert!(ConfigLoader::new().load_dotenv().is_ok());
            assert_eq!(
                std::env::var("GITLAB_SECRETS_DOTENV_PROBE").as_deref(),
                Ok("loaded")
            );
        },
    );
}

#[test]
#[serial]
fn test_invalid_dotenv_returns_parse_error() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);
    write_env_file(&temp_dir, "INVALID_LINE_WITHOUT_EQUALS");

    temp_env::with_var_unset("DOTENV_DISABLED", || {
        match ConfigLoader::new().load_dotenv() {
            Err(ConfigError::DotenvParse { .. }) => {}
            Err(other) => panic!("expected DotenvParse, got {}", other),
            Ok(_) => panic!("expected DotenvParse, got Ok"),
        }
    });
}

#[test]
#[serial]
fn test_dotenv_parse_error_does_not_leak_secrets() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);
    let secret_value = "glpat_supersecret_12345";
    write_env_file(
        &temp_dir,
        &format!("GITLAB_SECRETS_LEAK_PROBE={secret_value}\nINVALID_LINE_WITHOUT_EQUALS"),
    );

    temp_env::with_vars(
        [
            ("DOTENV_DISABLED", None::<&str>),
            ("GITLAB_SECRETS_LEAK_PROBE", None),
        ],
        || {
            let Err(err) = ConfigLoader::new().load_dotenv() else {
                panic!("expected error for invalid .env file");
            };
            let message = err.to_string();
            assert!(!message.contains(secret_value), "{message}");
            assert!(message.contains(".env"), "{message}");
            assert!(message.contains("DOTENV_DISABLED"), "{message}");
        },
    );
}

#[test]
#[serial]
fn test_dotenv_disabled_skips_invalid_file() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);
    write_env_file(&temp_dir, "INVALID_LINE_WITHOUT_EQUALS");

    for value in ["1", "true"] {
        temp_env::with_var("DOTENV_DISABLED", Some(value), || {
            assert!(
                ConfigLoader::new().load_dotenv().is_ok(),
                "DOTENV_DISABLED={value} should skip .env loading"
            );
        });
    }
}
