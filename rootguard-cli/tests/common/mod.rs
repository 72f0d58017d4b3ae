//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers with an isolated data directory
//! - Fixture helpers for files and symlinks

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated configuration root.
///
/// The layout is:
/// - `app/`: the root references are checked against
/// - `outside/secret.yaml`: a file outside the root
/// - `data/`: the user configuration directory (empty)
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the user configuration directory
    pub data_dir: PathBuf,
    /// Path to the root directory
    pub root: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");
        let data_dir = temp_path.join("data");
        let root = temp_path.join("app");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");
        std::fs::create_dir_all(&root).expect("Failed to create root");

        let env = Self {
            temp_dir,
            temp_path,
            data_dir,
            root,
        };
        env.write("outside/secret.yaml", "secret: true\n");
        env
    }

    /// Get a bare command builder without pre-configured flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("rootguard").expect("Failed to find rootguard binary");
        cmd.env_remove("ROOTGUARD_LOAD_RESTRICTIONS")
            .env_remove("ROOTGUARD_MAX_SYMLINK_DEPTH")
            .env_remove("ROOTGUARD_DATA_DIR")
            .env_remove("ROOTGUARD_LOG_MODE");
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Start a `check` command against the root.
    pub fn check(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("check").arg("--root").arg(&self.root);
        cmd
    }

    /// Write a file below the temporary directory, creating parents.
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Create a symlink below the temporary directory pointing at `target`.
    #[cfg(unix)]
    pub fn symlink(&self, target: &Path, relative: &str) -> PathBuf {
        let link = self.temp_path.join(relative);
        if let Some(parent) = link.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::os::unix::fs::symlink(target, &link).expect("Failed to create symlink");
        link
    }

    /// Path of the file outside the root.
    pub fn secret(&self) -> PathBuf {
        self.temp_path.join("outside/secret.yaml")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
