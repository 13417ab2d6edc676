//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Accessors for the data file and configuration

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables that would otherwise leak into the command under test.
const ISOLATED_VARS: &[&str] = &[
    "FLIGHTBOOK_DATA_DIR",
    "FLIGHTBOOK_DATA_FILE",
    "FLIGHTBOOK_OUTPUT_FORMAT",
    "FLIGHTBOOK_AUTOSAVE",
    "FLIGHTBOOK_LOG_MODE",
];

/// Test environment with isolated data directory.
///
/// Commands run with the temporary directory as their working directory and
/// with every `FLIGHTBOOK_*` variable removed.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the flightbook data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created; flightbook creates it on first save.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("flightbook-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a command builder without `--data-dir`.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("flightbook").expect("Failed to find flightbook binary");
        cmd.current_dir(&self.temp_path);
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Path of the default data file.
    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join("flights.txt")
    }

    /// Read the default data file.
    pub fn read_data(&self) -> String {
        fs::read_to_string(self.data_file()).expect("Failed to read data file")
    }

    /// Seed the default data file.
    pub fn write_data(&self, contents: &str) {
        fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        fs::write(self.data_file(), contents).expect("Failed to write data file");
    }

    /// Write `config.yaml` into the data directory.
    pub fn write_config(&self, contents: &str) {
        fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        fs::write(self.data_dir.join("config.yaml"), contents).expect("Failed to write config");
    }

    /// Create a flight, asserting success.
    pub fn create(&self, id: i32, capacity: i32) {
        self.command()
            .args(["create", &id.to_string(), &capacity.to_string()])
            .assert()
            .success();
    }

    /// Reserve seats, asserting success.
    pub fn reserve(&self, id: i32, seats: i32) {
        self.command()
            .args(["reserve", &id.to_string(), &seats.to_string()])
            .assert()
            .success();
    }

    /// List flights as JSON.
    pub fn list_json(&self) -> serde_json::Value {
        let output = self
            .command()
            .args(["list", "--format", "json"])
            .output()
            .expect("Failed to run list command");

        assert!(
            output.status.success(),
            "List failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        serde_json::from_slice(&output.stdout).expect("List output is not valid JSON")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
