//! Shared testing utilities for kyomu CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Directory CLI invocations run in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `kyomu` binary.
    ///
    /// Config and log variables from the real environment are cleared so only
    /// files written by the test are picked up.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("kyomu").expect("Failed to locate kyomu binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.home())
            .env("XDG_CONFIG_HOME", self.home().join(".config"))
            .env_remove("KYOMU_CONFIG")
            .env_remove("KYOMU_LOG");
        cmd
    }

    /// Write the per-user config file read when no `--config` is given.
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        let dir = self.home().join(".config").join("kyomu");
        fs::create_dir_all(&dir).expect("Failed to create config directory");
        let path = dir.join("config.toml");
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Write a file into the work directory and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }
}
