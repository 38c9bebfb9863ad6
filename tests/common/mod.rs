//! Shared test infrastructure for integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Scratch working directory for one help-designer invocation.
pub struct TestFixture {
    pub work_dir: TempDir,
}

/// Captured result of running the binary.
#[derive(Debug)]
pub struct RunResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for RunResult {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.work_dir.path()
    }

    /// Write a seed file into the work dir and return its path.
    pub fn write_seed(&self, json: &str) -> PathBuf {
        let path = self.path().join("design.json");
        std::fs::write(&path, json).expect("write seed");
        path
    }

    /// Run help-designer with `args` from the work dir, without a terminal.
    pub fn run(&self, args: &[&str]) -> RunResult {
        Command::new(env!("CARGO_BIN_EXE_help-designer"))
            .args(args)
            .current_dir(self.path())
            .env_remove("RUST_LOG")
            .output()
            .expect("run help-designer")
            .into()
    }
}
