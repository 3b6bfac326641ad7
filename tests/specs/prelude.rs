//! Shared helpers for driving the `rigor` binary.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tempfile::TempDir;

/// Upper bound for any single `rigor` invocation.
pub const SPEC_TIMEOUT: Duration = Duration::from_secs(60);

/// `rigor` with a clean environment: no config file, no overrides, no color.
///
/// The binary belongs to another workspace member; build it first with
/// `cargo build -p rigor`.
pub fn cli() -> CliBuilder {
    let mut cmd = assert_cmd::Command::cargo_bin("rigor")
        .unwrap_or_else(|e| panic!("rigor binary not built (cargo build -p rigor): {e}"));
    for var in ["RIGOR_SHELL", "RIGOR_NO_EXECUTE", "RIGOR_IGNORE_STDERR", "RIGOR_LOG", "RUST_LOG", "COLOR"] {
        cmd.env_remove(var);
    }
    cmd.env("NO_COLOR", "1").env("RIGOR_CONFIG", "/nonexistent/rigor-config.toml").timeout(SPEC_TIMEOUT);
    CliBuilder { cmd }
}

pub struct CliBuilder {
    cmd: assert_cmd::Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.cmd.current_dir(dir);
        self
    }

    pub fn passes(self) -> RunOutput {
        self.exits(0)
    }

    /// Exits with status 1 (a failing verdict or a rejected line).
    pub fn fails(self) -> RunOutput {
        self.exits(1)
    }

    pub fn exits(mut self, code: i32) -> RunOutput {
        let output = self.cmd.output().unwrap_or_else(|e| panic!("failed to run rigor: {e}"));
        let run = RunOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        assert_eq!(
            output.status.code(),
            Some(code),
            "unexpected exit status\n--- stdout ---\n{}\n--- stderr ---\n{}",
            run.stdout,
            run.stderr
        );
        run
    }
}

pub struct RunOutput {
    stdout: String,
    stderr: String,
}

impl RunOutput {
    pub fn stdout(&self) -> String {
        self.stdout.clone()
    }

    pub fn stdout_has(&self, needle: &str) -> &Self {
        assert!(self.stdout.contains(needle), "stdout lacks {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stdout_lacks(&self, needle: &str) -> &Self {
        assert!(!self.stdout.contains(needle), "stdout has {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stdout_eq(&self, expected: &str) -> &Self {
        similar_asserts::assert_eq!(self.stdout, expected);
        self
    }

    pub fn stderr_has(&self, needle: &str) -> &Self {
        assert!(self.stderr.contains(needle), "stderr lacks {needle:?}:\n{}", self.stderr);
        self
    }
}

/// A scratch directory holding test scripts.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self { dir: tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}")) }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `rel` and return the absolute path.
    pub fn file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| panic!("mkdir: {e}"));
        }
        std::fs::write(&path, contents).unwrap_or_else(|e| panic!("write {}: {e}", path.display()));
        path
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(rel)).unwrap_or_else(|e| panic!("read {rel}: {e}"))
    }

    /// `rigor run <script> [args...]` for a script written into the project.
    pub fn run_script(&self, rel: &str, contents: &str, args: &[&str]) -> CliBuilder {
        let path = self.file(rel, contents);
        let path = path.to_string_lossy().into_owned();
        let mut all = vec!["run", path.as_str()];
        all.extend_from_slice(args);
        cli().args(&all)
    }
}
