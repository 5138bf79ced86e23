//! Test environment for isolated solidkit CLI runs.
//!
//! Each `TestEnv` owns a temp working directory and a temp config home, and
//! strips any `SOLIDKIT_*` variables from the child process, so the user's
//! own configuration never leaks into a test.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Result of running a solidkit CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Non-empty stdout lines
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().filter(|l| !l.is_empty()).collect()
    }
}

pub struct TestEnv {
    /// Working directory of the child process
    pub work_dir: TempDir,
    /// Stand-in for the user config directory
    pub config_home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("create work dir"),
            config_home: TempDir::new().expect("create config home"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_solidkit")),
        }
    }

    /// Write a file relative to the working directory
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.path().join(relative);
        std::fs::write(&path, content).expect("write test file");
        path
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.path().join(relative)
    }

    fn command(&self, cwd: &Path, env_vars: &[(&str, &str)]) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env_remove("SOLIDKIT_PRECISION")
            .env_remove("SOLIDKIT_FORMAT")
            .env_remove("SOLIDKIT_LOG");
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        cmd
    }

    /// Run with the given arguments and no stdin
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let output = self
            .command(self.work_dir.path(), env_vars)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .expect("run solidkit");
        into_result(output)
    }

    /// Run with `input` piped to stdin
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> TestResult {
        let mut child = self
            .command(self.work_dir.path(), &[])
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("spawn solidkit");

        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes())
            .expect("write stdin");

        into_result(child.wait_with_output().expect("wait for solidkit"))
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn into_result(output: std::process::Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
