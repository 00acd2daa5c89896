//! Common test utilities for hashdeploy CLI tests.
//!
//! `TestEnv` is an isolated project directory plus helpers to run the
//! binary inside it.

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Config pointing at a port nothing listens on, so any connection attempt
/// fails fast.
pub const UNREACHABLE_CONFIG: &str = r#"
host = "127.0.0.1"
port = 1
username = "deploy"
password = "secret"
secure = false
timeout_secs = 1
ignore_patterns = [".git", "*.log"]
"#;

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for TestResult {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Isolated project directory
pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    /// Project with the unreachable config already written
    pub fn with_config() -> Self {
        let env = Self::new();
        env.write("deploy.toml", UNREACHABLE_CONFIG);
        env
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.path().join(rel)
    }

    pub fn write(&self, rel: &str, content: &str) {
        let path = self.path(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    pub fn read(&self, rel: &str) -> Option<String> {
        fs::read_to_string(self.path(rel)).ok()
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_hashdeploy"));
        cmd.current_dir(self.root.path()).args(args);
        for var in [
            "HASHDEPLOY_HOST",
            "HASHDEPLOY_PORT",
            "HASHDEPLOY_USERNAME",
            "HASHDEPLOY_PASSWORD",
            "RUST_LOG",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Run with stdin closed
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.command(args)
            .stdin(Stdio::null())
            .output()
            .unwrap()
            .into()
    }

    /// Run with extra environment variables
    pub fn run_with_env(&self, args: &[&str], vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(args);
        cmd.stdin(Stdio::null());
        for (key, value) in vars {
            cmd.env(key, value);
        }
        cmd.output().unwrap().into()
    }

    /// Run feeding `input` on stdin
    pub fn run_with_input(&self, args: &[&str], input: &str) -> TestResult {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();
        if let Some(mut stdin) = child.stdin.take() {
            // The binary may exit before reading (e.g. nothing to deploy)
            let _ = stdin.write_all(input.as_bytes());
        }
        child.wait_with_output().unwrap().into()
    }
}

pub fn manifest_keys(path: &Path) -> Vec<String> {
    let content = fs::read_to_string(path).unwrap();
    let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&content).unwrap();
    map.keys().cloned().collect()
}
