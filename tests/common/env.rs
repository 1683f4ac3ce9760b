//! Test environment builder for isolated Shotpack testing.
//!
//! Every run gets its own working directory and config home, and the
//! `SHOTPACK_*` variables of the calling shell are cleared.

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a Shotpack CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as JSON (for `build --json`)
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap_or_else(|e| {
            panic!(
                "stdout is not JSON: {}\nstdout:\n{}\nstderr:\n{}",
                e, self.stdout, self.stderr
            )
        })
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Working directory for data tables and manifests
    pub root: TempDir,
    /// Stands in for `$XDG_CONFIG_HOME`
    pub config_home: TempDir,
    shotpack_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
            config_home: TempDir::new().expect("Failed to create config home"),
            shotpack_bin: PathBuf::from(env!("CARGO_BIN_EXE_shotpack")),
        }
    }

    /// A fresh environment with the demo tables written to `data/`
    pub fn seeded() -> Self {
        let env = Self::new();
        let result = env.run(&["seed", "--out-dir", "data"]);
        assert!(
            result.success,
            "seed should succeed.\nstderr: {}",
            result.stderr
        );
        env
    }

    /// Get path relative to the working directory
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Write a file relative to the working directory
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Write `shotpack/filters.yaml` under the isolated config home
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        let dir = self.config_home.path().join("shotpack");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        let full_path = dir.join("filters.yaml");
        std::fs::write(&full_path, content).expect("Failed to write config");
        full_path
    }

    /// Run shotpack in this environment
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run shotpack with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.shotpack_bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env_remove("SHOTPACK_CONFIG")
            .env_remove("SHOTPACK_MAX_VERSIONS")
            .env_remove("SHOTPACK_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute shotpack");
        output_to_result(output)
    }

    /// Run `build` for the demo shot with the given assets and extra args
    pub fn build(&self, assets: &[&str], extra: &[&str]) -> TestResult {
        self.build_with_env(assets, extra, &[])
    }

    pub fn build_with_env(
        &self,
        assets: &[&str],
        extra: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut args = vec![
            "build",
            "--project",
            "PRJ",
            "--sequence",
            "SQ010",
            "--shot",
            "SH010",
            "--data-dir",
            "data",
        ];
        args.extend_from_slice(extra);
        args.push("--assets");
        args.extend_from_slice(assets);
        self.run_with_env(&args, env_vars)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
