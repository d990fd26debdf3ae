#![allow(dead_code)]

pub mod mock_server;

use std::process::{Command, Output};
use tempfile::TempDir;

pub use mock_server::{MockServer, RecordedRequest};

/// Path to the compiled `noteboard` binary
pub fn noteboard_binary() -> &'static str {
    env!("CARGO_BIN_EXE_noteboard")
}

/// Helper struct to run noteboard commands with an isolated config directory
pub struct NoteboardTest {
    pub temp_dir: TempDir,
    api_url: Option<String>,
}

impl NoteboardTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        NoteboardTest {
            temp_dir,
            api_url: None,
        }
    }

    /// Point every command at `url` through `NOTEBOARD_API_URL`
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    pub fn config_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join("config.yaml")
    }

    pub fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(noteboard_binary());
        cmd.args(args)
            .current_dir(self.temp_dir.path())
            .env("NOTEBOARD_CONFIG_DIR", self.temp_dir.path())
            .env_remove("NOTEBOARD_LOG")
            .env_remove("NOTEBOARD_API_URL")
            .env("NO_COLOR", "1");
        if let Some(url) = &self.api_url {
            cmd.env("NOTEBOARD_API_URL", url);
        }
        cmd.output().expect("Failed to execute noteboard command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}
