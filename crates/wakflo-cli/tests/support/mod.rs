//! Helpers shared by the `wakflo` binary tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Nothing listens here, so a stray backend call fails fast.
pub const OFFLINE_BACKEND: &str = "http://127.0.0.1:9/v1";

/// A scratch directory with an empty config file.
pub struct Workspace {
    pub dir: TempDir,
    pub config: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("wakflo.toml");
        std::fs::write(&config, "").unwrap();
        Self { dir, config }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// `wakflo` running in `cwd` with this workspace's config.
    pub fn wakflo_in(&self, cwd: &Path) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_wakflo"));
        cmd.current_dir(cwd)
            .arg("--config")
            .arg(&self.config)
            .env("WAKFLO_BACKEND__URL", OFFLINE_BACKEND)
            .env("WAKFLO_BACKEND__TIMEOUT_SECS", "2")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn wakflo(&self) -> Command {
        self.wakflo_in(self.path())
    }

    /// Create `slack/` through the CLI with every value passed as a flag.
    pub fn create_slack(&self) -> PathBuf {
        self.wakflo()
            .args([
                "create",
                "integration",
                "--name",
                "Slack",
                "--description",
                "Team chat",
                "--icon",
                "mdi:slack",
                "--category",
                "communication",
                "--author",
                "Jane <jane@example.test>",
                "--docs",
                "Slack lets teams talk.",
            ])
            .assert()
            .success();
        self.path().join("slack")
    }
}

pub fn read(path: impl AsRef<Path>) -> String {
    std::fs::read_to_string(path).unwrap()
}
