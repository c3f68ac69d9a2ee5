//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Two roles, three radar axes and a zh translation table.
pub const SMALL_CATALOG: &str = r#"
default_role = "Builder"
role_order = ["Builder", "Designer"]

[[roles]]
name = "Builder"
hue = "indigo"
skills = ["Rust", "ts", "Go", "Docker", "Redis", "Kafka"]

[[roles]]
name = "Designer"
hue = "rose"
skills = []

[proficiency]
Rust = 80
TypeScript = 70
Go = 150

[translations.zh]
Builder = "构建者"
"radar.title" = "技能图谱"
Speed = "速度"

[radar]
axes = ["Speed", "Safety", "Scale"]

[radar.values]
Speed = 90.0
Safety = 60.0
Scale = 30.0
"#;

/// No roles configured: skills come from item tag frequencies.
pub const LEGACY_CATALOG: &str = r#"
default_role = "Generalist"

[proficiency]
React = 62

[[items]]
tags = ["react", "ts", "Rust"]

[[items]]
tags = ["React", "typescript"]

[[items]]
tags = ["React"]
"#;

/// Only two radar axes.
pub const TWO_AXIS_CATALOG: &str = r#"
default_role = "Solo"

[[roles]]
name = "Solo"
hue = "emerald"
skills = ["Rust"]

[radar]
axes = ["Depth", "Breadth"]

[radar.values]
Depth = 70.0
Breadth = 40.0
"#;

/// Path to the skillradar binary
pub fn skillradar_bin() -> &'static str {
    env!("CARGO_BIN_EXE_skillradar")
}

/// A scratch directory holding an isolated config dir and any catalogs.
pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    /// Writes a catalog file into the scratch directory.
    pub fn write_catalog(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("Failed to write catalog");
        path
    }

    /// Command with the config dir isolated and the scratch dir as cwd.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(skillradar_bin());
        cmd.env("SKILLRADAR_CONFIG_DIR", self.config_dir())
            .env_remove("SKILLRADAR_LOG")
            .current_dir(self.dir.path())
            .args(args);
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to execute command")
    }

    /// Runs with `--catalog` pointing at `catalog`.
    pub fn run_with_catalog(&self, catalog: &Path, args: &[&str]) -> Output {
        let mut full = vec!["--catalog", catalog.to_str().expect("utf-8 path")];
        full.extend_from_slice(args);
        self.run(&full)
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Asserts a zero exit and parses stdout as JSON.
pub fn json(output: &Output) -> serde_json::Value {
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command should succeed. stderr: {}",
        stderr(output)
    );
    serde_json::from_str(&stdout(output)).expect("Should parse JSON output")
}
