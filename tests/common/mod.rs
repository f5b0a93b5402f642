#![allow(dead_code)]
#![allow(deprecated)] // cargo_bin deprecation - still works fine

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

/// Sample data with one converging, one diverging and one degenerate series.
pub const SAMPLE_DATA: &str = r#"
[[series]]
name = "rising"
points = [[1, 1], [2, 2]]

[[series]]
name = "level"
points = [[2, 3], [3, 3]]

[[series]]
name = "shallow"
points = [[1, 1], [3, 2]]

[[series]]
name = "wall"
points = [[4, 0], [4, 9]]

[[series]]
name = "up"
points = [[0, 0], [6, 10]]
"#;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Fixture that already holds `series.toml` with [`SAMPLE_DATA`].
    pub fn with_sample_data() -> Self {
        let fixture = Self::new();
        fixture.create_file("series.toml", SAMPLE_DATA);
        fixture
    }

    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".trend-cross.toml", content);
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Command running inside the fixture, isolated from any user config.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("trend-cross").expect("binary should exist");
        cmd.current_dir(self.path())
            .env("XDG_CONFIG_HOME", self.path().join(".xdg"))
            .env("HOME", self.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }
}
