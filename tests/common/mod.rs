#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the linecount binary.
#[macro_export]
macro_rules! linecount {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("linecount"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content, creating parent directories.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        self.create_bytes(relative_path, content.as_bytes());
    }

    /// Creates a file with raw bytes, creating parent directories.
    pub fn create_bytes(&self, relative_path: &str, content: &[u8]) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// The two-language tree used across tests: `.py` and `.js` plus an
    /// ignored `node_modules` file.
    pub fn sample_tree() -> Self {
        let fixture = Self::new();
        fixture.create_file("a.py", "# comment\nx = 1\n\n");
        fixture.create_file("b.js", "// comment\nfunction f(){}\n");
        fixture.create_file("node_modules/ignored.js", "// ignored\nvar a = 1;\n");
        fixture
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
