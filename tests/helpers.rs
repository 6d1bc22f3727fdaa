//! Shared test utilities for macrogen tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with a temporary install root.
pub struct TestEnv {
    /// Temporary directory (kept alive for lifetime of TestEnv)
    pub _temp_dir: TempDir,
    /// Install root the macro files are staged under
    pub install_root: PathBuf,
}

impl TestEnv {
    /// Create a new test environment with a temporary install root.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let install_root = temp_dir.path().to_path_buf();

        Self {
            _temp_dir: temp_dir,
            install_root,
        }
    }

    /// Resolve a well-known (absolute) macro file path under the install root.
    pub fn staged_path(&self, relative: &str) -> PathBuf {
        self.install_root.join(relative.trim_start_matches('/'))
    }
}

/// Read a file into lines, without trailing newline artifacts.
pub fn read_lines(path: &Path) -> Vec<String> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read file {}: {}", path.display(), e));
    content.lines().map(|l| l.to_string()).collect()
}

/// Assert that a file exists.
pub fn assert_file_exists(path: &Path) {
    assert!(
        path.exists(),
        "Expected file to exist: {}",
        path.display()
    );
}

/// Assert that a path does not exist.
pub fn assert_not_exists(path: &Path) {
    assert!(
        !path.exists(),
        "Expected path to not exist: {}",
        path.display()
    );
}

/// Assert that a file contains expected content.
pub fn assert_file_contains(path: &Path, expected: &str) {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read file {}: {}", path.display(), e));
    assert!(
        content.contains(expected),
        "File {} does not contain expected content.\nExpected to find: {}\nActual content: {}",
        path.display(),
        expected,
        content
    );
}

/// The fixed header every generated macro file starts with.
pub fn expected_header() -> Vec<String> {
    macrogen::macros::writer::MACRO_FILE_HEADER
        .iter()
        .map(|s| s.to_string())
        .collect()
}
