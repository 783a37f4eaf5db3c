//! Common test helpers shared across integration tests

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)] // Not all helpers are used by every test file

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Helper to get the compiled binary path
pub fn get_binary_path() -> PathBuf {
    // Get the directory where cargo places test binaries
    let mut path = env::current_exe().unwrap();
    path.pop(); // Remove test executable name

    // Check if we're in a 'deps' directory (integration tests)
    if path.ends_with("deps") {
        path.pop(); // Go up to debug or release
    }

    path.push(format!("update-harness{}", env::consts::EXE_SUFFIX));

    if !path.exists() {
        let build_output = Command::new("cargo")
            .args(["build", "--bin", "update-harness"])
            .output()
            .expect("Failed to build binary");

        assert!(
            build_output.status.success(),
            "Failed to build update-harness binary: {}",
            String::from_utf8_lossy(&build_output.stderr)
        );
    }

    path
}

/// Helper to create a temporary directory for tests
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Helper to write a harness.js into a directory, returning its path
pub fn create_harness(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("harness.js");
    fs::write(&path, content).unwrap();
    path
}

/// Helper to copy the binary into `dir` so it resolves its files from there
pub fn install_binary(dir: &Path) -> PathBuf {
    let target = dir.join(format!("update-harness{}", env::consts::EXE_SUFFIX));
    fs::copy(get_binary_path(), &target).unwrap();
    target
}

/// Package version for testing --version flag
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
