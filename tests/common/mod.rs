//! Shared test utilities for E2E tests.
//!
//! This module provides common fixtures and helper functions to reduce
//! duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new();
//!     let origin = fixture.origin_repo("sample.git");
//!     // ... test code
//! }
//! ```

use std::fs;
use std::path::Path;
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::pdm_available;
    pub use super::TestFixture;
}

/// Check whether pdm can be invoked on this machine.
///
/// Tests exercising the full success path (clone, config, install) need a
/// working pdm; they skip with a message when it is absent, the same way
/// network-dependent tests are gated elsewhere.
#[allow(dead_code)]
pub fn pdm_available() -> bool {
    Command::new("pdm")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// A test fixture that provides a temporary directory and local origin
/// repositories addressable through `file://` URLs.
///
/// No test touches the network: "remote" repositories are created on disk
/// with `git init` and one commit.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Create a local origin repository named `name` with a single commit.
    ///
    /// Returns the repository's `file://` URL.
    pub fn origin_repo(&self, name: &str) -> String {
        let dir = self.temp_dir.path().join(name);
        fs::create_dir_all(&dir).expect("Failed to create origin directory");

        run_git(&dir, &["init", "--initial-branch=main"]);
        fs::write(dir.join("README.md"), "# fixture\n").expect("Failed to write README");
        run_git(&dir, &["add", "."]);
        run_git(
            &dir,
            &[
                "-c",
                "user.name=Fixture",
                "-c",
                "user.email=fixture@example.com",
                "commit",
                "-m",
                "initial commit",
            ],
        );

        format!("file://{}", dir.display())
    }

    /// Like [`origin_repo`](Self::origin_repo), but the commit also carries a
    /// minimal `pyproject.toml` so `pdm install` can succeed.
    #[allow(dead_code)]
    pub fn origin_repo_with_manifest(&self, name: &str) -> String {
        let dir = self.temp_dir.path().join(name);
        fs::create_dir_all(&dir).expect("Failed to create origin directory");

        run_git(&dir, &["init", "--initial-branch=main"]);
        fs::write(dir.join("README.md"), "# fixture\n").expect("Failed to write README");
        fs::write(
            dir.join("pyproject.toml"),
            r#"[project]
name = "fixture"
version = "0.1.0"
requires-python = ">=3.8"
"#,
        )
        .expect("Failed to write pyproject.toml");
        run_git(&dir, &["add", "."]);
        run_git(
            &dir,
            &[
                "-c",
                "user.name=Fixture",
                "-c",
                "user.email=fixture@example.com",
                "commit",
                "-m",
                "initial commit",
            ],
        );

        format!("file://{}", dir.display())
    }

    /// Create a bare repository named `name` to serve as a push target.
    ///
    /// Returns the repository's `file://` URL.
    #[allow(dead_code)]
    pub fn bare_target(&self, name: &str) -> String {
        let dir = self.temp_dir.path().join(name);
        let output = Command::new("git")
            .args(["init", "--bare"])
            .arg(&dir)
            .output()
            .expect("Failed to run git init --bare");
        assert!(output.status.success(), "git init --bare failed");

        format!("file://{}", dir.display())
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("repo-bootstrap");
        cmd.current_dir(self.path());
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

fn run_git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_origin_repo_has_commit() {
        let fixture = TestFixture::new();
        let url = fixture.origin_repo("sample.git");
        assert!(url.starts_with("file://"));

        let dir = fixture.path().join("sample.git");
        let output = Command::new("git")
            .args(["log", "--oneline"])
            .current_dir(&dir)
            .output()
            .unwrap();
        assert!(output.status.success());
        assert!(String::from_utf8_lossy(&output.stdout).contains("initial commit"));
    }

    #[test]
    fn test_bare_target_is_bare() {
        let fixture = TestFixture::new();
        fixture.bare_target("target.git");
        assert!(fixture.path().join("target.git").join("HEAD").exists());
    }
}
