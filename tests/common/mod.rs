//! Shared test utilities for integration and E2E tests.
//!
//! This module provides a fixture that lays out a small set of managed
//! projects in a temporary directory.
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
//!     let fixture = TestFixture::new().with_project("core", descriptors::minimal("core"));
//!     fixture.command().arg("sync").assert().success();
//! }
//! ```
//!
//! The fixture keeps the configuration in `src/pm` below the temporary
//! directory, the default location of the CLI when run from there.

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::descriptors;
    pub use super::TestFixture;
}

/// Project descriptor snippets.
#[allow(dead_code)]
pub mod descriptors {
    /// A descriptor with only the required properties, group `com.x`, version `1.0`.
    pub fn minimal(id: &str) -> String {
        format!("pm.id={id}\nmvn.group.id=com.x\nmvn.artifact.id={id}\nmvn.version=1.0\n")
    }

    /// A minimal descriptor plus extra lines.
    pub fn with(id: &str, extra: &str) -> String {
        format!("{}{}\n", minimal(id), extra)
    }
}

/// A temporary directory holding a configuration directory and projects.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
    projects: Vec<String>,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new fixture with an empty configuration directory.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        temp_dir
            .child("src/pm")
            .create_dir_all()
            .expect("Failed to create config directory");
        Self {
            temp_dir,
            projects: Vec::new(),
        }
    }

    /// Add a project in directory `dir` with the given descriptor, and list
    /// it in the projects index.
    pub fn with_project(mut self, dir: &str, descriptor: impl AsRef<str>) -> Self {
        self = self.with_file(&format!("{dir}/src/pm/project.properties"), descriptor.as_ref());
        let line = format!("{}={}", dir, self.path().join(dir).display());
        self.projects.push(line);
        self.write_index()
    }

    /// List a directory in the projects index without creating it.
    pub fn with_listed_dir(mut self, dir: &str) -> Self {
        let line = format!("{}={}", dir, self.path().join(dir).display());
        self.projects.push(line);
        self.write_index()
    }

    /// Set the content of `build-versions.pm`.
    pub fn with_build_versions(self, content: &str) -> Self {
        self.with_file("src/pm/build-versions.pm", content)
    }

    /// Set the content of `plugin-versions.pm`.
    pub fn with_plugin_versions(self, content: &str) -> Self {
        self.with_file("src/pm/plugin-versions.pm", content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    fn write_index(self) -> Self {
        let index = format!("{}\n", self.projects.join("\n"));
        self.with_file("src/pm/projects.pm", &index)
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the configuration directory.
    pub fn config_dir(&self) -> PathBuf {
        self.path().join("src/pm")
    }

    /// Read a file below the fixture.
    pub fn read(&self, path: &str) -> String {
        std::fs::read_to_string(self.path().join(path)).expect("Failed to read file")
    }

    /// A library configuration matching the CLI defaults in this fixture.
    pub fn manager_config(&self) -> project_manager::config::ManagerConfig {
        project_manager::config::ManagerConfig::new(self.config_dir())
            .with_work_dir(self.path().join("target/project-manager"))
    }

    /// Create a CLI command running in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("project-manager");
        cmd.current_dir(self.path())
            .env_remove("PM_CONFIG_DIR")
            .env_remove("PM_PROJECT_DIR")
            .env_remove("PM_WORK_DIR")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
