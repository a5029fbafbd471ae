//! Default values for project manager configuration.
//!
//! This module provides the conventional file and directory names shared by
//! the configuration layer, the pipeline phases and the CLI.

use std::path::PathBuf;

/// The projects index inside the configuration directory.
///
/// Keys are informational only; each value is a project directory, absolute
/// or relative to the invocation directory.
pub const PROJECTS_FILE: &str = "projects.pm";

/// The coordinate registry seed inside the configuration directory.
///
/// Each value holds `group artifact version`, separated by whitespace, e.g.
/// `commons-lang3=org.apache.commons commons-lang3 3.4`.
pub const BUILD_VERSIONS_FILE: &str = "build-versions.pm";

/// Plugin version properties inside the configuration directory.
pub const PLUGIN_VERSIONS_FILE: &str = "plugin-versions.pm";

/// Standard path of the configuration directory and of each project's
/// descriptor subdirectory.
pub const PROJECT_PM_PATH: &str = "src/pm";

/// Standard working directory for staged documents.
pub const WORK_DIR: &str = "target/project-manager";

/// Subdirectory of the working directory holding staged documents.
pub const GENERATED_DIR: &str = "generated";

/// Extension of staged documents.
pub const GENERATED_EXTENSION: &str = "pom";

/// Canonical output document inside each project directory.
pub const OUTPUT_FILE: &str = "pom.xml";

/// Returns the default configuration directory.
pub fn default_config_dir() -> PathBuf {
    PathBuf::from(PROJECT_PM_PATH)
}

/// Returns the default working directory.
pub fn default_work_dir() -> PathBuf {
    PathBuf::from(WORK_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_dir_is_relative() {
        let dir = default_config_dir();
        assert!(dir.is_relative());
        assert!(dir.ends_with("pm"));
    }

    #[test]
    fn test_default_work_dir_is_relative() {
        let dir = default_work_dir();
        assert!(dir.is_relative());
        assert!(dir.ends_with("project-manager"));
    }
}
