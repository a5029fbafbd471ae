//! # Run Configuration
//!
//! `ManagerConfig` gathers everything a run needs to know before it touches
//! any project: where the shared configuration files live, the conventional
//! name of each project's descriptor subdirectory, where staged documents go,
//! and the name of the canonical output document.
//!
//! The CLI fills it from flags and environment variables; library users
//! build it directly or start from `ManagerConfig::default()`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::defaults;
use crate::error::{Error, Result};

/// Configuration of one project manager run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerConfig {
    /// Directory holding the projects index and the version files.
    pub config_dir: PathBuf,
    /// Descriptor subdirectory inside each project directory.
    pub project_pm_dir: String,
    /// Working directory for staged documents.
    pub work_dir: PathBuf,
    /// File name of the canonical output document in each project.
    pub output_file: String,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            config_dir: defaults::default_config_dir(),
            project_pm_dir: defaults::PROJECT_PM_PATH.to_string(),
            work_dir: defaults::default_work_dir(),
            output_file: defaults::OUTPUT_FILE.to_string(),
        }
    }
}

impl ManagerConfig {
    /// Create a configuration for the given configuration directory, all
    /// other settings at their defaults.
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            ..Self::default()
        }
    }

    /// Set the descriptor subdirectory name.
    pub fn with_project_pm_dir(mut self, project_pm_dir: impl Into<String>) -> Self {
        self.project_pm_dir = project_pm_dir.into();
        self
    }

    /// Set the working directory.
    pub fn with_work_dir(mut self, work_dir: impl Into<PathBuf>) -> Self {
        self.work_dir = work_dir.into();
        self
    }

    /// Set the canonical output document name.
    pub fn with_output_file(mut self, output_file: impl Into<String>) -> Self {
        self.output_file = output_file.into();
        self
    }

    /// Path of the projects index.
    pub fn projects_file(&self) -> PathBuf {
        self.config_dir.join(defaults::PROJECTS_FILE)
    }

    /// Path of the coordinate registry seed.
    pub fn build_versions_file(&self) -> PathBuf {
        self.config_dir.join(defaults::BUILD_VERSIONS_FILE)
    }

    /// Path of the plugin version properties.
    pub fn plugin_versions_file(&self) -> PathBuf {
        self.config_dir.join(defaults::PLUGIN_VERSIONS_FILE)
    }

    /// Directory receiving staged documents.
    pub fn generated_dir(&self) -> PathBuf {
        self.work_dir.join(defaults::GENERATED_DIR)
    }

    /// Check that the configuration can be used for a run.
    ///
    /// The configuration directory must be an existing, readable directory
    /// and the descriptor subdirectory name and output name must be non-blank.
    pub fn validate(&self) -> Result<()> {
        if self.project_pm_dir.trim().is_empty() {
            return Err(Error::configuration(
                "standard project PM directory name is blank",
            ));
        }
        if self.output_file.trim().is_empty() {
            return Err(Error::configuration("output document name is blank"));
        }
        check_config_dir(&self.config_dir)
    }
}

fn check_config_dir(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        return Err(Error::configuration(format!(
            "configuration directory not a directory - <{}>",
            dir.display()
        )));
    }
    if fs::read_dir(dir).is_err() {
        return Err(Error::configuration(format!(
            "cannot read from configuration directory <{}>",
            dir.display()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_paths() {
        let config = ManagerConfig::default();
        assert_eq!(config.projects_file(), PathBuf::from("src/pm/projects.pm"));
        assert_eq!(
            config.build_versions_file(),
            PathBuf::from("src/pm/build-versions.pm")
        );
        assert_eq!(
            config.generated_dir(),
            PathBuf::from("target/project-manager/generated")
        );
        assert_eq!(config.output_file, "pom.xml");
    }

    #[test]
    fn test_builder_overrides() {
        let config = ManagerConfig::new("/etc/pm")
            .with_project_pm_dir("src/bundle/pm")
            .with_work_dir("/tmp/work")
            .with_output_file("pom-generated.xml");
        assert_eq!(config.config_dir, PathBuf::from("/etc/pm"));
        assert_eq!(config.project_pm_dir, "src/bundle/pm");
        assert_eq!(config.generated_dir(), PathBuf::from("/tmp/work/generated"));
        assert_eq!(config.output_file, "pom-generated.xml");
    }

    #[test]
    fn test_validate_existing_dir() {
        let temp = TempDir::new().unwrap();
        let config = ManagerConfig::new(temp.path());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_missing_dir() {
        let config = ManagerConfig::new("/nonexistent/pm/config");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn test_validate_blank_pm_dir() {
        let temp = TempDir::new().unwrap();
        let config = ManagerConfig::new(temp.path()).with_project_pm_dir("  ");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("PM directory name is blank"));
    }
}
