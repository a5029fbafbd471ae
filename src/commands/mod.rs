//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `project-manager` command-line tool. Each subcommand is defined in its own
//! file.
//!
//! ## Structure
//!
//! Each command module contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`. Every command flattens [`ConfigArgs`] into it.
//! - An `execute` function that takes the parsed `Args` and the output
//!   configuration and performs the command's logic by calling into the
//!   `project_manager` library.

pub mod check;
pub mod ls;
pub mod sync;
pub mod tree;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use project_manager::config::ManagerConfig;
use project_manager::defaults;
use project_manager::phases::orchestrator::{self, LoadedModel};
use project_manager::suggestions;

/// Options locating the configuration of a run, shared by all commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Directory holding projects.pm, build-versions.pm and plugin-versions.pm.
    #[arg(
        short,
        long,
        value_name = "DIR",
        env = "PM_CONFIG_DIR",
        default_value = defaults::PROJECT_PM_PATH
    )]
    pub config_dir: PathBuf,

    /// Descriptor subdirectory inside each project directory.
    #[arg(
        long,
        value_name = "PATH",
        env = "PM_PROJECT_DIR",
        default_value = defaults::PROJECT_PM_PATH
    )]
    pub project_dir: String,

    /// Working directory for staged documents.
    #[arg(
        short,
        long,
        value_name = "DIR",
        env = "PM_WORK_DIR",
        default_value = defaults::WORK_DIR
    )]
    pub work_dir: PathBuf,

    /// File name of the generated document in each project.
    #[arg(long, value_name = "NAME", default_value = defaults::OUTPUT_FILE)]
    pub output_file: String,
}

impl ConfigArgs {
    /// Build the run configuration, checking the files a run cannot do without.
    pub fn to_config(&self) -> Result<ManagerConfig> {
        if !self.config_dir.is_dir() {
            return Err(suggestions::config_dir_not_found(&self.config_dir));
        }
        let config = ManagerConfig::new(&self.config_dir)
            .with_project_pm_dir(self.project_dir.as_str())
            .with_work_dir(&self.work_dir)
            .with_output_file(self.output_file.as_str());
        if !config.projects_file().exists() {
            return Err(suggestions::projects_file_not_found(&config.projects_file()));
        }
        Ok(config)
    }
}

/// Load and validate all projects (phases 1-4).
pub fn load_model(args: &ConfigArgs) -> Result<LoadedModel> {
    let config = args.to_config()?;
    orchestrator::load(&config).map_err(|e| anyhow::anyhow!("Failed to load projects: {}", e))
}
