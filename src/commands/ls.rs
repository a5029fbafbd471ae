//! # Ls Command Implementation
//!
//! This module implements the `ls` subcommand, which lists the managed
//! projects after loading and resolving them.
//!
//! ## Functionality
//!
//! - **Project Listing**: One line per project with its coordinate, enabled
//!   flags and number of resolved dependencies, in project id order
//! - **JSON Output**: `--json` prints the same information for scripts
//!
//! This command is a safe, read-only operation that does not modify any files.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use project_manager::output::{plural, OutputConfig};
use project_manager::phases::orchestrator::LoadedModel;

use super::{load_model, ConfigArgs};

/// List the managed projects
#[derive(Args, Debug)]
pub struct LsArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Print the listing as JSON.
    #[arg(long)]
    pub json: bool,

    /// Show only the number of projects.
    #[arg(long, conflicts_with = "json")]
    pub count: bool,
}

/// A listed project
#[derive(Debug, Serialize)]
struct ProjectEntry {
    id: String,
    coordinate: String,
    packaging: String,
    directory: String,
    flags: Vec<&'static str>,
    licenses: Vec<&'static str>,
    dependencies: Vec<String>,
}

/// Execute the `ls` command.
pub fn execute(args: LsArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let model = load_model(&args.config)?;

    if args.count {
        println!("{}", model.projects.len());
        return Ok(());
    }

    let entries = entries(&model);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let width = entries.iter().map(|e| e.id.len()).max().unwrap_or(0);
    for entry in &entries {
        let flags = if entry.flags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", entry.flags.join(", "))
        };
        println!(
            "{:<width$}  {}{} {}",
            out.bold(&entry.id),
            entry.coordinate,
            flags,
            out.dim(format!(
                "({})",
                plural(entry.dependencies.len(), "dependency", "dependencies")
            )),
            width = width
        );
    }
    Ok(())
}

fn entries(model: &LoadedModel) -> Vec<ProjectEntry> {
    model
        .projects
        .iter()
        .map(|project| ProjectEntry {
            id: project.id().to_string(),
            coordinate: project.coordinate().gav(),
            packaging: project.descriptor().packaging.clone(),
            directory: project.base_dir().display().to_string(),
            flags: project.flags().enabled(),
            licenses: project.licenses().iter().map(|l| l.key()).collect(),
            dependencies: project
                .dependencies()
                .iter()
                .map(|d| format!("{}:{}:{}:{}", d.group_id, d.artifact_id, d.version, d.scope))
                .collect(),
        })
        .collect()
}
