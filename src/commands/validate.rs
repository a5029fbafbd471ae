//! # Validate Command Implementation
//!
//! This module implements the `validate` subcommand, which runs the loading
//! phases of the pipeline (seeding, discovery, construction and resolution)
//! and reports a summary. No document is generated.
//!
//! Every problem found in one batch (all project directories, all registry
//! entries, all dependency declarations) is reported together.

use anyhow::Result;
use clap::Args;

use project_manager::output::{emoji, plural, OutputConfig};

use super::{load_model, ConfigArgs};

/// Load and validate all projects without generating anything
#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Execute the `validate` command.
pub fn execute(args: ValidateArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    println!(
        "{} Validating projects from: {}",
        emoji(&out, "🔍", "[SCAN]"),
        args.config.config_dir.display()
    );

    let model = match load_model(&args.config) {
        Ok(model) => model,
        Err(e) => {
            println!("{} Validation failed", emoji(&out, "❌", "[ERR]"));
            return Err(e);
        }
    };

    println!("{} All projects are valid", emoji(&out, "✅", "[OK]"));
    println!("\n{} Summary:", emoji(&out, "📊", "[INFO]"));
    println!("   Projects: {}", model.projects.len());
    println!(
        "   Registry: {}",
        plural(model.registry.len(), "coordinate", "coordinates")
    );
    println!("   Plugin versions: {}", model.plugin_versions.len());
    for project in model.projects.iter() {
        println!(
            "   - {} {} ({})",
            out.bold(project.id()),
            out.dim(project.coordinate().gav()),
            plural(project.dependencies().len(), "dependency", "dependencies")
        );
    }
    Ok(())
}
