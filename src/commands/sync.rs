//! # Sync Command Implementation
//!
//! This module implements the `sync` subcommand, which runs all phases of the
//! pipeline and writes every generated document that differs from the one in
//! its project.
//!
//! Documents are first staged in the working directory; a project's document
//! is only overwritten when the staged one differs from it, line endings
//! aside. Nothing is written when any project fails to load or resolve.

use anyhow::Result;
use clap::Args;

use project_manager::output::{emoji, plural, OutputConfig};
use project_manager::phases::orchestrator;
use project_manager::phases::write::WriteMode;

use super::ConfigArgs;

/// Generate build descriptors and write those that changed
#[derive(Args, Debug)]
pub struct SyncArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Execute the `sync` command.
pub fn execute(args: SyncArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let config = args.config.to_config()?;

    let report = orchestrator::execute(&config, WriteMode::Apply)
        .map_err(|e| anyhow::anyhow!("Failed to synchronise projects: {}", e))?;

    if report.is_empty() {
        println!("{} {}", emoji(&out, "✅", "[OK]"), out.success("no changes"));
        return Ok(());
    }

    println!(
        "{} wrote {}",
        emoji(&out, "📝", "[WROTE]"),
        plural(report.len(), "document", "documents")
    );
    for entry in report.entries() {
        println!(
            "   {} {} {}",
            out.dim(entry.staged.display()),
            out.dim("->"),
            out.changed(entry.canonical.display())
        );
    }
    Ok(())
}
