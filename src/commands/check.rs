//! # Check Command Implementation
//!
//! This module implements the `check` subcommand: a dry run of `sync`. All
//! documents are generated, staged and compared, but no project is touched.
//!
//! The exit code tells whether the projects are in sync:
//! - `0`: every document is up to date
//! - `1`: at least one document would change
//!
//! This makes the command usable as a CI gate.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use project_manager::output::{emoji, plural, OutputConfig};
use project_manager::phases::orchestrator;
use project_manager::phases::write::WriteMode;

use super::ConfigArgs;

/// Check whether any build descriptor is out of date
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Execute the `check` command.
pub fn execute(args: CheckArgs, color_flag: &str) -> Result<ExitCode> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let config = args.config.to_config()?;

    let report = orchestrator::execute(&config, WriteMode::DryRun)
        .map_err(|e| anyhow::anyhow!("Failed to check projects: {}", e))?;

    if report.is_empty() {
        println!("{} {}", emoji(&out, "✅", "[OK]"), out.success("no changes"));
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} {} would change:",
        emoji(&out, "⚠️", "[WARN]"),
        plural(report.len(), "document", "documents")
    );
    for entry in report.entries() {
        println!(
            "   {} {}",
            out.bold(&entry.project_id),
            out.changed(entry.canonical.display())
        );
    }
    Ok(ExitCode::from(1))
}
