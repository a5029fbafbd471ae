//! CLI argument parsing and command dispatch

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Project Manager - Generate and synchronise the build descriptors of managed projects
#[derive(Parser, Debug)]
#[command(name = "project-manager")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate build descriptors and write those that changed
    Sync(commands::sync::SyncArgs),

    /// Check whether any build descriptor is out of date (exit code 1 if so)
    Check(commands::check::CheckArgs),

    /// Load and validate all projects without generating anything
    Validate(commands::validate::ValidateArgs),

    /// List the managed projects
    Ls(commands::ls::LsArgs),

    /// Display projects and their dependencies as a tree
    Tree(commands::tree::TreeArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<ExitCode> {
        init_logging(&self.log_level);

        match self.command {
            Commands::Sync(args) => commands::sync::execute(args, &self.color)?,
            Commands::Check(args) => return commands::check::execute(args, &self.color),
            Commands::Validate(args) => commands::validate::execute(args, &self.color)?,
            Commands::Ls(args) => commands::ls::execute(args, &self.color)?,
            Commands::Tree(args) => commands::tree::execute(args)?,
        }
        Ok(ExitCode::SUCCESS)
    }
}

/// Route `log` records to stderr; `RUST_LOG` takes precedence over `--log-level`.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // Only fails when a logger is already installed
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
