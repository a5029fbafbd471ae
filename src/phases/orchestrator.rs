//! Orchestrator for a complete project manager run
//!
//! This module coordinates all phases to provide a clean API for the CLI
//! and for library users: `load` runs the phases that read and validate,
//! `execute` runs everything.

use log::info;

use super::seed::PluginVersion;
use super::write::{SyncReport, WriteMode};
use super::{phase1, phase2, phase3, phase4, phase5, phase6, ProjectSet};
use crate::config::ManagerConfig;
use crate::document::DocumentSet;
use crate::error::Result;
use crate::registry::SealedRegistry;

/// The validated model of a run: every project with its dependencies resolved
#[derive(Debug, Clone)]
pub struct LoadedModel {
    pub projects: ProjectSet,
    pub registry: SealedRegistry,
    pub plugin_versions: Vec<PluginVersion>,
}

/// Load and validate all projects (Phases 1-4)
///
/// 1. Read the projects index and the version files
/// 2. Validate project directories
/// 3. Construct managed projects, registering their coordinates
/// 4. Seal the registry and resolve dependencies
pub fn load(config: &ManagerConfig) -> Result<LoadedModel> {
    // Phase 1: Seeding
    let seed = phase1::execute(config)?;
    let mut registry = seed.registry;

    // Phase 2: Discovery
    let locations = phase2::execute(&seed.project_dirs, &config.project_pm_dir)?;

    // Phase 3: Construction
    let mut projects = phase3::execute(&mut registry, locations)?;

    // Phase 4: Resolution, against a registry nothing can register into anymore
    let registry = registry.seal();
    phase4::execute(&mut projects, &registry)?;

    Ok(LoadedModel {
        projects,
        registry,
        plugin_versions: seed.plugin_versions,
    })
}

/// Render the documents of a loaded model (Phase 5)
pub fn assemble(config: &ManagerConfig, model: &LoadedModel) -> Result<DocumentSet> {
    phase5::execute(&model.projects, &model.plugin_versions, &config.output_file)
}

/// Execute a complete run (Phases 1-6)
///
/// Nothing is written unless phases 1-5 succeed for every project. The
/// report's `Display` form is the run result: one `"<staged> -> <canonical>"`
/// line per changed document, empty when nothing changed.
pub fn execute(config: &ManagerConfig, mode: WriteMode) -> Result<SyncReport> {
    let model = load(config)?;
    let documents = assemble(config, &model)?;

    // Phase 6: Writing
    let report = phase6::execute(&documents, &config.generated_dir(), mode)?;
    info!(
        "{} of {} document(s) changed",
        report.len(),
        documents.len()
    );
    Ok(report)
}
