//! Implementation of the phases of a project manager run.
//!
//! ## Overview
//!
//! A run follows 6 phases, strictly in sequence:
//! 1. Seeding - Read the projects index, the shared version registry and the plugin versions
//! 2. Discovery - Validate every project directory and locate its descriptor
//! 3. Construction - Build one managed project per location; each registers its own coordinate
//! 4. Resolution - Resolve all dependency declarations against the sealed registry
//! 5. Assembly - Compose and render one output document per project
//! 6. Writing - Stage documents, compare them with the existing ones, copy what changed
//!
//! Phase 4 needs the registry as it stands after phase 3 has finished for
//! every project, which is what allows a project to depend on another one
//! that is constructed later. The registry is therefore sealed between
//! phases 3 and 4.

use std::collections::BTreeMap;

use crate::project::ManagedProject;

// Phase modules
pub mod assembly;
pub mod construction;
pub mod discovery;
pub mod orchestrator;
pub mod resolution;
pub mod seed;
pub mod write;

// Numbered aliases for the phase modules
pub use assembly as phase5;
pub use construction as phase3;
pub use discovery as phase2;
pub use resolution as phase4;
pub use seed as phase1;
pub use write as phase6;

/// All managed projects of a run, keyed and ordered by project id
#[derive(Debug, Clone, Default)]
pub struct ProjectSet {
    projects: BTreeMap<String, ManagedProject>,
}

impl ProjectSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a project. Returns the project back if its id is already taken.
    pub fn insert(&mut self, project: ManagedProject) -> std::result::Result<(), ManagedProject> {
        if self.projects.contains_key(project.id()) {
            return Err(project);
        }
        self.projects.insert(project.id().to_string(), project);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&ManagedProject> {
        self.projects.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut ManagedProject> {
        self.projects.get_mut(id)
    }

    /// Projects in id order
    pub fn iter(&self) -> impl Iterator<Item = &ManagedProject> {
        self.projects.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.projects.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
