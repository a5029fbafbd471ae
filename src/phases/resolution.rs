//! Phase 4: Resolution
//!
//! Turns every project's `pm.dependencies` declarations into resolved
//! dependencies.
//!
//! ## Process
//!
//! 1.  **Parse**: Each declaration is a whitespace-separated token of the form
//!     `targetId` or `targetId/scope`. Without a scope the dependency gets the
//!     default scope.
//!
//! 2.  **Look up**: `targetId` is looked up in the sealed registry, which by
//!     now holds the version file entries and the coordinate of every project
//!     of the run.
//!
//! 3.  **Apply**: Only when every token of every project resolved are the
//!     dependency lists stored in the projects. Otherwise all unresolved or
//!     malformed tokens are reported in one validation error and no project
//!     is changed.

use log::{debug, info};

use super::ProjectSet;
use crate::error::{Error, Result};
use crate::project::{DependencySpec, ManagedProject};
use crate::registry::SealedRegistry;

/// Execute Phase 4: resolve dependencies of all projects.
pub fn execute(projects: &mut ProjectSet, registry: &SealedRegistry) -> Result<()> {
    let mut resolved = Vec::with_capacity(projects.len());
    let mut problems = Vec::new();

    for project in projects.iter() {
        let (dependencies, mut project_problems) = resolve_project(project, registry);
        problems.append(&mut project_problems);
        resolved.push((project.id().to_string(), dependencies));
    }

    if !problems.is_empty() {
        return Err(Error::Validation {
            message: "problems resolving dependencies".to_string(),
            problems,
        });
    }

    let mut total = 0;
    for (id, dependencies) in resolved {
        total += dependencies.len();
        if let Some(project) = projects.get_mut(&id) {
            project.set_dependencies(dependencies);
        }
    }
    info!("resolved {} dependenc{}", total, if total == 1 { "y" } else { "ies" });
    Ok(())
}

/// Resolve one project's declarations, collecting every problem.
fn resolve_project(
    project: &ManagedProject,
    registry: &SealedRegistry,
) -> (Vec<DependencySpec>, Vec<String>) {
    let mut dependencies: Vec<DependencySpec> = Vec::new();
    let mut problems = Vec::new();

    for token in project.dependency_declarations() {
        let (target, scope) = match parse_declaration(token) {
            Some(parsed) => parsed,
            None => {
                problems.push(format!(
                    "project <{}> has malformed dependency <{}> - check project's 'pm.dependencies'",
                    project.id(),
                    token
                ));
                continue;
            }
        };
        match registry.get(target) {
            Some(entry) => {
                let dependency = DependencySpec::new(entry, scope);
                debug!(
                    "project <{}> depends on {} ({})",
                    project.id(),
                    entry.gav(),
                    dependency.scope
                );
                if !dependencies.contains(&dependency) {
                    dependencies.push(dependency);
                }
            }
            None => problems.push(format!(
                "project <{}> uses unknown dependency <{}> - check project's 'pm.dependencies'",
                project.id(),
                token
            )),
        }
    }
    (dependencies, problems)
}

/// Split `targetId[/scope]`; `None` when the token is malformed.
fn parse_declaration(token: &str) -> Option<(&str, Option<&str>)> {
    let (target, scope) = match token.split_once('/') {
        Some((target, scope)) => (target, Some(scope)),
        None => (token, None),
    };
    if target.is_empty() || scope.is_some_and(|s| s.contains('/')) {
        return None;
    }
    Some((target, scope.filter(|s| !s.is_empty())))
}
