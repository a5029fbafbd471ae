//! Phase 3: Construction
//!
//! Builds one managed project per validated location.
//!
//! ## Process
//!
//! 1.  **Load**: Each descriptor is converted into a typed descriptor. A
//!     missing required property, an unknown license, or a declared plugin or
//!     profile file that cannot be read stops the run here.
//!
//! 2.  **Self-registration**: Every project registers its own coordinate in
//!     the registry under its project id while it is built. After this phase
//!     the registry knows every project of the run, whatever the order of the
//!     projects index.
//!
//! 3.  **Uniqueness**: Project ids must be unique across the run. Two
//!     directories declaring the same id are rejected.

use log::{debug, info};

use super::ProjectSet;
use crate::error::{Error, Result};
use crate::project::{ManagedProject, ProjectLocation};
use crate::registry::CoordinateRegistry;

/// Execute Phase 3: build all managed projects.
pub fn execute(
    registry: &mut CoordinateRegistry,
    locations: Vec<ProjectLocation>,
) -> Result<ProjectSet> {
    let mut projects = ProjectSet::new();
    for location in locations {
        let project = ManagedProject::load(registry, location)?;
        debug!(
            "constructed project <{}> from <{}>",
            project.id(),
            project.descriptor_file().display()
        );
        if let Err(duplicate) = projects.insert(project) {
            let existing = projects
                .get(duplicate.id())
                .map(|p| p.base_dir().display().to_string())
                .unwrap_or_default();
            return Err(Error::validation(format!(
                "duplicate project id <{}> in <{}> and <{}>",
                duplicate.id(),
                existing,
                duplicate.base_dir().display()
            )));
        }
    }
    info!("constructed {} project(s)", projects.len());
    Ok(projects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_project(root: &Path, dir: &str, id: &str) -> ProjectLocation {
        let location = ProjectLocation::for_project(root.join(dir), "src/pm");
        fs::create_dir_all(&location.pm_dir).unwrap();
        fs::write(
            &location.descriptor_file,
            format!("pm.id={id}\nmvn.group.id=de.example\nmvn.artifact.id={id}\nmvn.version=1.0\n"),
        )
        .unwrap();
        location
    }

    #[test]
    fn test_projects_register_their_coordinates() {
        let temp = TempDir::new().unwrap();
        let locations = vec![
            write_project(temp.path(), "b", "beta"),
            write_project(temp.path(), "a", "alpha"),
        ];
        let mut registry = CoordinateRegistry::new();
        let projects = execute(&mut registry, locations).unwrap();

        assert_eq!(projects.ids().collect::<Vec<_>>(), vec!["alpha", "beta"]);
        assert_eq!(registry.get("alpha").unwrap().gav(), "de.example:alpha:1.0");
        assert_eq!(registry.get("beta").unwrap().gav(), "de.example:beta:1.0");
    }

    #[test]
    fn test_project_overrides_seeded_coordinate() {
        let temp = TempDir::new().unwrap();
        let mut registry = CoordinateRegistry::new();
        registry.put("alpha", "old.group alpha 0.1").unwrap();
        execute(&mut registry, vec![write_project(temp.path(), "a", "alpha")]).unwrap();
        assert_eq!(registry.get("alpha").unwrap().gav(), "de.example:alpha:1.0");
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let temp = TempDir::new().unwrap();
        let locations = vec![
            write_project(temp.path(), "one", "core"),
            write_project(temp.path(), "two", "core"),
        ];
        let mut registry = CoordinateRegistry::new();
        let err = execute(&mut registry, locations).unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, Error::Validation { .. }));
        assert!(message.contains("duplicate project id <core>"));
        assert!(message.contains("one"));
        assert!(message.contains("two"));
    }

    #[test]
    fn test_same_directory_twice_is_a_duplicate() {
        let temp = TempDir::new().unwrap();
        let location = write_project(temp.path(), "core", "core");
        let mut registry = CoordinateRegistry::new();
        let err = execute(&mut registry, vec![location.clone(), location]).unwrap_err();
        assert!(err.to_string().contains("duplicate project id <core>"));
    }
}
