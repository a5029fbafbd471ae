//! Phase 1: Seeding
//!
//! Reads the shared files of the configuration directory before any project
//! is touched.
//!
//! ## Process
//!
//! 1.  **Configuration check**: The configuration directory must exist and be
//!     readable, and the descriptor subdirectory name must not be blank.
//!
//! 2.  **Projects index**: The values of `projects.pm` are the project
//!     directories of the run. The file is required and must list at least
//!     one directory.
//!
//! 3.  **Version registry**: `build-versions.pm` seeds the coordinate
//!     registry. The file is optional; every malformed entry is reported in
//!     one error.
//!
//! 4.  **Plugin versions**: `plugin-versions.pm` holds properties rendered
//!     into every output document. The file is optional; blank values and
//!     keys that cannot be element names are reported together.

use std::path::Path;

use log::{debug, info, warn};
use serde::Serialize;

use crate::config::ManagerConfig;
use crate::error::{Error, Result};
use crate::properties::PropertyMap;
use crate::registry::CoordinateRegistry;

/// A plugin version property rendered into each output document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginVersion {
    pub key: String,
    pub value: String,
}

/// Everything phase 1 reads from the configuration directory
#[derive(Debug, Clone, Default)]
pub struct Seed {
    /// Raw project directories, in index order
    pub project_dirs: Vec<String>,
    /// Registry seeded from the version file, still open for projects
    pub registry: CoordinateRegistry,
    /// Plugin version properties, in file order
    pub plugin_versions: Vec<PluginVersion>,
}

/// Execute Phase 1: read the projects index and the version files.
pub fn execute(config: &ManagerConfig) -> Result<Seed> {
    config.validate()?;

    let project_dirs = load_project_dirs(&config.projects_file())?;
    let registry = load_registry(&config.build_versions_file())?;
    let plugin_versions = load_plugin_versions(&config.plugin_versions_file())?;

    info!(
        "seeded {} project director{}, {} coordinate(s), {} plugin version(s)",
        project_dirs.len(),
        if project_dirs.len() == 1 { "y" } else { "ies" },
        registry.len(),
        plugin_versions.len()
    );

    Ok(Seed {
        project_dirs,
        registry,
        plugin_versions,
    })
}

/// Read the project directories listed in the projects index.
pub fn load_project_dirs(path: &Path) -> Result<Vec<String>> {
    if !path.is_file() {
        return Err(Error::configuration(format!(
            "projects file does not exist: <{}>",
            path.display()
        )));
    }
    let index = PropertyMap::load(path)?;

    let mut problems = Vec::new();
    let mut dirs = Vec::new();
    for (key, value) in index.iter() {
        let value = value.trim();
        if value.is_empty() {
            problems.push(format!("project <{}> has no directory", key));
        } else {
            dirs.push(value.to_string());
        }
    }
    if !problems.is_empty() {
        return Err(Error::Configuration {
            message: format!("problems reading projects file <{}>", path.display()),
            problems,
        });
    }
    if dirs.is_empty() {
        return Err(Error::configuration(format!(
            "empty projects file <{}>",
            path.display()
        )));
    }
    Ok(dirs)
}

/// Seed a registry from the version file, if there is one.
pub fn load_registry(path: &Path) -> Result<CoordinateRegistry> {
    let mut registry = CoordinateRegistry::new();
    if !path.exists() {
        warn!(
            "no build versions file <{}>, only project coordinates are available",
            path.display()
        );
        return Ok(registry);
    }
    let versions = PropertyMap::load(path)?;
    registry.load_versions(&versions)?;
    debug!("loaded {} coordinate(s) from <{}>", registry.len(), path.display());
    Ok(registry)
}

/// Read plugin version properties, if there are any.
pub fn load_plugin_versions(path: &Path) -> Result<Vec<PluginVersion>> {
    if !path.exists() {
        debug!("no plugin versions file <{}>", path.display());
        return Ok(Vec::new());
    }
    let properties = PropertyMap::load(path)?;

    let mut problems = Vec::new();
    let mut versions = Vec::new();
    for (key, value) in properties.iter() {
        let value = value.trim();
        if !is_element_name(key) {
            problems.push(format!("plugin version key is not a valid element name: <{}>", key));
        } else if value.is_empty() {
            problems.push(format!("plugin version <{}> is blank", key));
        } else {
            versions.push(PluginVersion {
                key: key.to_string(),
                value: value.to_string(),
            });
        }
    }
    if !problems.is_empty() {
        return Err(Error::Format {
            message: format!("problems loading plugin versions <{}>", path.display()),
            problems,
        });
    }
    Ok(versions)
}

fn is_element_name(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
}
