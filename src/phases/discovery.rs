//! Phase 2: Discovery
//!
//! Validates the directory structure of every project listed in the projects
//! index and locates its main descriptor.
//!
//! ## Process
//!
//! For each project directory, in index order:
//!
//! 1.  **Project directory**: must exist, be a directory, be readable and be
//!     writable. Writable because the output document is written back into
//!     it; this is checked by creating and removing a marker file.
//!
//! 2.  **Descriptor subdirectory**: must exist, be a directory and be
//!     readable. Only checked when the project directory passed.
//!
//! 3.  **Main descriptor**: must exist and be readable. Only checked when the
//!     descriptor subdirectory passed.
//!
//! Every directory is checked. All failures are collected and reported in a
//! single configuration error, so one run shows every broken project.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::project::{is_readable_file, ProjectLocation};

/// Marker created and removed again to check that a directory is writable
const WRITE_CHECK_FILE: &str = ".project-manager-write-check";

/// Execute Phase 2: validate project directories.
///
/// Returns one location per input directory, in input order. Repeated
/// directories are validated independently and yield repeated locations.
pub fn execute(project_dirs: &[String], project_pm_dir: &str) -> Result<Vec<ProjectLocation>> {
    let mut locations = Vec::with_capacity(project_dirs.len());
    let mut problems = Vec::new();

    for dir in project_dirs {
        let location = ProjectLocation::for_project(dir, project_pm_dir);
        match check_location(&location) {
            Some(problem) => problems.push(problem),
            None => {
                debug!("found project descriptor <{}>", location.descriptor_file.display());
                locations.push(location);
            }
        }
    }

    if problems.is_empty() {
        Ok(locations)
    } else {
        Err(Error::Configuration {
            message: "problems validating project directories".to_string(),
            problems,
        })
    }
}

/// First problem with a location, if any
fn check_location(location: &ProjectLocation) -> Option<String> {
    check_directory("project directory", &location.base_dir, true)
        .or_else(|| check_directory("project PM directory", &location.pm_dir, false))
        .or_else(|| check_descriptor(&location.descriptor_file))
}

fn check_directory(kind: &str, dir: &Path, must_be_writable: bool) -> Option<String> {
    let metadata = match fs::metadata(dir) {
        Ok(metadata) => metadata,
        Err(_) => return Some(format!("{} does not exist: <{}>", kind, dir.display())),
    };
    if !metadata.is_dir() {
        return Some(format!("{} is not a directory: <{}>", kind, dir.display()));
    }
    if fs::read_dir(dir).is_err() {
        return Some(format!("cannot read {}: <{}>", kind, dir.display()));
    }
    if must_be_writable && (metadata.permissions().readonly() || !can_create_file(dir)) {
        return Some(format!("cannot write to {}: <{}>", kind, dir.display()));
    }
    None
}

/// Whether a file can be created in `dir`.
///
/// Mode bits alone miss directories owned by another user, so this creates
/// and removes a marker file.
fn can_create_file(dir: &Path) -> bool {
    let marker = dir.join(WRITE_CHECK_FILE);
    match fs::OpenOptions::new().write(true).create(true).truncate(true).open(&marker) {
        Ok(_) => {
            if let Err(e) = fs::remove_file(&marker) {
                debug!("cannot remove <{}>: {}", marker.display(), e);
            }
            true
        }
        Err(_) => false,
    }
}

fn check_descriptor(file: &Path) -> Option<String> {
    if !file.exists() {
        return Some(format!("project property file does not exist: <{}>", file.display()));
    }
    if !is_readable_file(file) {
        return Some(format!("cannot read project property file: <{}>", file.display()));
    }
    None
}
