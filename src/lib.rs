//! # Project Manager Library
//!
//! This library generates the Maven build descriptor (`pom.xml`) of every
//! project in a fixed set of managed projects, and writes it back when it
//! changed. It is used by the `project-manager` command-line tool but can
//! also be driven directly.
//!
//! ## Quick Example
//!
//! ```
//! use project_manager::registry::CoordinateRegistry;
//!
//! let mut registry = CoordinateRegistry::new();
//! registry.put("st4", "org.antlr ST4 4.0.8").unwrap();
//! assert_eq!(registry.get("st4").unwrap().gav(), "org.antlr:ST4:4.0.8");
//!
//! // A triple needs exactly three tokens
//! assert!(registry.put("broken", "org.antlr ST4").is_err());
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`, `defaults`)**: Where the shared files live,
//!   the name of each project's descriptor subdirectory and of the output
//!   document.
//! - **Descriptors (`properties`, `schema`)**: Flat key-value files and the
//!   closed sets of known properties, fragment files and licenses.
//! - **Registry (`registry`)**: Maps identifiers to `group artifact version`
//!   coordinates. Filled from the version file and by every project, then
//!   sealed before dependencies are resolved.
//! - **Projects (`project`)**: One managed project per project directory,
//!   built from its typed descriptor.
//! - **Phases (`phases`)**: The pipeline running a complete synchronisation.
//!
//! ## Execution Flow
//!
//! The main entry point is `phases::orchestrator`, which executes:
//!
//! 1.  **Seeding**: Read the projects index and the version files.
//! 2.  **Discovery**: Validate every project directory.
//! 3.  **Construction**: Build the managed projects; each registers its own
//!     coordinate.
//! 4.  **Resolution**: Resolve dependency declarations against the sealed
//!     registry, so projects can depend on projects built after them.
//! 5.  **Assembly**: Render one document per project from the base template
//!     and the project's fragments.
//! 6.  **Writing**: Stage every document and copy those that changed.

pub mod config;
pub mod defaults;
pub mod document;
pub mod error;
pub mod output;
pub mod phases;
pub mod project;
pub mod properties;
pub mod registry;
pub mod schema;
pub mod suggestions;

#[cfg(test)]
mod registry_proptest;
