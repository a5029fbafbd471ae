//! Phase 6: Writing to Disk
//!
//! This is the final phase of a run. It decides, per project, whether the
//! freshly rendered document differs from the one already in the project and
//! writes it back if so.
//!
//! ## Process
//!
//! 1.  **Stage**: Every document is written to
//!     `<workdir>/generated/<projectId>.pom`, creating directories as needed.
//!
//! 2.  **Compare**: The staged text is compared with the project's existing
//!     document, ignoring line terminators. A missing document always counts
//!     as changed.
//!
//! 3.  **Copy**: In `WriteMode::Apply`, changed documents are copied over the
//!     existing ones, but only after every document has been staged and
//!     compared. `WriteMode::DryRun` stops after the comparison.
//!
//! The resulting `SyncReport` lists every changed document in project id
//! order. An empty report means nothing changed.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Serialize;

use crate::defaults;
use crate::document::{contents_equal_ignore_eol, DocumentSet, RenderedDocument};
use crate::error::{Error, Result};

/// Whether changed documents are written back to their projects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Copy changed documents over the existing ones
    Apply,
    /// Stage and compare only
    DryRun,
}

/// A document that changed in this run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncEntry {
    pub project_id: String,
    pub staged: PathBuf,
    pub canonical: PathBuf,
}

impl fmt::Display for SyncEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.staged.display(), self.canonical.display())
    }
}

/// Changed documents of one run, in project id order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    entries: Vec<SyncEntry>,
}

impl SyncReport {
    pub fn entries(&self) -> &[SyncEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no document changed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

/// Execute Phase 6: stage, compare and (in apply mode) write documents.
pub fn execute(documents: &DocumentSet, generated_dir: &Path, mode: WriteMode) -> Result<SyncReport> {
    fs::create_dir_all(generated_dir).map_err(|e| Error::Filesystem {
        message: format!(
            "Failed to create directory '{}': {}",
            generated_dir.display(),
            e
        ),
    })?;

    // Stage and compare everything before touching any project
    let mut report = SyncReport::default();
    for document in documents.iter() {
        let staged = stage(document, generated_dir)?;
        if is_current(document)? {
            debug!("document of project <{}> is up to date", document.project_id);
            continue;
        }
        report.entries.push(SyncEntry {
            project_id: document.project_id.clone(),
            staged,
            canonical: document.target.clone(),
        });
    }

    if mode == WriteMode::Apply {
        for entry in report.entries() {
            fs::copy(&entry.staged, &entry.canonical).map_err(|e| Error::Filesystem {
                message: format!(
                    "Failed to copy '{}' to '{}': {}",
                    entry.staged.display(),
                    entry.canonical.display(),
                    e
                ),
            })?;
            info!("writing new document: {}", entry);
        }
    }
    Ok(report)
}

/// Staging location of a project's document
pub fn staged_path(generated_dir: &Path, project_id: &str) -> PathBuf {
    generated_dir.join(format!("{}.{}", project_id, defaults::GENERATED_EXTENSION))
}

fn stage(document: &RenderedDocument, generated_dir: &Path) -> Result<PathBuf> {
    let staged = staged_path(generated_dir, &document.project_id);
    fs::write(&staged, &document.content).map_err(|e| Error::Filesystem {
        message: format!("Failed to write file '{}': {}", staged.display(), e),
    })?;
    Ok(staged)
}

/// Whether the existing document already has the rendered content
fn is_current(document: &RenderedDocument) -> Result<bool> {
    match fs::read(document.target()) {
        Ok(bytes) => Ok(contents_equal_ignore_eol(
            &String::from_utf8_lossy(&bytes),
            &document.content,
        )),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::Filesystem {
            message: format!(
                "Failed to read file '{}': {}",
                document.target().display(),
                e
            ),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn documents(root: &Path, entries: &[(&str, &str)]) -> DocumentSet {
        let mut set = DocumentSet::new();
        for (id, content) in entries {
            let dir = root.join(id);
            fs::create_dir_all(&dir).unwrap();
            set.insert(RenderedDocument::new(*id, dir.join("pom.xml"), content.to_string()));
        }
        set
    }

    #[test]
    fn test_new_documents_are_written_and_reported() {
        let temp = TempDir::new().unwrap();
        let generated = temp.path().join("work/generated");
        let set = documents(temp.path(), &[("b", "<b/>\n"), ("a", "<a/>\n")]);

        let report = execute(&set, &generated, WriteMode::Apply).unwrap();
        assert_eq!(report.len(), 2);
        assert_eq!(report.entries()[0].project_id, "a");
        assert_eq!(fs::read_to_string(temp.path().join("a/pom.xml")).unwrap(), "<a/>\n");
        assert_eq!(fs::read_to_string(generated.join("b.pom")).unwrap(), "<b/>\n");
        assert_eq!(
            report.to_string(),
            format!(
                "{} -> {}\n{} -> {}",
                generated.join("a.pom").display(),
                temp.path().join("a/pom.xml").display(),
                generated.join("b.pom").display(),
                temp.path().join("b/pom.xml").display()
            )
        );
    }

    #[test]
    fn test_second_run_reports_nothing() {
        let temp = TempDir::new().unwrap();
        let generated = temp.path().join("generated");
        let set = documents(temp.path(), &[("a", "<a/>\n")]);

        assert_eq!(execute(&set, &generated, WriteMode::Apply).unwrap().len(), 1);
        let second = execute(&set, &generated, WriteMode::Apply).unwrap();
        assert!(second.is_empty());
        assert_eq!(second.to_string(), "");
    }

    #[test]
    fn test_line_endings_do_not_count_as_change() {
        let temp = TempDir::new().unwrap();
        let set = documents(temp.path(), &[("a", "<a>\n</a>\n")]);
        fs::write(temp.path().join("a/pom.xml"), "<a>\r\n</a>\r\n").unwrap();

        let report = execute(&set, &temp.path().join("generated"), WriteMode::Apply).unwrap();
        assert!(report.is_empty());
        assert_eq!(
            fs::read_to_string(temp.path().join("a/pom.xml")).unwrap(),
            "<a>\r\n</a>\r\n"
        );
    }

    #[test]
    fn test_dry_run_leaves_documents_untouched() {
        let temp = TempDir::new().unwrap();
        let generated = temp.path().join("generated");
        let set = documents(temp.path(), &[("a", "<new/>\n"), ("b", "<b/>\n")]);
        fs::write(temp.path().join("a/pom.xml"), "<old/>\n").unwrap();

        let report = execute(&set, &generated, WriteMode::DryRun).unwrap();
        assert_eq!(report.len(), 2);
        assert_eq!(fs::read_to_string(temp.path().join("a/pom.xml")).unwrap(), "<old/>\n");
        assert!(!temp.path().join("b/pom.xml").exists());
        assert!(generated.join("a.pom").exists());
    }

    #[test]
    fn test_staging_failure_copies_nothing() {
        let temp = TempDir::new().unwrap();
        let generated = temp.path().join("generated");
        let set = documents(temp.path(), &[("a", "<a/>\n"), ("b", "<b/>\n")]);
        // A directory where b's staged file should go makes staging b fail
        fs::create_dir_all(generated.join("b.pom")).unwrap();

        let err = execute(&set, &generated, WriteMode::Apply).unwrap_err();
        assert!(matches!(err, Error::Filesystem { .. }));
        assert!(err.to_string().contains("b.pom"));
        assert!(generated.join("a.pom").exists());
        assert!(!temp.path().join("a/pom.xml").exists());
    }

    #[test]
    fn test_staged_path() {
        assert_eq!(
            staged_path(Path::new("target/project-manager/generated"), "core"),
            Path::new("target/project-manager/generated/core.pom")
        );
    }
}
