//! Rendered documents held in memory between assembly and writing

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A generated document for one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// Id of the project the document belongs to
    pub project_id: String,
    /// Canonical location of the document inside the project
    pub target: PathBuf,
    /// Rendered content
    pub content: String,
}

impl RenderedDocument {
    pub fn new(project_id: impl Into<String>, target: impl Into<PathBuf>, content: String) -> Self {
        Self {
            project_id: project_id.into(),
            target: target.into(),
            content,
        }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }
}

/// Rendered documents keyed and ordered by project id
#[derive(Debug, Clone, Default)]
pub struct DocumentSet {
    documents: BTreeMap<String, RenderedDocument>,
}

impl DocumentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the document of a project
    pub fn insert(&mut self, document: RenderedDocument) {
        self.documents.insert(document.project_id.clone(), document);
    }

    pub fn get(&self, project_id: &str) -> Option<&RenderedDocument> {
        self.documents.get(project_id)
    }

    /// Documents in project id order
    pub fn iter(&self) -> impl Iterator<Item = &RenderedDocument> {
        self.documents.values()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Compare two texts line by line, ignoring the line terminators.
///
/// `\n`, `\r\n` and a lone `\r` all end a line, and a missing final line
/// terminator does not count as a difference.
pub fn contents_equal_ignore_eol(a: &str, b: &str) -> bool {
    let a = normalize_eol(a);
    let b = normalize_eol(b);
    a.lines().eq(b.lines())
}

fn normalize_eol(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
