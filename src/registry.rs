//! # Coordinate Registry
//!
//! Maps identifiers to `(group, artifact, version)` coordinates.
//!
//! The registry is filled in two steps: first from the shared version file,
//! then by every managed project registering its own coordinate under its
//! project id while it is constructed. Once all projects exist the registry
//! is sealed into a [`SealedRegistry`], the read-only view the dependency
//! resolver works with. Sealing consumes the mutable registry, so nothing
//! can register coordinates after resolution has started.

use std::collections::BTreeMap;

use log::debug;

use crate::error::{Error, Result};
use crate::properties::PropertyMap;

/// An identifier bound to a `(group, artifact, version)` triple
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoordinateEntry {
    id: String,
    group: String,
    artifact: String,
    version: String,
}

impl CoordinateEntry {
    /// Create an entry from its four parts; all of them must be non-blank.
    pub fn new(
        id: impl Into<String>,
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Result<Self> {
        let entry = Self {
            id: id.into(),
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
        };
        if entry.id.trim().is_empty() {
            return Err(Error::format("coordinate identifier is blank"));
        }
        for (part, value) in [
            ("group", &entry.group),
            ("artifact", &entry.artifact),
            ("version", &entry.version),
        ] {
            if value.trim().is_empty() {
                return Err(Error::format(format!(
                    "coordinate <{}> has a blank {}",
                    entry.id, part
                )));
            }
        }
        Ok(entry)
    }

    /// Parse a whitespace-separated `group artifact version` triple.
    pub fn parse(id: &str, raw: &str) -> Result<Self> {
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        match tokens.as_slice() {
            [group, artifact, version] => Self::new(id, *group, *artifact, *version),
            _ => Err(Error::format(format!(
                "dependency definition has not all required elements: <{}={}>",
                id, raw
            ))),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// `group:artifact:version`
    pub fn gav(&self) -> String {
        format!("{}:{}:{}", self.group, self.artifact, self.version)
    }
}

/// Registry under construction
#[derive(Debug, Clone, Default)]
pub struct CoordinateRegistry {
    entries: BTreeMap<String, CoordinateEntry>,
}

impl CoordinateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and register a raw `group artifact version` triple.
    ///
    /// A malformed triple is a format error and leaves the registry untouched.
    pub fn put(&mut self, id: &str, raw: &str) -> Result<()> {
        let entry = CoordinateEntry::parse(id, raw)?;
        self.insert(entry);
        Ok(())
    }

    /// Register an entry, replacing any previous entry with the same id.
    pub fn insert(&mut self, entry: CoordinateEntry) {
        if let Some(previous) = self.entries.get(entry.id()) {
            debug!(
                "coordinate <{}> redefined: {} -> {}",
                entry.id(),
                previous.gav(),
                entry.gav()
            );
        }
        self.entries.insert(entry.id.clone(), entry);
    }

    /// Look up an entry. Absence is expected before all projects are loaded.
    pub fn get(&self, id: &str) -> Option<&CoordinateEntry> {
        self.entries.get(id)
    }

    /// Register every entry of a version-definitions mapping.
    ///
    /// Well-formed entries are registered even when others fail; all format
    /// problems are reported together in one error.
    pub fn load_versions(&mut self, versions: &PropertyMap) -> Result<()> {
        let mut problems = Vec::new();
        for (id, raw) in versions.iter() {
            match CoordinateEntry::parse(id, raw) {
                Ok(entry) => self.insert(entry),
                Err(e) => problems.push(match e {
                    Error::Format { message, .. } => message,
                    other => other.to_string(),
                }),
            }
        }
        if problems.is_empty() {
            Ok(())
        } else {
            Err(Error::Format {
                message: "problems loading dependency versions".to_string(),
                problems,
            })
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Freeze the registry for the resolution phase.
    pub fn seal(self) -> SealedRegistry {
        SealedRegistry {
            entries: self.entries,
        }
    }
}

/// Read-only registry, available once every project has registered itself
#[derive(Debug, Clone, Default)]
pub struct SealedRegistry {
    entries: BTreeMap<String, CoordinateEntry>,
}

impl SealedRegistry {
    pub fn get(&self, id: &str) -> Option<&CoordinateEntry> {
        self.entries.get(id)
    }

    /// Entries in id order
    pub fn iter(&self) -> impl Iterator<Item = &CoordinateEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_and_get() {
        let mut registry = CoordinateRegistry::new();
        registry
            .put("commons-lang3", "org.apache.commons commons-lang3 3.4")
            .unwrap();
        let entry = registry.get("commons-lang3").unwrap();
        assert_eq!(entry.group(), "org.apache.commons");
        assert_eq!(entry.artifact(), "commons-lang3");
        assert_eq!(entry.version(), "3.4");
        assert_eq!(entry.gav(), "org.apache.commons:commons-lang3:3.4");
    }

    #[test]
    fn test_put_tolerates_extra_whitespace() {
        let mut registry = CoordinateRegistry::new();
        registry.put("st4", "  org.antlr \t ST4   4.0.8 ").unwrap();
        assert_eq!(registry.get("st4").unwrap().gav(), "org.antlr:ST4:4.0.8");
    }

    #[test]
    fn test_put_rejects_wrong_token_count() {
        let mut registry = CoordinateRegistry::new();
        for raw in ["org.antlr ST4", "a b c d", "", "   "] {
            let err = registry.put("st4", raw).unwrap_err();
            assert!(matches!(err, Error::Format { .. }), "raw: {:?}", raw);
        }
        assert!(registry.is_empty());
        assert!(registry.get("st4").is_none());
    }

    #[test]
    fn test_failed_put_keeps_previous_entry() {
        let mut registry = CoordinateRegistry::new();
        registry.put("st4", "org.antlr ST4 4.0.8").unwrap();
        assert!(registry.put("st4", "org.antlr ST4").is_err());
        assert_eq!(registry.get("st4").unwrap().version(), "4.0.8");
    }

    #[test]
    fn test_new_rejects_blank_parts() {
        assert!(CoordinateEntry::new("", "g", "a", "v").is_err());
        assert!(CoordinateEntry::new("x", "g", " ", "v").is_err());
        assert!(CoordinateEntry::new("x", "g", "a", "").is_err());
    }

    #[test]
    fn test_load_versions_aggregates_all_errors() {
        let versions: PropertyMap = [
            ("good", "g a 1.0"),
            ("short", "g a"),
            ("long", "g a 1.0 extra"),
            ("also-good", "g b 2.0"),
        ]
        .into_iter()
        .collect();

        let mut registry = CoordinateRegistry::new();
        let err = registry.load_versions(&versions).unwrap_err();
        assert_eq!(err.problems().len(), 2);
        assert!(err.problems()[0].contains("<short=g a>"));
        assert!(err.problems()[1].contains("<long=g a 1.0 extra>"));
        assert!(registry.get("good").is_some());
        assert!(registry.get("also-good").is_some());
    }

    #[test]
    fn test_sealed_registry_iterates_in_id_order() {
        let mut registry = CoordinateRegistry::new();
        registry.put("zeta", "g z 1").unwrap();
        registry.put("alpha", "g a 1").unwrap();
        registry.put("mid", "g m 1").unwrap();
        let sealed = registry.seal();
        let ids: Vec<_> = sealed.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["alpha", "mid", "zeta"]);
        assert_eq!(sealed.len(), 3);
    }

    #[test]
    fn test_insert_replaces_existing_id() {
        let mut registry = CoordinateRegistry::new();
        registry.put("core", "g core 1.0").unwrap();
        registry.insert(CoordinateEntry::new("core", "g", "core", "2.0").unwrap());
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("core").unwrap().version(), "2.0");
    }
}
