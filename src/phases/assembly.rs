//! Phase 5: Assembly
//!
//! Renders one output document per managed project from the bundled base
//! template and the project's fragments.
//!
//! ## Process
//!
//! 1.  **Composition (`compose`)**: The fragments of a project are collected
//!     into an ordered list of `(slot, source)` pairs. The order is fixed:
//!     - (a) bundle-doc profile
//!     - (b) jar plugin
//!     - (c) source-jar profile
//!     - (d) compiler plugin, then maven-site plugin
//!     - (e) javadoc profile, then javadoc-adoc profile
//!     - (f) licenses, in declared order
//!     - (g) other project files, in `ProjectFile` order
//!     - (h) declared plugin files
//!     - (i) declared profile files
//!
//! 2.  **Loading**: Fragment text is read. A file that cannot be read is
//!     logged and skipped; the document is rendered without it.
//!
//! 3.  **Rendering**: The base template is rendered with `minijinja`. Scalar
//!     project values go through the `xml` filter, fragment text is spliced
//!     verbatim.
//!
//! 4.  **Well-formedness**: The rendered text is parsed with `xot`. Fragments
//!     are opaque, so a malformed document is only logged.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use log::{debug, info, warn};
use minijinja::{context, AutoEscape, Environment};
use xot::Xot;

use super::seed::PluginVersion;
use super::ProjectSet;
use crate::document::{DocumentSet, RenderedDocument};
use crate::error::Result;
use crate::project::ManagedProject;
use crate::schema::{BuiltinFragment, License, Slot};

/// Name of the bundled base template
pub const TEMPLATE_NAME: &str = "pom.xml.jinja";

const TEMPLATE_SOURCE: &str = include_str!("../../templates/pom.xml.jinja");

/// Where the text of a fragment comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentSource {
    /// A fragment bundled with the tool
    Builtin(BuiltinFragment),
    /// The `<license>` block of a known license
    License(License),
    /// A file in the project's descriptor directory
    File(PathBuf),
}

/// One entry of a project's composition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub slot: Slot,
    pub source: FragmentSource,
}

impl Fragment {
    fn builtin(fragment: BuiltinFragment) -> Self {
        Self {
            slot: fragment.slot(),
            source: FragmentSource::Builtin(fragment),
        }
    }

    /// Read the fragment text
    pub fn text(&self) -> io::Result<Cow<'static, str>> {
        match &self.source {
            FragmentSource::Builtin(fragment) => Ok(Cow::Borrowed(fragment.text())),
            FragmentSource::License(license) => Ok(Cow::Owned(license.fragment())),
            FragmentSource::File(path) => fs::read_to_string(path).map(Cow::Owned),
        }
    }
}

/// Compose the ordered fragment list of a project.
pub fn compose(project: &ManagedProject) -> Vec<Fragment> {
    let flags = project.flags();
    let mut fragments = Vec::new();

    let builtins = [
        (flags.bundle_doc, BuiltinFragment::BundleDocProfile),
        (flags.jar_plugin, BuiltinFragment::JarPlugin),
        (flags.source_profile, BuiltinFragment::SourceJarProfile),
        (flags.compiler_plugin, BuiltinFragment::CompilerPlugin),
        (flags.maven_site_plugin, BuiltinFragment::MavenSitePlugin),
        (flags.javadoc_profile, BuiltinFragment::JavadocProfile),
        (flags.javadoc_adoc_profile, BuiltinFragment::JavadocAdocProfile),
    ];
    fragments.extend(
        builtins
            .into_iter()
            .filter_map(|(wanted, fragment)| wanted.then(|| Fragment::builtin(fragment))),
    );

    fragments.extend(project.licenses().iter().map(|license| Fragment {
        slot: Slot::Licenses,
        source: FragmentSource::License(*license),
    }));

    fragments.extend(project.other_files().iter().filter_map(|(kind, path)| {
        kind.slot().map(|slot| Fragment {
            slot,
            source: FragmentSource::File(path.clone()),
        })
    }));

    fragments.extend(project.plugin_files().iter().map(|path| Fragment {
        slot: Slot::Plugins,
        source: FragmentSource::File(path.clone()),
    }));

    fragments.extend(project.profile_files().iter().map(|path| Fragment {
        slot: Slot::Profiles,
        source: FragmentSource::File(path.clone()),
    }));

    fragments
}

/// Read the text of every fragment into its slot, in composition order.
///
/// Every slot is present in the result, possibly empty.
pub fn load_slots(project_id: &str, fragments: &[Fragment]) -> BTreeMap<&'static str, Vec<String>> {
    let mut slots: BTreeMap<&'static str, Vec<String>> =
        Slot::ALL.iter().map(|slot| (slot.name(), Vec::new())).collect();

    for fragment in fragments {
        let text = match fragment.text() {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    "project <{}>: skipping {} fragment {:?}: {}",
                    project_id,
                    fragment.slot.name(),
                    fragment.source,
                    e
                );
                continue;
            }
        };
        if text.trim().is_empty() {
            debug!(
                "project <{}>: empty {} fragment {:?}",
                project_id,
                fragment.slot.name(),
                fragment.source
            );
            continue;
        }
        let mut text = text.into_owned();
        if !text.ends_with('\n') {
            text.push('\n');
        }
        slots.entry(fragment.slot.name()).or_default().push(text);
    }
    slots
}

/// Renders output documents from the base template
pub struct DocumentAssembler {
    env: Environment<'static>,
}

impl DocumentAssembler {
    /// Create an assembler with the bundled base template.
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_filter("xml", xml_escape);
        env.add_template(TEMPLATE_NAME, TEMPLATE_SOURCE)?;
        Ok(Self { env })
    }

    /// Render the document text of one project.
    pub fn render(&self, project: &ManagedProject, plugin_versions: &[PluginVersion]) -> Result<String> {
        let slots = load_slots(project.id(), &compose(project));
        let template = self.env.get_template(TEMPLATE_NAME)?;
        let content = template.render(context! {
            project => project.descriptor(),
            dependencies => project.dependencies(),
            plugin_versions => plugin_versions,
            slots => slots,
        })?;
        check_well_formed(project.id(), &content);
        Ok(content)
    }

    /// Render the document of one project, targeted at its canonical location.
    pub fn assemble(
        &self,
        project: &ManagedProject,
        plugin_versions: &[PluginVersion],
        output_file: &str,
    ) -> Result<RenderedDocument> {
        let content = self.render(project, plugin_versions)?;
        Ok(RenderedDocument::new(
            project.id(),
            project.base_dir().join(output_file),
            content,
        ))
    }
}

/// Execute Phase 5: render the documents of all projects.
pub fn execute(
    projects: &ProjectSet,
    plugin_versions: &[PluginVersion],
    output_file: &str,
) -> Result<DocumentSet> {
    let assembler = DocumentAssembler::new()?;
    let mut documents = DocumentSet::new();
    for project in projects.iter() {
        debug!("assembling document for project <{}>", project.id());
        documents.insert(assembler.assemble(project, plugin_versions, output_file)?);
    }
    info!("assembled {} document(s)", documents.len());
    Ok(documents)
}

fn xml_escape(value: String) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn check_well_formed(project_id: &str, content: &str) {
    let mut xot = Xot::new();
    if let Err(e) = xot.parse(content) {
        warn!(
            "document of project <{}> is not well-formed XML: {:?}",
            project_id, e
        );
    }
}
