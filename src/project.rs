//! # Managed Projects
//!
//! A managed project is one directory whose build descriptor the tool
//! generates. It is built from the project's main descriptor file:
//!
//! 1. The raw key-value mapping is converted once into a typed
//!    [`ProjectDescriptor`]; every required property must be present and
//!    non-blank.
//! 2. The project's own coordinate is registered in the shared
//!    [`CoordinateRegistry`] under its project id, so other projects can
//!    depend on it no matter in which order projects are loaded.
//! 3. License keys are checked against the known [`License`] set.
//! 4. Optional fragment files ([`ProjectFile`]) present in the descriptor
//!    directory are recorded.
//! 5. Declared plugin and profile files must exist and be readable.
//!
//! Resolved dependencies start out empty and are filled in exactly once by
//! the resolution phase.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::properties::{split_list, PropertyMap};
use crate::registry::{CoordinateEntry, CoordinateRegistry};
use crate::schema::{License, ProjectFile, ProjectProperty};
use crate::suggestions;

/// Scope used when a dependency declaration names none
pub const DEFAULT_SCOPE: &str = "compile";

/// Presence-only switches of a project descriptor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProjectFlags {
    pub bundle_doc: bool,
    pub jar_plugin: bool,
    pub source_profile: bool,
    pub compiler_plugin: bool,
    pub javadoc_profile: bool,
    pub javadoc_adoc_profile: bool,
    pub maven_site_plugin: bool,
}

impl ProjectFlags {
    fn from_properties(properties: &PropertyMap) -> Self {
        let has = |p: ProjectProperty| properties.contains_key(p.key());
        Self {
            bundle_doc: has(ProjectProperty::PmDoBundleDoc),
            jar_plugin: has(ProjectProperty::PmUseJarPlugin),
            source_profile: has(ProjectProperty::PmUseSrcProfile),
            compiler_plugin: has(ProjectProperty::PmUseCompilerPlugin),
            javadoc_profile: has(ProjectProperty::PmUseJavadocProfile),
            javadoc_adoc_profile: has(ProjectProperty::PmUseJavadocAdocProfile),
            maven_site_plugin: has(ProjectProperty::PmUseMavenSitePlugin),
        }
    }

    /// Names of the flags that are set, in declaration order
    pub fn enabled(&self) -> Vec<&'static str> {
        [
            (self.bundle_doc, "bundle-doc"),
            (self.jar_plugin, "jar-plugin"),
            (self.source_profile, "src-profile"),
            (self.compiler_plugin, "compiler-plugin"),
            (self.javadoc_profile, "javadoc-profile"),
            (self.javadoc_adoc_profile, "javadoc-adoc-profile"),
            (self.maven_site_plugin, "maven-site-plugin"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect()
    }
}

/// Typed form of a project descriptor file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDescriptor {
    pub id: String,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub packaging: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub inception_year: Option<String>,
    pub organization_name: Option<String>,
    pub organization_url: Option<String>,
    pub issue_management_url: Option<String>,
    pub issue_management_system: Option<String>,
    pub scm_connection: Option<String>,
    pub scm_developer_connection: Option<String>,
    pub scm_url: Option<String>,
    pub compiler_source: Option<String>,
    pub compiler_target: Option<String>,
    pub encoding: Option<String>,
    /// Raw `id[/scope]` dependency declarations
    pub dependencies: Vec<String>,
    /// Raw license keys
    pub licenses: Vec<String>,
    /// Plugin file names, relative to the descriptor directory
    pub plugins: Vec<String>,
    /// Profile file names, relative to the descriptor directory
    pub profiles: Vec<String>,
    pub flags: ProjectFlags,
}

impl ProjectDescriptor {
    /// Convert the raw mapping of `file` into a descriptor.
    ///
    /// Every required property is checked before failing, and the error
    /// names the file and each missing key. The project id must be usable as
    /// a file name. Unknown keys are only logged.
    pub fn from_properties(properties: &PropertyMap, file: &Path) -> Result<Self> {
        let missing: Vec<String> = ProjectProperty::required()
            .filter(|p| {
                properties
                    .get(p.key())
                    .map_or(true, |value| value.trim().is_empty())
            })
            .map(|p| {
                format!(
                    "<{}> -> required property does not exist or is blank: <{}>",
                    file.display(),
                    p.key()
                )
            })
            .collect();
        if !missing.is_empty() {
            return Err(Error::Validation {
                message: format!("invalid project descriptor <{}>", file.display()),
                problems: missing,
            });
        }

        let id = properties.get(ProjectProperty::PmId.key()).unwrap_or_default().trim();
        if !is_single_path_component(id) {
            return Err(Error::validation(format!(
                "<{}> -> project id must be a single path component: <{}>",
                file.display(),
                id
            )));
        }

        for (key, _) in properties.iter() {
            if ProjectProperty::from_key(key).is_none() {
                match suggestions::did_you_mean_property(key) {
                    Some(hint) => warn!("<{}>: unknown property <{}>, {}", file.display(), key, hint),
                    None => warn!("<{}>: unknown property <{}>", file.display(), key),
                }
            }
        }

        let required = |p: ProjectProperty| -> String {
            properties.get(p.key()).unwrap_or_default().trim().to_string()
        };
        let optional = |p: ProjectProperty| -> Option<String> {
            properties
                .get(p.key())
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        let list = |p: ProjectProperty| split_list(properties.get(p.key()));

        Ok(Self {
            id: required(ProjectProperty::PmId),
            group_id: required(ProjectProperty::MvnGroupId),
            artifact_id: required(ProjectProperty::MvnArtifactId),
            version: required(ProjectProperty::MvnVersion),
            packaging: optional(ProjectProperty::MvnPackaging)
                .or_else(|| ProjectProperty::MvnPackaging.default_value().map(str::to_string))
                .unwrap_or_default(),
            name: optional(ProjectProperty::MvnName),
            description: optional(ProjectProperty::MvnDescription),
            url: optional(ProjectProperty::MvnUrl),
            inception_year: optional(ProjectProperty::MvnInceptionYear),
            organization_name: optional(ProjectProperty::MvnOrganizationName),
            organization_url: optional(ProjectProperty::MvnOrganizationUrl),
            issue_management_url: optional(ProjectProperty::MvnIssueManagementUrl),
            issue_management_system: optional(ProjectProperty::MvnIssueManagementSystem),
            scm_connection: optional(ProjectProperty::MvnScmConnection),
            scm_developer_connection: optional(ProjectProperty::MvnScmDeveloperConnection),
            scm_url: optional(ProjectProperty::MvnScmUrl),
            compiler_source: optional(ProjectProperty::MvnCompilerSource),
            compiler_target: optional(ProjectProperty::MvnCompilerTarget),
            encoding: optional(ProjectProperty::MvnEncoding),
            dependencies: list(ProjectProperty::PmDependencies),
            licenses: list(ProjectProperty::PmLicenses),
            plugins: list(ProjectProperty::PmPlugins),
            profiles: list(ProjectProperty::PmProfiles),
            flags: ProjectFlags::from_properties(properties),
        })
    }
}

/// A resolved dependency of a managed project
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DependencySpec {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub scope: String,
}

impl DependencySpec {
    /// Build a dependency from a resolved coordinate and an optional scope.
    pub fn new(entry: &CoordinateEntry, scope: Option<&str>) -> Self {
        Self {
            group_id: entry.group().to_string(),
            artifact_id: entry.artifact().to_string(),
            version: entry.version().to_string(),
            scope: scope
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(DEFAULT_SCOPE)
                .to_string(),
        }
    }
}

/// Where a project's files live, as validated by the discovery phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLocation {
    /// Project base directory; receives the output document
    pub base_dir: PathBuf,
    /// Descriptor subdirectory
    pub pm_dir: PathBuf,
    /// Main descriptor file inside the descriptor subdirectory
    pub descriptor_file: PathBuf,
}

impl ProjectLocation {
    /// Conventional locations for a project directory and descriptor
    /// subdirectory name.
    pub fn for_project(base_dir: impl Into<PathBuf>, project_pm_dir: &str) -> Self {
        let base_dir = base_dir.into();
        let pm_dir = base_dir.join(project_pm_dir);
        let descriptor_file = pm_dir.join(ProjectFile::ManagedProjectProperties.file_name());
        Self {
            base_dir,
            pm_dir,
            descriptor_file,
        }
    }
}

/// A project whose output document is generated
#[derive(Debug, Clone)]
pub struct ManagedProject {
    location: ProjectLocation,
    descriptor: ProjectDescriptor,
    coordinate: CoordinateEntry,
    licenses: Vec<License>,
    other_files: BTreeMap<ProjectFile, PathBuf>,
    plugin_files: Vec<PathBuf>,
    profile_files: Vec<PathBuf>,
    dependencies: Vec<DependencySpec>,
}

impl ManagedProject {
    /// Load a project from its validated location and register its
    /// coordinate in `registry`.
    pub fn load(registry: &mut CoordinateRegistry, location: ProjectLocation) -> Result<Self> {
        let properties = PropertyMap::load(&location.descriptor_file)?;
        let descriptor = ProjectDescriptor::from_properties(&properties, &location.descriptor_file)?;
        Self::from_descriptor(registry, location, descriptor)
    }

    /// Build a project from an already typed descriptor.
    pub fn from_descriptor(
        registry: &mut CoordinateRegistry,
        location: ProjectLocation,
        descriptor: ProjectDescriptor,
    ) -> Result<Self> {
        let coordinate = CoordinateEntry::new(
            descriptor.id.as_str(),
            descriptor.group_id.as_str(),
            descriptor.artifact_id.as_str(),
            descriptor.version.as_str(),
        )?;
        registry.insert(coordinate.clone());
        debug!("project <{}> registered as {}", descriptor.id, coordinate.gav());

        let licenses = resolve_licenses(&descriptor)?;
        let other_files = discover_other_files(&location.pm_dir);
        let plugin_files = declared_files(&descriptor.id, &location.pm_dir, &descriptor.plugins, "plugin")?;
        let profile_files =
            declared_files(&descriptor.id, &location.pm_dir, &descriptor.profiles, "profile")?;

        Ok(Self {
            location,
            descriptor,
            coordinate,
            licenses,
            other_files,
            plugin_files,
            profile_files,
            dependencies: Vec::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.descriptor.id
    }

    pub fn base_dir(&self) -> &Path {
        &self.location.base_dir
    }

    pub fn pm_dir(&self) -> &Path {
        &self.location.pm_dir
    }

    pub fn descriptor_file(&self) -> &Path {
        &self.location.descriptor_file
    }

    pub fn descriptor(&self) -> &ProjectDescriptor {
        &self.descriptor
    }

    pub fn coordinate(&self) -> &CoordinateEntry {
        &self.coordinate
    }

    pub fn flags(&self) -> ProjectFlags {
        self.descriptor.flags
    }

    /// Licenses in declaration order, without repetitions
    pub fn licenses(&self) -> &[License] {
        &self.licenses
    }

    /// Optional fragment files found in the descriptor directory
    pub fn other_files(&self) -> &BTreeMap<ProjectFile, PathBuf> {
        &self.other_files
    }

    /// Declared plugin files in declaration order
    pub fn plugin_files(&self) -> &[PathBuf] {
        &self.plugin_files
    }

    /// Declared profile files in declaration order
    pub fn profile_files(&self) -> &[PathBuf] {
        &self.profile_files
    }

    /// Raw `id[/scope]` declarations from the descriptor
    pub fn dependency_declarations(&self) -> &[String] {
        &self.descriptor.dependencies
    }

    /// Resolved dependencies; empty until the resolution phase ran
    pub fn dependencies(&self) -> &[DependencySpec] {
        &self.dependencies
    }

    pub(crate) fn set_dependencies(&mut self, dependencies: Vec<DependencySpec>) {
        self.dependencies = dependencies;
    }
}

fn resolve_licenses(descriptor: &ProjectDescriptor) -> Result<Vec<License>> {
    let mut licenses = Vec::new();
    for key in &descriptor.licenses {
        let license = License::from_key(key).ok_or_else(|| {
            Error::validation(format!(
                "project <{}> requires unknown license <{}>, {}",
                descriptor.id,
                key,
                suggestions::did_you_mean_license(key)
            ))
        })?;
        if !licenses.contains(&license) {
            licenses.push(license);
        }
    }
    Ok(licenses)
}

fn discover_other_files(pm_dir: &Path) -> BTreeMap<ProjectFile, PathBuf> {
    ProjectFile::fragments()
        .filter_map(|kind| {
            let path = pm_dir.join(kind.file_name());
            is_readable_file(&path).then_some((kind, path))
        })
        .collect()
}

fn declared_files(
    project_id: &str,
    pm_dir: &Path,
    names: &[String],
    kind: &str,
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for name in names {
        let path = pm_dir.join(name);
        if !is_readable_file(&path) {
            return Err(Error::configuration(format!(
                "project <{}> requires {} file <{}>, which does not exist or is not readable",
                project_id,
                kind,
                path.display()
            )));
        }
        if !files.contains(&path) {
            files.push(path);
        }
    }
    Ok(files)
}

pub(crate) fn is_readable_file(path: &Path) -> bool {
    path.is_file() && fs::File::open(path).is_ok()
}

/// Project ids name the staged document, so they must not leave its directory
fn is_single_path_component(id: &str) -> bool {
    !id.is_empty() && id != "." && id != ".." && !id.contains(['/', '\\'])
}
