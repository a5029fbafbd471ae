//! # Descriptor Schema
//!
//! Closed enumerations describing what the engine understands:
//!
//! - **`ProjectProperty`**: every recognised key of a project descriptor,
//!   with its required flag, default value and description.
//! - **`ProjectFile`**: the fixed set of files looked up in a project's
//!   descriptor subdirectory, each bound to the document slot its content
//!   is spliced into.
//! - **`License`**: the known license keys and their `<license>` fragments.
//! - **`BuiltinFragment`**: plugin and profile fragments bundled with the
//!   tool and switched on by descriptor flags.
//! - **`Slot`**: the named places in the output document that receive
//!   fragment text.
//!
//! Each enumeration carries its metadata as constant data; nothing
//! downstream dispatches on raw strings.

use serde::Serialize;

/// A recognised project descriptor property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProjectProperty {
    PmId,
    PmDependencies,
    PmLicenses,
    PmPlugins,
    PmProfiles,
    PmDoBundleDoc,
    PmUseJarPlugin,
    PmUseSrcProfile,
    PmUseCompilerPlugin,
    PmUseJavadocProfile,
    PmUseJavadocAdocProfile,
    PmUseMavenSitePlugin,
    MvnGroupId,
    MvnArtifactId,
    MvnVersion,
    MvnPackaging,
    MvnCompilerSource,
    MvnCompilerTarget,
    MvnEncoding,
    MvnName,
    MvnDescription,
    MvnUrl,
    MvnInceptionYear,
    MvnOrganizationName,
    MvnOrganizationUrl,
    MvnIssueManagementUrl,
    MvnIssueManagementSystem,
    MvnScmConnection,
    MvnScmDeveloperConnection,
    MvnScmUrl,
}

impl ProjectProperty {
    /// All properties, in declaration order
    pub const ALL: [ProjectProperty; 30] = [
        ProjectProperty::PmId,
        ProjectProperty::PmDependencies,
        ProjectProperty::PmLicenses,
        ProjectProperty::PmPlugins,
        ProjectProperty::PmProfiles,
        ProjectProperty::PmDoBundleDoc,
        ProjectProperty::PmUseJarPlugin,
        ProjectProperty::PmUseSrcProfile,
        ProjectProperty::PmUseCompilerPlugin,
        ProjectProperty::PmUseJavadocProfile,
        ProjectProperty::PmUseJavadocAdocProfile,
        ProjectProperty::PmUseMavenSitePlugin,
        ProjectProperty::MvnGroupId,
        ProjectProperty::MvnArtifactId,
        ProjectProperty::MvnVersion,
        ProjectProperty::MvnPackaging,
        ProjectProperty::MvnCompilerSource,
        ProjectProperty::MvnCompilerTarget,
        ProjectProperty::MvnEncoding,
        ProjectProperty::MvnName,
        ProjectProperty::MvnDescription,
        ProjectProperty::MvnUrl,
        ProjectProperty::MvnInceptionYear,
        ProjectProperty::MvnOrganizationName,
        ProjectProperty::MvnOrganizationUrl,
        ProjectProperty::MvnIssueManagementUrl,
        ProjectProperty::MvnIssueManagementSystem,
        ProjectProperty::MvnScmConnection,
        ProjectProperty::MvnScmDeveloperConnection,
        ProjectProperty::MvnScmUrl,
    ];

    /// Key of the property as written in a descriptor file
    pub const fn key(self) -> &'static str {
        match self {
            ProjectProperty::PmId => "pm.id",
            ProjectProperty::PmDependencies => "pm.dependencies",
            ProjectProperty::PmLicenses => "pm.licenses",
            ProjectProperty::PmPlugins => "pm.plugins",
            ProjectProperty::PmProfiles => "pm.profiles",
            ProjectProperty::PmDoBundleDoc => "pm.do.bundle-doc",
            ProjectProperty::PmUseJarPlugin => "pm.use.jar-plugin",
            ProjectProperty::PmUseSrcProfile => "pm.use.src-profile",
            ProjectProperty::PmUseCompilerPlugin => "pm.use.compiler-plugin",
            ProjectProperty::PmUseJavadocProfile => "pm.use.javadoc-profile",
            ProjectProperty::PmUseJavadocAdocProfile => "pm.use.javadoc-adoc-profile",
            ProjectProperty::PmUseMavenSitePlugin => "pm.use.maven-site-plugin",
            ProjectProperty::MvnGroupId => "mvn.group.id",
            ProjectProperty::MvnArtifactId => "mvn.artifact.id",
            ProjectProperty::MvnVersion => "mvn.version",
            ProjectProperty::MvnPackaging => "mvn.packaging",
            ProjectProperty::MvnCompilerSource => "mvn.properties.compiler.source",
            ProjectProperty::MvnCompilerTarget => "mvn.properties.compiler.target",
            ProjectProperty::MvnEncoding => "mvn.properties.encoding",
            ProjectProperty::MvnName => "mvn.name",
            ProjectProperty::MvnDescription => "mvn.description",
            ProjectProperty::MvnUrl => "mvn.url",
            ProjectProperty::MvnInceptionYear => "mvn.inception.year",
            ProjectProperty::MvnOrganizationName => "mvn.organization.name",
            ProjectProperty::MvnOrganizationUrl => "mvn.organization.url",
            ProjectProperty::MvnIssueManagementUrl => "mvn.issue.management.url",
            ProjectProperty::MvnIssueManagementSystem => "mvn.issue.management.system",
            ProjectProperty::MvnScmConnection => "mvn.scm.connection",
            ProjectProperty::MvnScmDeveloperConnection => "mvn.scm.developer.connection",
            ProjectProperty::MvnScmUrl => "mvn.scm.url",
        }
    }

    /// Whether a descriptor must define the property with a non-blank value
    pub const fn is_required(self) -> bool {
        matches!(
            self,
            ProjectProperty::PmId
                | ProjectProperty::MvnGroupId
                | ProjectProperty::MvnArtifactId
                | ProjectProperty::MvnVersion
        )
    }

    /// Value used when the property is absent
    pub const fn default_value(self) -> Option<&'static str> {
        match self {
            ProjectProperty::MvnPackaging => Some("jar"),
            _ => None,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            ProjectProperty::PmId => "identifier of the project, unique for all loaded projects",
            ProjectProperty::PmDependencies => {
                "dependencies as a list of identifiers with an optional scope separated by a slash"
            }
            ProjectProperty::PmLicenses => "license keys, translated to license definitions",
            ProjectProperty::PmPlugins => {
                "files with plugin definitions, relative to the descriptor directory"
            }
            ProjectProperty::PmProfiles => {
                "files with profile definitions, relative to the descriptor directory"
            }
            ProjectProperty::PmDoBundleDoc => "flag for a profile compiling bundle documentation",
            ProjectProperty::PmUseJarPlugin => "flag for adding a jar plugin",
            ProjectProperty::PmUseSrcProfile => "flag for adding a source jar profile",
            ProjectProperty::PmUseCompilerPlugin => "flag for adding a compiler plugin",
            ProjectProperty::PmUseJavadocProfile => "flag for adding a Javadoc profile",
            ProjectProperty::PmUseJavadocAdocProfile => {
                "flag for adding a Javadoc profile with AsciiDoc doclet"
            }
            ProjectProperty::PmUseMavenSitePlugin => "flag for adding a maven site plugin",
            ProjectProperty::MvnGroupId => "maven group identifier",
            ProjectProperty::MvnArtifactId => "maven artifact identifier",
            ProjectProperty::MvnVersion => "maven version",
            ProjectProperty::MvnPackaging => "packaging of the maven project: jar, maven-plugin, ...",
            ProjectProperty::MvnCompilerSource => "compiler source version",
            ProjectProperty::MvnCompilerTarget => "compiler target version",
            ProjectProperty::MvnEncoding => "source file encoding",
            ProjectProperty::MvnName => "project name",
            ProjectProperty::MvnDescription => "project description",
            ProjectProperty::MvnUrl => "project URL",
            ProjectProperty::MvnInceptionYear => "project inception year",
            ProjectProperty::MvnOrganizationName => "organization name",
            ProjectProperty::MvnOrganizationUrl => "organization URL",
            ProjectProperty::MvnIssueManagementUrl => "issue management URL",
            ProjectProperty::MvnIssueManagementSystem => "issue management system",
            ProjectProperty::MvnScmConnection => "SCM connection",
            ProjectProperty::MvnScmDeveloperConnection => "SCM developer connection",
            ProjectProperty::MvnScmUrl => "SCM URL",
        }
    }

    /// All required properties
    pub fn required() -> impl Iterator<Item = ProjectProperty> {
        Self::ALL.into_iter().filter(|p| p.is_required())
    }

    /// Look up a property by its descriptor key
    pub fn from_key(key: &str) -> Option<ProjectProperty> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    /// All descriptor keys
    pub fn keys() -> Vec<&'static str> {
        Self::ALL.iter().map(|p| p.key()).collect()
    }
}

/// A named place in the output document receiving fragment text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Plugins,
    Profiles,
    Licenses,
    Dependencies,
    DistributionManagement,
    Developers,
    Contributors,
    Modules,
    Reporting,
    Properties,
}

impl Slot {
    pub const ALL: [Slot; 10] = [
        Slot::Plugins,
        Slot::Profiles,
        Slot::Licenses,
        Slot::Dependencies,
        Slot::DistributionManagement,
        Slot::Developers,
        Slot::Contributors,
        Slot::Modules,
        Slot::Reporting,
        Slot::Properties,
    ];

    /// Name under which the template sees the slot
    pub const fn name(self) -> &'static str {
        match self {
            Slot::Plugins => "plugins",
            Slot::Profiles => "profiles",
            Slot::Licenses => "licenses",
            Slot::Dependencies => "dependencies",
            Slot::DistributionManagement => "distribution_management",
            Slot::Developers => "developers",
            Slot::Contributors => "contributors",
            Slot::Modules => "modules",
            Slot::Reporting => "reporting",
            Slot::Properties => "properties",
        }
    }
}

/// A file looked up in a project's descriptor subdirectory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProjectFile {
    /// The main descriptor of a managed project
    ManagedProjectProperties,
    Dependencies,
    DistributionManagement,
    Developers,
    Contributors,
    Modules,
    Reporting,
    Profiles,
    Properties,
}

impl ProjectFile {
    pub const ALL: [ProjectFile; 9] = [
        ProjectFile::ManagedProjectProperties,
        ProjectFile::Dependencies,
        ProjectFile::DistributionManagement,
        ProjectFile::Developers,
        ProjectFile::Contributors,
        ProjectFile::Modules,
        ProjectFile::Reporting,
        ProjectFile::Profiles,
        ProjectFile::Properties,
    ];

    pub const fn file_name(self) -> &'static str {
        match self {
            ProjectFile::ManagedProjectProperties => "project.properties",
            ProjectFile::Dependencies => "dependencies.pm",
            ProjectFile::DistributionManagement => "distributionManagement.pm",
            ProjectFile::Developers => "developers.pm",
            ProjectFile::Contributors => "contributors.pm",
            ProjectFile::Modules => "modules.pm",
            ProjectFile::Reporting => "reporting.pm",
            ProjectFile::Profiles => "profiles.pm",
            ProjectFile::Properties => "properties.pm",
        }
    }

    /// Slot receiving the file content; `None` for the main descriptor
    pub const fn slot(self) -> Option<Slot> {
        match self {
            ProjectFile::ManagedProjectProperties => None,
            ProjectFile::Dependencies => Some(Slot::Dependencies),
            ProjectFile::DistributionManagement => Some(Slot::DistributionManagement),
            ProjectFile::Developers => Some(Slot::Developers),
            ProjectFile::Contributors => Some(Slot::Contributors),
            ProjectFile::Modules => Some(Slot::Modules),
            ProjectFile::Reporting => Some(Slot::Reporting),
            ProjectFile::Profiles => Some(Slot::Profiles),
            ProjectFile::Properties => Some(Slot::Properties),
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            ProjectFile::ManagedProjectProperties => "the main descriptor of a managed project",
            ProjectFile::Dependencies => "additional dependencies of the project",
            ProjectFile::DistributionManagement => "distribution management information",
            ProjectFile::Developers => "project developers",
            ProjectFile::Contributors => "project contributors",
            ProjectFile::Modules => "project modules",
            ProjectFile::Reporting => "project reporting",
            ProjectFile::Profiles => "project profiles",
            ProjectFile::Properties => "project properties",
        }
    }

    /// Optional fragment files, i.e. everything except the main descriptor
    pub fn fragments() -> impl Iterator<Item = ProjectFile> {
        Self::ALL
            .into_iter()
            .filter(|f| *f != ProjectFile::ManagedProjectProperties)
    }
}

/// A license a project may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum License {
    Apache2,
    Mit,
    Bsd2,
    Bsd3,
    Gpl3,
    Lgpl3,
    Epl2,
    Mpl2,
}

impl License {
    pub const ALL: [License; 8] = [
        License::Apache2,
        License::Mit,
        License::Bsd2,
        License::Bsd3,
        License::Gpl3,
        License::Lgpl3,
        License::Epl2,
        License::Mpl2,
    ];

    /// Short key used in `pm.licenses`
    pub const fn key(self) -> &'static str {
        match self {
            License::Apache2 => "apache2",
            License::Mit => "mit",
            License::Bsd2 => "bsd2",
            License::Bsd3 => "bsd3",
            License::Gpl3 => "gpl3",
            License::Lgpl3 => "lgpl3",
            License::Epl2 => "epl2",
            License::Mpl2 => "mpl2",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            License::Apache2 => "The Apache License, Version 2.0",
            License::Mit => "The MIT License",
            License::Bsd2 => "BSD 2-Clause License",
            License::Bsd3 => "BSD 3-Clause License",
            License::Gpl3 => "GNU General Public License, Version 3",
            License::Lgpl3 => "GNU Lesser General Public License, Version 3",
            License::Epl2 => "Eclipse Public License 2.0",
            License::Mpl2 => "Mozilla Public License 2.0",
        }
    }

    pub const fn url(self) -> &'static str {
        match self {
            License::Apache2 => "https://www.apache.org/licenses/LICENSE-2.0.txt",
            License::Mit => "https://opensource.org/licenses/MIT",
            License::Bsd2 => "https://opensource.org/licenses/BSD-2-Clause",
            License::Bsd3 => "https://opensource.org/licenses/BSD-3-Clause",
            License::Gpl3 => "https://www.gnu.org/licenses/gpl-3.0.txt",
            License::Lgpl3 => "https://www.gnu.org/licenses/lgpl-3.0.txt",
            License::Epl2 => "https://www.eclipse.org/legal/epl-2.0/",
            License::Mpl2 => "https://www.mozilla.org/en-US/MPL/2.0/",
        }
    }

    /// `<license>` fragment for the output document
    pub fn fragment(self) -> String {
        format!(
            "\t\t<license>\n\t\t\t<name>{}</name>\n\t\t\t<url>{}</url>\n\t\t\t<distribution>repo</distribution>\n\t\t</license>\n",
            self.display_name(),
            self.url()
        )
    }

    pub fn from_key(key: &str) -> Option<License> {
        Self::ALL.into_iter().find(|l| l.key() == key)
    }

    pub fn keys() -> Vec<&'static str> {
        Self::ALL.iter().map(|l| l.key()).collect()
    }
}

/// Plugin and profile fragments bundled with the tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinFragment {
    JarPlugin,
    CompilerPlugin,
    MavenSitePlugin,
    BundleDocProfile,
    SourceJarProfile,
    JavadocProfile,
    JavadocAdocProfile,
}

impl BuiltinFragment {
    pub const fn slot(self) -> Slot {
        match self {
            BuiltinFragment::JarPlugin
            | BuiltinFragment::CompilerPlugin
            | BuiltinFragment::MavenSitePlugin => Slot::Plugins,
            BuiltinFragment::BundleDocProfile
            | BuiltinFragment::SourceJarProfile
            | BuiltinFragment::JavadocProfile
            | BuiltinFragment::JavadocAdocProfile => Slot::Profiles,
        }
    }

    pub const fn text(self) -> &'static str {
        match self {
            BuiltinFragment::JarPlugin => include_str!("../templates/plugin-jar.xml"),
            BuiltinFragment::CompilerPlugin => include_str!("../templates/plugin-compiler.xml"),
            BuiltinFragment::MavenSitePlugin => include_str!("../templates/plugin-maven-site.xml"),
            BuiltinFragment::BundleDocProfile => include_str!("../templates/profile-bundledoc.xml"),
            BuiltinFragment::SourceJarProfile => include_str!("../templates/profile-sourcejar.xml"),
            BuiltinFragment::JavadocProfile => include_str!("../templates/profile-javadoc.xml"),
            BuiltinFragment::JavadocAdocProfile => {
                include_str!("../templates/profile-javadoc-adoc.xml")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_property_keys_are_unique() {
        let keys: HashSet<_> = ProjectProperty::keys().into_iter().collect();
        assert_eq!(keys.len(), ProjectProperty::ALL.len());
    }

    #[test]
    fn test_required_properties() {
        let required: Vec<_> = ProjectProperty::required().map(|p| p.key()).collect();
        assert_eq!(
            required,
            vec!["pm.id", "mvn.group.id", "mvn.artifact.id", "mvn.version"]
        );
    }

    #[test]
    fn test_property_from_key() {
        assert_eq!(
            ProjectProperty::from_key("pm.use.jar-plugin"),
            Some(ProjectProperty::PmUseJarPlugin)
        );
        assert_eq!(ProjectProperty::from_key("pm.use.jar"), None);
    }

    #[test]
    fn test_packaging_default() {
        assert_eq!(ProjectProperty::MvnPackaging.default_value(), Some("jar"));
        assert_eq!(ProjectProperty::MvnName.default_value(), None);
    }

    #[test]
    fn test_fragment_files_exclude_main_descriptor() {
        let fragments: Vec<_> = ProjectFile::fragments().collect();
        assert_eq!(fragments.len(), ProjectFile::ALL.len() - 1);
        assert!(!fragments.contains(&ProjectFile::ManagedProjectProperties));
        assert!(fragments.iter().all(|f| f.slot().is_some()));
        assert_eq!(ProjectFile::ManagedProjectProperties.slot(), None);
    }

    #[test]
    fn test_license_lookup() {
        assert_eq!(License::from_key("apache2"), Some(License::Apache2));
        assert_eq!(License::from_key("Apache2"), None);
        let fragment = License::Mit.fragment();
        assert!(fragment.contains("<name>The MIT License</name>"));
        assert!(fragment.contains("<url>https://opensource.org/licenses/MIT</url>"));
    }

    #[test]
    fn test_builtin_fragments_land_in_expected_slots() {
        assert_eq!(BuiltinFragment::JarPlugin.slot(), Slot::Plugins);
        assert_eq!(BuiltinFragment::JavadocAdocProfile.slot(), Slot::Profiles);
        assert!(BuiltinFragment::JarPlugin.text().contains("maven-jar-plugin"));
        assert!(BuiltinFragment::CompilerPlugin
            .text()
            .contains("maven-compiler-plugin"));
    }
}
