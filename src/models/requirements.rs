//! Version requirements model and trait implementations.
//!
//! Requirements are the unresolved dependency declarations of a package
//! version, in a representation specific to its package management system.
//! "Dependency" in these types follows each ecosystem's own terminology: a
//! single unresolved requirement.

use serde::{Deserialize, Serialize};

use crate::models::keys::VersionKey;
use crate::path;
use crate::traits::Get;

/// System-specific requirements of a package version. Only the section for
/// the version's system is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirements {
    /// NuGet requirements, grouped by target framework.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nuget: Option<NuGet>,

    /// npm requirements as declared in `package.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npm: Option<Npm>,

    /// Maven requirements as declared in the version's POM. Parent POMs are
    /// not merged and property references are not interpolated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maven: Option<Maven>,
}

impl Requirements {
    /// Name of the system whose section is populated.
    pub fn system(&self) -> Option<&'static str> {
        if self.npm.is_some() {
            Some("NPM")
        } else if self.maven.is_some() {
            Some("MAVEN")
        } else if self.nuget.is_some() {
            Some("NUGET")
        } else {
            None
        }
    }
}

/// A single name/requirement pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub requirement: String,
}

/// NuGet requirements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NuGet {
    #[serde(default)]
    pub dependency_groups: Vec<DependencyGroup>,
}

/// Requirements belonging to one target framework.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyGroup {
    #[serde(default)]
    pub target_framework: String,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

/// npm requirements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Npm {
    /// Dependency fields of the version's own `package.json`.
    #[serde(default)]
    pub dependencies: NpmDependencies,

    /// `package.json` files found under `node_modules` in the tarball,
    /// including nested ones.
    #[serde(default)]
    pub bundled: Vec<Bundle>,
}

/// The dependency-related fields of a `package.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NpmDependencies {
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
    #[serde(default)]
    pub dev_dependencies: Vec<Dependency>,
    #[serde(default)]
    pub optional_dependencies: Vec<Dependency>,
    #[serde(default)]
    pub peer_dependencies: Vec<Dependency>,
    /// Names of bundled packages. A `true` in the manifest expands to every
    /// name in `dependencies`.
    #[serde(default)]
    pub bundle_dependencies: Vec<String>,
}

/// A `package.json` bundled inside the tarball.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    /// Path inside the tarball.
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub dependencies: NpmDependencies,
}

/// Maven requirements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Maven {
    /// The direct parent POM.
    #[serde(default)]
    pub parent: VersionKey,
    #[serde(default)]
    pub dependencies: Vec<MavenDependency>,
    #[serde(default)]
    pub dependency_management: Vec<MavenDependency>,
    /// Properties used to resolve placeholders.
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub repositories: Vec<Repository>,
    #[serde(default)]
    pub profiles: Vec<Profile>,
}

/// A `<dependency>` element of a POM.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MavenDependency {
    #[serde(default)]
    pub name: String,
    /// Version requirement.
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub classifier: String,
    /// Defaults to `jar` when empty.
    #[serde(rename = "type", default)]
    pub dependency_type: String,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub optional: String,
    /// Excluded package names; may contain wildcards.
    #[serde(default)]
    pub exclusions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub layout: String,
    #[serde(default)]
    pub releases_enabled: String,
    #[serde(default)]
    pub snapshots_enabled: String,
}

/// A POM `<profile>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub activation: Activation,
    #[serde(default)]
    pub dependencies: Vec<MavenDependency>,
    #[serde(default)]
    pub dependency_management: Vec<MavenDependency>,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub repositories: Vec<Repository>,
}

/// Conditions activating a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activation {
    #[serde(default)]
    pub active_by_default: String,
    #[serde(default)]
    pub jdk: Jdk,
    #[serde(default)]
    pub os: Os,
    #[serde(default)]
    pub property: PropertyActivation,
    #[serde(default)]
    pub file: FileActivation,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jdk {
    #[serde(default)]
    pub jdk: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Os {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub family: String,
    #[serde(default)]
    pub arch: String,
    #[serde(default)]
    pub version: String,
}

/// A system or user property that activates a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyActivation {
    #[serde(default)]
    pub property: Property,
}

/// Activation on the presence or absence of a file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileActivation {
    #[serde(default)]
    pub exists: String,
    #[serde(default)]
    pub missing: String,
}

impl Get for Requirements {
    type Id = VersionKey;

    fn path(id: &VersionKey) -> String {
        path::requirements(id)
    }
}
