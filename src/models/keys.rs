//! Identifiers used as path parameters and embedded in responses.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a package by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageKey {
    /// The package management system containing the package (e.g. `NPM`).
    #[serde(default)]
    pub system: String,

    /// The name of the package.
    #[serde(default)]
    pub name: String,
}

impl PackageKey {
    pub fn new(system: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for PackageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.system, self.name)
    }
}

/// Identifies a package version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionKey {
    /// The package management system containing the package.
    #[serde(default)]
    pub system: String,

    /// The name of the package.
    #[serde(default)]
    pub name: String,

    /// The version of the package.
    #[serde(default)]
    pub version: String,
}

impl VersionKey {
    pub fn new(
        system: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            system: system.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    /// The key of the package this version belongs to.
    pub fn package_key(&self) -> PackageKey {
        PackageKey::new(self.system.clone(), self.name.clone())
    }
}

impl fmt::Display for VersionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}@{}", self.system, self.name, self.version)
    }
}

/// Identifies a project hosted by GitHub, GitLab or Bitbucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectKey {
    /// A project identifier of the form `github.com/user/repo`,
    /// `gitlab.com/user/repo`, or `bitbucket.org/user/repo`.
    #[serde(default)]
    pub id: String,
}

impl ProjectKey {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// The hosting service, e.g. `github.com`.
    pub fn host(&self) -> Option<&str> {
        self.id.split('/').next().filter(|h| !h.is_empty())
    }
}

impl fmt::Display for ProjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Identifies a security advisory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdvisoryKey {
    /// The OSV identifier for the security advisory.
    #[serde(default)]
    pub id: String,
}

impl AdvisoryKey {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl fmt::Display for AdvisoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
