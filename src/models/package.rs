//! Package model and trait implementations.

use serde::{Deserialize, Serialize};

use crate::models::keys::PackageKey;
use crate::models::version::Version;
use crate::path;
use crate::traits::Get;

/// A package and the list of its available versions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    /// The name of the package.
    #[serde(default)]
    pub package_key: PackageKey,

    /// The package URL (purl), if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purl: Option<String>,

    /// The available versions, with the default version marked if known.
    #[serde(default)]
    pub versions: Vec<Version>,
}

impl Package {
    /// The version installed when none is specified, if known.
    pub fn default_version(&self) -> Option<&Version> {
        self.versions.iter().find(|v| v.is_default)
    }

    /// The most recently published version.
    pub fn latest_published(&self) -> Option<&Version> {
        self.versions
            .iter()
            .filter(|v| v.published_at.is_some())
            .max_by_key(|v| v.published_at)
    }
}

impl Get for Package {
    type Id = PackageKey;

    fn path(id: &PackageKey) -> String {
        path::package(id)
    }
}
