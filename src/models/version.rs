//! Package version model and trait implementations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::keys::{AdvisoryKey, ProjectKey, VersionKey};
use crate::path;
use crate::traits::Get;

/// A package version.
///
/// Fields absent from the response are left at their defaults. The same
/// struct is used for the version summaries embedded in [`crate::Package`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    /// The name of the version.
    #[serde(default)]
    pub version_key: VersionKey,

    /// The package URL (purl) of the version, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purl: Option<String>,

    /// When the version was published, as reported by the package
    /// management authority.
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,

    /// Whether this is the version installed when no version is specified.
    /// Commonly the greatest non-prerelease version.
    #[serde(default)]
    pub is_default: bool,

    /// Whether the version has been deprecated by its publisher.
    #[serde(default)]
    pub is_deprecated: bool,

    /// SPDX expressions for the licenses governing this version.
    ///
    /// `non-standard` marks a license without an SPDX identifier; an empty
    /// list means no license information could be obtained. License
    /// information is not legal advice.
    #[serde(default)]
    pub licenses: Vec<String>,

    /// License as declared by the package and its SPDX translation.
    #[serde(default)]
    pub license_details: Vec<LicenseDetail>,

    /// Security advisories known to affect this version directly. Advisories
    /// affecting its dependencies are not included.
    #[serde(default)]
    pub advisory_keys: Vec<AdvisoryKey>,

    /// Links declared by or derived from the version metadata. Not verified.
    #[serde(default)]
    pub links: Vec<Link>,

    /// SLSA provenance extracted from attestations. Only populated for npm.
    #[serde(default)]
    pub slsa_provenances: Vec<SlsaProvenance>,

    /// Attestations for this version.
    #[serde(default)]
    pub attestations: Vec<Attestation>,

    /// Registries the version is available from. Only set for systems with a
    /// central registry (Cargo, Maven, npm, NuGet, PyPI).
    #[serde(default)]
    pub registries: Vec<String>,

    /// Projects related to this version.
    #[serde(default)]
    pub related_projects: Vec<RelatedProject>,
}

/// A link to an external resource such as a homepage or repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// A label describing the resource, e.g. `SOURCE_REPO` or `HOMEPAGE`.
    #[serde(default)]
    pub label: String,

    /// The URL of the link.
    #[serde(default)]
    pub url: String,
}

/// A license as declared by the package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseDetail {
    /// The license string as found in the package metadata.
    #[serde(default)]
    pub license: String,

    /// The SPDX expression it was translated to.
    #[serde(default)]
    pub spdx: String,
}

/// Provenance extracted from a SLSA provenance statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlsaProvenance {
    /// The source repository used to build the version.
    #[serde(default)]
    pub source_repository: String,

    /// The commit the version was built from.
    #[serde(default)]
    pub commit: String,

    /// The URL of the provenance statement, if there is one.
    #[serde(default)]
    pub url: String,

    /// The Sigstore bundle carrying the attestation was verified.
    #[serde(default)]
    pub verified: bool,
}

/// A generic attestation. Fields beyond `type` depend on the type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attestation {
    /// One of `https://slsa.dev/provenance/v0.2`,
    /// `https://slsa.dev/provenance/v1` or
    /// `https://docs.pypi.org/attestations/publish/v1`.
    #[serde(rename = "type", default)]
    pub attestation_type: String,

    /// The URL of the attestation, if there is one.
    #[serde(default)]
    pub url: String,

    /// Whether deps.dev verified the attestation cryptographically.
    #[serde(default)]
    pub verified: bool,

    /// The source repository the version was built from.
    #[serde(default)]
    pub source_repository: String,

    /// The commit the version was built from.
    #[serde(default)]
    pub commit: String,
}

/// A project related to a package version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedProject {
    /// The identifier for the project.
    #[serde(default)]
    pub project_key: ProjectKey,

    /// How the mapping was discovered: `SLSA_ATTESTATION`, `GO_ORIGIN`,
    /// `PYPI_PUBLISH_ATTESTATION` or `UNVERIFIED_METADATA`.
    #[serde(default)]
    pub relation_provenance: String,

    /// The relationship: `SOURCE_REPO` or `ISSUE_TRACKER`.
    #[serde(default)]
    pub relation_type: String,
}

impl Version {
    /// Whether any advisory is known to affect this version directly.
    pub fn is_affected(&self) -> bool {
        !self.advisory_keys.is_empty()
    }

    /// The first link with the given label.
    pub fn link(&self, label: &str) -> Option<&str> {
        self.links
            .iter()
            .find(|l| l.label == label)
            .map(|l| l.url.as_str())
    }

    /// The project declared as this version's source repository.
    pub fn source_project(&self) -> Option<&ProjectKey> {
        self.related_projects
            .iter()
            .find(|p| p.relation_type == "SOURCE_REPO")
            .map(|p| &p.project_key)
    }
}

impl Get for Version {
    type Id = VersionKey;

    fn path(id: &VersionKey) -> String {
        path::version(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSC_GITHUB: &str = r#"{"versionKey":{"system":"GO","name":"rsc.io/github","version":"v0.4.1"},"publishedAt":"2024-06-21T16:57:04Z","isDefault":false,"licenses":["BSD-3-Clause"],"advisoryKeys":[],"links":[{"label":"SOURCE_REPO","url":"https://github.com/rsc/github"}],"slsaProvenances":[],"attestations":[],"registries":[],"relatedProjects":[{"projectKey":{"id":"github.com/rsc/github"},"relationProvenance":"GO_ORIGIN","relationType":"SOURCE_REPO"}]}"#;

    #[test]
    fn test_version_deserialize() {
        let version: Version = serde_json::from_str(RSC_GITHUB).expect("Failed to deserialize");

        assert_eq!(version.version_key.name, "rsc.io/github");
        assert_eq!(version.licenses, vec!["BSD-3-Clause"]);
        assert_eq!(
            version.published_at.map(|t| t.to_rfc3339()),
            Some("2024-06-21T16:57:04+00:00".to_string())
        );
        assert!(!version.is_affected());
        assert_eq!(version.link("SOURCE_REPO"), Some("https://github.com/rsc/github"));
        assert_eq!(
            version.source_project(),
            Some(&ProjectKey::new("github.com/rsc/github"))
        );
    }

    #[test]
    fn test_version_minimal() {
        let version: Version = serde_json::from_str("{}").expect("Failed to deserialize");
        assert_eq!(version, Version::default());
        assert!(version.published_at.is_none());
    }

    #[test]
    fn test_attestation_type_field() {
        let json = r#"{"type":"https://slsa.dev/provenance/v1","verified":true,"sourceRepository":"https://github.com/a/b","commit":"abc"}"#;
        let attestation: Attestation = serde_json::from_str(json).unwrap();
        assert_eq!(attestation.attestation_type, "https://slsa.dev/provenance/v1");
        assert!(attestation.verified);
    }

    #[test]
    fn test_version_path() {
        let key = VersionKey::new("npm", "react", "18.2.0");
        assert_eq!(Version::path(&key), "systems/npm/packages/react/versions/18.2.0");
    }
}
