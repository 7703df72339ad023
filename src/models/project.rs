//! Project model and trait implementations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use crate::models::keys::{ProjectKey, VersionKey};
use crate::models::version::{Attestation, SlsaProvenance};
use crate::path;
use crate::traits::Get;

/// A project hosted by GitHub, GitLab or Bitbucket.
///
/// Counters are 64-bit values that the API encodes as JSON strings; both
/// strings and numbers are accepted.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// The identifier for the project.
    #[serde(default)]
    pub project_key: ProjectKey,

    /// Open issues reported by the host. GitHub and GitLab only.
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    #[serde(default)]
    pub open_issues_count: u64,

    /// Stars reported by the host. GitHub and GitLab only.
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    #[serde(default)]
    pub stars_count: u64,

    /// Forks reported by the host. GitHub and GitLab only.
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    #[serde(default)]
    pub forks_count: u64,

    /// The license reported by the host.
    #[serde(default)]
    pub license: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub homepage: String,

    /// An OpenSSF Scorecard for the project, if one is available.
    #[serde(default)]
    pub scorecard: Option<Scorecard>,

    /// OSS-Fuzz testing details. Only set if the project is fuzzed there.
    #[serde(default)]
    pub oss_fuzz: Option<OssFuzzDetails>,
}

/// An OpenSSF Scorecard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scorecard {
    /// When the scorecard was produced (midnight UTC).
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,

    /// The repository and commit the scorecard was produced from.
    #[serde(default)]
    pub repository: ScorecardRepository,

    /// The Scorecard program that produced the scorecard.
    #[serde(default)]
    pub scorecard: ScorecardProgram,

    /// The results of the individual checks.
    #[serde(default)]
    pub checks: Vec<ScorecardCheck>,

    /// Weighted average score in `[0, 10]`. Higher is better.
    #[serde(default)]
    pub overall_score: f64,

    #[serde(default)]
    pub metadata: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorecardRepository {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub commit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorecardProgram {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub commit: String,
}

/// The result of one Scorecard check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorecardCheck {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub documentation: CheckDocumentation,

    /// Score in `[0, 10]`. Negative means the check did not run.
    #[serde(default)]
    pub score: i32,

    #[serde(default)]
    pub reason: String,

    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckDocumentation {
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub url: String,
}

/// Details of a project's testing by OSS-Fuzz.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OssFuzzDetails {
    /// Total lines of code in the project.
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    #[serde(default)]
    pub line_count: u64,

    /// Lines covered by fuzzing.
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    #[serde(default)]
    pub line_cover_count: u64,

    /// When the fuzz run producing the coverage happened (midnight UTC).
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,

    /// Configuration of the project in the OSS-Fuzz repository.
    #[serde(default)]
    pub config_url: String,
}

impl Project {
    /// Overall Scorecard score, if a scorecard exists.
    pub fn overall_score(&self) -> Option<f64> {
        self.scorecard.as_ref().map(|s| s.overall_score)
    }

    /// Look up a Scorecard check by name (e.g. `Maintained`).
    pub fn check(&self, name: &str) -> Option<&ScorecardCheck> {
        self.scorecard
            .as_ref()
            .and_then(|s| s.checks.iter().find(|c| c.name == name))
    }
}

impl OssFuzzDetails {
    /// Fraction of lines covered by fuzzing.
    pub fn coverage(&self) -> Option<f64> {
        (self.line_count > 0).then(|| self.line_cover_count as f64 / self.line_count as f64)
    }
}

impl Get for Project {
    type Id = ProjectKey;

    fn path(id: &ProjectKey) -> String {
        path::project(id)
    }
}

/// Package versions built from a project's source code.
///
/// At most 1500 versions are returned; mappings derived from attestations
/// come first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPackageVersions {
    #[serde(default)]
    pub versions: Vec<ProjectPackageVersion>,
}

/// A package version mapped to a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPackageVersion {
    #[serde(default)]
    pub version_key: VersionKey,

    /// SLSA provenance linking the version to the project. npm only.
    #[serde(default)]
    pub slsa_provenances: Vec<SlsaProvenance>,

    /// Attestations linking the version to the project.
    #[serde(default)]
    pub attestations: Vec<Attestation>,

    /// `SOURCE_REPO` or `ISSUE_TRACKER`.
    #[serde(default)]
    pub relation_type: String,

    /// `SLSA_ATTESTATION`, `GO_ORIGIN`, `PYPI_PUBLISH_ATTESTATION` or
    /// `UNVERIFIED_METADATA`.
    #[serde(default)]
    pub relation_provenance: String,
}

impl Get for ProjectPackageVersions {
    type Id = ProjectKey;

    fn path(id: &ProjectKey) -> String {
        path::project_package_versions(id)
    }
}
