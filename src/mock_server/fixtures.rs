//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use chrono::{TimeZone, Utc};

use crate::requirements::{Npm, NpmDependencies};
use crate::{
    requirements, Advisory, AdvisoryKey, Dependencies, Edge, Link, Node, Package, PackageKey,
    Project, ProjectKey, ProjectPackageVersion, ProjectPackageVersions, Relation, Requirements,
    Version, VersionKey,
};

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    // =========================================================================
    // Package and Version Fixtures
    // =========================================================================

    /// Create a version with only its key set.
    pub fn minimal_version(system: &str, name: &str, version: &str) -> Version {
        Version {
            version_key: VersionKey::new(system, name, version),
            ..Default::default()
        }
    }

    /// Create a published version with a license and a source repository link.
    pub fn published_version(
        system: &str,
        name: &str,
        version: &str,
        is_default: bool,
        published: (i32, u32, u32),
    ) -> Version {
        let mut v = Self::minimal_version(system, name, version);
        v.is_default = is_default;
        v.published_at = Utc
            .with_ymd_and_hms(published.0, published.1, published.2, 0, 0, 0)
            .single();
        v.licenses = vec!["MIT".to_string()];
        v.links = vec![Link {
            label: "SOURCE_REPO".to_string(),
            url: format!("https://github.com/example/{name}"),
        }];
        v
    }

    /// Create a package listing the given versions.
    pub fn package(system: &str, name: &str, versions: Vec<Version>) -> Package {
        Package {
            package_key: PackageKey::new(system, name),
            purl: Some(format!("pkg:{}/{}", system.to_ascii_lowercase(), name)),
            versions,
        }
    }

    // =========================================================================
    // Dependency Graph Fixtures
    // =========================================================================

    /// Create a graph node.
    pub fn node(key: VersionKey, relation: Relation) -> Node {
        Node {
            version_key: key,
            relation,
            ..Default::default()
        }
    }

    /// Create a linear graph: root -> direct -> indirect.
    pub fn chain_graph(root: VersionKey, direct: VersionKey, indirect: VersionKey) -> Dependencies {
        Dependencies {
            nodes: vec![
                Self::node(root, Relation::Itself),
                Self::node(direct.clone(), Relation::Direct),
                Self::node(indirect.clone(), Relation::Indirect),
            ],
            edges: vec![
                Edge {
                    from_node: 0,
                    to_node: 1,
                    requirement: format!("^{}", direct.version),
                },
                Edge {
                    from_node: 1,
                    to_node: 2,
                    requirement: format!("^{}", indirect.version),
                },
            ],
            error: None,
        }
    }

    /// Create npm requirements with runtime dependencies only.
    pub fn npm_requirements(deps: &[(&str, &str)]) -> Requirements {
        Requirements {
            npm: Some(Npm {
                dependencies: NpmDependencies {
                    dependencies: deps
                        .iter()
                        .map(|(name, req)| requirements::Dependency {
                            name: name.to_string(),
                            requirement: req.to_string(),
                        })
                        .collect(),
                    ..Default::default()
                },
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    // =========================================================================
    // Project and Advisory Fixtures
    // =========================================================================

    /// Create a project with repository counters.
    pub fn project(id: &str, stars: u64, forks: u64) -> Project {
        Project {
            project_key: ProjectKey::new(id),
            stars_count: stars,
            forks_count: forks,
            license: "MIT".to_string(),
            description: "Example project".to_string(),
            ..Default::default()
        }
    }

    /// Create a project-to-version mapping entry.
    pub fn project_version(key: VersionKey) -> ProjectPackageVersion {
        ProjectPackageVersion {
            version_key: key,
            relation_type: "SOURCE_REPO".to_string(),
            relation_provenance: "UNVERIFIED_METADATA".to_string(),
            ..Default::default()
        }
    }

    /// Create an advisory with a CVSS v3 score.
    pub fn advisory(id: &str, title: &str, score: f64) -> Advisory {
        Advisory {
            advisory_key: AdvisoryKey::new(id),
            url: format!("https://osv.dev/vulnerability/{id}"),
            title: title.to_string(),
            cvss3_score: score,
            ..Default::default()
        }
    }

    // =========================================================================
    // Scenarios
    // =========================================================================

    /// Create the default scenario used by `MockServer::start`.
    pub fn default_scenario() -> DefaultScenario {
        let root = VersionKey::new("NPM", "react", "18.2.0");
        let direct = VersionKey::new("NPM", "loose-envify", "1.4.0");
        let indirect = VersionKey::new("NPM", "js-tokens", "4.0.0");

        let mut affected = Self::minimal_version("NPM", "react", "0.14.0");
        affected.advisory_keys = vec![AdvisoryKey::new("GHSA-hg79-j56m-fxgv")];

        let react = Self::package(
            "NPM",
            "react",
            vec![
                affected,
                Self::published_version("NPM", "react", "17.0.2", false, (2021, 3, 22)),
                Self::published_version("NPM", "react", "18.2.0", true, (2022, 6, 14)),
            ],
        );

        let scoped = Self::package(
            "NPM",
            "@types/node",
            vec![Self::published_version("NPM", "@types/node", "20.1.0", true, (2023, 5, 2))],
        );

        DefaultScenario {
            packages: vec![react, scoped],
            dependencies: vec![(
                root.clone(),
                Self::chain_graph(root.clone(), direct, indirect),
            )],
            requirements: vec![(
                root.clone(),
                Self::npm_requirements(&[("loose-envify", "^1.1.0")]),
            )],
            projects: vec![Self::project("github.com/facebook/react", 220_000, 45_000)],
            project_versions: vec![(
                "github.com/facebook/react".to_string(),
                ProjectPackageVersions {
                    versions: vec![Self::project_version(root.clone())],
                },
            )],
            advisories: vec![Self::advisory(
                "GHSA-hg79-j56m-fxgv",
                "Cross-Site Scripting in react",
                6.1,
            )],
            file_hashes: vec![(
                "SHA1".to_string(),
                "ulXBPXrC/UTfnMgHRFVxmjPzdbk=".to_string(),
                root,
            )],
        }
    }
}

/// Data loaded into a freshly started mock server.
pub struct DefaultScenario {
    pub packages: Vec<Package>,
    pub dependencies: Vec<(VersionKey, Dependencies)>,
    pub requirements: Vec<(VersionKey, Requirements)>,
    pub projects: Vec<Project>,
    pub project_versions: Vec<(String, ProjectPackageVersions)>,
    pub advisories: Vec<Advisory>,
    pub file_hashes: Vec<(String, String, VersionKey)>,
}
