//! Mock server state management.
//!
//! Provides the in-memory data store for the mock deps.dev server.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    Advisory, Dependencies, Package, PackageKey, Project, ProjectPackageVersions, Requirements,
    Version, VersionKey,
};

/// Shared state for the mock server.
///
/// Package and version keys are stored with an upper-case system so that
/// lookups accept `npm` and `NPM` alike, as the real service does.
#[derive(Debug, Default)]
pub struct MockState {
    pub packages: HashMap<PackageKey, Package>,

    pub versions: HashMap<VersionKey, Version>,

    /// Resolved graphs indexed by the version they were resolved for.
    pub dependencies: HashMap<VersionKey, Dependencies>,

    pub requirements: HashMap<VersionKey, Requirements>,

    /// Projects indexed by project id (e.g., "github.com/facebook/react").
    pub projects: HashMap<String, Project>,

    pub project_versions: HashMap<String, ProjectPackageVersions>,

    /// Advisories indexed by OSV id.
    pub advisories: HashMap<String, Advisory>,

    /// Versions containing a file, indexed by (hash type, base64 digest).
    pub file_hashes: HashMap<(String, String), Vec<VersionKey>>,
}

fn package_key(system: &str, name: &str) -> PackageKey {
    PackageKey::new(system.to_ascii_uppercase(), name)
}

fn version_key(system: &str, name: &str, version: &str) -> VersionKey {
    VersionKey::new(system.to_ascii_uppercase(), name, version)
}

fn normalize(key: &VersionKey) -> VersionKey {
    version_key(&key.system, &key.name, &key.version)
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a package. Its versions become individually fetchable too.
    pub fn with_package(mut self, package: Package) -> Self {
        for version in &package.versions {
            self.versions
                .insert(normalize(&version.version_key), version.clone());
        }
        let key = package_key(&package.package_key.system, &package.package_key.name);
        self.packages.insert(key, package);
        self
    }

    /// Add a single version without a package listing.
    pub fn with_version(mut self, version: Version) -> Self {
        self.versions
            .insert(normalize(&version.version_key), version);
        self
    }

    /// Add the resolved graph for a version.
    pub fn with_dependencies(mut self, key: &VersionKey, deps: Dependencies) -> Self {
        self.dependencies.insert(normalize(key), deps);
        self
    }

    /// Add the declared requirements of a version.
    pub fn with_requirements(mut self, key: &VersionKey, reqs: Requirements) -> Self {
        self.requirements.insert(normalize(key), reqs);
        self
    }

    pub fn with_project(mut self, project: Project) -> Self {
        self.projects.insert(project.project_key.id.clone(), project);
        self
    }

    pub fn with_project_versions(mut self, id: &str, versions: ProjectPackageVersions) -> Self {
        self.project_versions.insert(id.to_string(), versions);
        self
    }

    pub fn with_advisory(mut self, advisory: Advisory) -> Self {
        self.advisories
            .insert(advisory.advisory_key.id.clone(), advisory);
        self
    }

    /// Register a file digest as belonging to a version.
    pub fn with_file_hash(mut self, hash_type: &str, value: &str, key: &VersionKey) -> Self {
        self.file_hashes
            .entry((hash_type.to_ascii_uppercase(), value.to_string()))
            .or_default()
            .push(normalize(key));
        self
    }

    pub fn get_package(&self, system: &str, name: &str) -> Option<&Package> {
        self.packages.get(&package_key(system, name))
    }

    pub fn get_version(&self, system: &str, name: &str, version: &str) -> Option<&Version> {
        self.versions.get(&version_key(system, name, version))
    }

    pub fn get_dependencies(&self, system: &str, name: &str, version: &str) -> Option<&Dependencies> {
        self.dependencies.get(&version_key(system, name, version))
    }

    pub fn get_requirements(&self, system: &str, name: &str, version: &str) -> Option<&Requirements> {
        self.requirements.get(&version_key(system, name, version))
    }

    pub fn get_project(&self, id: &str) -> Option<&Project> {
        self.projects.get(id)
    }

    pub fn get_project_versions(&self, id: &str) -> Option<&ProjectPackageVersions> {
        self.project_versions.get(id)
    }

    pub fn get_advisory(&self, id: &str) -> Option<&Advisory> {
        self.advisories.get(id)
    }

    /// Versions matching every given filter. Unset filters match anything.
    pub fn find_versions(
        &self,
        hash: Option<(&str, &str)>,
        system: Option<&str>,
        name: Option<&str>,
        version: Option<&str>,
    ) -> Vec<&Version> {
        let hashed: Option<&Vec<VersionKey>> = match hash {
            Some((t, v)) => match self.file_hashes.get(&(t.to_ascii_uppercase(), v.to_string())) {
                Some(keys) => Some(keys),
                None => return Vec::new(),
            },
            None => None,
        };

        let mut found: Vec<&Version> = self
            .versions
            .iter()
            .filter(|(key, _)| hashed.map_or(true, |keys| keys.contains(*key)))
            .filter(|(key, _)| system.map_or(true, |s| key.system.eq_ignore_ascii_case(s)))
            .filter(|(key, _)| name.map_or(true, |n| key.name == n))
            .filter(|(key, _)| version.map_or(true, |v| key.version == v))
            .map(|(_, v)| v)
            .collect();
        found.sort_by(|a, b| a.version_key.to_string().cmp(&b.version_key.to_string()));
        found
    }
}
