//! Relative path templates for the deps.dev endpoints.
//!
//! Every identifier is escaped on its own before it is interpolated, so a
//! package name such as `rsc.io/github` stays a single path segment
//! (`rsc.io%2Fgithub`). Paths are relative and never start with `/`.

use std::borrow::Cow;

use crate::models::{AdvisoryKey, PackageKey, ProjectKey, VersionKey};

/// Percent-escape one path segment.
pub fn escape(segment: &str) -> Cow<'_, str> {
    urlencoding::encode(segment)
}

/// `systems/{system}/packages/{name}`
pub fn package(key: &PackageKey) -> String {
    format!(
        "systems/{}/packages/{}",
        escape(&key.system),
        escape(&key.name)
    )
}

/// `systems/{system}/packages/{name}/versions/{version}`
pub fn version(key: &VersionKey) -> String {
    format!(
        "systems/{}/packages/{}/versions/{}",
        escape(&key.system),
        escape(&key.name),
        escape(&key.version)
    )
}

/// `systems/{system}/packages/{name}/versions/{version}:dependencies`
pub fn dependencies(key: &VersionKey) -> String {
    format!("{}:dependencies", version(key))
}

/// `systems/{system}/packages/{name}/versions/{version}:requirements`
pub fn requirements(key: &VersionKey) -> String {
    format!("{}:requirements", version(key))
}

/// `projects/{id}`
pub fn project(key: &ProjectKey) -> String {
    format!("projects/{}", escape(&key.id))
}

/// `projects/{id}:packageversions`
pub fn project_package_versions(key: &ProjectKey) -> String {
    format!("{}:packageversions", project(key))
}

/// `advisories/{id}`
pub fn advisory(key: &AdvisoryKey) -> String {
    format!("advisories/{}", escape(&key.id))
}

/// `query`
pub const QUERY: &str = "query";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_path() {
        let key = PackageKey::new("npm", "react");
        assert_eq!(package(&key), "systems/npm/packages/react");
    }

    #[test]
    fn test_slash_in_name_is_one_segment() {
        let key = VersionKey::new("go", "rsc.io/github", "v0.4.1");
        assert_eq!(
            version(&key),
            "systems/go/packages/rsc.io%2Fgithub/versions/v0.4.1"
        );
    }

    #[test]
    fn test_scoped_npm_name() {
        let key = PackageKey::new("npm", "@types/node");
        assert_eq!(package(&key), "systems/npm/packages/%40types%2Fnode");
    }

    #[test]
    fn test_version_actions() {
        let key = VersionKey::new("maven", "org.apache.logging.log4j:log4j-core", "2.17.1");
        assert_eq!(
            dependencies(&key),
            "systems/maven/packages/org.apache.logging.log4j%3Alog4j-core/versions/2.17.1:dependencies"
        );
        assert!(requirements(&key).ends_with("/versions/2.17.1:requirements"));
    }

    #[test]
    fn test_project_paths() {
        let key = ProjectKey::new("github.com/facebook/react");
        assert_eq!(project(&key), "projects/github.com%2Ffacebook%2Freact");
        assert_eq!(
            project_package_versions(&key),
            "projects/github.com%2Ffacebook%2Freact:packageversions"
        );
    }

    #[test]
    fn test_advisory_path() {
        let key = AdvisoryKey::new("GHSA-2qrg-x229-3v8q");
        assert_eq!(advisory(&key), "advisories/GHSA-2qrg-x229-3v8q");
    }
}
