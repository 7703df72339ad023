//! E2E tests using the mock deps.dev server.
//!
//! These tests exercise lookup chains against the mock server,
//! testing realistic scenarios rather than individual endpoints.

#![cfg(feature = "test-server")]

use depsdev::mock_server::{Fixtures, MockServer, MockState};
use depsdev::{
    DepsDevClient, Get, HashType, Package, PackageKey, ProjectKey, QueryOptions, VersionKey,
};

// =============================================================================
// Server Lifecycle Tests
// =============================================================================

#[tokio::test]
async fn test_server_starts_on_random_port() {
    let server1 = MockServer::start().await;
    let server2 = MockServer::start().await;

    assert_ne!(server1.url(), server2.url());

    server1.shutdown().await;
    server2.shutdown().await;
}

#[tokio::test]
async fn test_server_shutdown_is_clean() {
    let server = MockServer::start().await;
    let client = DepsDevClient::new(server.url(), None);

    server.shutdown().await;

    let err = client.get_package("npm", "react").await.unwrap_err();
    assert_eq!(err.status_code(), None);
}

// =============================================================================
// Package Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_package_to_default_version_to_graph() {
    let server = MockServer::start().await;
    let client = DepsDevClient::new(server.url(), None);

    // Step 1: the package lists its versions
    let package = client.get_package("npm", "react").await.unwrap();
    let default = package.default_version().expect("default version").clone();

    // Step 2: the default version resolves on its own
    let version = client
        .get_version("npm", "react", &default.version_key.version)
        .await
        .unwrap();
    assert_eq!(version, default);
    assert_eq!(version.link("SOURCE_REPO"), Some("https://github.com/example/react"));

    // Step 3: its dependency graph is rooted at the same version
    let deps = client
        .get_dependencies(version.version_key.clone())
        .await
        .unwrap();
    assert_eq!(deps.root().map(|n| &n.version_key), Some(&version.version_key));
    assert_eq!(deps.nodes.len(), 3);
    assert_eq!(deps.edges.len(), 2);
    assert_eq!(deps.direct_dependencies().count(), 1);

    server.shutdown().await;
}

#[tokio::test]
async fn test_scoped_package_name_round_trips() {
    let server = MockServer::start().await;
    let client = DepsDevClient::new(server.url(), None);

    let package = Package::get(&client, PackageKey::new("npm", "@types/node"))
        .await
        .unwrap();

    assert_eq!(package.package_key.name, "@types/node");

    server.shutdown().await;
}

#[tokio::test]
async fn test_requirements_of_default_version() {
    let server = MockServer::start().await;
    let client = DepsDevClient::new(server.url(), None);

    let reqs = client
        .get_requirements("npm", "react", "18.2.0")
        .await
        .unwrap();

    assert_eq!(reqs.system(), Some("NPM"));
    let npm = reqs.npm.unwrap();
    assert_eq!(npm.dependencies.dependencies[0].name, "loose-envify");

    server.shutdown().await;
}

#[tokio::test]
async fn test_affected_version_to_advisory() {
    let server = MockServer::start().await;
    let client = DepsDevClient::new(server.url(), None);

    let version = client.get_version("npm", "react", "0.14.0").await.unwrap();
    assert!(version.is_affected());

    let advisory = client
        .get_advisory(&version.advisory_keys[0].id)
        .await
        .unwrap();
    assert_eq!(advisory.title, "Cross-Site Scripting in react");

    server.shutdown().await;
}

#[tokio::test]
async fn test_missing_version_is_not_found() {
    let server = MockServer::start().await;
    let client = DepsDevClient::new(server.url(), None);

    let err = client
        .get_dependencies(VersionKey::new("npm", "react", "99.0.0"))
        .await
        .unwrap_err();

    assert!(err.is_not_found());

    server.shutdown().await;
}

// =============================================================================
// Project Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_project_and_its_package_versions() {
    let server = MockServer::start().await;
    let client = DepsDevClient::new(server.url(), None);

    let project = client
        .get_project("github.com/facebook/react")
        .await
        .unwrap();
    assert_eq!(project.stars_count, 220_000);

    let versions = client
        .get_project_package_versions(ProjectKey::new("github.com/facebook/react"))
        .await
        .unwrap();
    assert_eq!(versions.versions.len(), 1);
    assert_eq!(versions.versions[0].version_key.name, "react");

    server.shutdown().await;
}

// =============================================================================
// Query Tests
// =============================================================================

#[tokio::test]
async fn test_query_by_version_key() {
    let server = MockServer::start().await;
    let client = DepsDevClient::new(server.url(), None);

    let found = client
        .query(&QueryOptions {
            system: Some("npm".to_string()),
            name: Some("react".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(found.len(), 3);

    server.shutdown().await;
}

#[tokio::test]
async fn test_query_by_hash() {
    let server = MockServer::start().await;
    let client = DepsDevClient::new(server.url(), None);

    let found = client
        .query(&QueryOptions::hash(
            HashType::Sha1,
            "ulXBPXrC/UTfnMgHRFVxmjPzdbk=",
        ))
        .await
        .unwrap();

    let versions: Vec<_> = found.versions().map(|v| v.version_key.version.as_str()).collect();
    assert_eq!(versions, vec!["18.2.0"]);

    server.shutdown().await;
}

#[tokio::test]
async fn test_query_without_filters_is_rejected() {
    let server = MockServer::start().await;
    let client = DepsDevClient::new(server.url(), None);

    let err = client.query(&QueryOptions::default()).await.unwrap_err();

    assert_eq!(err.status_code(), Some(400));

    server.shutdown().await;
}

// =============================================================================
// Custom State Tests
// =============================================================================

#[tokio::test]
async fn test_custom_state() {
    let state = MockState::new()
        .with_package(Fixtures::package(
            "CARGO",
            "serde",
            vec![Fixtures::minimal_version("CARGO", "serde", "1.0.200")],
        ))
        .with_advisory(Fixtures::advisory("RUSTSEC-2024-0001", "Example", 5.0));

    let server = MockServer::with_state(state).await;
    let client = DepsDevClient::new(server.url(), None);

    let package = client.get_package("cargo", "serde").await.unwrap();
    assert_eq!(package.versions[0].version_key.version, "1.0.200");

    let advisory = client.get_advisory("RUSTSEC-2024-0001").await.unwrap();
    assert_eq!(advisory.severity().to_string(), "MEDIUM");

    // Default fixtures are absent
    assert!(client.get_package("npm", "react").await.is_err());

    server.shutdown().await;
}
