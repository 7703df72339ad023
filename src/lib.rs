//! deps.dev API client library.
//!
//! A Rust library for the read-only [deps.dev](https://deps.dev) v3 REST
//! API: packages, versions, resolved dependency graphs, requirements,
//! source projects and security advisories.
//!
//! # Quick Start
//!
//! ```no_run
//! use depsdev::{DepsDevClient, QueryOptions, VersionKey};
//!
//! #[tokio::main]
//! async fn main() -> depsdev::Result<()> {
//!     let client = DepsDevClient::default();
//!
//!     // A package and its versions
//!     let package = client.get_package("npm", "react").await?;
//!     println!("Found {} versions", package.versions.len());
//!
//!     // The resolved dependency graph of one version
//!     let deps = client
//!         .get_dependencies(VersionKey::new("npm", "react", "18.2.0"))
//!         .await?;
//!     println!("{} nodes, {} edges", deps.nodes.len(), deps.edges.len());
//!
//!     // Versions matching a version key or a file hash
//!     let found = client
//!         .query(&QueryOptions::version("npm", "react", "18.2.0"))
//!         .await?;
//!     println!("{} matches", found.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Every endpoint is a single GET through [`DepsDevClient::fetch`], which
//! resolves a relative path against the base URL, checks for a 200 status
//! and decodes the JSON body. Entity types implement [`Get`] by naming
//! their path template; identifiers are escaped one segment at a time so
//! names such as `@types/node` stay a single path segment.
//!
//! # Configuration
//!
//! [`DepsDevClient::from_env`] reads:
//!
//! - `DEPSDEV_API_URL` (optional) - Base URL (defaults to `https://api.deps.dev/v3/`)
//! - `DEPSDEV_TIMEOUT_SECS` (optional) - Request timeout in seconds (defaults to 60)

mod client;
mod error;
mod models;
mod options;
mod traits;

pub mod cli;
pub mod output;
pub mod path;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::{DepsDevClient, DEFAULT_API_URL};
pub use error::{DepsDevError, Result};
pub use options::{add_options, QueryParams};

// Re-export traits
pub use output::PrettyPrint;
pub use traits::Get;

// Re-export models
pub use models::{
    // Keys
    AdvisoryKey,
    PackageKey,
    ProjectKey,
    VersionKey,
    // Package and version types
    Attestation,
    LicenseDetail,
    Link,
    Package,
    RelatedProject,
    SlsaProvenance,
    Version,
    // Dependency graph types
    Dependencies,
    Edge,
    Node,
    Relation,
    // Requirements
    requirements,
    Requirements,
    // Project types
    CheckDocumentation,
    OssFuzzDetails,
    Project,
    ProjectPackageVersion,
    ProjectPackageVersions,
    Scorecard,
    ScorecardCheck,
    ScorecardProgram,
    ScorecardRepository,
    // Advisory types
    Advisory,
    Severity,
    // Query types
    HashType,
    QueryMatch,
    QueryOptions,
    QueryResult,
};

// Re-export convenience functions
pub use models::query;

// Cancellation handle accepted by `DepsDevClient::with_cancellation`
pub use tokio_util::sync::CancellationToken;
