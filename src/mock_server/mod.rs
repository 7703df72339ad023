//! Mock deps.dev API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the deps.dev
//! v3 API for integration and end-to-end testing. Unlike wiremock which mocks
//! at the HTTP level per-test, this server answers every endpoint from one
//! shared data set, so whole lookup chains can be exercised.
//!
//! # Example
//!
//! ```ignore
//! use depsdev::mock_server::MockServer;
//! use depsdev::DepsDevClient;
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = DepsDevClient::new(server.url(), None);
//!
//!     // Server comes with default fixtures
//!     let package = client.get_package("npm", "react").await.unwrap();
//!     assert_eq!(package.versions.len(), 3);
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures};
pub use server::MockServer;
pub use state::MockState;
