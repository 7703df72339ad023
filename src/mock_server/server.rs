//! Mock deps.dev API server.
//!
//! Provides an axum-based HTTP server that simulates the deps.dev v3 API.

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::fixtures::{DefaultScenario, Fixtures};
use super::handlers;
use super::state::MockState;

/// A mock deps.dev API server for testing.
///
/// The API is served under `/v3`, mirroring the public service, so
/// [`MockServer::url`] can be handed straight to `DepsDevClient::new`.
pub struct MockServer {
    /// Base URL of the API, including the `/v3/` prefix.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// Start a new mock server with default fixtures.
    ///
    /// The server listens on a random available port and returns immediately.
    pub async fn start() -> Self {
        Self::with_state(Self::default_state()).await
    }

    /// Start a mock server with empty state.
    ///
    /// Every lookup answers 404 until data is added through [`MockServer::state`].
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound. Test-only code.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = Self::create_router(shared_state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            url: format!("http://{}/v3/", addr),
            handle,
            state: shared_state,
        }
    }

    /// Base URL of the API.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get access to the server's shared state.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        self.state.clone()
    }

    /// Shutdown the server.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    fn default_state() -> MockState {
        Self::state_from_scenario(Fixtures::default_scenario())
    }

    fn state_from_scenario(scenario: DefaultScenario) -> MockState {
        let mut state = MockState::new();

        for package in scenario.packages {
            state = state.with_package(package);
        }
        for (key, deps) in scenario.dependencies {
            state = state.with_dependencies(&key, deps);
        }
        for (key, reqs) in scenario.requirements {
            state = state.with_requirements(&key, reqs);
        }
        for project in scenario.projects {
            state = state.with_project(project);
        }
        for (id, versions) in scenario.project_versions {
            state = state.with_project_versions(&id, versions);
        }
        for advisory in scenario.advisories {
            state = state.with_advisory(advisory);
        }
        for (hash_type, value, key) in scenario.file_hashes {
            state = state.with_file_hash(&hash_type, &value, &key);
        }

        state
    }

    fn create_router(state: Arc<RwLock<MockState>>) -> Router {
        let api = Router::new()
            .route("/systems/:system/packages/:name", get(handlers::get_package))
            .route(
                "/systems/:system/packages/:name/versions/:version",
                get(handlers::get_version),
            )
            .route("/projects/:id", get(handlers::get_project))
            .route("/advisories/:id", get(handlers::get_advisory))
            .route("/query", get(handlers::query_versions));

        Router::new()
            .nest("/v3", api)
            .route("/health", get(health_check))
            .with_state(state)
    }
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}
