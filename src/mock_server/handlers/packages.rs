//! Package and version endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Response,
};
use tokio::sync::RwLock;

use super::found_or_404;
use crate::mock_server::state::MockState;

/// GET /systems/{system}/packages/{name}
pub async fn get_package(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((system, name)): Path<(String, String)>,
) -> Response {
    let state = state.read().await;
    found_or_404(state.get_package(&system, &name), "package")
}

/// GET /systems/{system}/packages/{name}/versions/{version}
///
/// The last segment also carries the `:dependencies` and `:requirements`
/// method suffixes, so they are dispatched here.
pub async fn get_version(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((system, name, version)): Path<(String, String, String)>,
) -> Response {
    let state = state.read().await;

    match version.rsplit_once(':') {
        Some((v, "dependencies")) => found_or_404(
            state.get_dependencies(&system, &name, v),
            "dependency graph",
        ),
        Some((v, "requirements")) => {
            found_or_404(state.get_requirements(&system, &name, v), "requirements")
        }
        _ => found_or_404(state.get_version(&system, &name, &version), "version"),
    }
}
