//! Project endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Response,
};
use tokio::sync::RwLock;

use super::found_or_404;
use crate::mock_server::state::MockState;

/// GET /projects/{id} and GET /projects/{id}:packageversions
pub async fn get_project(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<String>,
) -> Response {
    let state = state.read().await;

    match id.strip_suffix(":packageversions") {
        Some(project) => found_or_404(state.get_project_versions(project), "project"),
        None => found_or_404(state.get_project(&id), "project"),
    }
}
