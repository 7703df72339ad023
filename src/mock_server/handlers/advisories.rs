//! Advisory endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Response,
};
use tokio::sync::RwLock;

use super::found_or_404;
use crate::mock_server::state::MockState;

/// GET /advisories/{id}
pub async fn get_advisory(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<String>,
) -> Response {
    let state = state.read().await;
    found_or_404(state.get_advisory(&id), "advisory")
}
