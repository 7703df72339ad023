//! Query endpoint handler.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::mock_server::state::MockState;
use crate::{QueryMatch, QueryResult};

/// Query string accepted by the query endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct QueryFilters {
    #[serde(rename = "hash.type")]
    pub hash_type: Option<String>,
    #[serde(rename = "hash.value")]
    pub hash_value: Option<String>,
    #[serde(rename = "versionKey.system")]
    pub system: Option<String>,
    #[serde(rename = "versionKey.name")]
    pub name: Option<String>,
    #[serde(rename = "versionKey.version")]
    pub version: Option<String>,
}

/// GET /query
pub async fn query_versions(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(filters): Query<QueryFilters>,
) -> Response {
    let hash = match (filters.hash_type.as_deref(), filters.hash_value.as_deref()) {
        (Some(t), Some(v)) => Some((t, v)),
        (None, None) => None,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                "hash.type and hash.value must be set together",
            )
                .into_response()
        }
    };

    if hash.is_none() && filters.name.is_none() {
        return (
            StatusCode::BAD_REQUEST,
            "query requires a hash or a version key",
        )
            .into_response();
    }

    let state = state.read().await;
    let results = state
        .find_versions(
            hash,
            filters.system.as_deref(),
            filters.name.as_deref(),
            filters.version.as_deref(),
        )
        .into_iter()
        .map(|v| QueryMatch { version: v.clone() })
        .collect();

    (StatusCode::OK, Json(QueryResult { results })).into_response()
}
