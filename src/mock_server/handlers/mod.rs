//! HTTP request handlers for the mock server.

pub mod advisories;
pub mod packages;
pub mod projects;
pub mod query;

pub use advisories::*;
pub use packages::*;
pub use projects::*;
pub use query::*;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// 200 with a JSON body, or a plain-text 404 naming what was missing.
pub(crate) fn found_or_404<T: Serialize>(item: Option<&T>, what: &str) -> Response {
    match item {
        Some(item) => (StatusCode::OK, Json(item)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("{what} not found"),
        )
            .into_response(),
    }
}
