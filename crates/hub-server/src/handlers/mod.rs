//! HTTP handlers, split by resource.

pub mod articles;
pub mod highlights;
pub mod persons;
pub mod status;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hub_core::HubError;
use serde_json::json;
use tracing::error;

/// Convert a library error into a JSON error response.
///
/// Upstream and internal failures are logged; the client only sees the
/// error's display text.
pub(crate) fn error_response(err: &HubError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        error!("Request failed: {}", err);
    }
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}
