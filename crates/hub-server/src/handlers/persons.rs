//! Member, spokesperson and platform listings.

use crate::server::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use hub_core::config::DataConfig;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, error};

const CATEGORY_ERROR: &str = "Erro ao processar requisição";

/// GET /api/persons
pub async fn list_persons(State(state): State<Arc<AppState>>) -> Response {
    let timestamp = Utc::now().to_rfc3339();
    let store = &state.store;

    if store.has_db_error() {
        error!("Serving persons from a degraded snapshot");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "members": [],
                "portavoze": [],
                "plataformas": [],
                "metadata": {
                    "error": DataConfig::LOAD_ERROR_MESSAGE,
                    "timestamp": timestamp,
                },
            })),
        )
            .into_response();
    }

    Json(json!({
        "members": store.members(),
        "portavoze": store.spokespeople(),
        "plataformas": store.platforms(),
        "metadata": {
            "totalMembers": store.members().len(),
            "totalPortavoze": store.spokespeople().len(),
            "totalPlataformas": store.platforms().len(),
            "timestamp": timestamp,
        },
    }))
    .into_response()
}

/// GET /api/persons/:category
pub async fn persons_by_category(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> Response {
    debug!("Persons lookup for category '{}'", category);
    match state.store.person_collection(&category).to_json() {
        Ok(body) => Json(body).into_response(),
        Err(e) => {
            error!("Failed to serialize persons for '{}': {}", category, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": CATEGORY_ERROR })),
            )
                .into_response()
        }
    }
}
