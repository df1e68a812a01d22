//! Health, totals and homepage bundle.

use crate::server::AppState;
use axum::{extract::State, Json};
use hub_core::{HomepageData, TotalCounts};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    let status = if state.store.is_degraded() {
        "degraded"
    } else {
        "ok"
    };
    Json(json!({
        "status": status,
        "dataVersion": state.store.metadata().version,
        "cacheEntries": state.cache.size(),
        "highlightsSource": state.highlights.name(),
    }))
}

/// GET /api/stats
pub async fn stats(State(state): State<Arc<AppState>>) -> Json<TotalCounts> {
    Json(state.store.total_counts())
}

/// GET /api/home
pub async fn home(State(state): State<Arc<AppState>>) -> Json<HomepageData> {
    Json(state.store.homepage_data())
}
