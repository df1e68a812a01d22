//! Featured-articles endpoint backed by the TTL cache.

use crate::server::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use hub_core::config::{AppConfig, CacheConfig, HighlightsConfig};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error};

fn parse_limit(params: &HashMap<String, String>) -> usize {
    params
        .get("limit")
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(HighlightsConfig::DEFAULT_LIMIT)
}

fn wants_refresh(params: &HashMap<String, String>) -> bool {
    params.get("refresh").map(|v| v == "true").unwrap_or(false)
}

/// GET /api/destaques
pub async fn get_highlights(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let limit = parse_limit(&params);

    if !wants_refresh(&params) {
        if let Some(entry) = state.cache.get_entry(CacheConfig::HIGHLIGHTS_KEY) {
            debug!("Highlights cache hit");
            let age = chrono::Duration::from_std(entry.age()).unwrap_or_default();
            let cached_at: DateTime<Utc> = Utc::now() - age;
            let items: Vec<_> = entry.value.into_iter().take(limit).collect();
            return (
                [
                    ("x-cache", "HIT".to_string()),
                    ("x-cached-at", cached_at.to_rfc3339()),
                ],
                Json(items),
            )
                .into_response();
        }
    }

    debug!("Highlights cache miss, loading from {}", state.highlights.name());
    match state.highlights.load().await {
        Ok(articles) => {
            state
                .cache
                .set(CacheConfig::HIGHLIGHTS_KEY, articles.clone());
            let items: Vec<_> = articles.into_iter().take(limit).collect();
            (
                [
                    ("x-cache", "MISS".to_string()),
                    ("x-fetched-at", Utc::now().to_rfc3339()),
                ],
                Json(items),
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to load highlights: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "error": HighlightsConfig::UNAVAILABLE_ERROR,
                    "message": HighlightsConfig::UNAVAILABLE_MESSAGE,
                    "items": [],
                })),
            )
                .into_response()
        }
    }
}

/// HEAD /api/destaques
pub async fn head_highlights(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let status = if state.cache.contains(CacheConfig::HIGHLIGHTS_KEY) {
        "HIT"
    } else {
        "MISS"
    };
    (
        StatusCode::OK,
        [
            ("x-cache-status", status),
            ("x-api-version", AppConfig::API_VERSION),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit(&params(&[])), 5);
        assert_eq!(parse_limit(&params(&[("limit", "3")])), 3);
        assert_eq!(parse_limit(&params(&[("limit", "-1")])), 5);
        assert_eq!(parse_limit(&params(&[("limit", "dez")])), 5);
    }

    #[test]
    fn test_wants_refresh() {
        assert!(wants_refresh(&params(&[("refresh", "true")])));
        assert!(!wants_refresh(&params(&[("refresh", "1")])));
        assert!(!wants_refresh(&params(&[])));
    }
}
