//! Article listing and detail endpoints.

use super::error_response;
use crate::server::AppState;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use hub_core::HubError;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// Number of related articles returned with a detail lookup.
const RELATED_LIMIT: usize = 3;

#[derive(Debug, Default, Deserialize)]
pub struct ArticleQuery {
    pub category: Option<String>,
}

/// GET /api/artigos
pub async fn list_articles(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ArticleQuery>,
) -> Response {
    match query.category.as_deref().map(str::trim) {
        Some(category) if !category.is_empty() => {
            Json(state.store.articles_by_category(category)).into_response()
        }
        _ => Json(state.store.articles()).into_response(),
    }
}

/// GET /api/artigos/:id
pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let id: u64 = match id.parse() {
        Ok(id) => id,
        Err(_) => {
            return error_response(&HubError::validation(
                "id",
                format!("'{}' is not a valid article id", id),
            ))
        }
    };

    match state.store.article_by_id(id) {
        Some(article) => Json(json!({
            "article": article,
            "related": state.store.related_articles(id, RELATED_LIMIT),
        }))
        .into_response(),
        None => error_response(&HubError::NotFound {
            kind: "article",
            id: id.to_string(),
        }),
    }
}
