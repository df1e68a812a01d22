//! HTTP server implementation using Axum.

use crate::handlers::{articles, highlights, persons, status};
use axum::{routing::get, Router};
use hub_core::{Article, ContentStore, HighlightsSource, TtlCache};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Upper bound on requests handled at once.
const MAX_CONCURRENT_REQUESTS: usize = 256;

/// Application state shared across handlers.
pub struct AppState {
    /// Validated content snapshot
    pub store: ContentStore,
    /// Producer of the featured-articles list
    pub highlights: Arc<dyn HighlightsSource>,
    /// Memoized highlights, owned by this process only
    pub cache: Arc<TtlCache<Vec<Article>>>,
}

impl AppState {
    pub fn new(
        store: ContentStore,
        highlights: Arc<dyn HighlightsSource>,
        cache: Arc<TtlCache<Vec<Article>>>,
    ) -> Self {
        Self {
            store,
            highlights,
            cache,
        }
    }
}

/// Build the router with every API route.
pub fn build_router(state: Arc<AppState>) -> Router {
    // Configure CORS for the static frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers(Any);

    Router::new()
        .route("/health", get(status::health))
        .route(
            "/api/destaques",
            get(highlights::get_highlights).head(highlights::head_highlights),
        )
        .route("/api/persons", get(persons::list_persons))
        .route("/api/persons/:category", get(persons::persons_by_category))
        .route("/api/artigos", get(articles::list_articles))
        .route("/api/artigos/:id", get(articles::get_article))
        .route("/api/stats", get(status::stats))
        .route("/api/home", get(status::home))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS)),
        )
        .with_state(state)
}

/// Start the HTTP server.
///
/// Returns the actual address the server is bound to (useful when port=0).
pub async fn start_server(state: AppState, host: &str, port: u16) -> anyhow::Result<SocketAddr> {
    let app = build_router(Arc::new(state));

    // Parse the address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    // Bind to the address
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    info!("Server listening on {}", actual_addr);

    // Spawn the server in the background
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
        }
    });

    Ok(actual_addr)
}
