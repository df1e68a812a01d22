//! Sources for the featured-articles list ("destaques").

use crate::config::DataConfig;
use crate::error::{HubError, Result};
use crate::feeds::FeedAggregator;
use crate::models::Article;
use crate::store::ContentStore;
use async_trait::async_trait;
use tracing::info;

/// Produces the featured-articles list that the highlights endpoint caches.
#[async_trait]
pub trait HighlightsSource: Send + Sync {
    async fn load(&self) -> Result<Vec<Article>>;

    /// Short label for logs and the health endpoint.
    fn name(&self) -> &'static str;
}

/// Featured articles from `artigos.json`.
///
/// Fails with [`HubError::DataUnavailable`] when the file could not be loaded,
/// so an empty fallback is never cached as the highlights list.
pub struct StaticHighlights {
    store: ContentStore,
}

impl StaticHighlights {
    pub fn new(store: ContentStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl HighlightsSource for StaticHighlights {
    async fn load(&self) -> Result<Vec<Article>> {
        if self.store.has_articles_error() {
            return Err(HubError::DataUnavailable(
                DataConfig::ARTICLES_FILE_NAME.to_string(),
            ));
        }
        Ok(self.store.featured_articles())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

/// Latest posts from member feeds, falling back to the static list when the
/// feeds produce nothing.
pub struct FeedHighlights {
    aggregator: FeedAggregator,
    fallback: StaticHighlights,
}

impl FeedHighlights {
    pub fn new(aggregator: FeedAggregator, store: ContentStore) -> Self {
        Self {
            aggregator,
            fallback: StaticHighlights::new(store),
        }
    }
}

#[async_trait]
impl HighlightsSource for FeedHighlights {
    async fn load(&self) -> Result<Vec<Article>> {
        let articles = self.aggregator.fetch_all_feeds().await;
        if articles.is_empty() {
            info!("Feeds returned no articles, using static highlights");
            return self.fallback.load().await;
        }
        Ok(articles)
    }

    fn name(&self) -> &'static str {
        "feeds"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feeds::{FeedFetcher, FeedItem, FeedSource};
    use crate::models::{ArticlesData, DbData};
    use serde_json::json;
    use std::sync::Arc;

    struct FailingFetcher;

    #[async_trait]
    impl FeedFetcher for FailingFetcher {
        async fn fetch(&self, _source: &FeedSource) -> Result<Vec<FeedItem>> {
            Err(HubError::Other("offline".into()))
        }
    }

    struct OneItemFetcher;

    #[async_trait]
    impl FeedFetcher for OneItemFetcher {
        async fn fetch(&self, _source: &FeedSource) -> Result<Vec<FeedItem>> {
            Ok(vec![FeedItem {
                title: Some("Do feed".into()),
                ..Default::default()
            }])
        }
    }

    fn store() -> ContentStore {
        let articles: ArticlesData = serde_json::from_value(json!({
            "artigos": [
                { "id": 1, "title": "Fixo", "featured": true },
                { "id": 2, "title": "Comum" }
            ]
        }))
        .unwrap();
        ContentStore::new(DbData::default(), articles)
    }

    #[tokio::test]
    async fn test_static_highlights() {
        let source = StaticHighlights::new(store());
        let articles = source.load().await.unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Fixo");
    }

    #[tokio::test]
    async fn test_static_highlights_unavailable_when_articles_failed() {
        let store = ContentStore::new(DbData::default(), ArticlesData::fallback("bad json"));
        let err = StaticHighlights::new(store.clone()).load().await.unwrap_err();
        assert!(matches!(err, HubError::DataUnavailable(ref file) if file == "artigos.json"));
        assert_eq!(err.http_status(), 503);

        // Feeds that come back empty hit the same failure through the fallback.
        let aggregator = FeedAggregator::new(Arc::new(FailingFetcher));
        let err = FeedHighlights::new(aggregator, store).load().await.unwrap_err();
        assert!(matches!(err, HubError::DataUnavailable(_)));
    }

    #[tokio::test]
    async fn test_feed_highlights_fall_back_when_empty() {
        let aggregator = FeedAggregator::new(Arc::new(FailingFetcher));
        let source = FeedHighlights::new(aggregator, store());
        let articles = source.load().await.unwrap();
        assert_eq!(articles[0].title, "Fixo");
    }

    #[tokio::test]
    async fn test_feed_highlights_prefer_feeds() {
        let aggregator = FeedAggregator::new(Arc::new(OneItemFetcher))
            .with_sources(vec![FeedSource::new("zer0", "https://example.com/feed")]);
        let source = FeedHighlights::new(aggregator, store());
        let articles = source.load().await.unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Do feed");
        assert_eq!(source.name(), "feeds");
    }
}
