//! Fan-out over every feed source and merge into articles.

use super::fetcher::{FeedFetcher, FeedItem};
use super::sources::{author_link, author_name, default_sources, FeedSource};
use crate::config::{DataConfig, FeedConfig};
use crate::helpers::truncate_chars;
use crate::models::Article;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Aggregates the most recent posts of every configured feed.
///
/// Sources are fetched concurrently. A source that errors or exceeds the fetch
/// timeout contributes nothing; the others are unaffected. Nothing is cached
/// here; every call refetches everything.
pub struct FeedAggregator {
    sources: Vec<FeedSource>,
    fetcher: Arc<dyn FeedFetcher>,
    items_per_source: usize,
    max_articles: usize,
    fetch_timeout: Duration,
}

impl FeedAggregator {
    /// Create an aggregator over the built-in member feeds.
    pub fn new(fetcher: Arc<dyn FeedFetcher>) -> Self {
        Self {
            sources: default_sources(),
            fetcher,
            items_per_source: FeedConfig::ITEMS_PER_SOURCE,
            max_articles: FeedConfig::MAX_ARTICLES,
            fetch_timeout: FeedConfig::FETCH_TIMEOUT,
        }
    }

    /// Replace the source table.
    pub fn with_sources(mut self, sources: Vec<FeedSource>) -> Self {
        self.sources = sources;
        self
    }

    /// Bound the wait for any single source.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn sources(&self) -> &[FeedSource] {
        &self.sources
    }

    pub fn source(&self, member_id: &str) -> Option<&FeedSource> {
        self.sources.iter().find(|s| s.id == member_id)
    }

    /// Most recent items of one member's feed.
    ///
    /// Unknown members and failed fetches both yield an empty list.
    pub async fn fetch_member_feed(&self, member_id: &str) -> Vec<FeedItem> {
        match self.source(member_id) {
            Some(source) => self.fetch_source(source).await,
            None => {
                debug!("No feed configured for {}", member_id);
                Vec::new()
            }
        }
    }

    async fn fetch_source(&self, source: &FeedSource) -> Vec<FeedItem> {
        let fetched =
            tokio::time::timeout(self.fetch_timeout, self.fetcher.fetch(source)).await;

        let mut items = match fetched {
            Ok(Ok(items)) => items,
            Ok(Err(e)) if e.is_upstream() => {
                warn!("Failed to fetch feed for {}: {}", source.id, e);
                return Vec::new();
            }
            Ok(Err(e)) => {
                error!("Feed {} failed locally: {}", source.id, e);
                return Vec::new();
            }
            Err(_) => {
                warn!(
                    "Feed for {} timed out after {:?}",
                    source.id, self.fetch_timeout
                );
                return Vec::new();
            }
        };

        // Newest first; undated entries keep document order after the dated ones.
        items.sort_by(|a, b| b.published.cmp(&a.published));
        items.truncate(self.items_per_source);
        items
    }

    /// Fetch every source and return the newest articles across all of them.
    pub async fn fetch_all_feeds(&self) -> Vec<Article> {
        let per_source = join_all(self.sources.iter().map(|source| async move {
            (source, self.fetch_source(source).await)
        }))
        .await;

        let now = Utc::now();
        let id_base = (now.timestamp_millis().max(0) as u64) * 100;
        let mut dated: Vec<(DateTime<Utc>, Article)> = Vec::new();

        for (source, items) in per_source {
            for item in items {
                let id = id_base + dated.len() as u64;
                dated.push(item_to_article(item, &source.id, id, now));
            }
        }

        dated.sort_by(|a, b| b.0.cmp(&a.0));
        dated.truncate(self.max_articles);

        info!(
            "Aggregated {} feed article(s) from {} source(s)",
            dated.len(),
            self.sources.len()
        );

        dated.into_iter().map(|(_, article)| article).collect()
    }
}

/// Map a feed item into the common article shape, paired with its sort date.
fn item_to_article(
    item: FeedItem,
    member_id: &str,
    id: u64,
    now: DateTime<Utc>,
) -> (DateTime<Utc>, Article) {
    let published = item.published.unwrap_or(now);

    let (description, excerpt) = match item.content_snippet.as_deref() {
        Some(snippet) => (
            format!(
                "{}...",
                truncate_chars(snippet, FeedConfig::DESCRIPTION_CHARS)
            ),
            truncate_chars(snippet, FeedConfig::EXCERPT_CHARS).to_string(),
        ),
        None => (FeedConfig::DEFAULT_DESCRIPTION.to_string(), String::new()),
    };

    let article = Article {
        id,
        title: item
            .title
            .unwrap_or_else(|| FeedConfig::DEFAULT_TITLE.to_string()),
        description,
        excerpt: Some(excerpt),
        image: DataConfig::DEFAULT_IMAGE.to_string(),
        link: item
            .link
            .unwrap_or_else(|| FeedConfig::DEFAULT_LINK.to_string()),
        author: author_name(member_id),
        author_link: Some(author_link(member_id)),
        category: FeedConfig::CATEGORY.to_string(),
        read_time: FeedConfig::READ_TIME.to_string(),
        published_date: published.to_rfc3339(),
        featured: true,
        tags: FeedConfig::TAGS.iter().map(|t| t.to_string()).collect(),
        date: item.published.map(|d| d.to_rfc3339()),
    };

    (published, article)
}
