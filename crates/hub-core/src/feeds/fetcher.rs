//! Fetching and parsing of a single feed.

use super::sources::FeedSource;
use crate::config::{AppConfig, FeedConfig};
use crate::error::{HubError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use regex::Regex;
use reqwest::Client;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// One entry of a parsed feed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub published: Option<DateTime<Utc>>,
    /// Plain-text summary with markup stripped.
    pub content_snippet: Option<String>,
    pub creator: Option<String>,
}

/// Retrieves the entries of a feed source.
///
/// Implementations return every entry they found; trimming to the per-source
/// limit is the aggregator's job.
#[async_trait]
pub trait FeedFetcher: Send + Sync {
    async fn fetch(&self, source: &FeedSource) -> Result<Vec<FeedItem>>;
}

/// Fetcher that downloads feeds over HTTP and parses RSS, Atom or JSON Feed.
pub struct HttpFeedFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFeedFetcher {
    /// Create a fetcher with the default request timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(FeedConfig::FETCH_TIMEOUT)
    }

    /// Create a fetcher with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(AppConfig::USER_AGENT)
            .build()
            .map_err(|e| HubError::Network {
                message: format!("Failed to create HTTP client: {}", e),
                source: Some(e),
            })?;

        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Attach the configured timeout to client timeouts.
    fn request_error(&self, err: reqwest::Error) -> HubError {
        if err.is_timeout() {
            HubError::Timeout(self.timeout)
        } else {
            err.into()
        }
    }
}

#[async_trait]
impl FeedFetcher for HttpFeedFetcher {
    async fn fetch(&self, source: &FeedSource) -> Result<Vec<FeedItem>> {
        debug!("Fetching feed {} from {}", source.id, source.url);

        let response = self
            .client
            .get(&source.url)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(HubError::HttpStatus {
                url: source.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.request_error(e))?;
        parse_feed(&source.id, &body)
    }
}

/// Parse a feed document into items, in document order.
pub fn parse_feed(source_id: &str, body: &[u8]) -> Result<Vec<FeedItem>> {
    let feed = feed_rs::parser::parse(body).map_err(|e| HubError::FeedParse {
        source_id: source_id.to_string(),
        message: e.to_string(),
    })?;

    let items = feed
        .entries
        .into_iter()
        .map(|entry| {
            let snippet = entry
                .summary
                .map(|text| text.content)
                .or_else(|| entry.content.and_then(|content| content.body))
                .map(|raw| strip_markup(&raw))
                .filter(|text| !text.is_empty());

            FeedItem {
                title: entry
                    .title
                    .map(|text| text.content.trim().to_string())
                    .filter(|title| !title.is_empty()),
                link: entry.links.into_iter().next().map(|link| link.href),
                published: entry.published.or(entry.updated),
                content_snippet: snippet,
                creator: entry.authors.into_iter().next().map(|person| person.name),
            }
        })
        .collect();

    Ok(items)
}

fn strip_markup(raw: &str) -> String {
    let text = HTML_TAG.replace_all(raw, " ");
    WHITESPACE_RUN.replace_all(&text, " ").trim().to_string()
}
