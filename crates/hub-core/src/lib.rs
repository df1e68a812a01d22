//! Hub Core - content snapshot, TTL cache and feed aggregation for the Hub site.
//!
//! This crate has no HTTP server in it; `hub-server` wires these pieces into
//! an axum router.
//!
//! # Example
//!
//! ```rust,ignore
//! use hub_core::{ContentStore, TtlCache};
//! use std::path::Path;
//!
//! let store = ContentStore::load(Path::new("data"));
//! let cache = TtlCache::new();
//! cache.set("destaques", store.featured_articles());
//! println!("{} members", store.members().len());
//! ```

pub mod cache;
pub mod config;
pub mod data;
pub mod error;
pub mod feeds;
pub mod helpers;
pub mod highlights;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use cache::{CacheEntry, TtlCache};
pub use data::{get_articles_data, get_db_data, load_articles, load_db, ValidationReport};
pub use error::{HubError, Result};
pub use feeds::{FeedAggregator, FeedFetcher, FeedItem, FeedSource, HttpFeedFetcher};
pub use highlights::{FeedHighlights, HighlightsSource, StaticHighlights};
pub use models::{Article, ArticlesData, DbData, Member, Platform, Spokesperson};
pub use store::{ContentStore, HomepageData, PersonCollection, TotalCounts};
