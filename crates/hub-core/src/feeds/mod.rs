//! Aggregation of recent posts from external RSS/Atom feeds.
//!
//! - [`FeedSource`]: the fixed table of member feeds and author details
//! - [`FeedFetcher`]: transport + parsing seam, [`HttpFeedFetcher`] in production
//! - [`FeedAggregator`]: concurrent fan-out with per-source failure isolation

mod aggregator;
mod fetcher;
mod sources;

pub use aggregator::FeedAggregator;
pub use fetcher::{parse_feed, FeedFetcher, FeedItem, HttpFeedFetcher};
pub use sources::{author_link, author_name, default_sources, FeedSource};
