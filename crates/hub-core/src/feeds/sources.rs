//! Member feed sources.

use crate::config::FeedConfig;
use serde::{Deserialize, Serialize};

/// A member id mapped to the URL of their feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSource {
    pub id: String,
    pub url: String,
}

impl FeedSource {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }
}

/// (member id, feed url, display name, profile link)
const MEMBER_FEEDS: &[(&str, &str, &str, &str)] = &[
    (
        "zer0",
        "https://zer0g0ld.substack.com/feed",
        "Zer0",
        "https://zer0g0ld.substack.com/",
    ),
    (
        "staan-marsh",
        "https://substack.com/@adson02/feed",
        "Staan Marsh",
        "https://substack.com/@adson02",
    ),
    (
        "noir",
        "https://substack.com/@noiret/feed",
        "Noir",
        "https://substack.com/@noiret",
    ),
    (
        "armando-leal",
        "https://substack.com/@historiacontraataca/feed",
        "Armando Leal",
        "https://substack.com/@historiacontraataca",
    ),
    (
        "luciano-ls",
        "https://substack.com/@lucianols/feed",
        "Luciano LS",
        "https://substack.com/@lucianols",
    ),
];

/// The built-in member feeds.
pub fn default_sources() -> Vec<FeedSource> {
    MEMBER_FEEDS
        .iter()
        .map(|(id, url, _, _)| FeedSource::new(*id, *url))
        .collect()
}

/// Display name for a member id, or the id itself when unknown.
pub fn author_name(member_id: &str) -> String {
    MEMBER_FEEDS
        .iter()
        .find(|(id, ..)| *id == member_id)
        .map(|(_, _, name, _)| name.to_string())
        .unwrap_or_else(|| member_id.to_string())
}

/// Profile link for a member id, or `#` when unknown.
pub fn author_link(member_id: &str) -> String {
    MEMBER_FEEDS
        .iter()
        .find(|(id, ..)| *id == member_id)
        .map(|(_, _, _, link)| link.to_string())
        .unwrap_or_else(|| FeedConfig::DEFAULT_LINK.to_string())
}
