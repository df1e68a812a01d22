//! Centralized configuration for the Hub content service.
//!
//! Constants for caching, feed aggregation, data files and the HTTP surface.

use std::time::Duration;

/// Application-level configuration.
pub struct AppConfig;

impl AppConfig {
    pub const APP_NAME: &'static str = "Hub Direitista";
    pub const API_VERSION: &'static str = "1.0";
    pub const USER_AGENT: &'static str = "Hub-Content/1.0";
}

/// Configuration for the in-memory TTL cache.
pub struct CacheConfig;

impl CacheConfig {
    pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);
    pub const HIGHLIGHTS_KEY: &'static str = "destaques";
}

/// Configuration for remote feed aggregation.
pub struct FeedConfig;

impl FeedConfig {
    /// Items kept from each source, most recent first.
    pub const ITEMS_PER_SOURCE: usize = 5;
    /// Articles returned by a full aggregation.
    pub const MAX_ARTICLES: usize = 10;
    pub const FETCH_TIMEOUT: Duration = Duration::from_secs(15);
    pub const DESCRIPTION_CHARS: usize = 150;
    pub const EXCERPT_CHARS: usize = 100;

    pub const DEFAULT_TITLE: &'static str = "Sem título";
    pub const DEFAULT_DESCRIPTION: &'static str = "Sem descrição";
    pub const DEFAULT_LINK: &'static str = "#";
    pub const CATEGORY: &'static str = "Destaque";
    pub const READ_TIME: &'static str = "5 min";
    pub const TAGS: [&'static str; 3] = ["rss", "substack", "destaque"];
}

/// Data file locations and defaults.
pub struct DataConfig;

impl DataConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "data";
    pub const DB_FILE_NAME: &'static str = "db.json";
    pub const ARTICLES_FILE_NAME: &'static str = "artigos.json";
    pub const DEFAULT_IMAGE: &'static str = "/icons/default.jpg";
    pub const PUBLIC_PREFIX: &'static str = "./public/";
    pub const ERROR_VERSION: &'static str = "error";
    pub const LOAD_ERROR_MESSAGE: &'static str = "Erro ao carregar dados";
    pub const DEFAULT_LINK_ICON: &'static str = "🔗";
}

/// Defaults for the highlights endpoint.
pub struct HighlightsConfig;

impl HighlightsConfig {
    pub const DEFAULT_LIMIT: usize = 5;
    pub const UNAVAILABLE_ERROR: &'static str = "Serviço temporariamente indisponível";
    pub const UNAVAILABLE_MESSAGE: &'static str = "Tente novamente em alguns minutos";
}
