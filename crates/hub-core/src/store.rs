//! Immutable content snapshot with the queries the site needs.

use crate::config::DataConfig;
use crate::data::{get_articles_data, get_db_data, ValidationReport};
use crate::models::{
    Article, ArticlesData, ArticlesMetadata, Categories, DbData, DbMetadata, Member, Platform,
    Spokesperson,
};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

/// Totals across every collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalCounts {
    pub members: usize,
    #[serde(rename = "portavoze")]
    pub spokespeople: usize,
    #[serde(rename = "plataformas")]
    pub platforms: usize,
    #[serde(rename = "artigos")]
    pub articles: usize,
}

/// Featured items for the landing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomepageData {
    pub featured_members: Vec<Member>,
    #[serde(rename = "featuredPortavoze")]
    pub featured_spokespeople: Vec<Spokesperson>,
    #[serde(rename = "featuredPlataformas")]
    pub featured_platforms: Vec<Platform>,
    #[serde(rename = "featuredArtigos")]
    pub featured_articles: Vec<Article>,
}

/// Result of the `/api/persons/:category` dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum PersonCollection {
    Members(Vec<Member>),
    Spokespeople(Vec<Spokesperson>),
    Platforms(Vec<Platform>),
    All(Arc<DbData>),
    /// Members filtered by expertise.
    ByExpertise(Vec<Member>),
}

impl PersonCollection {
    /// JSON body for the collection.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        match self {
            PersonCollection::Members(items) | PersonCollection::ByExpertise(items) => {
                serde_json::to_value(items)
            }
            PersonCollection::Spokespeople(items) => serde_json::to_value(items),
            PersonCollection::Platforms(items) => serde_json::to_value(items),
            PersonCollection::All(db) => serde_json::to_value(db.as_ref()),
        }
    }
}

/// Read-only snapshot of `db.json` and `artigos.json`.
///
/// Cloning is cheap; both files are shared behind `Arc`.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    db: Arc<DbData>,
    articles: Arc<ArticlesData>,
}

impl ContentStore {
    /// Build a store from already-loaded data.
    pub fn new(db: DbData, articles: ArticlesData) -> Self {
        Self {
            db: Arc::new(db),
            articles: Arc::new(articles),
        }
    }

    /// Load both data files from a directory. Never fails; see [`get_db_data`].
    pub fn load(data_dir: &Path) -> Self {
        let db = get_db_data(&data_dir.join(DataConfig::DB_FILE_NAME));
        let articles = get_articles_data(&data_dir.join(DataConfig::ARTICLES_FILE_NAME));
        Self::new(db, articles)
    }

    /// Whether either file fell back to its error state.
    pub fn is_degraded(&self) -> bool {
        self.has_db_error() || self.has_articles_error()
    }

    /// Whether `db.json` fell back to its error state.
    pub fn has_db_error(&self) -> bool {
        self.db.metadata.is_error()
    }

    /// Whether `artigos.json` fell back to its error state.
    pub fn has_articles_error(&self) -> bool {
        self.articles.is_error()
    }

    pub fn db(&self) -> Arc<DbData> {
        Arc::clone(&self.db)
    }

    pub fn validation_report(&self) -> ValidationReport {
        ValidationReport::from_snapshot(&self.db, &self.articles)
    }

    // ========================================================================
    // Members
    // ========================================================================

    pub fn members(&self) -> &[Member] {
        &self.db.members
    }

    pub fn featured_members(&self) -> Vec<Member> {
        self.db.members.iter().filter(|m| m.featured).cloned().collect()
    }

    pub fn member_by_id(&self, id: &str) -> Option<&Member> {
        self.db.members.iter().find(|m| m.id == id)
    }

    /// Members whose expertise contains `category` (case-insensitive).
    ///
    /// A blank category yields an empty list.
    pub fn members_by_expertise(&self, category: &str) -> Vec<Member> {
        self.db
            .members
            .iter()
            .filter(|m| m.has_expertise(category))
            .cloned()
            .collect()
    }

    // ========================================================================
    // Spokespeople and platforms
    // ========================================================================

    pub fn spokespeople(&self) -> &[Spokesperson] {
        &self.db.spokespeople
    }

    pub fn featured_spokespeople(&self) -> Vec<Spokesperson> {
        self.db
            .spokespeople
            .iter()
            .filter(|p| p.featured)
            .cloned()
            .collect()
    }

    pub fn spokesperson_by_id(&self, id: &str) -> Option<&Spokesperson> {
        self.db.spokespeople.iter().find(|p| p.id == id)
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.db.platforms
    }

    pub fn featured_platforms(&self) -> Vec<Platform> {
        self.db
            .platforms
            .iter()
            .filter(|p| p.featured)
            .cloned()
            .collect()
    }

    pub fn platform_by_id(&self, id: &str) -> Option<&Platform> {
        self.db.platforms.iter().find(|p| p.id == id)
    }

    pub fn categories(&self) -> &Categories {
        &self.db.categories
    }

    pub fn metadata(&self) -> &DbMetadata {
        &self.db.metadata
    }

    /// Resolve a `/api/persons/:category` segment.
    ///
    /// `members`, `portavoze`, `plataformas` and `all` select whole
    /// collections; anything else filters members by expertise.
    pub fn person_collection(&self, category: &str) -> PersonCollection {
        match category.trim().to_lowercase().as_str() {
            "members" => PersonCollection::Members(self.db.members.clone()),
            "portavoze" => PersonCollection::Spokespeople(self.db.spokespeople.clone()),
            "plataformas" => PersonCollection::Platforms(self.db.platforms.clone()),
            "all" => PersonCollection::All(self.db()),
            _ => PersonCollection::ByExpertise(self.members_by_expertise(category)),
        }
    }

    // ========================================================================
    // Articles
    // ========================================================================

    pub fn articles(&self) -> &[Article] {
        &self.articles.articles
    }

    pub fn featured_articles(&self) -> Vec<Article> {
        self.articles
            .articles
            .iter()
            .filter(|a| a.featured)
            .cloned()
            .collect()
    }

    pub fn article_by_id(&self, id: u64) -> Option<&Article> {
        self.articles.articles.iter().find(|a| a.id == id)
    }

    pub fn articles_by_category(&self, category: &str) -> Vec<Article> {
        self.articles
            .articles
            .iter()
            .filter(|a| a.in_category(category))
            .cloned()
            .collect()
    }

    /// Articles in the same category or sharing a tag, excluding the article itself.
    pub fn related_articles(&self, id: u64, limit: usize) -> Vec<Article> {
        let Some(current) = self.article_by_id(id) else {
            return Vec::new();
        };

        self.articles
            .articles
            .iter()
            .filter(|a| a.id != current.id)
            .filter(|a| a.in_category(&current.category) || a.shares_tag_with(current))
            .take(limit)
            .cloned()
            .collect()
    }

    pub fn articles_metadata(&self) -> &ArticlesMetadata {
        &self.articles.metadata
    }

    // ========================================================================
    // Aggregates
    // ========================================================================

    pub fn total_counts(&self) -> TotalCounts {
        TotalCounts {
            members: self.db.members.len(),
            spokespeople: self.db.spokespeople.len(),
            platforms: self.db.platforms.len(),
            articles: self.articles.articles.len(),
        }
    }

    pub fn homepage_data(&self) -> HomepageData {
        HomepageData {
            featured_members: self.featured_members(),
            featured_spokespeople: self.featured_spokespeople(),
            featured_platforms: self.featured_platforms(),
            featured_articles: self.featured_articles(),
        }
    }
}
