//! Whole-file snapshots of `db.json` and `artigos.json`.

use super::{Article, Member, Platform, Spokesperson};
use crate::config::DataConfig;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Metadata block of `db.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DbMetadata {
    pub version: String,
    pub last_updated: String,
    pub description: String,
    pub total_members: u64,
    pub total_articles: u64,
    pub maintainers: Vec<String>,
    pub categories: Vec<String>,
}

impl DbMetadata {
    /// Metadata marking a snapshot that could not be loaded.
    pub fn error_state(message: impl Into<String>) -> Self {
        Self {
            version: DataConfig::ERROR_VERSION.to_string(),
            last_updated: Utc::now().to_rfc3339(),
            description: message.into(),
            ..Default::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.version == DataConfig::ERROR_VERSION
    }
}

/// A content theme ("tema").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "cor")]
    pub color: String,
    #[serde(rename = "descricao")]
    pub description: String,
}

/// A content format ("tipo de conteúdo").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentType {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    pub icon: String,
}

/// Category taxonomies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Categories {
    #[serde(rename = "temas")]
    pub themes: Vec<Theme>,
    #[serde(rename = "tiposConteudo")]
    pub content_types: Vec<ContentType>,
}

/// Validated contents of `db.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DbData {
    pub metadata: DbMetadata,
    pub members: Vec<Member>,
    #[serde(rename = "portavoze")]
    pub spokespeople: Vec<Spokesperson>,
    #[serde(rename = "plataformas")]
    pub platforms: Vec<Platform>,
    #[serde(rename = "categorias")]
    pub categories: Categories,
}

impl DbData {
    /// Empty snapshot flagged as an error.
    pub fn fallback(message: impl Into<String>) -> Self {
        Self {
            metadata: DbMetadata::error_state(message),
            ..Default::default()
        }
    }
}

/// Metadata block of `artigos.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticlesMetadata {
    pub total: u64,
    pub featured: u64,
    pub categories: Vec<String>,
    pub last_updated: String,
    pub description: String,
}

/// Validated contents of `artigos.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticlesData {
    #[serde(rename = "artigos")]
    pub articles: Vec<Article>,
    pub metadata: ArticlesMetadata,
}

impl ArticlesData {
    /// Empty article set whose metadata records the load failure.
    pub fn fallback(message: impl Into<String>) -> Self {
        Self {
            articles: Vec::new(),
            metadata: ArticlesMetadata {
                last_updated: Utc::now().to_rfc3339(),
                description: format!("{}: {}", DataConfig::LOAD_ERROR_MESSAGE, message.into()),
                ..Default::default()
            },
        }
    }

    pub fn is_error(&self) -> bool {
        self.metadata
            .description
            .starts_with(DataConfig::LOAD_ERROR_MESSAGE)
    }
}
