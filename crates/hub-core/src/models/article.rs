//! Articles, either curated in `artigos.json` or synthesized from feeds.

use serde::{Deserialize, Serialize};

/// A published article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_link: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub read_time: String,
    #[serde(default)]
    pub published_date: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Original publish date reported by a feed, when it had one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl Article {
    /// Whether the two articles share at least one tag (case-insensitive).
    pub fn shares_tag_with(&self, other: &Article) -> bool {
        self.tags
            .iter()
            .any(|tag| other.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)))
    }

    /// Case-insensitive category equality.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_article_wire_names() {
        let article: Article = serde_json::from_value(json!({
            "id": 3,
            "title": "Liberdade",
            "authorLink": "https://example.com",
            "readTime": "7 min",
            "publishedDate": "2024-05-01",
            "featured": true
        }))
        .unwrap();

        assert_eq!(article.read_time, "7 min");
        assert_eq!(article.author_link.as_deref(), Some("https://example.com"));

        let value = serde_json::to_value(&article).unwrap();
        assert_eq!(value["publishedDate"], "2024-05-01");
        assert!(value.get("excerpt").is_none());
        assert!(value.get("date").is_none());
    }

    #[test]
    fn test_category_and_tags() {
        let a: Article = serde_json::from_value(json!({
            "id": 1, "category": "Economia", "tags": ["Mercado", "impostos"]
        }))
        .unwrap();
        let b: Article = serde_json::from_value(json!({
            "id": 2, "category": "História", "tags": ["mercado"]
        }))
        .unwrap();

        assert!(a.in_category("ECONOMIA"));
        assert!(!a.in_category("econ"));
        assert!(a.shares_tag_with(&b));
    }
}
