//! People and platforms listed on the hub.

use crate::config::DataConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Whether a link leaves the site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    #[default]
    External,
    Internal,
}

/// An outbound profile or channel link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub url: String,
    #[serde(rename = "type", default)]
    pub kind: LinkKind,
    #[serde(default = "default_link_icon")]
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<String>,
}

fn default_link_icon() -> String {
    DataConfig::DEFAULT_LINK_ICON.to_string()
}

/// A single statistic: counts are numbers, audience figures are often text ("12k").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// Open set of named statistics.
pub type Stats = BTreeMap<String, StatValue>;

/// A hub member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub img: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(default)]
    pub join_date: String,
    #[serde(default)]
    pub expertise: Vec<String>,
    #[serde(default)]
    pub stats: Stats,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub content_types: Vec<String>,
    #[serde(default)]
    pub links: BTreeMap<String, Link>,
}

impl Member {
    /// Case-insensitive substring match against the expertise list.
    ///
    /// A blank needle never matches.
    pub fn has_expertise(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return false;
        }
        self.expertise
            .iter()
            .any(|exp| exp.to_lowercase().contains(&needle))
    }
}

/// A spokesperson ("porta-voz"): a partner voice promoted by the hub.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spokesperson {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub img: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partnership_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub expertise: Vec<String>,
    #[serde(default)]
    pub stats: Stats,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub content_types: Vec<String>,
    #[serde(default)]
    pub links: BTreeMap<String, Link>,
}

/// A community or channel ("plataforma") run by hub members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Platform {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub img: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub featured: bool,
    /// Member count of the community.
    #[serde(default)]
    pub members: u64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub access: String,
    #[serde(default)]
    pub activity: String,
    #[serde(default)]
    pub links: BTreeMap<String, Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefits: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_link_defaults() {
        let link: Link = serde_json::from_value(json!({ "label": "Site" })).unwrap();
        assert_eq!(link.url, "");
        assert_eq!(link.kind, LinkKind::External);
        assert_eq!(link.icon, "🔗");
        assert_eq!(link.label.as_deref(), Some("Site"));
    }

    #[test]
    fn test_member_camel_case_fields() {
        let member: Member = serde_json::from_value(json!({
            "id": "zer0",
            "name": "Zer0",
            "joinDate": "2024-01-01",
            "contentTypes": ["artigos"],
            "stats": { "articlesCount": 12, "subscribers": "3k", "ratio": 0.5 }
        }))
        .unwrap();

        assert_eq!(member.join_date, "2024-01-01");
        assert_eq!(member.content_types, vec!["artigos"]);
        assert_eq!(member.stats["articlesCount"], StatValue::Integer(12));
        assert_eq!(member.stats["subscribers"], StatValue::Text("3k".into()));
        assert_eq!(member.stats["ratio"], StatValue::Float(0.5));
    }

    #[test]
    fn test_member_requires_id() {
        let result: Result<Member, _> = serde_json::from_value(json!({ "name": "Nobody" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_has_expertise_is_case_insensitive_substring() {
        let member: Member = serde_json::from_value(json!({
            "id": "noir",
            "expertise": ["Economia Austríaca", "Filosofia Política"]
        }))
        .unwrap();

        assert!(member.has_expertise("economia"));
        assert!(member.has_expertise("POLÍTICA"));
        assert!(!member.has_expertise("história"));
        assert!(!member.has_expertise(""));
        assert!(!member.has_expertise("   "));
    }

    #[test]
    fn test_platform_type_field() {
        let platform: Platform = serde_json::from_value(json!({
            "id": "tg",
            "name": "Grupo",
            "type": "telegram",
            "members": 150
        }))
        .unwrap();
        assert_eq!(platform.kind, "telegram");
        assert_eq!(platform.members, 150);

        let value = serde_json::to_value(&platform).unwrap();
        assert_eq!(value["type"], "telegram");
        assert!(value.get("benefits").is_none());
    }
}
