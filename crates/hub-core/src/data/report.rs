//! Summary of a loaded snapshot, printed by `hub-server --validate`.

use crate::models::{ArticlesData, DbData};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Counts and consistency checks over the loaded data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub members: usize,
    pub spokespeople: usize,
    pub platforms: usize,
    pub version: String,
    pub duplicate_member_ids: Vec<String>,
    pub articles: usize,
    pub articles_declared_total: u64,
    pub db_error: bool,
    pub articles_error: bool,
}

impl ValidationReport {
    pub fn from_snapshot(db: &DbData, articles: &ArticlesData) -> Self {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for member in &db.members {
            if !seen.insert(member.id.as_str()) && !duplicates.contains(&member.id) {
                duplicates.push(member.id.clone());
            }
        }

        Self {
            members: db.members.len(),
            spokespeople: db.spokespeople.len(),
            platforms: db.platforms.len(),
            version: db.metadata.version.clone(),
            duplicate_member_ids: duplicates,
            articles: articles.articles.len(),
            articles_declared_total: articles.metadata.total,
            db_error: db.metadata.is_error(),
            articles_error: articles.is_error(),
        }
    }

    /// No load errors and unique member ids.
    pub fn is_ok(&self) -> bool {
        !self.db_error && !self.articles_error && self.duplicate_member_ids.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "db.json:")?;
        writeln!(f, "  members: {}", self.members)?;
        writeln!(f, "  spokespeople: {}", self.spokespeople)?;
        writeln!(f, "  platforms: {}", self.platforms)?;
        let version = if self.version.is_empty() {
            "N/A"
        } else {
            self.version.as_str()
        };
        writeln!(f, "  version: {}", version)?;
        if self.duplicate_member_ids.is_empty() {
            writeln!(f, "  member ids: unique")?;
        } else {
            writeln!(
                f,
                "  member ids: duplicated {}",
                self.duplicate_member_ids.join(", ")
            )?;
        }
        writeln!(f, "artigos.json:")?;
        writeln!(f, "  articles: {}", self.articles)?;
        write!(f, "  declared total: {}", self.articles_declared_total)
    }
}
