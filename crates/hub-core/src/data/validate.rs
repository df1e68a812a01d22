//! One-time normalization and validation of loaded records.

use crate::error::{HubError, Result};
use crate::helpers::normalize_image_path;
use crate::models::{Article, Member, Platform, Spokesperson};

/// A record from a data file that is normalized and checked once at load time.
pub trait Record {
    /// Collection name used in log messages.
    const KIND: &'static str;

    /// Identifier used in log messages.
    fn record_id(&self) -> String;

    /// Apply defaults that depend on other fields (image paths and the like).
    fn normalize(&mut self) {}

    /// Reject records the site cannot render.
    fn validate(&self) -> Result<()>;
}

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HubError::validation(field, "must not be empty"));
    }
    Ok(())
}

impl Record for Member {
    const KIND: &'static str = "member";

    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn normalize(&mut self) {
        self.img = normalize_image_path(&self.img);
    }

    fn validate(&self) -> Result<()> {
        require_non_empty("id", &self.id)?;
        require_non_empty("name", &self.name)?;
        require_non_empty("bio", &self.bio)?;
        if !self.img.starts_with('/') {
            return Err(HubError::validation("img", "must be a site-absolute path"));
        }
        Ok(())
    }
}

impl Record for Spokesperson {
    const KIND: &'static str = "spokesperson";

    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn normalize(&mut self) {
        self.img = normalize_image_path(&self.img);
    }

    fn validate(&self) -> Result<()> {
        require_non_empty("id", &self.id)?;
        require_non_empty("name", &self.name)
    }
}

impl Record for Platform {
    const KIND: &'static str = "platform";

    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn normalize(&mut self) {
        self.img = normalize_image_path(&self.img);
    }

    fn validate(&self) -> Result<()> {
        require_non_empty("id", &self.id)?;
        require_non_empty("name", &self.name)
    }
}

impl Record for Article {
    const KIND: &'static str = "article";

    fn record_id(&self) -> String {
        self.id.to_string()
    }

    fn normalize(&mut self) {
        self.image = normalize_image_path(&self.image);
    }

    fn validate(&self) -> Result<()> {
        require_non_empty("title", &self.title)
    }
}
