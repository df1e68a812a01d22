//! Loading of `db.json` and `artigos.json` into validated snapshots.
//!
//! The strict loaders (`load_*`) report why a file could not be used. The
//! `get_*` variants never fail: they log the error and return an empty
//! snapshot flagged as an error state.

use super::validate::Record;
use crate::error::{HubError, Result};
use crate::models::{ArticlesData, ArticlesMetadata, Categories, DbData, DbMetadata};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{error, info, warn};

/// Read a JSON file whose top level must be an object.
fn read_json_object(path: &Path) -> Result<Map<String, Value>> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| HubError::io_with_path(e, path))?;

    let value: Value = serde_json::from_str(&contents).map_err(|e| HubError::Json {
        message: format!("Failed to parse {}: {}", path.display(), e),
        source: Some(e),
    })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(HubError::validation(
            path.display().to_string(),
            format!("expected a JSON object, found {}", json_type_name(&other)),
        )),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Deserialize, normalize and validate every record of a collection.
///
/// A missing key is an empty collection; a key that is not an array is an
/// error. Individual bad records are dropped with a warning.
pub(crate) fn load_records<T>(root: &Map<String, Value>, key: &str) -> Result<Vec<T>>
where
    T: Record + DeserializeOwned,
{
    let items = match root.get(key) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(HubError::validation(
                key,
                format!("must be an array, found {}", json_type_name(other)),
            ))
        }
    };

    let mut valid = Vec::with_capacity(items.len());
    let mut rejected = Vec::new();

    for (index, item) in items.iter().enumerate() {
        let label = item
            .get("id")
            .map(|id| id.to_string().trim_matches('"').to_string())
            .unwrap_or_else(|| format!("#{}", index));

        let mut record: T = match serde_json::from_value(item.clone()) {
            Ok(record) => record,
            Err(e) => {
                warn!("Invalid {} {}: {}", T::KIND, label, e);
                rejected.push(label);
                continue;
            }
        };

        record.normalize();
        match record.validate() {
            Ok(()) => valid.push(record),
            Err(e) => {
                warn!("Invalid {} {}: {}", T::KIND, record.record_id(), e);
                rejected.push(label);
            }
        }
    }

    if !rejected.is_empty() {
        warn!(
            "Rejected {} invalid {} record(s) in '{}': {:?}",
            rejected.len(),
            T::KIND,
            key,
            rejected
        );
    }

    Ok(valid)
}

/// Deserialize an object section, falling back to its default when malformed.
fn load_section<T: DeserializeOwned + Default>(root: &Map<String, Value>, key: &str) -> T {
    match root.get(key) {
        None | Some(Value::Null) => T::default(),
        Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|e| {
            warn!("Ignoring malformed '{}' section: {}", key, e);
            T::default()
        }),
    }
}

/// Load and validate `db.json`.
pub fn load_db(path: &Path) -> Result<DbData> {
    let root = read_json_object(path)?;

    let data = DbData {
        metadata: load_section::<DbMetadata>(&root, "metadata"),
        members: load_records(&root, "members")?,
        spokespeople: load_records(&root, "portavoze")?,
        platforms: load_records(&root, "plataformas")?,
        categories: load_section::<Categories>(&root, "categorias"),
    };

    info!(
        "Loaded {}: {} members, {} spokespeople, {} platforms (version {})",
        path.display(),
        data.members.len(),
        data.spokespeople.len(),
        data.platforms.len(),
        if data.metadata.version.is_empty() {
            "n/a"
        } else {
            data.metadata.version.as_str()
        }
    );

    Ok(data)
}

/// Load `db.json`, degrading to an empty error-state snapshot on failure.
pub fn get_db_data(path: &Path) -> DbData {
    match load_db(path) {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to load {}: {}", path.display(), e);
            DbData::fallback(e.to_string())
        }
    }
}

/// Load and validate `artigos.json`.
pub fn load_articles(path: &Path) -> Result<ArticlesData> {
    let root = read_json_object(path)?;

    let data = ArticlesData {
        articles: load_records(&root, "artigos")?,
        metadata: load_section::<ArticlesMetadata>(&root, "metadata"),
    };

    info!(
        "Loaded {}: {} articles",
        path.display(),
        data.articles.len()
    );

    Ok(data)
}

/// Load `artigos.json`, degrading to an empty error-state snapshot on failure.
pub fn get_articles_data(path: &Path) -> ArticlesData {
    match load_articles(path) {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to load {}: {}", path.display(), e);
            ArticlesData::fallback(e.to_string())
        }
    }
}
