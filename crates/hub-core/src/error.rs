//! Error types for the Hub content service.
//!
//! Library code returns [`HubError`]; the HTTP layer decides how much of it a
//! client gets to see.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the Hub library.
#[derive(Debug, Error)]
pub enum HubError {
    // Network errors
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("Request timeout after {0:?}")]
    Timeout(std::time::Duration),

    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    // Feed errors
    #[error("Failed to parse feed {source_id}: {message}")]
    FeedParse { source_id: String, message: String },

    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // Content errors
    #[error("Validation error for {field}: {message}")]
    Validation { field: String, message: String },

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Content data unavailable: {0}")]
    DataUnavailable(String),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

/// Result type alias for Hub operations.
pub type Result<T> = std::result::Result<T, HubError>;

impl From<std::io::Error> for HubError {
    fn from(err: std::io::Error) -> Self {
        HubError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for HubError {
    fn from(err: serde_json::Error) -> Self {
        HubError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<reqwest::Error> for HubError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            HubError::HttpStatus {
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
                status: status.as_u16(),
            }
        } else {
            HubError::Network {
                message: err.to_string(),
                source: Some(err),
            }
        }
    }
}

impl HubError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if err.kind() == std::io::ErrorKind::NotFound {
            return HubError::FileNotFound(path);
        }
        HubError::Io {
            message: err.to_string(),
            path: Some(path),
            source: Some(err),
        }
    }

    /// Create a validation error for a record field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        HubError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// HTTP status code an API boundary should answer with.
    ///
    /// - 404: missing content
    /// - 400: invalid input
    /// - 502/504: upstream feed trouble
    /// - 503: content data could not be produced
    /// - 500: everything else
    pub fn http_status(&self) -> u16 {
        match self {
            HubError::NotFound { .. } => 404,

            HubError::Validation { .. } => 400,

            HubError::Network { .. }
            | HubError::HttpStatus { .. }
            | HubError::FeedParse { .. } => 502,

            HubError::Timeout(_) => 504,

            HubError::DataUnavailable(_) => 503,

            _ => 500,
        }
    }

    /// Whether the failure came from a remote feed rather than local data.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            HubError::Network { .. }
                | HubError::Timeout(_)
                | HubError::HttpStatus { .. }
                | HubError::FeedParse { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HubError::NotFound {
            kind: "Article",
            id: "42".into(),
        };
        assert_eq!(err.to_string(), "Article not found: 42");

        let err = HubError::validation("bio", "must not be empty");
        assert_eq!(err.to_string(), "Validation error for bio: must not be empty");
    }

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(
            HubError::NotFound {
                kind: "Member",
                id: "x".into()
            }
            .http_status(),
            404
        );
        assert_eq!(
            HubError::DataUnavailable("db.json".into()).http_status(),
            503
        );
        assert_eq!(
            HubError::Timeout(std::time::Duration::from_secs(1)).http_status(),
            504
        );
        assert_eq!(HubError::Other("boom".into()).http_status(), 500);
    }

    #[test]
    fn test_io_not_found_becomes_file_not_found() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = HubError::io_with_path(err, "/tmp/db.json");
        assert!(matches!(err, HubError::FileNotFound(_)));
    }

    #[test]
    fn test_upstream_errors() {
        assert!(HubError::HttpStatus {
            url: "https://example.com/feed".into(),
            status: 500
        }
        .is_upstream());
        assert!(!HubError::Other("local".into()).is_upstream());
    }
}
