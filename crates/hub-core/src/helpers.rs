//! Small string and date helpers shared by the loader and the feed mapper.

use crate::config::DataConfig;
use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

static NON_SLUG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9_\s-]").unwrap());
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Normalize an image path from the data files into a site-absolute path.
///
/// Empty paths become the default image; a leading `./public/` is stripped.
pub fn normalize_image_path(path: &str) -> String {
    let path = path.trim();
    if path.is_empty() {
        return DataConfig::DEFAULT_IMAGE.to_string();
    }

    let clean = match path.strip_prefix(DataConfig::PUBLIC_PREFIX) {
        Some(rest) => format!("/{}", rest),
        None => path.to_string(),
    };

    if clean.starts_with('/') {
        clean
    } else {
        format!("/{}", clean)
    }
}

/// Parse the date formats seen in data files and feeds.
///
/// Accepts RFC 3339, RFC 2822 and bare `YYYY-MM-DD` (taken as midnight UTC).
pub fn parse_published_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Format a date as `dd/mm/yyyy`. Unparsable input is returned unchanged.
pub fn format_date(value: &str) -> String {
    match parse_published_date(value) {
        Some(dt) => dt.format("%d/%m/%Y").to_string(),
        None => value.to_string(),
    }
}

/// Whether the string is an absolute URL.
pub fn is_valid_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}

/// Turn a title into a URL slug: `"Ação Política"` → `"acao-politica"`.
pub fn generate_slug(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    let cleaned = NON_SLUG.replace_all(&folded, "");
    WHITESPACE_RUN.replace_all(&cleaned, "-").into_owned()
}

/// First `max_chars` characters of `text`, never splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_image_path() {
        assert_eq!(normalize_image_path(""), "/icons/default.jpg");
        assert_eq!(
            normalize_image_path("./public/icons/zer0.jpg"),
            "/icons/zer0.jpg"
        );
        assert_eq!(normalize_image_path("icons/a.png"), "/icons/a.png");
        assert_eq!(normalize_image_path("/icons/b.png"), "/icons/b.png");
    }

    #[test]
    fn test_parse_published_date_formats() {
        let rfc3339 = parse_published_date("2024-03-10T12:00:00Z").unwrap();
        let rfc2822 = parse_published_date("Sun, 10 Mar 2024 12:00:00 +0000").unwrap();
        assert_eq!(rfc3339, rfc2822);

        let day = parse_published_date("2024-03-10").unwrap();
        assert_eq!(day.to_rfc3339(), "2024-03-10T00:00:00+00:00");

        assert!(parse_published_date("ontem").is_none());
        assert!(parse_published_date("").is_none());
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-10"), "10/03/2024");
        assert_eq!(format_date("sem data"), "sem data");
    }

    #[test]
    fn test_is_valid_url() {
        assert!(is_valid_url("https://zer0g0ld.substack.com/"));
        assert!(!is_valid_url("/icons/default.jpg"));
        assert!(!is_valid_url("#"));
    }

    #[test]
    fn test_generate_slug() {
        assert_eq!(generate_slug("Ação Política"), "acao-politica");
        assert_eq!(generate_slug("O Estado & a Liberdade!"), "o-estado-a-liberdade");
        assert_eq!(generate_slug("já-vi  isso"), "ja-vi-isso");
    }

    #[test]
    fn test_truncate_chars_respects_char_boundaries() {
        assert_eq!(truncate_chars("ação", 2), "aç");
        assert_eq!(truncate_chars("curto", 50), "curto");
        assert_eq!(truncate_chars("", 3), "");
    }
}
