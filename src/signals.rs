use crate::parsers::text::{DEFAULT_MAX_BODY_CHARS, collapse_whitespace, normalize_body};
use crate::utils::host_from_url;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single `<meta>` name/content pair as reported by the host page accessor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaTag {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub content: String,
}

impl MetaTag {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Page observations as handed over by the host application.
///
/// Every field may be missing; missing values are treated as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPage {
    pub title: Option<String>,
    pub headings: Option<Vec<String>>,
    pub meta_tags: Option<Vec<MetaTag>>,
    pub body_text: Option<String>,
    pub url: Option<String>,
    pub domain: Option<String>,
}

/// Normalized snapshot of a page's observable signals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSignals {
    pub title: String,
    /// h1/h2/h3 texts in document order
    pub headings: Vec<String>,
    /// Lowercased meta name (or http-equiv) to content; first occurrence wins
    pub meta_tags: BTreeMap<String, String>,
    pub body_text: String,
    pub url: String,
    pub domain: String,
}

impl PageSignals {
    /// Normalize a raw page record using the default body-length cap
    pub fn from_raw(raw: RawPage) -> Self {
        extract(raw, DEFAULT_MAX_BODY_CHARS)
    }

    /// Look up a meta tag's content by (case-insensitive) name
    pub fn meta(&self, name: &str) -> Option<&str> {
        self.meta_tags
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

impl From<RawPage> for PageSignals {
    fn from(raw: RawPage) -> Self {
        Self::from_raw(raw)
    }
}

/// Turns a raw page record into [`PageSignals`].
///
/// Never fails: absent fields become empty strings or empty collections.
/// When no domain is supplied it is derived from the URL's host.
pub fn extract(raw: RawPage, max_body_chars: usize) -> PageSignals {
    let title = raw
        .title
        .as_deref()
        .map(collapse_whitespace)
        .unwrap_or_default();

    let headings = raw
        .headings
        .unwrap_or_default()
        .iter()
        .map(|h| collapse_whitespace(h))
        .filter(|h| !h.is_empty())
        .collect();

    let mut meta_tags = BTreeMap::new();
    for tag in raw.meta_tags.unwrap_or_default() {
        let key = tag.name.trim().to_ascii_lowercase();
        if key.is_empty() {
            continue;
        }
        meta_tags
            .entry(key)
            .or_insert_with(|| tag.content.trim().to_string());
    }

    let body_text = raw
        .body_text
        .as_deref()
        .map(|b| normalize_body(b, max_body_chars))
        .unwrap_or_default();

    let url = raw.url.map(|u| u.trim().to_string()).unwrap_or_default();

    let domain = match raw.domain.as_deref().map(str::trim) {
        Some(d) if !d.is_empty() => d.to_ascii_lowercase(),
        _ => host_from_url(&url).unwrap_or_default(),
    };

    PageSignals {
        title,
        headings,
        meta_tags,
        body_text,
        url,
        domain,
    }
}
