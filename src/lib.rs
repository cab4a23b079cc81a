//! Soft-404 detection: decides from a rendered page's text and structure whether
//! an HTTP 200 response is really a "not found" page.
//!
//! The pipeline runs signal extraction, sparsity analysis, catalog scoring and the
//! decision policy, in that order. Every step is a pure function of its input.

pub mod catalog;
pub mod config;
pub mod decision;
pub mod error;
pub mod parsers;
pub mod results;
pub mod scoring;
pub mod signals;
pub mod sparsity;
pub mod utils;

#[cfg(test)]
mod tests;

// Re-export commonly used types for convenience
pub use config::DetectorConfig;
pub use error::{DetectorError, DetectorResult};
pub use results::ClassificationOutcome;
pub use signals::{MetaTag, PageSignals, RawPage};

use catalog::PlatformProfile;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static EXPLICIT_404: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b404\b").expect("explicit 404 pattern should be valid"));

/// Whether a standalone "404" token appears in the title, a heading, or the body
pub fn has_explicit_404(signals: &PageSignals) -> bool {
    EXPLICIT_404.is_match(&signals.title)
        || signals.headings.iter().any(|h| EXPLICIT_404.is_match(h))
        || EXPLICIT_404.is_match(&signals.body_text)
}

/// Classify normalized signals with the built-in catalog
pub fn classify(signals: &PageSignals) -> ClassificationOutcome {
    classify_with_platforms(signals, &[])
}

fn classify_with_platforms(
    signals: &PageSignals,
    extra_platforms: &[PlatformProfile],
) -> ClassificationOutcome {
    let sparsity = sparsity::analyze(&signals.body_text);
    let result = scoring::score_with_platforms(signals, &sparsity, extra_platforms);
    decision::decide(result, &sparsity, has_explicit_404(signals))
}

/// Main builder for soft-404 classification
#[derive(Debug, Clone)]
pub struct Detector {
    max_body_chars: usize,
    platforms: Vec<PlatformProfile>,
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector {
    /// Create a detector using only the built-in catalog
    pub fn new() -> Self {
        Self {
            max_body_chars: parsers::text::DEFAULT_MAX_BODY_CHARS,
            platforms: Vec::new(),
        }
    }

    /// Set the maximum number of body-text characters analyzed
    pub fn with_max_body_chars(mut self, max_body_chars: usize) -> Self {
        self.max_body_chars = max_body_chars;
        self
    }

    /// Apply a configuration, compiling its platform profiles
    pub fn with_config(mut self, config: DetectorConfig) -> DetectorResult<Self> {
        let platforms = config.compile_platforms()?;
        ::log::info!(
            "Loaded {} custom platform profile(s) on top of catalog v{}",
            platforms.len(),
            catalog::CATALOG_VERSION
        );
        self.max_body_chars = config.max_body_chars;
        self.platforms = platforms;
        Ok(self)
    }

    /// Load configuration from a file
    pub fn with_config_file(self, path: impl AsRef<Path>) -> DetectorResult<Self> {
        let config = DetectorConfig::from_file(path)?;
        self.with_config(config)
    }

    /// Load configuration from a string
    pub fn with_config_str(self, config_str: &str) -> DetectorResult<Self> {
        let config = DetectorConfig::from_json(config_str)?;
        self.with_config(config)
    }

    /// Normalize a raw page record with this detector's body cap
    pub fn extract(&self, raw: RawPage) -> PageSignals {
        signals::extract(raw, self.max_body_chars)
    }

    /// Classify normalized signals. Never fails.
    pub fn classify(&self, signals: &PageSignals) -> ClassificationOutcome {
        classify_with_platforms(signals, &self.platforms)
    }

    /// Extract and classify a raw page record
    pub fn classify_raw(&self, raw: RawPage) -> ClassificationOutcome {
        self.classify(&self.extract(raw))
    }

    /// Extract and classify a rendered HTML document
    pub fn classify_html(&self, html: &str, url: &str) -> ClassificationOutcome {
        self.classify_raw(parsers::html::extract(html, url))
    }
}
