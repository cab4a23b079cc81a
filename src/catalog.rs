//! Static indicator tables.
//!
//! Rules are grouped by evidentiary strength and tagged with the part of the page
//! they may match. Platform profiles calibrate detection for sites whose pages
//! carry heavy navigation chrome. Adding coverage means adding a row here, not a
//! new branch in the scoring code.

use crate::error::{DetectorError, DetectorResult};
use crate::utils::domain_matches;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bumped whenever a built-in table changes
pub const CATALOG_VERSION: u32 = 4;

/// Weight of every weak indicator; three distinct hits add nine points
pub const WEAK_WEIGHT: f64 = 3.0;

/// Where a piece of page text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Title,
    Heading,
    Body,
    Url,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Location::Title => "title",
            Location::Heading => "heading",
            Location::Body => "body",
            Location::Url => "url",
        };
        f.write_str(name)
    }
}

/// The part of a page a rule is allowed to match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorContext {
    /// Headline text: the document title and h1-h3 headings
    Title,
    /// Headings only
    Heading,
    Body,
    Url,
    /// Any text location (never the URL)
    Any,
}

impl IndicatorContext {
    pub fn applies_to(self, location: Location) -> bool {
        match self {
            IndicatorContext::Title => {
                matches!(location, Location::Title | Location::Heading)
            }
            IndicatorContext::Heading => location == Location::Heading,
            IndicatorContext::Body => location == Location::Body,
            IndicatorContext::Url => location == Location::Url,
            IndicatorContext::Any => location != Location::Url,
        }
    }
}

/// Evidence tier, used to label trail entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Strong,
    Medium,
    Weak,
    Url,
    Platform,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Strong => "strong",
            Tier::Medium => "medium",
            Tier::Weak => "weak",
            Tier::Url => "url",
            Tier::Platform => "platform",
        };
        f.write_str(name)
    }
}

/// A weighted text pattern restricted to one match context
#[derive(Debug, Clone)]
pub struct IndicatorRule {
    pub pattern: Regex,
    pub weight: f64,
    pub context: IndicatorContext,
}

impl IndicatorRule {
    /// Compile a rule, rejecting invalid patterns and negative or non-finite weights
    pub fn new(pattern: &str, weight: f64, context: IndicatorContext) -> DetectorResult<Self> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(DetectorError::InvalidWeight {
                pattern: pattern.to_string(),
                weight,
            });
        }
        let pattern = Regex::new(pattern).map_err(|source| DetectorError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            pattern,
            weight,
            context,
        })
    }

    pub fn is_match(&self, text: &str) -> bool {
        !text.is_empty() && self.pattern.is_match(text)
    }

    /// Pattern source without the case-insensitivity flag, for display
    pub fn source(&self) -> &str {
        let source = self.pattern.as_str();
        source.strip_prefix("(?i)").unwrap_or(source)
    }
}

/// Per-site override: its own rules and an optional lower decision threshold
#[derive(Debug, Clone)]
pub struct PlatformProfile {
    pub name: String,
    /// Matched against the page domain on label boundaries
    pub domain: String,
    pub rules: Vec<IndicatorRule>,
    pub threshold_override: Option<f64>,
}

impl PlatformProfile {
    pub fn matches_domain(&self, domain: &str) -> bool {
        domain_matches(domain, &self.domain)
    }
}

/// Built-in rows are fixed at compile time, so a bad pattern is a programming error
fn rule(pattern: &str, weight: f64, context: IndicatorContext) -> IndicatorRule {
    IndicatorRule::new(pattern, weight, context)
        .unwrap_or_else(|e| panic!("built-in indicator rule should compile: {}", e))
}

fn platform(
    name: &str,
    domain: &str,
    threshold_override: Option<f64>,
    rules: Vec<IndicatorRule>,
) -> PlatformProfile {
    PlatformProfile {
        name: name.to_string(),
        domain: domain.to_string(),
        rules,
        threshold_override,
    }
}

use IndicatorContext::{Any, Body, Title, Url};

static STRONG: Lazy<Vec<IndicatorRule>> = Lazy::new(|| {
    vec![
        rule(r"(?i)\b404\b", 40.0, Any),
        rule(r"(?i)\bpage\s+not\s+found\b", 45.0, Any),
        rule(r"(?i)\b(error\s+404|404\s+error)\b", 45.0, Title),
        rule(
            r"(?i)\b(page|file|resource|content)\s+(could\s+not|couldn['’]?t|cannot|can['’]?t)\s+be\s+found\b",
            40.0,
            Any,
        ),
        rule(
            r"(?i)\bthis\s+page\s+(does\s+not|doesn['’]?t)\s+exist\b",
            40.0,
            Any,
        ),
        rule(
            r"(?i)\bnothing\s+(was\s+)?found\s+(here|at\s+this\s+(location|address))\b",
            35.0,
            Any,
        ),
    ]
});

static MEDIUM: Lazy<Vec<IndicatorRule>> = Lazy::new(|| {
    vec![
        rule(r"(?i)\bnot\s+found\b", 25.0, Any),
        rule(
            r"(?i)\b(can['’]?t|cannot|couldn['’]?t|could\s+not)\s+find\s+(the|that|this)\s+page\b",
            25.0,
            Any,
        ),
        rule(
            r"(?i)\bthe\s+page\s+(you['’]?re|you\s+are|you\s+were)\s+looking\s+for\b",
            25.0,
            Any,
        ),
        rule(r"(?i)\bpage\s+you\s+requested\b", 20.0, Any),
        rule(
            r"(?i)\b(content|page)\s+(isn['’]?t|is\s+not)\s+available\b",
            30.0,
            Any,
        ),
        rule(r"(?i)\bno\s+longer\s+(available|exists)\b", 20.0, Any),
        rule(r"(?i)\b(oops|whoops|uh[\s-]?oh)\b", 15.0, Any),
        rule(
            r"(?i)\b(link|url)\s+(is\s+|was\s+)?(broken|invalid|incorrect)\b",
            20.0,
            Any,
        ),
        rule(
            r"(?i)\b(has\s+been|was)\s+(moved|removed|deleted)\b",
            20.0,
            Body,
        ),
    ]
});

static WEAK: Lazy<Vec<IndicatorRule>> = Lazy::new(|| {
    vec![
        rule(r"(?i)\bnot\s+found\b", WEAK_WEIGHT, Body),
        rule(r"(?i)\b(doesn['’]?t|does\s+not)\s+exist\b", WEAK_WEIGHT, Body),
        rule(r"(?i)\bbroken\s+link\b", WEAK_WEIGHT, Body),
        rule(r"(?i)\bmissing\b", WEAK_WEIGHT, Body),
        rule(r"(?i)\bunavailable\b", WEAK_WEIGHT, Body),
        rule(r"(?i)\b(go|return)\s+(back\s+)?to\s+(the\s+)?home\s*page\b", WEAK_WEIGHT, Body),
        rule(r"(?i)\b(try|use)\s+(the\s+|our\s+)?search\b", WEAK_WEIGHT, Body),
        rule(r"(?i)\b(mistyped|misspelled|typo)\b", WEAK_WEIGHT, Body),
    ]
});

/// Fixed weights; the sparsity multiplier does not apply to URLs
static URL_RULES: Lazy<Vec<IndicatorRule>> = Lazy::new(|| {
    vec![
        rule(r"(?i)/404(\.html?|\.php|\.aspx?)?/?(\?|#|$)", 30.0, Url),
        rule(r"(?i)/error/404\b", 35.0, Url),
        rule(r"(?i)/not[-_]found\b", 25.0, Url),
        rule(r"(?i)/page[-_]not[-_]found\b", 30.0, Url),
        rule(r"(?i)[?&](error|status)=404\b", 25.0, Url),
    ]
});

static PLATFORMS: Lazy<Vec<PlatformProfile>> = Lazy::new(|| {
    let twitter_rules = || {
        vec![
            rule(r"(?i)\bthis\s+page\s+doesn['’]?t\s+exist\b", 90.0, Any),
            rule(r"(?i)\bthis\s+account\s+doesn['’]?t\s+exist\b", 90.0, Any),
        ]
    };

    vec![
        platform(
            "github",
            "github.com",
            None,
            vec![
                rule(r"(?i)\bpage\s+not\s+found\s*[·|-]\s*github\b", 60.0, Title),
                rule(
                    r"(?i)\bthis\s+is\s+not\s+the\s+web\s+page\s+you\s+are\s+looking\s+for\b",
                    80.0,
                    Any,
                ),
            ],
        ),
        platform(
            "facebook",
            "facebook.com",
            Some(35.0),
            vec![
                rule(
                    r"(?i)\bthis\s+content\s+isn['’]?t\s+available(\s+(right\s+)?now)?\b",
                    160.0,
                    Any,
                ),
                rule(r"(?i)\bthis\s+page\s+isn['’]?t\s+available\b", 160.0, Any),
                rule(
                    r"(?i)\bthe\s+link\s+you\s+followed\s+may\s+be\s+broken\b",
                    120.0,
                    Any,
                ),
            ],
        ),
        platform(
            "instagram",
            "instagram.com",
            Some(35.0),
            vec![
                rule(
                    r"(?i)\bsorry,\s+this\s+page\s+isn['’]?t\s+available\b",
                    160.0,
                    Any,
                ),
                rule(
                    r"(?i)\bthe\s+link\s+you\s+followed\s+may\s+be\s+broken\b",
                    120.0,
                    Any,
                ),
            ],
        ),
        platform("twitter", "twitter.com", None, twitter_rules()),
        platform("x", "x.com", None, twitter_rules()),
        platform(
            "reddit",
            "reddit.com",
            None,
            vec![
                rule(
                    r"(?i)\bsorry,\s+nobody\s+on\s+reddit\s+goes\s+by\s+that\s+name\b",
                    90.0,
                    Any,
                ),
                rule(
                    r"(?i)\bthere\s+doesn['’]?t\s+seem\s+to\s+be\s+anything\s+here\b",
                    80.0,
                    Any,
                ),
            ],
        ),
        platform(
            "youtube",
            "youtube.com",
            None,
            vec![
                rule(
                    r"(?i)\bthis\s+video\s+isn['’]?t\s+available(\s+any\s?more)?\b",
                    80.0,
                    Any,
                ),
                rule(r"(?i)\bthis\s+page\s+isn['’]?t\s+available\b", 80.0, Any),
            ],
        ),
        platform(
            "linkedin",
            "linkedin.com",
            None,
            vec![
                rule(r"(?i)\bthis\s+page\s+doesn['’]?t\s+exist\b", 80.0, Any),
                rule(r"(?i)\bpage\s+not\s+found\b", 50.0, Title),
            ],
        ),
    ]
});

pub fn strong() -> &'static [IndicatorRule] {
    &STRONG
}

pub fn medium() -> &'static [IndicatorRule] {
    &MEDIUM
}

pub fn weak() -> &'static [IndicatorRule] {
    &WEAK
}

pub fn url_rules() -> &'static [IndicatorRule] {
    &URL_RULES
}

pub fn platforms() -> &'static [PlatformProfile] {
    &PLATFORMS
}

/// Find the first profile matching `domain`, checking `extra` before the built-in table
pub fn find_platform<'a>(
    domain: &str,
    extra: &'a [PlatformProfile],
) -> Option<&'a PlatformProfile> {
    if domain.is_empty() {
        return None;
    }
    extra
        .iter()
        .chain(platforms().iter())
        .find(|p| p.matches_domain(domain))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_compile() {
        assert!(!strong().is_empty());
        assert!(!medium().is_empty());
        assert!(!weak().is_empty());
        assert!(!url_rules().is_empty());
        assert!(!platforms().is_empty());
        assert!(weak().iter().all(|r| r.weight == WEAK_WEIGHT));
        assert!(url_rules().iter().all(|r| r.context == IndicatorContext::Url));
    }

    #[test]
    fn test_context_applies_to() {
        assert!(IndicatorContext::Title.applies_to(Location::Title));
        assert!(IndicatorContext::Title.applies_to(Location::Heading));
        assert!(!IndicatorContext::Title.applies_to(Location::Body));
        assert!(!IndicatorContext::Heading.applies_to(Location::Title));
        assert!(IndicatorContext::Any.applies_to(Location::Body));
        assert!(!IndicatorContext::Any.applies_to(Location::Url));
        assert!(IndicatorContext::Url.applies_to(Location::Url));
    }

    #[test]
    fn test_strong_rules_match_common_phrasings() {
        let hits = |text: &str| strong().iter().filter(|r| r.is_match(text)).count();
        assert!(hits("404 - Page Not Found") >= 2);
        assert!(hits("The file couldn’t be found") >= 1);
        assert!(hits("This page doesn't exist") >= 1);
        assert_eq!(hits("Quarterly Report"), 0);
        assert_eq!(hits("Call 1-800-4040 today"), 0);
    }

    #[test]
    fn test_url_rules() {
        let hits = |url: &str| url_rules().iter().filter(|r| r.is_match(url)).count();
        assert_eq!(hits("https://site.example/404"), 1);
        assert_eq!(hits("https://site.example/archive/2019/404.html"), 1);
        assert!(hits("https://site.example/error/404") >= 1);
        assert!(hits("https://site.example/page-not-found") >= 1);
        assert_eq!(hits("https://site.example/posts/4040-tips"), 0);
        assert_eq!(hits("https://site.example/about"), 0);
    }

    #[test]
    fn test_find_platform() {
        assert_eq!(
            find_platform("www.facebook.com", &[]).map(|p| p.name.as_str()),
            Some("facebook")
        );
        assert_eq!(
            find_platform("x.com", &[]).map(|p| p.name.as_str()),
            Some("x")
        );
        assert!(find_platform("inbox.com", &[]).is_none());
        assert!(find_platform("", &[]).is_none());
    }

    #[test]
    fn test_extra_platforms_take_precedence() {
        let custom = vec![PlatformProfile {
            name: "custom-github".to_string(),
            domain: "github.com".to_string(),
            rules: vec![],
            threshold_override: Some(30.0),
        }];
        let found = find_platform("github.com", &custom).unwrap();
        assert_eq!(found.name, "custom-github");
    }

    #[test]
    fn test_invalid_rule_is_rejected() {
        assert!(matches!(
            IndicatorRule::new("(unclosed", 1.0, IndicatorContext::Any),
            Err(DetectorError::InvalidPattern { .. })
        ));
        assert!(matches!(
            IndicatorRule::new("ok", f64::INFINITY, IndicatorContext::Any),
            Err(DetectorError::InvalidWeight { .. })
        ));
        assert!(matches!(
            IndicatorRule::new("ok", -10.0, IndicatorContext::Any),
            Err(DetectorError::InvalidWeight { .. })
        ));
        assert!(IndicatorRule::new("ok", 0.0, IndicatorContext::Any).is_ok());
    }

    #[test]
    fn test_rule_source_strips_flag() {
        let r = IndicatorRule::new(r"(?i)gone", 1.0, IndicatorContext::Body).unwrap();
        assert_eq!(r.source(), "gone");
    }
}
