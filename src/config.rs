use crate::catalog::{IndicatorContext, IndicatorRule, PlatformProfile};
use crate::error::DetectorResult;
use crate::parsers::text::DEFAULT_MAX_BODY_CHARS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for the detector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Body text beyond this many characters is ignored
    #[serde(default = "default_max_body_chars")]
    pub max_body_chars: usize,

    /// Extra platform profiles, consulted before the built-in ones
    #[serde(default)]
    pub platforms: Vec<PlatformProfileConfig>,
}

/// A platform profile row as written in configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformProfileConfig {
    /// Name used in logs
    pub name: String,

    /// Domain matched against the page host (subdomains included)
    pub domain: String,

    /// Platform bar used when one of this profile's rules fires; capped at the default 45
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold_override: Option<f64>,

    /// Weighted patterns for this platform
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

/// A single indicator rule as written in configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Regular expression; prefix with `(?i)` for case-insensitive matching
    pub pattern: String,

    pub weight: f64,

    #[serde(default = "default_context")]
    pub context: IndicatorContext,
}

/// Default value for max_body_chars
fn default_max_body_chars() -> usize {
    DEFAULT_MAX_BODY_CHARS
}

/// Default rule context
fn default_context() -> IndicatorContext {
    IndicatorContext::Any
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            max_body_chars: default_max_body_chars(),
            platforms: Vec::new(),
        }
    }
}

impl DetectorConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> DetectorResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> DetectorResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Compile the configured platform rows
    pub fn compile_platforms(&self) -> DetectorResult<Vec<PlatformProfile>> {
        self.platforms.iter().map(PlatformProfileConfig::compile).collect()
    }
}

impl PlatformProfileConfig {
    pub fn compile(&self) -> DetectorResult<PlatformProfile> {
        let rules = self
            .rules
            .iter()
            .map(|r| IndicatorRule::new(&r.pattern, r.weight, r.context))
            .collect::<DetectorResult<Vec<_>>>()?;

        Ok(PlatformProfile {
            name: self.name.clone(),
            domain: self.domain.trim().to_ascii_lowercase(),
            rules,
            threshold_override: self.threshold_override,
        })
    }
}
