//! Applies the indicator catalog to page signals and accumulates a weighted
//! confidence score.
//!
//! The score is a plain sum, so pass order only affects how the indicator trail
//! reads. Strong and medium rules with `Any` context are evaluated against the
//! title and headings and again against the body, so one phrase can contribute
//! from several locations.

use crate::catalog::{self, IndicatorRule, Location, PlatformProfile, Tier};
use crate::signals::PageSignals;
use crate::sparsity::SparsityProfile;
use serde::Serialize;

/// Heading matches count for less than title matches
const HEADING_FACTOR: f64 = 0.8;
/// Platform rules matching in the body count half
const PLATFORM_BODY_FACTOR: f64 = 0.5;

const META_STATUS_KEYS: [&str; 2] = ["prerender-status-code", "status"];
const META_STATUS_POINTS: f64 = 50.0;

/// Weak indicators only count once this many distinct ones match
const MIN_WEAK_INDICATORS: usize = 3;

/// Accumulated evidence for one page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringResult {
    pub confidence: f64,
    pub strong_indicator_count: usize,
    pub weak_indicator_count: usize,
    pub indicator_trail: Vec<String>,
    /// Set only when a platform rule actually fired
    pub platform_matched: bool,
    /// Threshold override of the platform that fired, if it has one
    pub platform_threshold: Option<f64>,
}

/// Fraction of strong/medium weight applied to body matches
fn body_weight_fraction(word_count: usize) -> f64 {
    if word_count < 100 {
        0.6
    } else if word_count < 200 {
        0.4
    } else {
        0.3
    }
}

/// Running totals while the passes execute
#[derive(Default)]
struct Tally {
    points: f64,
    strong: usize,
    weak: usize,
    trail: Vec<String>,
}

impl Tally {
    fn add(&mut self, tier: Tier, what: &str, location: Location, points: f64) {
        self.points += points;
        self.trail
            .push(format!("{} \"{}\" in {} ({:+.1})", tier, what, location, points));
    }
}

/// Score signals against the built-in catalog only
pub fn score(signals: &PageSignals, sparsity: &SparsityProfile) -> ScoringResult {
    score_with_platforms(signals, sparsity, &[])
}

/// Score signals, consulting `extra_platforms` before the built-in platform table
pub fn score_with_platforms(
    signals: &PageSignals,
    sparsity: &SparsityProfile,
    extra_platforms: &[PlatformProfile],
) -> ScoringResult {
    let mut tally = Tally::default();
    let multiplier = sparsity.multiplier;

    let platform = catalog::find_platform(&signals.domain, extra_platforms);
    let platform_matched = match platform {
        Some(profile) => score_platform(&mut tally, profile, signals, multiplier),
        None => false,
    };

    score_headlines(&mut tally, signals, multiplier);
    score_meta(&mut tally, signals);
    score_url(&mut tally, &signals.url);
    score_weak(&mut tally, &signals.body_text);
    score_body(&mut tally, &signals.body_text, sparsity);

    let confidence = tally.points + sparsity.sparsity_score;

    ::log::debug!(
        "Scored {}: confidence {:.1} ({} strong, {} weak, {} trail entries)",
        if signals.url.is_empty() {
            "<no url>"
        } else {
            signals.url.as_str()
        },
        confidence,
        tally.strong,
        tally.weak,
        tally.trail.len()
    );

    ScoringResult {
        confidence,
        strong_indicator_count: tally.strong,
        weak_indicator_count: tally.weak,
        indicator_trail: tally.trail,
        platform_matched,
        platform_threshold: if platform_matched {
            platform.and_then(|p| p.threshold_override)
        } else {
            None
        },
    }
}

/// Returns whether any of the profile's rules fired
fn score_platform(
    tally: &mut Tally,
    profile: &PlatformProfile,
    signals: &PageSignals,
    multiplier: f64,
) -> bool {
    let mut fired = false;

    for rule in &profile.rules {
        if rule.context.applies_to(Location::Title) && rule.is_match(&signals.title) {
            tally.add(
                Tier::Platform,
                rule.source(),
                Location::Title,
                rule.weight * multiplier,
            );
            tally.strong += 1;
            fired = true;
        }
        if rule.context.applies_to(Location::Body) && rule.is_match(&signals.body_text) {
            tally.add(
                Tier::Platform,
                rule.source(),
                Location::Body,
                rule.weight * PLATFORM_BODY_FACTOR * multiplier,
            );
            fired = true;
        }
    }

    if fired {
        ::log::debug!("Platform profile '{}' matched", profile.name);
    }
    fired
}

fn tiered_rules() -> impl Iterator<Item = (Tier, &'static IndicatorRule)> {
    catalog::strong()
        .iter()
        .map(|r| (Tier::Strong, r))
        .chain(catalog::medium().iter().map(|r| (Tier::Medium, r)))
}

fn score_headlines(tally: &mut Tally, signals: &PageSignals, multiplier: f64) {
    for (tier, rule) in tiered_rules() {
        if rule.context.applies_to(Location::Title) && rule.is_match(&signals.title) {
            tally.add(tier, rule.source(), Location::Title, rule.weight * multiplier);
            if tier == Tier::Strong {
                tally.strong += 1;
            }
        }
    }

    for heading in &signals.headings {
        for (tier, rule) in tiered_rules() {
            if rule.context.applies_to(Location::Heading) && rule.is_match(heading) {
                tally.add(
                    tier,
                    rule.source(),
                    Location::Heading,
                    rule.weight * HEADING_FACTOR * multiplier,
                );
                if tier == Tier::Strong {
                    tally.strong += 1;
                }
            }
        }
    }
}

fn score_meta(tally: &mut Tally, signals: &PageSignals) {
    let hit = META_STATUS_KEYS
        .iter()
        .find(|key| signals.meta(key).is_some_and(|v| v == "404"));

    if let Some(key) = hit {
        tally.points += META_STATUS_POINTS;
        tally.strong += 1;
        tally
            .trail
            .push(format!("meta {}=404 ({:+.1})", key, META_STATUS_POINTS));
    }
}

fn score_url(tally: &mut Tally, url: &str) {
    for rule in catalog::url_rules() {
        if rule.is_match(url) {
            tally.add(Tier::Url, rule.source(), Location::Url, rule.weight);
        }
    }
}

fn score_weak(tally: &mut Tally, body: &str) {
    let hits: Vec<&IndicatorRule> = catalog::weak()
        .iter()
        .filter(|r| r.context.applies_to(Location::Body) && r.is_match(body))
        .collect();
    tally.weak = hits.len();

    if hits.len() < MIN_WEAK_INDICATORS {
        return;
    }
    for rule in hits {
        tally.add(Tier::Weak, rule.source(), Location::Body, rule.weight);
    }
}

fn score_body(tally: &mut Tally, body: &str, sparsity: &SparsityProfile) {
    let factor = body_weight_fraction(sparsity.word_count) * sparsity.multiplier;

    for (tier, rule) in tiered_rules() {
        if rule.context.applies_to(Location::Body) && rule.is_match(body) {
            tally.add(tier, rule.source(), Location::Body, rule.weight * factor);
        }
    }
}
