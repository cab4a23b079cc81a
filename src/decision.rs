//! Turns accumulated evidence into a final soft-404 verdict.

use crate::results::ClassificationOutcome;
use crate::scoring::ScoringResult;
use crate::sparsity::SparsityProfile;

/// Above this, the page is a soft 404 whatever else is true
const OVERWHELMING_CONFIDENCE: f64 = 80.0;
/// Bar when the text literally says "404"
const EXPLICIT_404_CONFIDENCE: f64 = 40.0;
/// Bar for platform hits; a profile override can only lower it
const PLATFORM_CONFIDENCE: f64 = 45.0;
/// Pages below this word count only need to meet the threshold
const SPARSE_WORD_COUNT: usize = 100;
/// Trail length at which the threshold relaxes
const MANY_INDICATORS: usize = 3;
const MANY_INDICATORS_RELIEF: f64 = 5.0;

/// Word-count brackets, low to high: (exclusive upper bound, threshold, strong indicators required)
const THRESHOLDS: [(usize, f64, usize); 4] = [
    (20, 45.0, 0),
    (50, 50.0, 0),
    (100, 55.0, 1),
    (200, 58.0, 1),
];
const DEFAULT_THRESHOLD: (f64, usize) = (60.0, 1);

/// Which rule settled the decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionRule {
    Overwhelming,
    Explicit404,
    Platform,
    SparseThreshold,
    ManyIndicators,
    Threshold,
    Rejected,
}

/// Confidence threshold and required strong-indicator count for a word count
pub fn dynamic_threshold(word_count: usize) -> (f64, usize) {
    THRESHOLDS
        .iter()
        .find(|(limit, _, _)| word_count < *limit)
        .map(|&(_, threshold, required)| (threshold, required))
        .unwrap_or(DEFAULT_THRESHOLD)
}

/// Platform bar for a result whose platform rules fired
fn platform_threshold(result: &ScoringResult) -> f64 {
    result
        .platform_threshold
        .map_or(PLATFORM_CONFIDENCE, |t| t.min(PLATFORM_CONFIDENCE))
}

/// Select the first rule that classifies the page as a soft 404, if any
pub fn evaluate(
    result: &ScoringResult,
    sparsity: &SparsityProfile,
    explicit_404_in_text: bool,
) -> DecisionRule {
    let confidence = result.confidence;
    let (threshold, required) = dynamic_threshold(sparsity.word_count);

    if confidence >= OVERWHELMING_CONFIDENCE {
        DecisionRule::Overwhelming
    } else if explicit_404_in_text && confidence >= EXPLICIT_404_CONFIDENCE {
        DecisionRule::Explicit404
    } else if result.platform_matched && confidence >= platform_threshold(result) {
        DecisionRule::Platform
    } else if sparsity.word_count < SPARSE_WORD_COUNT && confidence >= threshold {
        DecisionRule::SparseThreshold
    } else if result.indicator_trail.len() >= MANY_INDICATORS
        && confidence >= threshold - MANY_INDICATORS_RELIEF
    {
        DecisionRule::ManyIndicators
    } else if confidence >= threshold && result.strong_indicator_count >= required {
        DecisionRule::Threshold
    } else {
        DecisionRule::Rejected
    }
}

/// Produce the externally visible outcome. Never fails.
pub fn decide(
    result: ScoringResult,
    sparsity: &SparsityProfile,
    explicit_404_in_text: bool,
) -> ClassificationOutcome {
    let rule = evaluate(&result, sparsity, explicit_404_in_text);
    ::log::debug!(
        "Decision {:?} at confidence {:.1} ({} words)",
        rule,
        result.confidence,
        sparsity.word_count
    );

    ClassificationOutcome {
        is_404: rule != DecisionRule::Rejected,
        confidence: result.confidence,
        indicators: result.indicator_trail,
    }
}
