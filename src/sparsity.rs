//! Word, sentence and vocabulary statistics for body text, and the sparsity
//! score and weight multiplier derived from them.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;

static SENTENCE_TERMINATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("sentence terminator pattern should be valid"));

/// Tokens must be longer than this many characters to count as words
const MIN_WORD_CHARS: usize = 2;

/// Word-count brackets, evaluated low to high: (exclusive upper bound, score, multiplier)
const SPARSE_BRACKETS: [(usize, f64, f64); 4] = [
    (20, 35.0, 2.0),
    (50, 25.0, 1.5),
    (100, 15.0, 1.2),
    (200, 5.0, 1.0),
];

/// Pages longer than this are treated as substantial content
const DENSE_WORD_COUNT: usize = 500;
const DENSE_SCORE: f64 = -20.0;
const DENSE_MULTIPLIER: f64 = 0.7;

const LOW_DIVERSITY_MIN_WORDS: usize = 10;
const LOW_DIVERSITY_RATIO: f64 = 0.5;
const LOW_DIVERSITY_SCORE: f64 = 10.0;

const SHORT_SENTENCE_WORDS: f64 = 8.0;
const SHORT_SENTENCE_SCORE: f64 = 10.0;

/// Statistics and sparsity adjustment for one page's body text
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SparsityProfile {
    pub word_count: usize,
    /// Distinct lowercased words over word count, in [0, 1]
    pub unique_word_ratio: f64,
    pub sentence_count: usize,
    /// Additive contribution to confidence
    pub sparsity_score: f64,
    /// Factor applied to pattern weights
    pub multiplier: f64,
    /// Descriptions of the adjustments that fired
    pub notes: Vec<&'static str>,
}

/// Analyze body text. Pure and deterministic.
pub fn analyze(body_text: &str) -> SparsityProfile {
    let words: Vec<&str> = body_text
        .split_whitespace()
        .filter(|t| t.chars().count() > MIN_WORD_CHARS)
        .collect();
    let word_count = words.len();

    let distinct: HashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
    let unique_word_ratio = distinct.len() as f64 / word_count.max(1) as f64;

    let sentence_count = SENTENCE_TERMINATOR.find_iter(body_text).count();

    let mut notes = Vec::new();
    let (mut sparsity_score, multiplier) = bracket(word_count, &mut notes);

    if word_count > LOW_DIVERSITY_MIN_WORDS && unique_word_ratio < LOW_DIVERSITY_RATIO {
        sparsity_score += LOW_DIVERSITY_SCORE;
        notes.push("low vocabulary diversity");
    }

    if sentence_count > 0 && (word_count as f64 / sentence_count as f64) < SHORT_SENTENCE_WORDS {
        sparsity_score += SHORT_SENTENCE_SCORE;
        notes.push("very short sentences");
    }

    ::log::debug!(
        "Sparsity: {} words, {} sentences, ratio {:.2}, score {:+.1}, x{:.1} {:?}",
        word_count,
        sentence_count,
        unique_word_ratio,
        sparsity_score,
        multiplier,
        notes
    );

    SparsityProfile {
        word_count,
        unique_word_ratio,
        sentence_count,
        sparsity_score,
        multiplier,
        notes,
    }
}

fn bracket(word_count: usize, notes: &mut Vec<&'static str>) -> (f64, f64) {
    if let Some(&(_, score, multiplier)) = SPARSE_BRACKETS
        .iter()
        .find(|(limit, _, _)| word_count < *limit)
    {
        notes.push(match word_count {
            0..20 => "very sparse content",
            20..50 => "sparse content",
            50..100 => "limited content",
            _ => "moderate content",
        });
        return (score, multiplier);
    }

    if word_count > DENSE_WORD_COUNT {
        notes.push("substantial content");
        (DENSE_SCORE, DENSE_MULTIPLIER)
    } else {
        (0.0, 1.0)
    }
}
