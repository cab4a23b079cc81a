use serde::{Deserialize, Serialize};

/// Final verdict handed back to the host application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationOutcome {
    /// Whether the page is a soft 404
    #[serde(rename = "is404")]
    pub is_404: bool,

    /// Accumulated weighted score; not a probability
    pub confidence: f64,

    /// Human-readable descriptions of every contributing match
    pub indicators: Vec<String>,
}

impl ClassificationOutcome {
    /// Create a new outcome
    pub fn new(is_404: bool, confidence: f64, indicators: Vec<String>) -> Self {
        Self {
            is_404,
            confidence,
            indicators,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_host_contract() {
        let outcome = ClassificationOutcome::new(true, 82.5, vec!["meta status=404 (+50.0)".into()]);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["is404"], true);
        assert_eq!(json["confidence"], 82.5);
        assert_eq!(json["indicators"][0], "meta status=404 (+50.0)");
    }
}
