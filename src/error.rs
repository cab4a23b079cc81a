use thiserror::Error;

/// Errors raised while loading configuration or compiling custom indicator rules.
///
/// Classification itself never fails; see [`crate::Detector::classify`].
#[derive(Debug, Error)]
pub enum DetectorError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid weight {weight} for pattern {pattern:?}")]
    InvalidWeight { pattern: String, weight: f64 },
}

pub type DetectorResult<T> = Result<T, DetectorError>;
