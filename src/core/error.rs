use thiserror::Error;

/// Errors raised when a duplicate check is handed malformed input
///
/// These are caller bugs rather than runtime conditions: the engine
/// refuses the whole check instead of returning a partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Duplicate candidate event id: {0}")]
    DuplicateCandidate(String),

    #[error("Similarity {score} for candidate {event_id} is outside [0, 1]")]
    ScoreOutOfRange { event_id: String, score: f64 },

    #[error("Invalid thresholds: block={block}, warn={warn} (need 0 < warn < block <= 1)")]
    InvalidThresholds { block: f64, warn: f64 },
}
