// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Alert, AlertType, Assessment, CandidateMatch, Decision, DuplicateCheckResult, EventCandidate,
    ScoredCandidate, Thresholds, DEFAULT_BLOCK_THRESHOLD, DEFAULT_WARN_THRESHOLD,
};
pub use requests::{DuplicateCheckRequest, SimilarityRequest};
pub use responses::{DecisionBody, DuplicateCheckResponse, ErrorResponse, HealthResponse, SimilarityResponse};
