use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::models::domain::EventCandidate;

/// Upper bound on title length accepted from callers, in characters
pub const MAX_TITLE_CHARS: usize = 200;
// validator 0.18 length bounds are u64; same limit as MAX_TITLE_CHARS.
const MAX_TITLE_CHARS_U64: u64 = MAX_TITLE_CHARS as u64;

/// Upper bound on candidate event id length, in characters
pub const MAX_EVENT_ID_CHARS: usize = 128;

/// Request to check a new event title against nearby existing events
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DuplicateCheckRequest {
    #[validate(length(min = 1, max = MAX_TITLE_CHARS_U64))]
    pub title: String,
    #[serde(default)]
    #[validate(custom(function = "validate_candidates"))]
    pub candidates: Vec<EventCandidate>,
    /// Falls back to the configured default when absent
    #[serde(default)]
    pub strict: Option<bool>,
}

/// Request to score two titles against each other
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SimilarityRequest {
    #[validate(length(max = MAX_TITLE_CHARS_U64))]
    pub a: String,
    #[validate(length(max = MAX_TITLE_CHARS_U64))]
    pub b: String,
}

#[allow(clippy::ptr_arg)]
fn validate_candidates(candidates: &Vec<EventCandidate>) -> Result<(), ValidationError> {
    for candidate in candidates {
        let id_len = candidate.event_id.chars().count();
        if id_len == 0 || id_len > MAX_EVENT_ID_CHARS {
            let mut error = ValidationError::new("event_id_length");
            error.message = Some("candidate eventId must be 1-128 characters".into());
            return Err(error);
        }
        if candidate.title.chars().count() > MAX_TITLE_CHARS {
            let mut error = ValidationError::new("title_length");
            error.message = Some("candidate title must be at most 200 characters".into());
            return Err(error);
        }
    }
    Ok(())
}
