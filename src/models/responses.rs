use serde::{Deserialize, Serialize};
use crate::models::domain::{Alert, Assessment, Decision, DuplicateCheckResult, Thresholds};

/// Response for the duplicate check endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateCheckResponse {
    #[serde(rename = "checkId")]
    pub check_id: String,
    #[serde(rename = "checkedAt")]
    pub checked_at: chrono::DateTime<chrono::Utc>,
    pub result: DuplicateCheckResult,
    pub alert: Alert,
    pub decision: DecisionBody,
}

/// Decision plus the status the event-creation API should respond with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionBody {
    pub action: Decision,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    #[serde(rename = "errorCode", skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl From<Decision> for DecisionBody {
    fn from(decision: Decision) -> Self {
        Self {
            action: decision,
            status_code: decision.status_code(),
            error_code: decision.error_code().map(str::to_string),
        }
    }
}

/// Response for the pairwise similarity endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityResponse {
    #[serde(rename = "normalizedA")]
    pub normalized_a: String,
    #[serde(rename = "normalizedB")]
    pub normalized_b: String,
    pub distance: usize,
    pub similarity: f64,
    pub assessment: Assessment,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub thresholds: Thresholds,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
