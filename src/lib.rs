//! Event Dedup - duplicate event detection for the events platform
//!
//! This library scores a new event title against nearby existing events and
//! decides whether creation should be blocked, warned about or allowed.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{distance, format_alert, normalize, similarity, AssessmentPolicy, CheckError, DuplicateDetector};
pub use models::{
    Alert, AlertType, Assessment, CandidateMatch, Decision, DuplicateCheckResult, EventCandidate, Thresholds,
};
