use serde::{Deserialize, Serialize};
use std::fmt;

/// Default similarity at or above which a candidate blocks creation
pub const DEFAULT_BLOCK_THRESHOLD: f64 = 0.85;

/// Default similarity at or above which a candidate raises a warning
pub const DEFAULT_WARN_THRESHOLD: f64 = 0.65;

/// Existing event handed over by the data layer as a possible duplicate
///
/// Candidates arrive already narrowed down to the same organizer, an
/// overlapping location and a nearby date window. Only the title is scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCandidate {
    #[serde(rename = "eventId", alias = "event_id")]
    pub event_id: String,
    pub title: String,
}

impl EventCandidate {
    pub fn new(event_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            event_id: event_id.into(),
            title: title.into(),
        }
    }
}

/// Candidate whose title has been scored but not yet classified
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub event_id: String,
    pub title: String,
    pub similarity: f64,
}

/// Severity label for a single candidate or a whole check
///
/// Variants are declared in ascending severity so the derived `Ord`
/// gives BLOCK > WARN > LOW_RISK > CLEAR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Assessment {
    Clear,
    LowRisk,
    Warn,
    Block,
}

impl Assessment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "CLEAR",
            Self::LowRisk => "LOW_RISK",
            Self::Warn => "WARN",
            Self::Block => "BLOCK",
        }
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Existing event that was scored against a new submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateMatch {
    #[serde(rename = "eventId")]
    pub event_id: String,
    pub title: String,
    pub similarity: f64,
    pub assessment: Assessment,
}

/// Outcome of one duplicate check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateCheckResult {
    #[serde(rename = "hasDuplicates")]
    pub has_duplicates: bool,
    pub assessment: Assessment,
    /// Ordered by similarity (descending), then event id (ascending)
    pub matches: Vec<CandidateMatch>,
}

impl DuplicateCheckResult {
    pub fn clear() -> Self {
        Self {
            has_duplicates: false,
            assessment: Assessment::Clear,
            matches: Vec::new(),
        }
    }
}

/// Similarity cut-offs used to classify candidates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub block: f64,
    pub warn: f64,
}

impl Thresholds {
    /// Thresholds are usable only when `0 < warn < block <= 1`
    pub fn is_valid(&self) -> bool {
        self.warn.is_finite()
            && self.block.is_finite()
            && self.warn > 0.0
            && self.warn < self.block
            && self.block <= 1.0
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            block: DEFAULT_BLOCK_THRESHOLD,
            warn: DEFAULT_WARN_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Info,
    Warning,
    Error,
}

/// User-facing summary of a duplicate check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub title: String,
    pub message: String,
    pub suggestions: Vec<String>,
}

/// What the event-creation flow should do with a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Reject,
    Warn,
    Allow,
}

impl Decision {
    pub fn from_result(result: &DuplicateCheckResult) -> Self {
        if result.has_duplicates {
            Self::Reject
        } else if result.assessment == Assessment::Warn {
            Self::Warn
        } else {
            Self::Allow
        }
    }

    /// Status the event-creation endpoint answers its client with
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Reject => 409,
            Self::Warn | Self::Allow => 201,
        }
    }

    pub fn error_code(&self) -> Option<&'static str> {
        match self {
            Self::Reject => Some("duplicate_detected"),
            Self::Warn | Self::Allow => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assessment_severity_order() {
        assert!(Assessment::Block > Assessment::Warn);
        assert!(Assessment::Warn > Assessment::LowRisk);
        assert!(Assessment::LowRisk > Assessment::Clear);
        assert_eq!(
            [Assessment::Warn, Assessment::Block, Assessment::Clear].iter().max(),
            Some(&Assessment::Block)
        );
    }

    #[test]
    fn test_assessment_serialization() {
        let json = serde_json::to_string(&Assessment::LowRisk).unwrap();
        assert_eq!(json, "\"LOW_RISK\"");
        assert_eq!(Assessment::Block.to_string(), "BLOCK");
    }

    #[test]
    fn test_default_thresholds() {
        let thresholds = Thresholds::default();
        assert_eq!(thresholds.block, 0.85);
        assert_eq!(thresholds.warn, 0.65);
        assert!(thresholds.is_valid());
    }

    #[test]
    fn test_invalid_thresholds() {
        assert!(!Thresholds { block: 0.6, warn: 0.7 }.is_valid());
        assert!(!Thresholds { block: 0.7, warn: 0.7 }.is_valid());
        assert!(!Thresholds { block: 1.2, warn: 0.7 }.is_valid());
        assert!(!Thresholds { block: 0.9, warn: 0.0 }.is_valid());
        assert!(!Thresholds { block: f64::NAN, warn: 0.5 }.is_valid());
    }

    #[test]
    fn test_decision_from_result() {
        let mut result = DuplicateCheckResult::clear();
        assert_eq!(Decision::from_result(&result), Decision::Allow);

        result.assessment = Assessment::Warn;
        assert_eq!(Decision::from_result(&result), Decision::Warn);
        assert_eq!(Decision::Warn.status_code(), 201);

        result.has_duplicates = true;
        let decision = Decision::from_result(&result);
        assert_eq!(decision, Decision::Reject);
        assert_eq!(decision.status_code(), 409);
        assert_eq!(decision.error_code(), Some("duplicate_detected"));
    }

    #[test]
    fn test_candidate_accepts_snake_case() {
        let candidate: EventCandidate =
            serde_json::from_str(r#"{"event_id": "evt-1", "title": "Rust Meetup"}"#).unwrap();
        assert_eq!(candidate, EventCandidate::new("evt-1", "Rust Meetup"));
    }
}
