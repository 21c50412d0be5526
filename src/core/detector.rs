use crate::core::{
    error::CheckError,
    normalize::normalize,
    policy::AssessmentPolicy,
    scoring::normalized_similarity,
};
use crate::models::{Assessment, DuplicateCheckResult, EventCandidate, ScoredCandidate, Thresholds};

/// Duplicate check orchestrator
///
/// # Pipeline Stages
/// 1. Normalize the submitted title once
/// 2. Normalize and score every candidate title against it
/// 3. Classify and aggregate with the assessment policy
#[derive(Debug, Clone, Default)]
pub struct DuplicateDetector {
    policy: AssessmentPolicy,
}

impl DuplicateDetector {
    pub fn new(thresholds: Thresholds) -> Result<Self, CheckError> {
        Ok(Self {
            policy: AssessmentPolicy::new(thresholds)?,
        })
    }

    pub fn with_default_thresholds() -> Self {
        Self::default()
    }

    pub fn thresholds(&self) -> Thresholds {
        self.policy.thresholds()
    }

    pub fn classify(&self, score: f64) -> Assessment {
        self.policy.classify(score)
    }

    /// Check a new event title against candidates from the data layer
    ///
    /// # Arguments
    /// * `title` - Raw title of the event being created
    /// * `candidates` - Nearby existing events (same organizer, location, dates)
    /// * `strict` - Treat WARN-level matches as duplicates
    pub fn check(
        &self,
        title: &str,
        candidates: Vec<EventCandidate>,
        strict: bool,
    ) -> Result<DuplicateCheckResult, CheckError> {
        let normalized = normalize(title);

        let scored: Vec<ScoredCandidate> = candidates
            .into_iter()
            .map(|candidate| {
                let similarity = normalized_similarity(&normalized, &normalize(&candidate.title));
                ScoredCandidate {
                    event_id: candidate.event_id,
                    title: candidate.title,
                    similarity,
                }
            })
            .collect();

        tracing::debug!(
            "Scored {} candidates for normalized title {:?}",
            scored.len(),
            normalized
        );

        self.policy.assess(scored, strict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(items: &[(&str, &str)]) -> Vec<EventCandidate> {
        items
            .iter()
            .map(|(id, title)| EventCandidate::new(*id, *title))
            .collect()
    }

    #[test]
    fn test_check_exact_copy_blocks() {
        let detector = DuplicateDetector::with_default_thresholds();
        let result = detector
            .check(
                "Code Craft Hackathon 2025!",
                candidates(&[("evt-1", "code craft hackathon 2025"), ("evt-2", "Gala Dinner")]),
                false,
            )
            .unwrap();

        assert!(result.has_duplicates);
        assert_eq!(result.assessment, Assessment::Block);
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].event_id, "evt-1");
        assert_eq!(result.matches[0].similarity, 1.0);
    }

    #[test]
    fn test_check_keeps_raw_candidate_title() {
        let detector = DuplicateDetector::with_default_thresholds();
        let result = detector
            .check("Rust Meetup", candidates(&[("evt-1", "Rust Meetups!")]), false)
            .unwrap();

        assert_eq!(result.matches[0].title, "Rust Meetups!");
    }

    #[test]
    fn test_check_similar_title_warns() {
        let detector = DuplicateDetector::with_default_thresholds();
        let result = detector
            .check("AI Workshop", candidates(&[("evt-1", "ML Workshop")]), false)
            .unwrap();

        assert_eq!(result.assessment, Assessment::Warn);
        assert!(!result.has_duplicates);

        let strict = detector
            .check("AI Workshop", candidates(&[("evt-1", "ML Workshop")]), true)
            .unwrap();
        assert!(strict.has_duplicates);
    }

    #[test]
    fn test_check_no_candidates() {
        let detector = DuplicateDetector::with_default_thresholds();
        let result = detector.check("Anything", vec![], true).unwrap();
        assert_eq!(result, DuplicateCheckResult::clear());
    }

    #[test]
    fn test_check_rejects_duplicate_ids() {
        let detector = DuplicateDetector::with_default_thresholds();
        let err = detector
            .check("Rust Meetup", candidates(&[("evt-1", "A"), ("evt-1", "B")]), false)
            .unwrap_err();
        assert_eq!(err, CheckError::DuplicateCandidate("evt-1".to_string()));
    }
}
