use std::cmp::Ordering;
use std::collections::HashSet;

use crate::core::error::CheckError;
use crate::models::{Assessment, CandidateMatch, DuplicateCheckResult, ScoredCandidate, Thresholds};

/// Classifies scored candidates and folds them into one check result
///
/// Holds only immutable thresholds, so one policy can be shared freely
/// between request handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssessmentPolicy {
    thresholds: Thresholds,
}

impl AssessmentPolicy {
    pub fn new(thresholds: Thresholds) -> Result<Self, CheckError> {
        if !thresholds.is_valid() {
            return Err(CheckError::InvalidThresholds {
                block: thresholds.block,
                warn: thresholds.warn,
            });
        }
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Label a single similarity score
    #[inline]
    pub fn classify(&self, score: f64) -> Assessment {
        if score >= self.thresholds.block {
            Assessment::Block
        } else if score >= self.thresholds.warn {
            Assessment::Warn
        } else if score > 0.0 {
            Assessment::LowRisk
        } else {
            Assessment::Clear
        }
    }

    /// Aggregate scored candidates into a duplicate check result
    ///
    /// # Aggregation
    /// - any BLOCK: BLOCK, duplicates found, only BLOCK matches reported
    /// - any WARN, strict: WARN, duplicates found, only WARN matches reported
    /// - any WARN, lenient: WARN, no duplicates, every candidate reported
    /// - any LOW_RISK: LOW_RISK, no duplicates, every candidate reported
    /// - otherwise CLEAR with no matches
    ///
    /// # Errors
    /// Rejects the whole batch if an event id is blank or repeated, or if a
    /// score is not a finite number in [0, 1].
    pub fn assess(
        &self,
        candidates: Vec<ScoredCandidate>,
        strict: bool,
    ) -> Result<DuplicateCheckResult, CheckError> {
        validate_candidates(&candidates)?;

        if candidates.is_empty() {
            return Ok(DuplicateCheckResult::clear());
        }

        let mut matches: Vec<CandidateMatch> = candidates
            .into_iter()
            .map(|candidate| CandidateMatch {
                assessment: self.classify(candidate.similarity),
                event_id: candidate.event_id,
                title: candidate.title,
                similarity: candidate.similarity,
            })
            .collect();

        let overall = matches
            .iter()
            .map(|m| m.assessment)
            .max()
            .unwrap_or(Assessment::Clear);

        let has_duplicates = match overall {
            Assessment::Block => {
                matches.retain(|m| m.assessment == Assessment::Block);
                true
            }
            Assessment::Warn if strict => {
                matches.retain(|m| m.assessment == Assessment::Warn);
                true
            }
            Assessment::Warn | Assessment::LowRisk => false,
            Assessment::Clear => {
                matches.clear();
                false
            }
        };

        sort_matches(&mut matches);

        Ok(DuplicateCheckResult {
            has_duplicates,
            assessment: overall,
            matches,
        })
    }
}

/// Highest similarity first; equal scores fall back to event id
pub fn sort_matches(matches: &mut [CandidateMatch]) {
    matches.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.event_id.cmp(&b.event_id))
    });
}

fn validate_candidates(candidates: &[ScoredCandidate]) -> Result<(), CheckError> {
    let mut seen = HashSet::with_capacity(candidates.len());

    for candidate in candidates {
        if candidate.event_id.trim().is_empty() {
            return Err(CheckError::InvalidArgument(
                "candidate event id must not be blank".to_string(),
            ));
        }
        if !candidate.similarity.is_finite() || !(0.0..=1.0).contains(&candidate.similarity) {
            return Err(CheckError::ScoreOutOfRange {
                event_id: candidate.event_id.clone(),
                score: candidate.similarity,
            });
        }
        if !seen.insert(candidate.event_id.as_str()) {
            return Err(CheckError::DuplicateCandidate(candidate.event_id.clone()));
        }
    }

    Ok(())
}
