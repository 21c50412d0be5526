use crate::core::{distance::distance, normalize::normalize};

/// Similarity (0.0 to 1.0) between two raw titles
///
/// Both titles are normalized first so casing, punctuation and spacing do
/// not count as differences:
///
/// similarity = 1 - distance(norm_a, norm_b) / max(len(norm_a), len(norm_b))
///
/// Identical normalized titles (both empty included) score 1.0; an empty
/// title against a non-empty one scores 0.0.
pub fn similarity(a: &str, b: &str) -> f64 {
    normalized_similarity(&normalize(a), &normalize(b))
}

/// Same as [`similarity`] for titles that are already normalized
pub fn normalized_similarity(norm_a: &str, norm_b: &str) -> f64 {
    if norm_a == norm_b {
        return 1.0;
    }

    let len_a = norm_a.chars().count();
    let len_b = norm_b.chars().count();
    if len_a == 0 || len_b == 0 {
        return 0.0;
    }

    let max_len = len_a.max(len_b) as f64;
    let score = 1.0 - distance(norm_a, norm_b) as f64 / max_len;

    score.clamp(0.0, 1.0)
}
