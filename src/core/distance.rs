/// Levenshtein edit distance between two strings
///
/// Counts the minimum number of single-character insertions, deletions and
/// substitutions turning `a` into `b`. Characters are Unicode scalar values,
/// so "é" counts as one edit.
///
/// Only two rows of the `(len(b) + 1) x (len(a) + 1)` table are kept; time
/// stays O(len(a) * len(b)). Callers bound title length upstream.
pub fn distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    // Row index walks `b`, column index walks `a`
    let mut prev: Vec<usize> = (0..=a_chars.len()).collect();
    let mut curr = vec![0usize; a_chars.len() + 1];

    for (i, b_ch) in b_chars.iter().enumerate() {
        curr[0] = i + 1;

        for (j, a_ch) in a_chars.iter().enumerate() {
            curr[j + 1] = if a_ch == b_ch {
                prev[j]
            } else {
                1 + prev[j] // substitution
                    .min(curr[j]) // insertion
                    .min(prev[j + 1]) // deletion
            };
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[a_chars.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_known_values() {
        assert_eq!(distance("", ""), 0);
        assert_eq!(distance("abc", "abc"), 0);
        assert_eq!(distance("kitten", "sitting"), 3);
        assert_eq!(distance("saturday", "sunday"), 3);
        assert_eq!(distance("ai workshop", "ml workshop"), 2);
        assert_eq!(distance("hackathon", "gala dinner"), 9);
    }

    #[test]
    fn test_distance_from_empty() {
        assert_eq!(distance("", "meetup"), 6);
        assert_eq!(distance("meetup", ""), 6);
    }

    #[test]
    fn test_distance_counts_chars_not_bytes() {
        assert_eq!(distance("café", "cafe"), 1);
        assert_eq!(distance("über", "uber"), 1);
    }

    #[test]
    fn test_distance_symmetric() {
        let pairs = [
            ("rust meetup", "rust meetups"),
            ("summer music festival", "summer music fest"),
            ("a", "xyz"),
            ("tech talk", "tech walk"),
        ];
        for (a, b) in pairs {
            assert_eq!(distance(a, b), distance(b, a), "{:?} vs {:?}", a, b);
        }
    }

    #[test]
    fn test_distance_bounded_by_longer_length() {
        assert_eq!(distance("abc", "xyz"), 3);
        assert_eq!(distance("ab", "wxyz"), 4);
    }
}
