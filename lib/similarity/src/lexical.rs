//! Lexical similarity for the edit-distance channel
//!
//! All functions return a similarity score in range [0.0, 1.0] where 1.0
//! means identical.

use errx_core::WILDCARD;

/// Regex-style "match anything" marker substituted for the wildcard token.
pub const MATCH_ANY: &str = ".*";

/// Rewrite every literal `<*>` wildcard token in a query to `.*`.
///
/// Applied to incoming queries only; catalog templates keep their literal
/// wildcard token. Scoring compares raw strings, so the rewritten form is
/// for callers that hand the query to a regex-style matcher.
#[must_use]
pub fn normalize_wildcards(query: &str) -> String {
    query.replace(WILDCARD, MATCH_ANY)
}

/// Sequence-matcher similarity between two strings.
///
/// Computes `2 * M / (len_a + len_b)` where `M` is the number of matching
/// characters (the longest common subsequence). Identical strings score
/// 1.0; strings with no characters in common score 0.0.
#[must_use]
pub fn lexical_ratio(a: &str, b: &str) -> f32 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let total = a_chars.len() + b_chars.len();
    if total == 0 {
        return 1.0;
    }

    let matches = common_subsequence_len(&a_chars, &b_chars);
    (2 * matches) as f32 / total as f32
}

/// Longest common subsequence length, two-row dynamic programming.
fn common_subsequence_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    // Keep the shorter string on the row axis
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let mut prev = vec![0usize; short.len() + 1];
    let mut current = vec![0usize; short.len() + 1];

    for &lc in long {
        for (i, &sc) in short.iter().enumerate() {
            current[i + 1] = if lc == sc {
                prev[i] + 1
            } else {
                prev[i + 1].max(current[i])
            };
        }
        std::mem::swap(&mut prev, &mut current);
    }

    prev[short.len()]
}
