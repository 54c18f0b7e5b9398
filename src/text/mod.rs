//! Tokenization and set-similarity primitives.
//!
//! The matching layer is deliberately simple: lowercase tokens, no stemming,
//! no stop words. False positives from shared common words are an accepted
//! limitation of the bag-of-words model.

use std::collections::HashSet;

/// Punctuation replaced by whitespace during tokenization.
const PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~',
    '(', ')',
];

/// Splits text into lowercase tokens.
///
/// Lowercases the input, treats the fixed punctuation class as whitespace,
/// collapses runs of separators, and drops empty tokens. Empty or
/// whitespace-only input yields an empty vector.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| c.is_whitespace() || PUNCTUATION.contains(&c))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Builds a deduplicated bag-of-words from text.
#[must_use]
pub fn bag_of_words(text: &str) -> HashSet<String> {
    tokenize(text).into_iter().collect()
}

/// Jaccard similarity between two token sets: `|A ∩ B| / |A ∪ B|`.
///
/// When both sets are empty the ratio is 0/0; this implementation defines
/// the result as `0.0` so the degenerate case never feeds `NaN` into the
/// score comparisons downstream.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        assert_eq!(
            tokenize("Free Pizza & Programming!"),
            vec!["free", "pizza", "programming"]
        );
    }

    #[test]
    fn test_tokenize_punctuation_class() {
        assert_eq!(
            tokenize("hands-on: workshop_(beginners)"),
            vec!["hands", "on", "workshop", "beginners"]
        );
    }

    #[test]
    fn test_tokenize_empty_and_whitespace() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n ").is_empty());
        assert!(tokenize("...---...").is_empty());
    }

    #[test]
    fn test_tokenize_idempotent() {
        for text in ["Hello, World!", "free pizza tonight", "a--b__c"] {
            let once = tokenize(text);
            let twice = tokenize(&once.join(" "));
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_bag_of_words_dedups() {
        let bag = bag_of_words("pizza pizza pizza night");
        assert_eq!(bag.len(), 2);
        assert!(bag.contains("pizza"));
        assert!(bag.contains("night"));
    }

    #[test]
    fn test_jaccard_bounds_and_identity() {
        let a = bag_of_words("free pizza tonight");
        let b = bag_of_words("pizza workshop");
        let score = jaccard(&a, &b);
        assert!(score > 0.0 && score < 1.0);
        assert!((jaccard(&a, &a) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_jaccard_disjoint_is_zero() {
        let a = bag_of_words("alpha beta");
        let b = bag_of_words("gamma delta");
        assert!(jaccard(&a, &b).abs() < f64::EPSILON);
    }

    #[test]
    fn test_jaccard_both_empty_defined_zero() {
        let empty = HashSet::new();
        let score = jaccard(&empty, &empty);
        assert!(score.abs() < f64::EPSILON);
        assert!(!score.is_nan());
    }

    #[test]
    fn test_jaccard_exact_ratio() {
        let a = bag_of_words("a b c");
        let b = bag_of_words("b c d");
        // Intersection {b, c}, union {a, b, c, d}.
        assert!((jaccard(&a, &b) - 0.5).abs() < f64::EPSILON);
    }
}
