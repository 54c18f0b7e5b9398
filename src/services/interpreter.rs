//! Natural-language query interpretation.
//!
//! Maps a free-text search like "free pizza tonight" into a structured
//! descriptor: the literal query text, the inferred category labels, and a
//! free-food flag. Keyword rules use substring matching on the lowercased
//! query ("tonight" contains "night"); only the theme-classification step
//! works on the tokenized bag-of-words.

use crate::config::RelevanceConfig;
use crate::models::InterpretedQuery;
use crate::text::bag_of_words;
use crate::themes::{FOOD_LABEL, ThemeLexicon};
use tracing::debug;

/// Literal phrases that signal free food on their own.
const FREE_FOOD_PHRASES: &[&str] = &[
    "free food",
    "free pizza",
    "free breakfast",
    "free lunch",
    "free dinner",
    "free snack",
];

/// Evening cues; these bias the query toward social events.
const EVENING_TERMS: &[&str] = &["evening", "night", "late"];

/// Residence-life cues.
const RESIDENCE_TERMS: &[&str] = &["residence", "dorm", "housing"];

/// Academic-building cues, consulted only when no residence cue matched
/// ("hall" alone means a lecture hall; "residence hall" means housing).
const ACADEMIC_PLACE_TERMS: &[&str] = &["class", "building", "hall"];

/// Interprets a raw search query into a structured filter descriptor.
///
/// Steps, in order:
/// 1. Substring scan of the Food vocabulary adds the "Food" category.
/// 2. Free-food detection: "free" together with a food match, any of the
///    literal free-food phrases, or a bare mention of "pizza" (a mention of
///    pizza on campus almost always means free pizza).
/// 3. Theme classification of the tokenized query at the configured query
///    threshold.
/// 4. Evening cues add "Social"; residence cues add "Resident", otherwise
///    academic-building cues add "Academic".
///
/// The returned `processed_query` is the caller's literal text; categories
/// are deduplicated in first-insertion order. Interpretation is
/// deterministic and never fails; an empty query yields an empty descriptor.
#[must_use]
pub fn interpret_query(
    raw: &str,
    lexicon: &ThemeLexicon,
    config: &RelevanceConfig,
) -> InterpretedQuery {
    let lowered = raw.to_lowercase();
    let mut result = InterpretedQuery::passthrough(raw);

    let food_mentioned = lexicon.vocabulary(FOOD_LABEL).is_some_and(|food| {
        food.terms()
            .iter()
            .any(|term| lowered.contains(&term.to_lowercase()))
    });
    if food_mentioned {
        result.push_category(FOOD_LABEL);
    }

    result.has_free_food = (lowered.contains("free") && food_mentioned)
        || FREE_FOOD_PHRASES
            .iter()
            .any(|phrase| lowered.contains(phrase))
        || lowered.contains("pizza");

    for label in lexicon.classify(&bag_of_words(&lowered), config.query_theme_threshold) {
        result.push_category(label);
    }

    if contains_any(&lowered, EVENING_TERMS) {
        result.push_category("Social");
    }
    if contains_any(&lowered, RESIDENCE_TERMS) {
        result.push_category("Resident");
    } else if contains_any(&lowered, ACADEMIC_PLACE_TERMS) {
        result.push_category("Academic");
    }

    debug!(
        query = raw,
        categories = ?result.categories,
        has_free_food = result.has_free_food,
        "interpreted query"
    );
    result
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
