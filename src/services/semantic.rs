//! Jaccard-ranked event search.

use crate::models::Event;
use crate::text::{bag_of_words, jaccard};
use std::cmp::Ordering;
use tracing::debug;

/// Bag-of-words similarity between a query and an arbitrary text.
#[must_use]
pub fn semantic_similarity(query: &str, text: &str) -> f64 {
    jaccard(&bag_of_words(query), &bag_of_words(text))
}

/// Ranks events by similarity to the query, most relevant first.
///
/// Each event's haystack is its title, description, and category labels
/// (see [`Event::combined_text`]). Events scoring at or below `floor` are
/// dropped; ties keep their input order (stable sort). An empty or
/// whitespace-only query returns the input unchanged.
#[must_use]
pub fn semantic_search(events: &[Event], query: &str, floor: f64) -> Vec<Event> {
    if query.trim().is_empty() {
        return events.to_vec();
    }

    let query_bag = bag_of_words(query);
    let mut scored: Vec<(f64, &Event)> = events
        .iter()
        .filter_map(|event| {
            let score = jaccard(&query_bag, &bag_of_words(&event.combined_text()));
            (score > floor).then_some((score, event))
        })
        .collect();

    // Stable sort keeps input order for equal scores.
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    debug!(
        query,
        candidates = events.len(),
        relevant = scored.len(),
        "semantic search"
    );
    scored.into_iter().map(|(_, event)| event.clone()).collect()
}
