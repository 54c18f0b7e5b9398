//! Search suggestions over a window of recently displayed events.
//!
//! The surrounding application records events into a [`RecentEventsCache`]
//! as it renders them; as the user types, [`suggest_titles`] ranks the
//! cached window against the in-progress query. The cache is an explicitly
//! passed object, not ambient module state, so independent views keep
//! independent windows.

use crate::config::RelevanceConfig;
use crate::models::{Event, EventId};
use crate::services::semantic::semantic_search;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::RwLock;

/// Capacity-bounded window of recently displayed events.
///
/// # Thread Safety
///
/// Uses `RwLock` for interior mutability, allowing concurrent reads and
/// exclusive writes.
///
/// # Lock Poisoning
///
/// Handled with fail-open semantics: a poisoned lock makes `record` a no-op
/// and `snapshot` return an empty window. Suggestions are a convenience,
/// not a correctness requirement; an empty dropdown beats a crash.
#[derive(Debug)]
pub struct RecentEventsCache {
    window: RwLock<LruCache<EventId, Event>>,
}

impl RecentEventsCache {
    /// Default window size: enough for a page of results plus scroll-back.
    pub const DEFAULT_CAPACITY: usize = 50;

    /// Creates a cache holding at most `capacity` events.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    #[must_use]
    #[allow(clippy::expect_used)] // Documented panic for invalid input
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).expect("capacity must be > 0");
        Self {
            window: RwLock::new(LruCache::new(cap)),
        }
    }

    /// Records an event as recently displayed, refreshing its position if
    /// already present and evicting the oldest entry at capacity.
    pub fn record(&self, event: &Event) {
        if let Ok(mut window) = self.window.write() {
            window.put(event.id.clone(), event.clone());
        }
    }

    /// Returns the cached events, most recently recorded first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Event> {
        self.window.read().map_or_else(
            |_| Vec::new(),
            |window| window.iter().map(|(_, event)| event.clone()).collect(),
        )
    }

    /// Number of cached events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.window.read().map_or(0, |window| window.len())
    }

    /// Returns true if the window is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RecentEventsCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

/// Produces up to `max_suggestions` deduplicated event titles matching an
/// in-progress query.
///
/// Returns nothing until the query is longer than `min_suggestion_chars`
/// characters; below that the window offers no useful signal. Titles come
/// out in relevance order.
#[must_use]
pub fn suggest_titles(
    cache: &RecentEventsCache,
    partial_query: &str,
    config: &RelevanceConfig,
) -> Vec<String> {
    if partial_query.trim().chars().count() <= config.min_suggestion_chars {
        return Vec::new();
    }

    let window = cache.snapshot();
    let ranked = semantic_search(&window, partial_query, config.relevance_floor);

    let mut titles: Vec<String> = Vec::new();
    for event in ranked {
        if !titles.contains(&event.title) {
            titles.push(event.title);
        }
        if titles.len() == config.max_suggestions {
            break;
        }
    }
    titles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClockTime;
    use chrono::NaiveDate;

    fn event(id: &str, title: &str) -> Event {
        Event {
            id: EventId::new(id),
            title: title.to_string(),
            description: String::new(),
            location: "GITC".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 4, 20).unwrap(),
            start_time: ClockTime::parse("12:30 PM").unwrap(),
            end_time: ClockTime::parse("2:00 PM").unwrap(),
            categories: Vec::new(),
            has_free_food: false,
            organizer: None,
            image_url: None,
        }
    }

    #[test]
    fn test_cache_capacity_evicts_oldest() {
        let cache = RecentEventsCache::new(2);
        cache.record(&event("1", "First"));
        cache.record(&event("2", "Second"));
        cache.record(&event("3", "Third"));
        assert_eq!(cache.len(), 2);
        let titles: Vec<String> = cache.snapshot().into_iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["Third", "Second"]);
    }

    #[test]
    fn test_cache_rerecord_refreshes_position() {
        let cache = RecentEventsCache::new(2);
        cache.record(&event("1", "First"));
        cache.record(&event("2", "Second"));
        cache.record(&event("1", "First"));
        cache.record(&event("3", "Third"));
        let titles: Vec<String> = cache.snapshot().into_iter().map(|e| e.title).collect();
        // "Second" was the least recently recorded and got evicted.
        assert_eq!(titles, vec!["Third", "First"]);
    }

    #[test]
    fn test_short_queries_yield_nothing() {
        let cache = RecentEventsCache::default();
        cache.record(&event("1", "Pizza Party"));
        let config = RelevanceConfig::default();
        assert!(suggest_titles(&cache, "", &config).is_empty());
        assert!(suggest_titles(&cache, "pi", &config).is_empty());
        assert!(suggest_titles(&cache, "  pi  ", &config).is_empty());
        assert!(!suggest_titles(&cache, "pizza", &config).is_empty());
    }

    #[test]
    fn test_suggestions_deduplicate_titles() {
        let cache = RecentEventsCache::default();
        cache.record(&event("1", "Pizza Party"));
        cache.record(&event("2", "Pizza Party"));
        cache.record(&event("3", "Pizza Study Break"));
        let config = RelevanceConfig::default();
        let suggestions = suggest_titles(&cache, "pizza", &config);
        assert_eq!(
            suggestions
                .iter()
                .filter(|t| t.as_str() == "Pizza Party")
                .count(),
            1
        );
    }

    #[test]
    fn test_suggestions_capped() {
        let cache = RecentEventsCache::default();
        for i in 0..10 {
            cache.record(&event(&i.to_string(), &format!("Pizza Night {i}")));
        }
        let config = RelevanceConfig::default();
        let suggestions = suggest_titles(&cache, "pizza night", &config);
        assert_eq!(suggestions.len(), config.max_suggestions);
    }

    #[test]
    fn test_irrelevant_window_yields_nothing() {
        let cache = RecentEventsCache::default();
        cache.record(&event("1", "Career Fair"));
        let config = RelevanceConfig::default();
        assert!(suggest_titles(&cache, "free pizza", &config).is_empty());
    }

    #[test]
    fn test_empty_cache_yields_nothing() {
        let cache = RecentEventsCache::default();
        let config = RelevanceConfig::default();
        assert!(suggest_titles(&cache, "pizza", &config).is_empty());
    }
}
