//! The staged event filter pipeline.
//!
//! Stages run in a fixed order (persona, query, categories, free food),
//! each consuming the previous stage's output. When the caller supplied no
//! explicit filter at all, a recommendation fallback surfaces the top-scored
//! events ahead of the plain browse list instead.

use crate::config::RelevanceConfig;
use crate::models::{Event, FilterCriteria, Persona, UserSignals};
use crate::services::recommend::recommend_events;
use crate::services::semantic::semantic_search;
use tracing::{debug, instrument};

/// Persona stage: keeps events fitting the persona's schedule.
///
/// Commuters keep events tagged "Commuter", offering free food, or starting
/// in the daytime window; residents keep events tagged "Resident" or
/// starting at 5 PM or later. `None` (unset or unrecognized persona) is a
/// pass-through.
#[must_use]
pub fn filter_by_persona(events: &[Event], persona: Option<Persona>) -> Vec<Event> {
    match persona {
        None => events.to_vec(),
        Some(Persona::Commuter) => events
            .iter()
            .filter(|e| e.is_tagged("Commuter") || e.has_free_food || e.start_time.is_daytime())
            .cloned()
            .collect(),
        Some(Persona::Resident) => events
            .iter()
            .filter(|e| e.is_tagged("Resident") || e.start_time.is_evening())
            .cloned()
            .collect(),
    }
}

/// Query stage: lexical or semantic matching depending on query complexity.
///
/// Queries of more than `semantic_token_threshold` whitespace-separated
/// tokens go through [`semantic_search`]; shorter ones use case-insensitive
/// substring matching against title, description, location, and category
/// labels. An empty query is a pass-through.
#[must_use]
pub fn filter_by_query(events: &[Event], query: &str, config: &RelevanceConfig) -> Vec<Event> {
    if query.trim().is_empty() {
        return events.to_vec();
    }

    if query.split_whitespace().count() > config.semantic_token_threshold {
        return semantic_search(events, query, config.relevance_floor);
    }

    let needle = query.to_lowercase();
    events
        .iter()
        .filter(|e| {
            e.title.to_lowercase().contains(&needle)
                || e.description.to_lowercase().contains(&needle)
                || e.location.to_lowercase().contains(&needle)
                || e.categories
                    .iter()
                    .any(|c| c.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Category stage: keeps events sharing at least one requested category.
/// An empty request set is a pass-through.
#[must_use]
pub fn filter_by_categories(events: &[Event], categories: &[String]) -> Vec<Event> {
    if categories.is_empty() {
        return events.to_vec();
    }
    events
        .iter()
        .filter(|e| e.categories.iter().any(|c| categories.contains(c)))
        .cloned()
        .collect()
}

/// Free-food stage: keeps only events with the flag set. A `false` request
/// is a pass-through.
#[must_use]
pub fn filter_by_free_food(events: &[Event], free_food_only: bool) -> Vec<Event> {
    if !free_food_only {
        return events.to_vec();
    }
    events.iter().filter(|e| e.has_free_food).cloned().collect()
}

/// Runs the full filter pipeline over a candidate event list.
///
/// Stage order is fixed: persona, query, categories, free food. Every stage
/// preserves the relative order of surviving events, except semantic search
/// (which imposes relevance order) and the fallback splice.
///
/// When the criteria carry no explicit filter
/// ([`FilterCriteria::is_unfiltered`]), the persona-filtered list is scored
/// by [`recommend_events`] and the top `recommended_count` events are moved
/// to the front of the result, with the remainder following in its original
/// order. Recommendations default to the commuter persona when none is set.
#[must_use]
#[instrument(skip_all, fields(candidates = events.len()))]
pub fn filter_events(
    events: &[Event],
    criteria: &FilterCriteria,
    signals: &UserSignals,
    config: &RelevanceConfig,
) -> Vec<Event> {
    let mut result = filter_by_persona(events, criteria.persona);
    debug!(survivors = result.len(), "persona stage");

    result = filter_by_query(&result, &criteria.query, config);
    result = filter_by_categories(&result, &criteria.categories);
    result = filter_by_free_food(&result, criteria.free_food_only);
    debug!(survivors = result.len(), "explicit stages");

    if criteria.is_unfiltered() {
        let persona = criteria.persona.unwrap_or(Persona::Commuter);
        let ranked = recommend_events(&result, signals, persona);
        let top: Vec<Event> = ranked
            .into_iter()
            .take(config.recommended_count)
            .collect();
        let remainder: Vec<Event> = result
            .into_iter()
            .filter(|e| !top.iter().any(|t| t.id == e.id))
            .collect();
        let mut spliced = top;
        spliced.extend(remainder);
        debug!(recommended = config.recommended_count, "fallback splice");
        return spliced;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClockTime, EventId};
    use chrono::NaiveDate;

    fn event(id: &str, time: &str, location: &str, categories: &[&str], food: bool) -> Event {
        Event {
            id: EventId::new(id),
            title: format!("Event {id}"),
            description: "An event on campus".to_string(),
            location: location.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 4, 20).unwrap(),
            start_time: ClockTime::parse(time).unwrap(),
            end_time: ClockTime::parse(time).unwrap(),
            categories: categories.iter().map(|&c| c.to_string()).collect(),
            has_free_food: food,
            organizer: None,
            image_url: None,
        }
    }

    fn sample_events() -> Vec<Event> {
        vec![
            event("1", "9:00 AM", "GITC", &["Academic"], false),
            event("2", "8:00 PM", "Redwood Hall", &["Resident"], true),
        ]
    }

    #[test]
    fn test_persona_commuter_keeps_daytime() {
        let kept = filter_by_persona(&sample_events(), Some(Persona::Commuter));
        // Event 2 survives too: free food counts for commuters.
        let ids: Vec<&str> = kept.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);

        let events = vec![
            event("1", "9:00 AM", "GITC", &[], false),
            event("2", "8:00 PM", "GITC", &[], false),
        ];
        let kept = filter_by_persona(&events, Some(Persona::Commuter));
        let ids: Vec<&str> = kept.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn test_persona_resident_keeps_evening_and_tagged() {
        let kept = filter_by_persona(&sample_events(), Some(Persona::Resident));
        let ids: Vec<&str> = kept.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);

        // A daytime event tagged Resident still passes.
        let events = vec![event("3", "9:00 AM", "GITC", &["Resident"], false)];
        assert_eq!(filter_by_persona(&events, Some(Persona::Resident)).len(), 1);
    }

    #[test]
    fn test_persona_none_is_passthrough() {
        let events = sample_events();
        assert_eq!(filter_by_persona(&events, None), events);
    }

    #[test]
    fn test_query_substring_for_short_queries() {
        let events = vec![
            event("1", "9:00 AM", "GITC", &["Academic"], false),
            event("2", "8:00 PM", "Redwood Hall", &["Resident"], true),
        ];
        let config = RelevanceConfig::default();
        // Two tokens: substring path; matches on location, case-insensitively.
        let kept = filter_by_query(&events, "redwood hall", &config);
        let ids: Vec<&str> = kept.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);

        // Category labels are searched too.
        let kept = filter_by_query(&events, "academic", &config);
        let ids: Vec<&str> = kept.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn test_query_semantic_for_long_queries() {
        let mut pizza = event("1", "12:30 PM", "GITC", &["Food"], true);
        pizza.title = "Free Pizza Workshop".to_string();
        pizza.description = "free pizza for everyone".to_string();
        let other = event("2", "9:00 AM", "GITC", &["Academic"], false);

        let config = RelevanceConfig::default();
        // Three tokens: semantic path.
        let kept = filter_by_query(&[other, pizza.clone()], "where is free pizza", &config);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, pizza.id);
    }

    #[test]
    fn test_query_empty_is_passthrough() {
        let events = sample_events();
        let config = RelevanceConfig::default();
        assert_eq!(filter_by_query(&events, "", &config), events);
    }

    #[test]
    fn test_categories_filter_and_passthrough() {
        let events = sample_events();
        assert_eq!(filter_by_categories(&events, &[]), events);

        let kept = filter_by_categories(&events, &["Resident".to_string()]);
        let ids: Vec<&str> = kept.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);

        let kept = filter_by_categories(&events, &["Wellness".to_string()]);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_free_food_filter_and_passthrough() {
        let events = sample_events();
        assert_eq!(filter_by_free_food(&events, false), events);

        let kept = filter_by_free_food(&events, true);
        let ids: Vec<&str> = kept.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn test_pipeline_commuter_unfiltered_includes_daytime_event() {
        let criteria = FilterCriteria::new().with_persona(Persona::Commuter);
        let result = filter_events(
            &sample_events(),
            &criteria,
            &UserSignals::new(),
            &RelevanceConfig::default(),
        );
        assert!(result.iter().any(|e| e.id.as_str() == "1"));
        // Both commuter-eligible events survive; fallback only reorders.
        assert_eq!(result.len(), 2);
        // Daytime (+2) and free-food (+2) tie, so input order holds.
        assert_eq!(result[0].id.as_str(), "1");
    }

    #[test]
    fn test_pipeline_resident_unfiltered_excludes_daytime_event() {
        let criteria = FilterCriteria::new().with_persona(Persona::Resident);
        let result = filter_events(
            &sample_events(),
            &criteria,
            &UserSignals::new(),
            &RelevanceConfig::default(),
        );
        let ids: Vec<&str> = result.iter().map(|e| e.id.as_str()).collect();
        // Event 1 is dropped by the persona stage; the fallback ranks only
        // what survived, so it cannot resurrect it.
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn test_pipeline_explicit_filter_disables_fallback() {
        let many = vec![
            event("1", "9:00 AM", "GITC", &["Academic"], false),
            event("2", "10:00 AM", "GITC", &["Academic"], false),
            event("3", "11:00 AM", "GITC", &["Academic"], false),
            event("4", "1:00 PM", "GITC", &["Academic"], false),
        ];
        let criteria = FilterCriteria::new()
            .with_persona(Persona::Commuter)
            .with_category("Academic");
        let result = filter_events(
            &many,
            &criteria,
            &UserSignals::new(),
            &RelevanceConfig::default(),
        );
        // With an explicit category filter, order is untouched input order.
        let ids: Vec<&str> = result.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_pipeline_fallback_splice_dedups() {
        let many = vec![
            event("1", "9:00 AM", "GITC", &[], false),
            event("2", "10:00 AM", "GITC", &["Commuter"], true),
            event("3", "11:00 AM", "GITC", &[], true),
            event("4", "1:00 PM", "GITC", &[], false),
            event("5", "2:00 PM", "GITC", &[], false),
        ];
        let criteria = FilterCriteria::new().with_persona(Persona::Commuter);
        let result = filter_events(
            &many,
            &criteria,
            &UserSignals::new(),
            &RelevanceConfig::default(),
        );
        // Same events, no duplicates, recommendations first.
        assert_eq!(result.len(), many.len());
        let mut ids: Vec<&str> = result.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids[0], "2"); // +2 daytime +2 food +3 tag
        assert_eq!(ids[1], "3"); // +2 daytime +2 food
        ids.sort_unstable();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_pipeline_free_food_only() {
        let criteria = FilterCriteria::new().with_free_food_only(true);
        let result = filter_events(
            &sample_events(),
            &criteria,
            &UserSignals::new(),
            &RelevanceConfig::default(),
        );
        let ids: Vec<&str> = result.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn test_pipeline_empty_input() {
        let result = filter_events(
            &[],
            &FilterCriteria::new(),
            &UserSignals::new(),
            &RelevanceConfig::default(),
        );
        assert!(result.is_empty());
    }
}
