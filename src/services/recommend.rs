//! Multi-factor recommendation scoring.

use crate::models::{Event, Persona, UserSignals};
use tracing::debug;

/// Penalty applied to events the user already viewed.
const VIEWED_PENALTY: i32 = -5;
/// Bonus per event category matching a user interest.
const INTEREST_BONUS: i32 = 3;
/// Bonus for events in the persona's preferred time window.
const TIME_WINDOW_BONUS: i32 = 2;
/// Bonus for free food (commuters only).
const FREE_FOOD_BONUS: i32 = 2;
/// Bonus for events tagged with the persona's own label.
const PERSONA_TAG_BONUS: i32 = 3;
/// Bonus for residence-hall locations (residents only).
const RESIDENCE_LOCATION_BONUS: i32 = 2;

/// Location substrings that mark a residence-hall venue.
const RESIDENCE_LOCATION_MARKERS: &[&str] = &["hall", "residence", "dorm"];

/// Computes the additive relevance score for one event.
///
/// Terms: viewed penalty, +3 per interest-matched category
/// (case-insensitive), and persona fit: commuters favor daytime, free food,
/// and "Commuter"-tagged events; residents favor evenings,
/// "Resident"-tagged events, and residence-hall locations.
#[must_use]
pub fn recommendation_score(event: &Event, signals: &UserSignals, persona: Persona) -> i32 {
    let mut score = 0;

    if signals.has_viewed(&event.id) {
        score += VIEWED_PENALTY;
    }

    let interests = signals.interest_set();
    for category in &event.categories {
        if interests.contains(&category.to_lowercase()) {
            score += INTEREST_BONUS;
        }
    }

    match persona {
        Persona::Commuter => {
            if event.start_time.is_daytime() {
                score += TIME_WINDOW_BONUS;
            }
            if event.has_free_food {
                score += FREE_FOOD_BONUS;
            }
            if event.is_tagged("Commuter") {
                score += PERSONA_TAG_BONUS;
            }
        }
        Persona::Resident => {
            if event.start_time.is_evening() {
                score += TIME_WINDOW_BONUS;
            }
            if event.is_tagged("Resident") {
                score += PERSONA_TAG_BONUS;
            }
            let location = event.location.to_lowercase();
            if RESIDENCE_LOCATION_MARKERS
                .iter()
                .any(|marker| location.contains(marker))
            {
                score += RESIDENCE_LOCATION_BONUS;
            }
        }
    }

    score
}

/// Ranks events by recommendation score, highest first.
///
/// The sort is stable: events with equal scores keep their input order. The
/// full input is returned; callers decide how many recommendations to
/// surface.
#[must_use]
pub fn recommend_events(events: &[Event], signals: &UserSignals, persona: Persona) -> Vec<Event> {
    let mut scored: Vec<(i32, &Event)> = events
        .iter()
        .map(|event| (recommendation_score(event, signals, persona), event))
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));

    debug!(
        persona = persona.as_str(),
        count = scored.len(),
        top_score = scored.first().map_or(0, |(s, _)| *s),
        "ranked recommendations"
    );
    scored.into_iter().map(|(_, event)| event.clone()).collect()
}
