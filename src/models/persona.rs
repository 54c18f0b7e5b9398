//! Persona and user-signal types.

use super::EventId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Coarse user segment used to bias filtering and ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    /// Commutes to campus; favors daytime events and free food.
    Commuter,
    /// Lives on campus; favors evening and residence-hall events.
    Resident,
}

impl Persona {
    /// Returns all persona variants.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Commuter, Self::Resident]
    }

    /// Returns the persona as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Commuter => "commuter",
            Self::Resident => "resident",
        }
    }

    /// Parses a persona from a string. Unknown values yield `None`, which
    /// downstream filter stages treat as "no persona bias".
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "commuter" => Some(Self::Commuter),
            "resident" => Some(Self::Resident),
            _ => None,
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Read-only user state consumed by the recommendation scorer.
///
/// The surrounding application owns and mutates this state as the user views
/// events; the engine only reads it.
#[derive(Debug, Clone, Default)]
pub struct UserSignals {
    /// Identifiers of events the user has already viewed.
    pub viewed: HashSet<EventId>,
    /// Interest tags accumulated from viewed events' categories.
    pub interests: Vec<String>,
}

impl UserSignals {
    /// Creates empty signals (new or anonymous user).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a viewed event ID.
    #[must_use]
    pub fn with_viewed(mut self, id: impl Into<EventId>) -> Self {
        self.viewed.insert(id.into());
        self
    }

    /// Adds an interest tag.
    #[must_use]
    pub fn with_interest(mut self, interest: impl Into<String>) -> Self {
        self.interests.push(interest.into());
        self
    }

    /// Returns true if the user has viewed the given event.
    #[must_use]
    pub fn has_viewed(&self, id: &EventId) -> bool {
        self.viewed.contains(id)
    }

    /// Returns the interest tags lowercased, for case-insensitive matching.
    #[must_use]
    pub fn interest_set(&self) -> HashSet<String> {
        self.interests.iter().map(|i| i.to_lowercase()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_parse() {
        assert_eq!(Persona::parse("commuter"), Some(Persona::Commuter));
        assert_eq!(Persona::parse("RESIDENT"), Some(Persona::Resident));
        assert_eq!(Persona::parse("visitor"), None);
        assert_eq!(Persona::parse(""), None);
    }

    #[test]
    fn test_persona_as_str_roundtrip() {
        for persona in Persona::all() {
            assert_eq!(Persona::parse(persona.as_str()), Some(*persona));
        }
    }

    #[test]
    fn test_user_signals_builder() {
        let signals = UserSignals::new()
            .with_viewed("1")
            .with_interest("Academic")
            .with_interest("FOOD");

        assert!(signals.has_viewed(&EventId::new("1")));
        assert!(!signals.has_viewed(&EventId::new("2")));

        let interests = signals.interest_set();
        assert!(interests.contains("academic"));
        assert!(interests.contains("food"));
    }
}
