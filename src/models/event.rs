//! Event types and identifiers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Creates a new event ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EventId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Half of the 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Meridiem {
    /// Before noon.
    Am,
    /// Noon and after.
    Pm,
}

impl Meridiem {
    /// Returns the meridiem as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }
}

/// A wall-clock time on the 12-hour clock, e.g. `7:30 PM`.
///
/// The hour component is the 12-hour digit (1 through 12). Daytime and
/// evening classification operate on that digit: daytime is any AM time or a
/// PM time with hour strictly below 5, evening is a PM time with hour 5 or
/// later. 12:xx PM has hour component 12 and falls outside both windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    /// Hour on the 12-hour clock (1-12).
    pub hour: u8,
    /// Minute (0-59).
    pub minute: u8,
    /// AM or PM.
    pub meridiem: Meridiem,
}

impl ClockTime {
    /// Creates a clock time, returning `None` for out-of-range components.
    #[must_use]
    pub const fn new(hour: u8, minute: u8, meridiem: Meridiem) -> Option<Self> {
        if hour >= 1 && hour <= 12 && minute <= 59 {
            Some(Self {
                hour,
                minute,
                meridiem,
            })
        } else {
            None
        }
    }

    /// Parses a time string like `"9:00 AM"` or `"12:30 PM"`.
    ///
    /// Returns `None` if the string is not `h:mm AM`/`h:mm PM` with an hour
    /// in 1-12 and a minute in 0-59. Matching on the meridiem marker is
    /// case-insensitive.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.split_whitespace();
        let hm = parts.next()?;
        let marker = parts.next()?;
        if parts.next().is_some() {
            return None;
        }

        let meridiem = match marker.to_ascii_uppercase().as_str() {
            "AM" => Meridiem::Am,
            "PM" => Meridiem::Pm,
            _ => return None,
        };

        let (hour_str, minute_str) = hm.split_once(':')?;
        let hour: u8 = hour_str.parse().ok()?;
        let minute: u8 = minute_str.parse().ok()?;

        Self::new(hour, minute, meridiem)
    }

    /// Returns true for daytime: any AM time, or a PM time before 5.
    #[must_use]
    pub const fn is_daytime(&self) -> bool {
        matches!(self.meridiem, Meridiem::Am) || self.hour < 5
    }

    /// Returns true for evening: a PM time at 5 or later.
    #[must_use]
    pub const fn is_evening(&self) -> bool {
        matches!(self.meridiem, Meridiem::Pm) && self.hour >= 5
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02} {}", self.hour, self.minute, self.meridiem.as_str())
    }
}

impl TryFrom<String> for ClockTime {
    type Error = crate::Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s).ok_or_else(|| crate::Error::InvalidEvent(format!("bad time '{s}'")))
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> Self {
        t.to_string()
    }
}

/// A campus event: the unit of search, filtering, and ranking.
///
/// Instances are produced by the ingestion adapter (see [`crate::ingest`]),
/// which guarantees structural validity: the identifier is unique within a
/// working set and the description is already stripped of markup. An event
/// may carry zero categories; nothing in the engine assumes a non-empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier.
    pub id: EventId,
    /// Event title.
    pub title: String,
    /// Plain-text description (markup stripped at ingestion).
    pub description: String,
    /// Venue text, e.g. `"Campus Center Ballroom"`.
    pub location: String,
    /// Calendar date of the event.
    pub date: NaiveDate,
    /// Start time; drives daytime/evening classification.
    pub start_time: ClockTime,
    /// End time.
    pub end_time: ClockTime,
    /// Category labels, in the order the organizer listed them.
    pub categories: Vec<String>,
    /// Whether the event offers complimentary food.
    pub has_free_food: bool,
    /// Organizer name, when known.
    pub organizer: Option<String>,
    /// Promotional image URL, when provided.
    pub image_url: Option<String>,
}

impl Event {
    /// Returns true if the event carries the given category label exactly.
    #[must_use]
    pub fn is_tagged(&self, label: &str) -> bool {
        self.categories.iter().any(|c| c == label)
    }

    /// Concatenates title, description, and categories into the haystack
    /// used for semantic matching. Location is not part of the haystack;
    /// the lexical query filter covers it separately.
    #[must_use]
    pub fn combined_text(&self) -> String {
        let mut text = String::with_capacity(
            self.title.len() + self.description.len() + self.categories.len() * 8 + 2,
        );
        text.push_str(&self.title);
        text.push(' ');
        text.push_str(&self.description);
        for category in &self.categories {
            text.push(' ');
            text.push_str(category);
        }
        text
    }
}
