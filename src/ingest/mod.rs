//! Ingestion boundary: external event payloads → canonical [`Event`]s.
//!
//! Upstream sources disagree on field names (`endTime` vs `end_time`,
//! `image` vs `image_url` vs `imagePath`) and on which fields are present at
//! all. All of that variance is absorbed here, once, so the engine's
//! invariants hold unconditionally past this point: inside the core nothing
//! branches on field presence and descriptions are already plain text.

use crate::models::{ClockTime, Event, EventId};
use crate::{Error, Result};
use chrono::NaiveDate;
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

#[allow(clippy::expect_used)] // static pattern, guaranteed to compile
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("static regex: markup tag"));

/// Description text used when a payload carries none.
const DEFAULT_DESCRIPTION: &str = "No description available";
/// Location text used when a payload carries none.
const DEFAULT_LOCATION: &str = "TBD";
/// Category applied to events whose source lists no themes.
const DEFAULT_CATEGORY: &str = "Campus Event";

/// Description/title phrases that imply complimentary food when the payload
/// has no explicit flag.
const FREE_FOOD_MARKERS: &[&str] = &["free food", "pizza", "refreshments"];

/// Removes HTML tags from text and decodes the handful of entities campus
/// feeds actually emit.
#[must_use]
pub fn strip_markup(text: &str) -> String {
    let stripped = TAG_PATTERN.replace_all(text, "");
    stripped
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

/// An event payload as received from an external source.
///
/// Field aliases cover every legacy naming variant observed across feed
/// revisions; deserialize from whichever shape arrives and convert with
/// [`RawEvent::into_event`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
    /// Source identifier.
    pub id: String,
    /// Event title.
    #[serde(alias = "name")]
    pub title: String,
    /// Description, possibly containing markup.
    #[serde(default)]
    pub description: Option<String>,
    /// Venue text.
    #[serde(default)]
    pub location: Option<String>,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Start time, `h:mm AM`.
    #[serde(alias = "startTime", alias = "start_time")]
    pub time: String,
    /// End time, `h:mm AM`.
    #[serde(alias = "endTime")]
    pub end_time: String,
    /// Category labels.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Explicit free-food flag; absent in older feeds.
    #[serde(default, alias = "hasFreeFood")]
    pub has_free_food: Option<bool>,
    /// Image URL.
    #[serde(default, alias = "image", alias = "imagePath")]
    pub image_url: Option<String>,
    /// Organizer name.
    #[serde(default, alias = "organizerName", alias = "organizationName")]
    pub organizer_name: Option<String>,
}

impl RawEvent {
    /// Converts the payload into a canonical [`Event`].
    ///
    /// Applies defaults for missing description/location/categories, strips
    /// markup from the description, and infers the free-food flag from the
    /// text when the payload has no explicit one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEvent`] for an empty identifier, a date that
    /// is not `YYYY-MM-DD`, or a time that is not `h:mm AM`/`h:mm PM`.
    pub fn into_event(self) -> Result<Event> {
        if self.id.trim().is_empty() {
            return Err(Error::InvalidEvent("empty event id".to_string()));
        }

        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|_| Error::InvalidEvent(format!("bad date '{}'", self.date)))?;
        let start_time = ClockTime::parse(&self.time)
            .ok_or_else(|| Error::InvalidEvent(format!("bad time '{}'", self.time)))?;
        let end_time = ClockTime::parse(&self.end_time)
            .ok_or_else(|| Error::InvalidEvent(format!("bad time '{}'", self.end_time)))?;

        let description = strip_markup(
            self.description
                .as_deref()
                .filter(|d| !d.trim().is_empty())
                .unwrap_or(DEFAULT_DESCRIPTION),
        );
        let location = self
            .location
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string());
        let categories = if self.categories.is_empty() {
            vec![DEFAULT_CATEGORY.to_string()]
        } else {
            self.categories
        };

        let has_free_food = self
            .has_free_food
            .unwrap_or_else(|| infer_free_food(&self.title, &description));

        Ok(Event {
            id: EventId::new(self.id),
            title: self.title,
            description,
            location,
            date,
            start_time,
            end_time,
            categories,
            has_free_food,
            organizer: self.organizer_name,
            image_url: self.image_url,
        })
    }
}

/// Infers the free-food flag from title and description text.
fn infer_free_food(title: &str, description: &str) -> bool {
    let title = title.to_lowercase();
    let description = description.to_lowercase();
    title.contains("free food")
        || FREE_FOOD_MARKERS
            .iter()
            .any(|marker| description.contains(marker))
}

/// Deserializes a JSON array of raw events and converts each to the
/// canonical model.
///
/// # Errors
///
/// Returns [`Error::InvalidEvent`] if the JSON does not parse or any payload
/// fails conversion.
pub fn events_from_json(doc: &str) -> Result<Vec<Event>> {
    let raws: Vec<RawEvent> =
        serde_json::from_str(doc).map_err(|e| Error::InvalidEvent(e.to_string()))?;
    raws.into_iter().map(RawEvent::into_event).collect()
}
