//! # Compass Relevance
//!
//! Event relevance engine for the Campus Compass campus-life application.
//!
//! The crate turns free-text searches into structured filters, matches and
//! ranks events with a lightweight bag-of-words similarity measure, and
//! blends persona, viewing history, and interest signals into a scored
//! recommendation list.
//!
//! ## Features
//!
//! - Natural-language query interpretation (categories + free-food intent)
//! - Jaccard-based lexical/semantic matching for search and suggestions
//! - Staged filter pipeline: persona, query, categories, free food
//! - Multi-factor recommendation scoring with stable ranking
//! - Data-driven theme vocabularies, extensible via TOML
//!
//! Every engine function is a pure, synchronous computation over in-memory
//! data. The only fallible surfaces are the ingestion adapter (malformed
//! external payloads) and the configuration loader.
//!
//! ## Example
//!
//! ```rust
//! use compass_relevance::{RelevanceConfig, ThemeLexicon, interpret_query};
//!
//! let lexicon = ThemeLexicon::builtin();
//! let config = RelevanceConfig::default();
//! let interpreted = interpret_query("free pizza tonight", &lexicon, &config);
//! assert!(interpreted.has_free_food);
//! assert!(interpreted.categories.iter().any(|c| c == "Food"));
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

// Module declarations
pub mod config;
pub mod ingest;
pub mod models;
pub mod services;
pub mod text;
pub mod themes;

// Re-exports for convenience
pub use config::{ConfigFile, RelevanceConfig};
pub use ingest::{RawEvent, events_from_json, strip_markup};
pub use models::{
    ClockTime, Event, EventId, FilterCriteria, InterpretedQuery, Meridiem, Persona, UserSignals,
};
pub use services::{
    RecentEventsCache, filter_events, interpret_query, recommend_events, semantic_search,
    suggest_titles,
};
pub use themes::{ThemeLexicon, ThemeVocabulary};

/// Error type for ingestion and configuration boundaries.
///
/// The engine itself is total over its documented input domain: filtering,
/// interpretation, and ranking never fail for well-typed input. Errors arise
/// only when external payloads or configuration documents are malformed.
#[derive(Debug, ThisError)]
pub enum Error {
    /// An external event payload could not be mapped to the canonical model.
    ///
    /// Raised when:
    /// - A date is not `YYYY-MM-DD`
    /// - A time is not `h:mm AM`/`h:mm PM`
    /// - A required field is empty
    #[error("invalid event payload: {0}")]
    InvalidEvent(String),

    /// A configuration document failed to parse or validate.
    ///
    /// Raised when:
    /// - The TOML document is syntactically invalid
    /// - A threshold falls outside `[0, 1]`
    /// - A theme entry has an empty label or term list
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for fallible boundary operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidEvent("bad time '25:00'".to_string());
        assert_eq!(err.to_string(), "invalid event payload: bad time '25:00'");

        let err = Error::InvalidConfig("threshold out of range".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: threshold out of range"
        );
    }
}
