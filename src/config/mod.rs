//! Configuration management.
//!
//! The engine's only tunables are the similarity thresholds and the small
//! result-shaping counts. They live in [`RelevanceConfig`] as data, not as
//! magic literals, and can be overridden from a TOML document that may also
//! carry replacement theme vocabularies.

use crate::themes::{ThemeLexicon, ThemeVocabulary};
use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Tunable parameters for query interpretation, search, and suggestions.
///
/// The two classification thresholds were chosen empirically: queries are a
/// handful of tokens, so a small overlap is already a signal; long-form
/// descriptions need a higher bar to avoid tagging every event that mentions
/// "study" or "game" once.
#[derive(Debug, Clone, PartialEq)]
pub struct RelevanceConfig {
    /// Theme-classification threshold for free-text queries.
    pub query_theme_threshold: f64,
    /// Theme-classification threshold for long-form descriptions.
    pub description_theme_threshold: f64,
    /// Minimum similarity for a semantic-search hit to survive.
    pub relevance_floor: f64,
    /// Queries with more tokens than this go through semantic search;
    /// shorter ones use plain substring matching.
    pub semantic_token_threshold: usize,
    /// How many top-scored events the recommendation fallback surfaces.
    pub recommended_count: usize,
    /// Maximum number of search suggestions.
    pub max_suggestions: usize,
    /// Suggestions appear only once the in-progress query is longer than
    /// this many characters.
    pub min_suggestion_chars: usize,
}

impl Default for RelevanceConfig {
    fn default() -> Self {
        Self {
            query_theme_threshold: 0.05,
            description_theme_threshold: 0.08,
            relevance_floor: 0.05,
            semantic_token_threshold: 2,
            recommended_count: 3,
            max_suggestions: 5,
            min_suggestion_chars: 2,
        }
    }
}

impl RelevanceConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the query classification threshold.
    #[must_use]
    pub const fn with_query_theme_threshold(mut self, threshold: f64) -> Self {
        self.query_theme_threshold = threshold;
        self
    }

    /// Sets the description classification threshold.
    #[must_use]
    pub const fn with_description_theme_threshold(mut self, threshold: f64) -> Self {
        self.description_theme_threshold = threshold;
        self
    }

    /// Sets the semantic-search relevance floor.
    #[must_use]
    pub const fn with_relevance_floor(mut self, floor: f64) -> Self {
        self.relevance_floor = floor;
        self
    }

    /// Sets the recommendation fallback size.
    #[must_use]
    pub const fn with_recommended_count(mut self, count: usize) -> Self {
        self.recommended_count = count;
        self
    }

    /// Sets the suggestion cap.
    #[must_use]
    pub const fn with_max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = max;
        self
    }

    /// Checks that every threshold is a valid similarity in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("query_theme_threshold", self.query_theme_threshold),
            (
                "description_theme_threshold",
                self.description_theme_threshold,
            ),
            ("relevance_floor", self.relevance_floor),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Configuration file structure (for TOML parsing).
///
/// Every section is optional; absent values fall back to the defaults in
/// [`RelevanceConfig`] and the built-in [`ThemeLexicon`].
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Similarity thresholds.
    pub thresholds: Option<ConfigFileThresholds>,
    /// Search shaping knobs.
    pub search: Option<ConfigFileSearch>,
    /// Suggestion shaping knobs.
    pub suggestions: Option<ConfigFileSuggestions>,
    /// Replacement theme vocabularies.
    #[serde(default)]
    pub themes: Vec<ConfigFileTheme>,
}

/// Thresholds section in the config file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFileThresholds {
    /// Query classification threshold.
    pub query_theme: Option<f64>,
    /// Description classification threshold.
    pub description_theme: Option<f64>,
    /// Semantic-search relevance floor.
    pub relevance_floor: Option<f64>,
}

/// Search section in the config file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFileSearch {
    /// Token count above which semantic search kicks in.
    pub semantic_token_threshold: Option<usize>,
    /// Recommendation fallback size.
    pub recommended_count: Option<usize>,
}

/// Suggestions section in the config file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFileSuggestions {
    /// Maximum number of suggestions.
    pub max: Option<usize>,
    /// Minimum in-progress query length.
    pub min_query_chars: Option<usize>,
}

/// A theme entry in the config file.
#[derive(Debug, Deserialize)]
pub struct ConfigFileTheme {
    /// Theme label.
    pub label: String,
    /// Terms belonging to the theme.
    pub terms: Vec<String>,
}

impl ConfigFile {
    /// Parses a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the TOML does not parse.
    pub fn from_toml_str(doc: &str) -> Result<Self> {
        toml::from_str(doc).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    /// Reads and parses a configuration file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let doc = std::fs::read_to_string(path).map_err(|e| {
            Error::InvalidConfig(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&doc)
    }

    /// Produces a [`RelevanceConfig`] with this file's overrides applied
    /// over the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if an override falls outside `[0, 1]`.
    pub fn relevance_config(&self) -> Result<RelevanceConfig> {
        let mut config = RelevanceConfig::default();
        if let Some(thresholds) = &self.thresholds {
            if let Some(v) = thresholds.query_theme {
                config.query_theme_threshold = v;
            }
            if let Some(v) = thresholds.description_theme {
                config.description_theme_threshold = v;
            }
            if let Some(v) = thresholds.relevance_floor {
                config.relevance_floor = v;
            }
        }
        if let Some(search) = &self.search {
            if let Some(v) = search.semantic_token_threshold {
                config.semantic_token_threshold = v;
            }
            if let Some(v) = search.recommended_count {
                config.recommended_count = v;
            }
        }
        if let Some(suggestions) = &self.suggestions {
            if let Some(v) = suggestions.max {
                config.max_suggestions = v;
            }
            if let Some(v) = suggestions.min_query_chars {
                config.min_suggestion_chars = v;
            }
        }
        config.validate()?;
        Ok(config)
    }

    /// Produces the theme lexicon: the built-in vocabularies, extended by
    /// this file's `[[themes]]` entries (an entry with a built-in label
    /// replaces that vocabulary).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for an entry with an empty label or
    /// term list.
    pub fn theme_lexicon(&self) -> Result<ThemeLexicon> {
        if self.themes.is_empty() {
            return Ok(ThemeLexicon::builtin());
        }
        let mut lexicon = ThemeLexicon::builtin();
        for entry in &self.themes {
            lexicon =
                lexicon.with_theme(ThemeVocabulary::new(&entry.label, entry.terms.clone())?);
        }
        Ok(lexicon)
    }
}
