//! Theme vocabularies and category classification.
//!
//! A theme is a named set of terms ("Food" → {food, pizza, breakfast, …}).
//! Classification computes the Jaccard similarity between an input token set
//! and each vocabulary's term set, emitting the theme's label when the
//! similarity clears a threshold. Labels come out in vocabulary declaration
//! order and are deduplicated.
//!
//! The built-in vocabularies cover Academic, Career, Social, Technology, and
//! Food; additional themes load from TOML without code change.

use crate::text::{bag_of_words, jaccard};
use crate::{Error, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::LazyLock;

const ACADEMIC_TERMS: &[&str] = &[
    "class",
    "study",
    "lecture",
    "professor",
    "academic",
    "course",
    "tutoring",
    "workshop",
    "seminar",
    "research",
    "laboratory",
    "lab",
    "project",
    "assignment",
    "exam",
    "test",
    "quiz",
    "presentation",
    "thesis",
    "dissertation",
    "education",
    "learning",
    "teaching",
    "faculty",
    "student",
    "graduate",
    "undergraduate",
];

const CAREER_TERMS: &[&str] = &[
    "career",
    "job",
    "internship",
    "resume",
    "interview",
    "network",
    "fair",
    "employment",
    "recruit",
    "hiring",
    "professional",
    "industry",
    "company",
    "business",
    "corporate",
    "skill",
    "opportunity",
    "position",
    "application",
];

const SOCIAL_TERMS: &[&str] = &[
    "social",
    "party",
    "meet",
    "friend",
    "fun",
    "hang out",
    "gathering",
    "mixer",
    "celebration",
    "event",
    "club",
    "organization",
    "group",
    "community",
    "society",
    "entertainment",
    "recreation",
    "activity",
    "game",
    "sport",
    "competition",
];

const TECHNOLOGY_TERMS: &[&str] = &[
    "tech",
    "coding",
    "programming",
    "computer",
    "software",
    "hardware",
    "hackathon",
    "development",
    "app",
    "application",
    "website",
    "internet",
    "digital",
    "data",
    "algorithm",
    "artificial intelligence",
    "ai",
    "machine learning",
    "ml",
    "cybersecurity",
    "security",
    "network",
    "database",
    "cloud",
    "web",
    "mobile",
    "game",
    "virtual reality",
    "vr",
    "augmented reality",
    "ar",
    "blockchain",
    "cryptocurrency",
];

const FOOD_TERMS: &[&str] = &[
    "food",
    "pizza",
    "breakfast",
    "lunch",
    "dinner",
    "snack",
    "eat",
    "meal",
    "refreshment",
    "catering",
    "buffet",
    "cuisine",
    "drink",
    "beverage",
    "coffee",
    "sandwich",
    "bagel",
    "donut",
    "cookie",
    "fruit",
    "vegetables",
    "salad",
];

/// Label of the built-in food theme, referenced by the query interpreter.
pub const FOOD_LABEL: &str = "Food";

static BUILTIN: LazyLock<ThemeLexicon> = LazyLock::new(|| {
    let themes = vec![
        ThemeVocabulary::from_static("Academic", ACADEMIC_TERMS),
        ThemeVocabulary::from_static("Career", CAREER_TERMS),
        ThemeVocabulary::from_static("Social", SOCIAL_TERMS),
        ThemeVocabulary::from_static("Technology", TECHNOLOGY_TERMS),
        ThemeVocabulary::from_static(FOOD_LABEL, FOOD_TERMS),
    ];
    ThemeLexicon { themes }
});

/// A named term set used for category inference.
#[derive(Debug, Clone)]
pub struct ThemeVocabulary {
    label: String,
    terms: Vec<String>,
    term_set: HashSet<String>,
}

impl ThemeVocabulary {
    /// Creates a vocabulary from a label and term list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the label or term list is empty.
    pub fn new(label: impl Into<String>, terms: Vec<String>) -> Result<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(Error::InvalidConfig("theme label is empty".to_string()));
        }
        if terms.is_empty() {
            return Err(Error::InvalidConfig(format!(
                "theme '{label}' has no terms"
            )));
        }
        let term_set = terms.iter().map(|t| t.to_lowercase()).collect();
        Ok(Self {
            label,
            terms,
            term_set,
        })
    }

    fn from_static(label: &str, terms: &[&str]) -> Self {
        let terms: Vec<String> = terms.iter().map(|&t| t.to_string()).collect();
        let term_set = terms.iter().cloned().collect();
        Self {
            label: label.to_string(),
            terms,
            term_set,
        }
    }

    /// Returns the theme's label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the terms in declaration order.
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Jaccard similarity between the given token set and this vocabulary.
    #[must_use]
    pub fn similarity(&self, tokens: &HashSet<String>) -> f64 {
        jaccard(tokens, &self.term_set)
    }
}

/// An ordered collection of theme vocabularies.
///
/// Immutable after construction and shared read-only by the classifier and
/// the query interpreter; safe to reference from concurrent invocations.
#[derive(Debug, Clone)]
pub struct ThemeLexicon {
    themes: Vec<ThemeVocabulary>,
}

impl ThemeLexicon {
    /// Returns the built-in lexicon: Academic, Career, Social, Technology,
    /// Food.
    #[must_use]
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Returns the vocabularies in declaration order.
    #[must_use]
    pub fn themes(&self) -> &[ThemeVocabulary] {
        &self.themes
    }

    /// Looks up a vocabulary by label.
    #[must_use]
    pub fn vocabulary(&self, label: &str) -> Option<&ThemeVocabulary> {
        self.themes.iter().find(|t| t.label == label)
    }

    /// Appends a theme, replacing any existing theme with the same label.
    #[must_use]
    pub fn with_theme(mut self, theme: ThemeVocabulary) -> Self {
        self.themes.retain(|t| t.label != theme.label);
        self.themes.push(theme);
        self
    }

    /// Parses a lexicon from a TOML document of the form:
    ///
    /// ```toml
    /// [[themes]]
    /// label = "Wellness"
    /// terms = ["yoga", "meditation", "fitness"]
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the document does not parse or an
    /// entry has an empty label or term list.
    pub fn from_toml_str(doc: &str) -> Result<Self> {
        let file: ThemesFile =
            toml::from_str(doc).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        let themes = file
            .themes
            .into_iter()
            .map(|entry| ThemeVocabulary::new(entry.label, entry.terms))
            .collect::<Result<Vec<_>>>()?;
        if themes.is_empty() {
            return Err(Error::InvalidConfig(
                "no [[themes]] entries in document".to_string(),
            ));
        }
        Ok(Self { themes })
    }

    /// Classifies a token set: labels of all themes whose similarity exceeds
    /// the threshold, in declaration order, deduplicated.
    #[must_use]
    pub fn classify(&self, tokens: &HashSet<String>, threshold: f64) -> Vec<String> {
        let mut labels = Vec::new();
        for theme in &self.themes {
            if theme.similarity(tokens) > threshold
                && !labels.iter().any(|l: &String| l == &theme.label)
            {
                labels.push(theme.label.clone());
            }
        }
        labels
    }

    /// Tokenizes text and classifies the resulting bag-of-words.
    #[must_use]
    pub fn classify_text(&self, text: &str, threshold: f64) -> Vec<String> {
        self.classify(&bag_of_words(text), threshold)
    }

    /// Suggests categories for a long-form event description.
    ///
    /// Same algorithm as [`classify_text`](Self::classify_text); call sites
    /// pass the description threshold from
    /// [`RelevanceConfig`](crate::config::RelevanceConfig), which is tuned
    /// higher than the query threshold because descriptions carry far more
    /// tokens.
    #[must_use]
    pub fn suggest_categories(&self, description: &str, threshold: f64) -> Vec<String> {
        self.classify_text(description, threshold)
    }
}

impl Default for ThemeLexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

#[derive(Debug, Deserialize)]
struct ThemesFile {
    #[serde(default)]
    themes: Vec<ThemeEntry>,
}

#[derive(Debug, Deserialize)]
struct ThemeEntry {
    label: String,
    terms: Vec<String>,
}
