//! Query descriptors: interpreted searches and filter criteria.

use super::Persona;
use serde::{Deserialize, Serialize};

/// Structured result of interpreting a free-text search.
///
/// Produced once per search submission by
/// [`interpret_query`](crate::services::interpret_query) and consumed into a
/// [`FilterCriteria`]; not retained afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretedQuery {
    /// The user's literal query text, unmodified (callers may still want the
    /// original phrasing for display or exact-text fallback filtering).
    pub processed_query: String,
    /// Inferred category labels, deduplicated, in first-insertion order.
    pub categories: Vec<String>,
    /// Whether the query signals an interest in free food.
    pub has_free_food: bool,
}

impl InterpretedQuery {
    /// Wraps a raw query with no inferred filters.
    #[must_use]
    pub fn passthrough(query: impl Into<String>) -> Self {
        Self {
            processed_query: query.into(),
            categories: Vec::new(),
            has_free_food: false,
        }
    }

    /// Adds a category if it is not already present, preserving insertion
    /// order.
    pub fn push_category(&mut self, label: impl Into<String>) {
        let label = label.into();
        if !self.categories.contains(&label) {
            self.categories.push(label);
        }
    }
}

/// Filter criteria for one pipeline invocation.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Persona bias; `None` disables the persona stage.
    pub persona: Option<Persona>,
    /// Free-text query; empty disables the query stage.
    pub query: String,
    /// Requested category labels; empty disables the category stage.
    pub categories: Vec<String>,
    /// When set, keep only events offering free food.
    pub free_food_only: bool,
}

impl FilterCriteria {
    /// Creates empty criteria (matches all).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            persona: None,
            query: String::new(),
            categories: Vec::new(),
            free_food_only: false,
        }
    }

    /// Sets the persona.
    #[must_use]
    pub const fn with_persona(mut self, persona: Persona) -> Self {
        self.persona = Some(persona);
        self
    }

    /// Sets the free-text query.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Adds a requested category.
    #[must_use]
    pub fn with_category(mut self, label: impl Into<String>) -> Self {
        self.categories.push(label.into());
        self
    }

    /// Sets the free-food-only flag.
    #[must_use]
    pub const fn with_free_food_only(mut self, on: bool) -> Self {
        self.free_food_only = on;
        self
    }

    /// Builds criteria from an interpreted query, carrying over the inferred
    /// categories and free-food intent.
    #[must_use]
    pub fn from_interpreted(interpreted: InterpretedQuery, persona: Option<Persona>) -> Self {
        Self {
            persona,
            query: interpreted.processed_query,
            categories: interpreted.categories,
            free_food_only: interpreted.has_free_food,
        }
    }

    /// Returns true when no explicit filter is active. The persona is a
    /// standing preference, not an explicit filter, so it does not count;
    /// this is what triggers the recommendation fallback.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.query.trim().is_empty() && self.categories.is_empty() && !self.free_food_only
    }
}
