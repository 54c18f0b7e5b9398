//! Engine services.
//!
//! Pure functions orchestrating the text, theme, and model layers into the
//! user-facing operations: query interpretation, the staged filter pipeline,
//! semantic search, recommendations, and search suggestions.

mod filter;
mod interpreter;
mod recommend;
mod semantic;
mod suggest;

pub use filter::{
    filter_by_categories, filter_by_free_food, filter_by_persona, filter_by_query, filter_events,
};
pub use interpreter::interpret_query;
pub use recommend::{recommend_events, recommendation_score};
pub use semantic::{semantic_search, semantic_similarity};
pub use suggest::{RecentEventsCache, suggest_titles};
