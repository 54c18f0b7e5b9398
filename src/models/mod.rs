//! Data models for the relevance engine.
//!
//! This module contains the canonical data structures shared by every
//! component: events, personas, user signals, and query descriptors.

mod event;
mod persona;
mod query;

pub use event::{ClockTime, Event, EventId, Meridiem};
pub use persona::{Persona, UserSignals};
pub use query::{FilterCriteria, InterpretedQuery};
