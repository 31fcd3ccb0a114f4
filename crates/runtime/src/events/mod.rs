//! Event channel for match results.
//!
//! The battle service publishes one event per recorded or replayed match;
//! front-ends and bots subscribe to announce results.

mod bus;
mod types;

pub use bus::EventBus;
pub use types::{MatchEvent, MatchSummary};
