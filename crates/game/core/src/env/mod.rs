//! Traits describing read-only battle environments (oracles).
//!
//! Oracles expose static content (items, roster) and randomness to the engine
//! without giving it access to storage or I/O. Runtime crates provide the
//! concrete implementations.
mod items;
mod rng;
mod roster;

pub use items::{
    ItemDefinition, ItemEffect, ItemOracle, apply_percent, apply_stat_effects, find_check_effect,
};
pub use rng::{FixedRng, PcgRng, RngOracle, ScriptedRng, compute_seed};
pub use roster::{BaseCharacter, RosterOracle};
