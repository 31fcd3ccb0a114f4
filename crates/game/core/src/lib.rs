//! Deterministic PvP battle resolution.
//!
//! `game-core` defines the canonical battle rules and exposes pure APIs that
//! the runtime and offline tools reuse. A battle is a function of two locked
//! [`CharacterBuild`]s and an [`RngOracle`]; everything flows through
//! [`engine::BattleEngine::simulate`], which returns the ordered battle log,
//! its digest and a rendered chronicle.
//!
//! Modules are organized by responsibility:
//! - [`stats`] and [`state`] describe combatants
//! - [`env`] holds the oracle traits (items, roster, randomness)
//! - [`combat`] provides the opposed check and damage formulas
//! - [`ability`] implements the signature archetypes
//! - [`record`] holds the battle log, digest and narration
pub mod ability;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod record;
pub mod state;
pub mod stats;

pub use ability::{
    Archetype, ArchetypeRegistry, BasicAttacker, CharmDrainSnowball, DefeatOutcome,
    RegenerationSealGated, TransformMultiGate, TurnContext, TurnOutcome,
};
pub use combat::{CheckKind, CheckResult, opposed_check};
pub use config::BattleConfig;
pub use engine::{BattleEngine, BattleEngineBuilder, BattleOutcome};
pub use env::{
    BaseCharacter, FixedRng, ItemDefinition, ItemEffect, ItemOracle, PcgRng, RngOracle,
    RosterOracle, ScriptedRng,
};
pub use error::{BattleError, ErrorSeverity, GameError};
pub use record::{BattleStep, LogDigest, StepKind, StepPayload, log_digest, render_narration};
pub use state::{
    ArchetypeId, BattleSnapshot, CharacterBuild, CharacterId, CharacterStatus, ItemId, PlayerId,
    Side,
};
pub use stats::{Attribute, StatBlock};
