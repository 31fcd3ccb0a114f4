//! Runtime services for the PvP arena.
//!
//! This crate wires the pure battle engine to content oracles, repositories
//! and an event channel. Consumers embed [`BattleService`] to run challenges,
//! query match history and audit recorded matches.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the battle service and builder
//! - [`api`] exposes the error types downstream clients interact with
//! - [`events`] broadcasts recorded and replayed matches
//! - [`oracle`] and [`repository`] provide data adapters reused by other crates
pub mod api;
pub mod events;
pub mod oracle;
pub mod repository;
pub mod runtime;

pub use api::{Result, RuntimeError};
pub use events::{EventBus, MatchEvent, MatchSummary};
pub use oracle::{ItemOracleImpl, OracleManager, RosterOracleImpl};
pub use repository::{
    CharacterRecord, CharacterRepository, InMemoryCharacterRepository, InMemoryMatchRepository,
    MatchId, MatchRecord, MatchRepository, RepositoryError,
};
pub use runtime::{BattleService, BattleServiceBuilder, RuntimeConfig};
