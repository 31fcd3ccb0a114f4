//! Battle participants: persisted builds and their per-battle snapshots.
mod build;
mod ids;
mod snapshot;

pub use build::{CharacterBuild, CharacterStatus};
pub use ids::{ArchetypeId, CharacterId, ItemId, PlayerId};
pub use snapshot::{BattleSnapshot, Combatants, Side, StatusEffect, StatusKind};
