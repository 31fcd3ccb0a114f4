use std::collections::BTreeSet;

use super::ids::{ArchetypeId, CharacterId, ItemId, PlayerId};
use crate::error::BattleError;
use crate::stats::StatBlock;

/// Lifecycle of an owned character.
///
/// Characters are rolled as candidates, trained over a session, then locked
/// into the permanent collection. Only locked characters may battle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum CharacterStatus {
    #[default]
    Candidate,
    Training,
    Locked,
}

impl CharacterStatus {
    pub const fn can_battle(self) -> bool {
        matches!(self, CharacterStatus::Locked)
    }
}

/// Immutable description of a locked character entering a battle.
///
/// Items are kept in a sorted set so modifiers are always applied in the same
/// order regardless of how the build was assembled.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterBuild {
    pub player: PlayerId,
    pub character: CharacterId,
    /// Display name used in step descriptions and narration.
    pub name: String,
    pub archetype: ArchetypeId,
    pub stats: StatBlock,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: BTreeSet<ItemId>,
}

impl CharacterBuild {
    pub fn new(
        player: impl Into<PlayerId>,
        character: impl Into<CharacterId>,
        name: impl Into<String>,
        archetype: impl Into<ArchetypeId>,
        stats: StatBlock,
    ) -> Self {
        Self {
            player: player.into(),
            character: character.into(),
            name: name.into(),
            archetype: archetype.into(),
            stats,
            items: BTreeSet::new(),
        }
    }

    /// Equips an item (builder pattern). Duplicates collapse.
    #[must_use]
    pub fn with_item(mut self, item: impl Into<ItemId>) -> Self {
        self.items.insert(item.into());
        self
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.items.iter().any(|owned| owned.as_str() == item)
    }

    pub fn validate(&self) -> Result<(), BattleError> {
        self.stats.validate(&self.character)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_items_collapse() {
        let build = CharacterBuild::new("p1", "c1", "Kyuu", "basic", StatBlock::default())
            .with_item("sealing_threads")
            .with_item("sealing_threads");
        assert_eq!(build.items.len(), 1);
        assert!(build.has_item("sealing_threads"));
        assert!(!build.has_item("essence_crystal"));
    }
}
