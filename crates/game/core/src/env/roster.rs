//! Base character roster oracle.
use crate::state::ArchetypeId;
use crate::stats::StatBlock;

/// A collectible base character: the template owned characters are rolled from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseCharacter {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Signature ability; unknown ids fight with basic attacks.
    pub signature: ArchetypeId,
    pub base_stats: StatBlock,
}

/// Roster oracle providing base character definitions.
pub trait RosterOracle: Send + Sync {
    fn base_character(&self, id: &str) -> Option<BaseCharacter>;

    fn all_characters(&self) -> Vec<BaseCharacter>;
}
