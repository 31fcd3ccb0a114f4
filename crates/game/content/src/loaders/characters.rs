//! Seeded player character loader.
//!
//! Characters in `characters.ron` reference a base character by id. Stats are
//! optional: a seed without explicit stats starts from the base stats, the
//! way a freshly rolled character does.

use std::path::Path;

use game_core::{
    BaseCharacter, CharacterBuild, CharacterId, CharacterStatus, ItemId, PlayerId, StatBlock,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// A player-owned character as stored in the data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSeed {
    pub id: CharacterId,
    pub owner: PlayerId,
    /// Base character id in the roster.
    pub base: String,
    #[serde(default)]
    pub status: CharacterStatus,
    /// Trained stats; `None` means untrained base stats.
    #[serde(default)]
    pub stats: Option<StatBlock>,
    #[serde(default)]
    pub items: Vec<ItemId>,
    /// Selected as the owner's active PvP character.
    #[serde(default)]
    pub active: bool,
}

impl CharacterSeed {
    pub fn effective_stats(&self, base: &BaseCharacter) -> StatBlock {
        self.stats.unwrap_or(base.base_stats)
    }

    /// Combines the seed with its base character into a battle build.
    pub fn to_build(&self, base: &BaseCharacter) -> CharacterBuild {
        self.items.iter().cloned().fold(
            CharacterBuild::new(
                self.owner.clone(),
                self.id.clone(),
                base.name.clone(),
                base.signature.clone(),
                self.effective_stats(base),
            ),
            |build, item| build.with_item(item),
        )
    }
}

/// Character file structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterCatalog {
    pub characters: Vec<CharacterSeed>,
}

/// Loader for seeded characters from RON files.
pub struct CharacterLoader;

impl CharacterLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<CharacterSeed>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<CharacterSeed>> {
        let catalog: CharacterCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse characters RON: {}", e))?;

        Ok(catalog.characters)
    }
}
