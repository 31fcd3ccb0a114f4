//! Content factory for loading arena content from a data directory.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use game_core::{BaseCharacter, BattleConfig, ItemDefinition};

use crate::loaders::{
    CharacterLoader, CharacterSeed, ConfigLoader, ItemLoader, LoadResult, RosterLoader,
};

/// Content factory that loads all arena content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── roster.ron
/// ├── items.ron
/// └── characters.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

/// Everything loaded from a data directory, cross-checked.
#[derive(Debug, Clone)]
pub struct ContentBundle {
    pub config: BattleConfig,
    pub roster: Vec<BaseCharacter>,
    pub items: Vec<ItemDefinition>,
    pub characters: Vec<CharacterSeed>,
}

impl ContentBundle {
    pub fn base_character(&self, id: &str) -> Option<&BaseCharacter> {
        self.roster.iter().find(|base| base.id == id)
    }
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load battle configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the base character roster from `roster.ron`.
    pub fn load_roster(&self) -> LoadResult<Vec<BaseCharacter>> {
        RosterLoader::load(&self.data_dir.join("roster.ron"))
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<ItemDefinition>> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load seeded player characters from `characters.ron`.
    pub fn load_characters(&self) -> LoadResult<Vec<CharacterSeed>> {
        CharacterLoader::load(&self.data_dir.join("characters.ron"))
    }

    /// Load every file and check that characters only reference known
    /// base characters and items.
    pub fn load_bundle(&self) -> LoadResult<ContentBundle> {
        let bundle = ContentBundle {
            config: self.load_config()?,
            roster: self.load_roster()?,
            items: self.load_items()?,
            characters: self.load_characters()?,
        };

        let item_ids: HashSet<_> = bundle.items.iter().map(|item| &item.id).collect();
        let mut character_ids = HashSet::new();
        let mut active_owners = HashSet::new();
        for seed in &bundle.characters {
            if !character_ids.insert(&seed.id) {
                anyhow::bail!("Duplicate character id '{}'", seed.id);
            }
            if seed.active {
                if !seed.status.can_battle() {
                    anyhow::bail!("Active character '{}' is not locked", seed.id);
                }
                if !active_owners.insert(&seed.owner) {
                    anyhow::bail!("Player '{}' has more than one active character", seed.owner);
                }
            }
            let base = bundle.base_character(&seed.base).ok_or_else(|| {
                anyhow::anyhow!(
                    "Character '{}' references unknown base character '{}'",
                    seed.id,
                    seed.base
                )
            })?;
            if let Some(item) = seed.items.iter().find(|item| !item_ids.contains(item)) {
                anyhow::bail!("Character '{}' equips unknown item '{}'", seed.id, item);
            }
            seed.effective_stats(base)
                .validate(&seed.id)
                .map_err(|e| anyhow::anyhow!("Invalid stats for '{}': {}", seed.id, e))?;
        }

        Ok(bundle)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
