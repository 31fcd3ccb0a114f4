//! Base character roster loader.

use std::collections::HashSet;
use std::path::Path;

use game_core::{BaseCharacter, CharacterId};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Roster structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterCatalog {
    pub characters: Vec<BaseCharacter>,
}

/// Loader for the base character roster from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load the roster from a RON file.
    ///
    /// Ids must be unique and base stats must be in range.
    pub fn load(path: &Path) -> LoadResult<Vec<BaseCharacter>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<BaseCharacter>> {
        let catalog: RosterCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        let mut seen = HashSet::new();
        for base in &catalog.characters {
            if !seen.insert(base.id.as_str()) {
                anyhow::bail!("Duplicate base character id '{}'", base.id);
            }
            base.base_stats
                .validate(&CharacterId::new(base.id.as_str()))
                .map_err(|e| anyhow::anyhow!("Invalid base stats for '{}': {}", base.id, e))?;
        }

        Ok(catalog.characters)
    }
}
