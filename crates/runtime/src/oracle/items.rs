//! Minimal [`game_core::ItemOracle`] backed by an in-memory map.
use std::collections::HashMap;

use game_core::{ItemDefinition, ItemId, ItemOracle};

/// ItemOracle implementation with static item definitions
pub struct ItemOracleImpl {
    definitions: HashMap<ItemId, ItemDefinition>,
}

impl ItemOracleImpl {
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
        }
    }

    pub fn from_definitions(definitions: impl IntoIterator<Item = ItemDefinition>) -> Self {
        let mut oracle = Self::new();
        for definition in definitions {
            oracle.add_definition(definition);
        }
        oracle
    }

    /// Add an item definition
    pub fn add_definition(&mut self, def: ItemDefinition) {
        self.definitions.insert(def.id.clone(), def);
    }
}

impl Default for ItemOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemOracle for ItemOracleImpl {
    fn definition(&self, id: &ItemId) -> Option<ItemDefinition> {
        self.definitions.get(id).cloned()
    }

    fn all_definitions(&self) -> Vec<ItemDefinition> {
        let mut all: Vec<_> = self.definitions.values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }
}
