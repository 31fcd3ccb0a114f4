//! [`game_core::RosterOracle`] over the loaded base characters.
use game_core::{BaseCharacter, RosterOracle};

/// Roster oracle that preserves the order characters were loaded in.
pub struct RosterOracleImpl {
    characters: Vec<BaseCharacter>,
}

impl RosterOracleImpl {
    pub fn new(characters: Vec<BaseCharacter>) -> Self {
        Self { characters }
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

impl RosterOracle for RosterOracleImpl {
    fn base_character(&self, id: &str) -> Option<BaseCharacter> {
        self.characters.iter().find(|base| base.id == id).cloned()
    }

    fn all_characters(&self) -> Vec<BaseCharacter> {
        self.characters.clone()
    }
}
