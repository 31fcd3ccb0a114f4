//! In-memory CharacterRepository implementation for tests and local runs.

use std::collections::BTreeMap;
use std::sync::RwLock;

use game_core::{CharacterId, PlayerId};

use crate::repository::{CharacterRecord, CharacterRepository, RepositoryError, Result};

/// In-memory implementation of CharacterRepository.
///
/// Characters are indexed by id; iteration order is id order.
pub struct InMemoryCharacterRepository {
    characters: RwLock<BTreeMap<CharacterId, CharacterRecord>>,
}

impl InMemoryCharacterRepository {
    pub fn new() -> Self {
        Self {
            characters: RwLock::new(BTreeMap::new()),
        }
    }

    /// Create pre-populated with `records`.
    pub fn with_records(records: impl IntoIterator<Item = CharacterRecord>) -> Self {
        let characters = records
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect();
        Self {
            characters: RwLock::new(characters),
        }
    }

    pub fn len(&self) -> usize {
        self.characters
            .read()
            .map(|characters| characters.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryCharacterRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterRepository for InMemoryCharacterRepository {
    fn get(&self, id: &CharacterId) -> Result<Option<CharacterRecord>> {
        let characters = self
            .characters
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(characters.get(id).cloned())
    }

    fn save(&self, record: &CharacterRecord) -> Result<()> {
        let mut characters = self
            .characters
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        characters.insert(record.id.clone(), record.clone());
        Ok(())
    }

    fn list_for_player(&self, player: &PlayerId) -> Result<Vec<CharacterRecord>> {
        let characters = self
            .characters
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(characters
            .values()
            .filter(|record| &record.owner == player)
            .cloned()
            .collect())
    }

    fn set_active(
        &self,
        player: &PlayerId,
        character: &CharacterId,
    ) -> Result<Option<CharacterRecord>> {
        let mut characters = self
            .characters
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        if !characters
            .get(character)
            .is_some_and(|record| &record.owner == player)
        {
            return Ok(None);
        }
        for record in characters.values_mut().filter(|r| &r.owner == player) {
            record.active = &record.id == character;
        }
        Ok(characters.get(character).cloned())
    }
}

#[cfg(test)]
mod tests {
    use game_core::{BaseCharacter, StatBlock};

    use super::*;

    fn repo() -> InMemoryCharacterRepository {
        let base = BaseCharacter {
            id: "ryn".into(),
            name: "Ryn".into(),
            description: String::new(),
            signature: "basic".into(),
            base_stats: StatBlock::uniform(100),
        };
        let mut first = CharacterRecord::new("alice-a", "alice", &base);
        first.active = true;
        InMemoryCharacterRepository::with_records([
            first,
            CharacterRecord::new("alice-b", "alice", &base),
            CharacterRecord::new("bob-a", "bob", &base),
        ])
    }

    fn active_ids(repo: &InMemoryCharacterRepository, player: &str) -> Vec<CharacterId> {
        repo.list_for_player(&player.into())
            .unwrap()
            .into_iter()
            .filter(|record| record.active)
            .map(|record| record.id)
            .collect()
    }

    #[test]
    fn set_active_swaps_the_flag() {
        let repo = repo();
        let updated = repo
            .set_active(&"alice".into(), &"alice-b".into())
            .unwrap()
            .unwrap();
        assert!(updated.active);
        assert_eq!(active_ids(&repo, "alice"), vec![CharacterId::from("alice-b")]);
    }

    #[test]
    fn set_active_ignores_characters_of_other_players() {
        let repo = repo();
        assert_eq!(repo.set_active(&"alice".into(), &"bob-a".into()).unwrap(), None);
        assert_eq!(repo.set_active(&"alice".into(), &"ghost".into()).unwrap(), None);
        assert_eq!(active_ids(&repo, "alice"), vec![CharacterId::from("alice-a")]);
        assert!(active_ids(&repo, "bob").is_empty());
    }
}
