//! In-memory MatchRepository implementation for tests and local runs.

use std::sync::RwLock;

use game_core::PlayerId;

use crate::repository::{MatchId, MatchRecord, MatchRepository, RepositoryError, Result};

/// In-memory implementation of MatchRepository.
///
/// Matches are kept in insertion order; history queries walk it backwards.
pub struct InMemoryMatchRepository {
    matches: RwLock<Vec<MatchRecord>>,
}

impl InMemoryMatchRepository {
    pub fn new() -> Self {
        Self {
            matches: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryMatchRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchRepository for InMemoryMatchRepository {
    fn save(&self, record: &MatchRecord) -> Result<()> {
        let mut matches = self
            .matches
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        if matches.iter().any(|existing| existing.id == record.id) {
            return Err(RepositoryError::Duplicate(record.id.to_string()));
        }
        matches.push(record.clone());
        Ok(())
    }

    fn get(&self, id: MatchId) -> Result<Option<MatchRecord>> {
        let matches = self
            .matches
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(matches.iter().find(|record| record.id == id).cloned())
    }

    fn list_for_player(&self, player: &PlayerId, limit: usize) -> Result<Vec<MatchRecord>> {
        let matches = self
            .matches
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(matches
            .iter()
            .rev()
            .filter(|record| record.involves(player))
            .take(limit)
            .cloned()
            .collect())
    }

    fn count(&self) -> Result<usize> {
        let matches = self
            .matches
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(matches.len())
    }
}

#[cfg(test)]
mod tests {
    use game_core::{BattleOutcome, CharacterBuild, StatBlock};

    use super::*;

    fn record(challenger: &str, opponent: &str, seed: u64) -> MatchRecord {
        let build = |player: &str| {
            CharacterBuild::new(
                player,
                format!("{player}-c"),
                player,
                "basic",
                StatBlock::default(),
            )
        };
        let outcome = BattleOutcome {
            winner: None,
            winning_side: None,
            rounds: 10,
            steps: Vec::new(),
            narration: String::new(),
            digest: [0; 32],
            challenger_hp: 1,
            opponent_hp: 1,
        };
        MatchRecord::from_outcome(build(challenger), build(opponent), seed, outcome)
    }

    #[test]
    fn history_is_newest_first_and_limited() {
        let repo = InMemoryMatchRepository::new();
        for seed in 0..5 {
            repo.save(&record("alice", "bob", seed)).unwrap();
        }
        repo.save(&record("carol", "dave", 99)).unwrap();

        let alice = PlayerId::from("alice");
        let history = repo.list_for_player(&alice, 3).unwrap();
        let seeds: Vec<_> = history.iter().map(|m| m.seed).collect();
        assert_eq!(seeds, vec![4, 3, 2]);
        assert_eq!(repo.list_for_player(&PlayerId::from("dave"), 10).unwrap().len(), 1);
        assert_eq!(repo.count().unwrap(), 6);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let repo = InMemoryMatchRepository::new();
        let first = record("alice", "bob", 1);
        repo.save(&first).unwrap();
        assert!(matches!(
            repo.save(&first),
            Err(RepositoryError::Duplicate(_))
        ));
        assert_eq!(repo.get(first.id).unwrap(), Some(first));
    }
}
