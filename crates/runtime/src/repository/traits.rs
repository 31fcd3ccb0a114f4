//! Repository contracts for the mutable arena data.

use game_core::{CharacterId, PlayerId};

use super::Result;
use super::types::{CharacterRecord, MatchId, MatchRecord};

/// Character store: the player collections.
pub trait CharacterRepository: Send + Sync {
    fn get(&self, id: &CharacterId) -> Result<Option<CharacterRecord>>;

    /// Insert or replace a character.
    fn save(&self, record: &CharacterRecord) -> Result<()>;

    /// All characters owned by `player`, ordered by id.
    fn list_for_player(&self, player: &PlayerId) -> Result<Vec<CharacterRecord>>;

    /// Marks `character` as the player's only active character in one step.
    ///
    /// Returns the updated record, or `None` when `player` does not own
    /// `character`; nothing changes in that case.
    fn set_active(
        &self,
        player: &PlayerId,
        character: &CharacterId,
    ) -> Result<Option<CharacterRecord>>;

    /// The player's active PvP character, if one is selected.
    fn active_for_player(&self, player: &PlayerId) -> Result<Option<CharacterRecord>> {
        Ok(self
            .list_for_player(player)?
            .into_iter()
            .find(|record| record.active))
    }
}

/// Match recorder: append-only history of finished battles.
pub trait MatchRepository: Send + Sync {
    /// Append a match. Ids are unique.
    fn save(&self, record: &MatchRecord) -> Result<()>;

    fn get(&self, id: MatchId) -> Result<Option<MatchRecord>>;

    /// Matches involving `player`, newest first, at most `limit`.
    fn list_for_player(&self, player: &PlayerId, limit: usize) -> Result<Vec<MatchRecord>>;

    fn count(&self) -> Result<usize>;
}
