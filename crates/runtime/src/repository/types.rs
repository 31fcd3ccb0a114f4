//! Records persisted by the runtime repositories.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use game_content::CharacterSeed;
use game_core::{
    BaseCharacter, BattleOutcome, BattleStep, CharacterBuild, CharacterId, CharacterStatus, ItemId,
    PlayerId, Side, StatBlock,
};

/// Identifier of a recorded match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchId(Uuid);

impl MatchId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for MatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for MatchId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// A player-owned character in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub id: CharacterId,
    pub owner: PlayerId,
    /// Base character id in the roster.
    pub base: String,
    pub status: CharacterStatus,
    pub stats: StatBlock,
    pub items: BTreeSet<ItemId>,
    /// The owner's selected PvP character.
    pub active: bool,
}

impl CharacterRecord {
    pub fn new(
        id: impl Into<CharacterId>,
        owner: impl Into<PlayerId>,
        base: &BaseCharacter,
    ) -> Self {
        Self {
            id: id.into(),
            owner: owner.into(),
            base: base.id.clone(),
            status: CharacterStatus::Candidate,
            stats: base.base_stats,
            items: BTreeSet::new(),
            active: false,
        }
    }

    pub fn from_seed(seed: &CharacterSeed, base: &BaseCharacter) -> Self {
        Self {
            id: seed.id.clone(),
            owner: seed.owner.clone(),
            base: seed.base.clone(),
            status: seed.status,
            stats: seed.effective_stats(base),
            items: seed.items.iter().cloned().collect(),
            active: seed.active,
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: CharacterStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_stats(mut self, stats: StatBlock) -> Self {
        self.stats = stats;
        self
    }

    #[must_use]
    pub fn with_item(mut self, item: impl Into<ItemId>) -> Self {
        self.items.insert(item.into());
        self
    }

    /// Snapshot of this character as a battle input.
    pub fn to_build(&self, base: &BaseCharacter) -> CharacterBuild {
        CharacterBuild {
            player: self.owner.clone(),
            character: self.id.clone(),
            name: base.name.clone(),
            archetype: base.signature.clone(),
            stats: self.stats,
            items: self.items.clone(),
        }
    }
}

/// A finished, recorded PvP match.
///
/// The builds are stored as they were when the battle ran so the match can be
/// replayed after either character changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: MatchId,
    pub challenger: CharacterBuild,
    pub opponent: CharacterBuild,
    pub seed: u64,
    pub winner: Option<PlayerId>,
    pub winning_side: Option<Side>,
    pub rounds: u32,
    pub steps: Vec<BattleStep>,
    pub narration: String,
    /// Hex-encoded SHA-256 of the step sequence.
    pub digest: String,
    pub created_at: DateTime<Utc>,
}

impl MatchRecord {
    pub fn from_outcome(
        challenger: CharacterBuild,
        opponent: CharacterBuild,
        seed: u64,
        outcome: BattleOutcome,
    ) -> Self {
        Self {
            id: MatchId::new(),
            challenger,
            opponent,
            seed,
            winner: outcome.winner,
            winning_side: outcome.winning_side,
            rounds: outcome.rounds,
            steps: outcome.steps,
            narration: outcome.narration,
            digest: hex::encode(outcome.digest),
            created_at: Utc::now(),
        }
    }

    pub fn involves(&self, player: &PlayerId) -> bool {
        &self.challenger.player == player || &self.opponent.player == player
    }

    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }

    /// Name of the winning character, if any.
    pub fn winner_name(&self) -> Option<&str> {
        match self.winning_side? {
            Side::Challenger => Some(&self.challenger.name),
            Side::Opponent => Some(&self.opponent.name),
        }
    }
}
