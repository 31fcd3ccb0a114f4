//! Events published by the battle service.

use serde::{Deserialize, Serialize};

use game_core::{CharacterId, PlayerId};

use crate::repository::{MatchId, MatchRecord};

/// Compact view of a recorded match for subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub match_id: MatchId,
    pub challenger: PlayerId,
    pub opponent: PlayerId,
    pub challenger_character: CharacterId,
    pub opponent_character: CharacterId,
    pub winner: Option<PlayerId>,
    pub rounds: u32,
    pub digest: String,
}

impl From<&MatchRecord> for MatchSummary {
    fn from(record: &MatchRecord) -> Self {
        Self {
            match_id: record.id,
            challenger: record.challenger.player.clone(),
            opponent: record.opponent.player.clone(),
            challenger_character: record.challenger.character.clone(),
            opponent_character: record.opponent.character.clone(),
            winner: record.winner.clone(),
            rounds: record.rounds,
            digest: record.digest.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// A battle finished and was appended to the history.
    Recorded(MatchSummary),
    /// A recorded match was re-simulated for audit.
    Replayed { match_id: MatchId, verified: bool },
}

impl MatchEvent {
    pub fn match_id(&self) -> MatchId {
        match self {
            MatchEvent::Recorded(summary) => summary.match_id,
            MatchEvent::Replayed { match_id, .. } => *match_id,
        }
    }
}
