//! Unified error types surfaced by the runtime API.
//!
//! Wraps battle input errors and repository failures so clients can bubble
//! them up with consistent context.
use thiserror::Error;

use game_core::{BattleError, CharacterId, CharacterStatus, ErrorSeverity, GameError, PlayerId};

pub use crate::repository::RepositoryError;
use crate::repository::MatchId;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("character {0} not found")]
    CharacterNotFound(CharacterId),

    #[error("character {character} is {status}, only locked characters can battle")]
    NotLocked {
        character: CharacterId,
        status: CharacterStatus,
    },

    #[error("character {character} belongs to {owner}, not {claimed}")]
    OwnershipMismatch {
        character: CharacterId,
        owner: PlayerId,
        claimed: PlayerId,
    },

    #[error("character {character} references unknown base character {base}")]
    BaseCharacterNotFound { character: CharacterId, base: String },

    #[error("player {0} has no active PvP character")]
    NoActiveCharacter(PlayerId),

    #[error("player {0} cannot challenge themselves")]
    SelfChallenge(PlayerId),

    #[error("match {0} not found")]
    MatchNotFound(MatchId),

    #[error("replay of match {match_id} produced digest {replayed}, recorded {recorded}")]
    ReplayMismatch {
        match_id: MatchId,
        recorded: String,
        replayed: String,
    },

    #[error("runtime requires oracles to be configured before building")]
    MissingOracles,

    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::CharacterNotFound(_)
            | RuntimeError::NotLocked { .. }
            | RuntimeError::OwnershipMismatch { .. }
            | RuntimeError::NoActiveCharacter(_)
            | RuntimeError::SelfChallenge(_)
            | RuntimeError::MatchNotFound(_) => ErrorSeverity::Validation,
            RuntimeError::BaseCharacterNotFound { .. } | RuntimeError::ReplayMismatch { .. } => {
                ErrorSeverity::Internal
            }
            RuntimeError::MissingOracles => ErrorSeverity::Fatal,
            RuntimeError::Battle(err) => err.severity(),
            RuntimeError::Repository(RepositoryError::LockPoisoned) => ErrorSeverity::Fatal,
            RuntimeError::Repository(RepositoryError::Duplicate(_)) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::CharacterNotFound(_) => "RUNTIME_CHARACTER_NOT_FOUND",
            RuntimeError::NotLocked { .. } => "RUNTIME_CHARACTER_NOT_LOCKED",
            RuntimeError::OwnershipMismatch { .. } => "RUNTIME_OWNERSHIP_MISMATCH",
            RuntimeError::BaseCharacterNotFound { .. } => "RUNTIME_BASE_CHARACTER_NOT_FOUND",
            RuntimeError::NoActiveCharacter(_) => "RUNTIME_NO_ACTIVE_CHARACTER",
            RuntimeError::SelfChallenge(_) => "RUNTIME_SELF_CHALLENGE",
            RuntimeError::MatchNotFound(_) => "RUNTIME_MATCH_NOT_FOUND",
            RuntimeError::ReplayMismatch { .. } => "RUNTIME_REPLAY_MISMATCH",
            RuntimeError::MissingOracles => "RUNTIME_MISSING_ORACLES",
            RuntimeError::Battle(err) => err.error_code(),
            RuntimeError::Repository(_) => "RUNTIME_REPOSITORY",
        }
    }
}
