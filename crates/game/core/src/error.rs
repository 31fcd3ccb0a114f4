//! Common error infrastructure for game-core.
//!
//! The engine itself never fails once a battle has started: every roll has a
//! defined outcome. Errors therefore only come from validating inputs before
//! the first snapshot is built.

use crate::state::CharacterId;
use crate::stats::{Attribute, StatBlock};

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: The request may succeed later or with different inputs
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Unrecoverable errors indicating corrupted data
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// Provides a uniform interface for classification so callers (runtime,
/// front-ends) can decide how loudly to report a failure.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Input validation failures raised before a battle is simulated.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    #[error(
        "{attribute} of character {character} is {value}, outside [{min}, {max}]",
        min = StatBlock::MIN,
        max = StatBlock::MAX
    )]
    AttributeOutOfRange {
        character: CharacterId,
        attribute: Attribute,
        value: u32,
    },

    #[error("invalid battle config: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AttributeOutOfRange { .. } => ErrorSeverity::Validation,
            Self::InvalidConfig { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AttributeOutOfRange { .. } => "BATTLE_ATTRIBUTE_OUT_OF_RANGE",
            Self::InvalidConfig { .. } => "BATTLE_INVALID_CONFIG",
        }
    }
}
