//! Repository layer for dynamic runtime data.
//!
//! Repositories handle data that CHANGES while the arena runs:
//! - Player character collections
//! - Recorded match history
//!
//! Static content (roster, items) is handled by Oracles, not Repositories.

mod error;
mod memory;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use memory::{InMemoryCharacterRepository, InMemoryMatchRepository};
pub use traits::{CharacterRepository, MatchRepository};
pub use types::{CharacterRecord, MatchId, MatchRecord};
