//! Runtime wrappers around static content oracles.
//!
//! These implementations expose the `game-core` oracle traits and bundle them
//! into an [`OracleManager`] shared by the battle service. The data is
//! immutable at runtime; player collections and history live in repositories.
mod items;
mod roster;

use std::sync::Arc;

use game_content::ContentBundle;

pub use items::ItemOracleImpl;
pub use roster::RosterOracleImpl;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) roster: Arc<RosterOracleImpl>,
    pub(crate) items: Arc<ItemOracleImpl>,
}

impl OracleManager {
    pub fn new(roster: Arc<RosterOracleImpl>, items: Arc<ItemOracleImpl>) -> Self {
        Self { roster, items }
    }

    /// Builds oracles from loaded content.
    pub fn from_content(content: &ContentBundle) -> Self {
        Self::new(
            Arc::new(RosterOracleImpl::new(content.roster.clone())),
            Arc::new(ItemOracleImpl::from_definitions(content.items.iter().cloned())),
        )
    }

    pub fn roster(&self) -> &RosterOracleImpl {
        &self.roster
    }

    pub fn items(&self) -> &ItemOracleImpl {
        &self.items
    }
}
