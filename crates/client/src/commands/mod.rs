//! Subcommand implementations.
//!
//! Each command is a separate module that declares its own CLI args and runs
//! against a shared [`BattleService`].

mod battle;
mod challenge;
mod collection;
mod replay;
mod roster;
mod series;

use std::sync::Arc;

use anyhow::Result;
use clap::Subcommand;
use game_core::GameError;
use runtime::{BattleService, RuntimeError};

pub use battle::Battle;
pub use challenge::Challenge;
pub use collection::Collection;
pub use replay::Replay;
pub use roster::Roster;
pub use series::Series;

#[derive(Subcommand)]
pub enum Command {
    /// List base characters and their signature abilities
    Roster(Roster),

    /// Show a player's characters
    Collection(Collection),

    /// Run and record a battle between two characters
    Battle(Battle),

    /// Battle the active characters of two players
    Challenge(Challenge),

    /// Run a battle, replay it from its seed and compare digests
    Replay(Replay),

    /// Run several challenges between two players and print the history
    Series(Series),
}

impl Command {
    pub async fn execute(self, service: Arc<BattleService>) -> Result<()> {
        match self {
            Command::Roster(cmd) => cmd.execute(&service),
            Command::Collection(cmd) => cmd.execute(&service),
            Command::Battle(cmd) => cmd.execute(&service),
            Command::Challenge(cmd) => cmd.execute(&service),
            Command::Replay(cmd) => cmd.execute(&service),
            Command::Series(cmd) => cmd.execute(service).await,
        }
    }
}

/// Logs the full error and returns the short line shown to the user.
pub(crate) fn battle_failed(err: RuntimeError) -> anyhow::Error {
    tracing::error!(
        code = err.error_code(),
        severity = err.severity().as_str(),
        %err,
        "battle request failed"
    );
    anyhow::anyhow!("battle could not be simulated")
}
