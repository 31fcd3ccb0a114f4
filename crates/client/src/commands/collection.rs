use anyhow::Result;
use clap::Parser;
use game_core::PlayerId;
use runtime::BattleService;

use crate::presenter;

/// Show a player's characters
#[derive(Parser)]
pub struct Collection {
    /// Player id (e.g., alice)
    #[arg(value_name = "PLAYER")]
    player: String,
}

impl Collection {
    pub fn execute(self, service: &BattleService) -> Result<()> {
        let player = PlayerId::from(self.player);
        let characters = service.collection(&player)?;
        print!("{}", presenter::collection_table(&player, &characters));
        Ok(())
    }
}
