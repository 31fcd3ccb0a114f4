use anyhow::Result;
use clap::Parser;
use game_core::PlayerId;
use runtime::BattleService;

use super::battle::print_record;
use super::battle_failed;

/// Battle the active characters of two players
#[derive(Parser)]
pub struct Challenge {
    #[arg(value_name = "CHALLENGER")]
    challenger: String,

    #[arg(value_name = "OPPONENT")]
    opponent: String,

    /// Print the match record as JSON
    #[arg(long)]
    json: bool,
}

impl Challenge {
    pub fn execute(self, service: &BattleService) -> Result<()> {
        let record = service
            .challenge(&PlayerId::from(self.challenger), &PlayerId::from(self.opponent))
            .map_err(battle_failed)?;
        print_record(&record, self.json)
    }
}
