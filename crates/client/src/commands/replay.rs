use anyhow::Result;
use clap::Parser;
use console::style;
use runtime::BattleService;

use super::battle::run;
use super::battle_failed;
use crate::presenter;

/// Run a battle, replay it from its seed and compare digests
#[derive(Parser)]
pub struct Replay {
    #[arg(value_name = "CHALLENGER")]
    challenger: String,

    #[arg(value_name = "OPPONENT")]
    opponent: String,

    /// Seed shared by both runs
    #[arg(short, long)]
    seed: u64,
}

impl Replay {
    pub fn execute(self, service: &BattleService) -> Result<()> {
        let record = run(service, &self.challenger, &self.opponent, Some(self.seed))?;
        let replayed = service.replay(record.id).map_err(battle_failed)?;

        print!("{}", presenter::match_summary(&record));
        println!(
            "{} {} steps, digest {}",
            style("Replay verified:").bold().green(),
            replayed.steps.len(),
            hex_prefix(&record.digest)
        );
        Ok(())
    }
}

fn hex_prefix(digest: &str) -> &str {
    digest.get(..16).unwrap_or(digest)
}
