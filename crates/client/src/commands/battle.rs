use anyhow::Result;
use clap::Parser;
use game_core::CharacterId;
use runtime::{BattleService, MatchRecord};

use super::battle_failed;
use crate::presenter;

/// Run and record a battle between two characters
#[derive(Parser)]
pub struct Battle {
    /// Challenger character id (e.g., alice-kyuu)
    #[arg(value_name = "CHALLENGER")]
    challenger: String,

    /// Opponent character id (e.g., bob-shimi)
    #[arg(value_name = "OPPONENT")]
    opponent: String,

    /// Seed for the battle (default: random, or BATTLE_SEED)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the match record as JSON
    #[arg(long)]
    json: bool,
}

impl Battle {
    pub fn execute(self, service: &BattleService) -> Result<()> {
        let record = run(service, &self.challenger, &self.opponent, self.seed)?;
        print_record(&record, self.json)
    }
}

/// Runs a battle between two characters on behalf of their owners.
pub(crate) fn run(
    service: &BattleService,
    challenger: &str,
    opponent: &str,
    seed: Option<u64>,
) -> Result<MatchRecord> {
    let challenger = CharacterId::from(challenger);
    let opponent = CharacterId::from(opponent);

    let result = service.character(&challenger).and_then(|c| {
        let o = service.character(&opponent)?;
        match seed {
            Some(seed) => {
                service.simulate_with_seed(&c.owner, &o.owner, &challenger, &opponent, seed)
            }
            None => service.simulate_battle(&c.owner, &o.owner, &challenger, &opponent),
        }
    });
    result.map_err(battle_failed)
}

pub(crate) fn print_record(record: &MatchRecord, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
    } else {
        print!("{}", presenter::battle_report(record));
    }
    Ok(())
}
