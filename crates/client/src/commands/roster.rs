use anyhow::Result;
use clap::Parser;
use runtime::BattleService;

use crate::presenter;

/// List base characters
#[derive(Parser)]
pub struct Roster {
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl Roster {
    pub fn execute(self, service: &BattleService) -> Result<()> {
        let roster = service.roster();
        if self.json {
            println!("{}", serde_json::to_string_pretty(&roster)?);
        } else {
            print!(
                "{}",
                presenter::roster_table(&roster, service.engine().registry())
            );
        }
        Ok(())
    }
}
