use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use game_core::PlayerId;
use runtime::{BattleService, MatchEvent};
use tokio::sync::broadcast::{self, error::TryRecvError};
use tokio::task::JoinSet;

use crate::presenter;

/// Run several challenges between two players and print the history
#[derive(Parser)]
pub struct Series {
    #[arg(value_name = "CHALLENGER")]
    challenger: String,

    #[arg(value_name = "OPPONENT")]
    opponent: String,

    /// Number of battles
    #[arg(short = 'n', long, default_value_t = 5)]
    count: usize,
}

impl Series {
    pub async fn execute(self, service: Arc<BattleService>) -> Result<()> {
        let challenger = PlayerId::from(self.challenger);
        let opponent = PlayerId::from(self.opponent);
        let mut events = service.subscribe();

        // Battles are CPU-bound and independent; run them on the blocking pool.
        let mut battles = JoinSet::new();
        for _ in 0..self.count {
            let service = Arc::clone(&service);
            let (challenger, opponent) = (challenger.clone(), opponent.clone());
            battles.spawn_blocking(move || service.challenge(&challenger, &opponent));
        }
        while let Some(joined) = battles.join_next().await {
            joined
                .context("battle task panicked")?
                .map_err(super::battle_failed)?;
        }

        let (recorded, skipped) = drain_recorded(&mut events);
        if skipped > 0 {
            tracing::warn!(skipped, "series events dropped by a full buffer");
        }
        tracing::info!(recorded, "series finished");

        let history = service.match_history(&challenger, Some(self.count))?;
        print!("{}", presenter::history_table(&challenger, &history));
        println!(
            "{}",
            presenter::series_tally(&challenger, &opponent, &history)
        );
        Ok(())
    }
}

/// Counts buffered `Recorded` events. Returns `(recorded, skipped)`, where
/// `skipped` is the number of events lost to a lagging receiver.
fn drain_recorded(events: &mut broadcast::Receiver<MatchEvent>) -> (usize, u64) {
    let (mut recorded, mut skipped) = (0, 0);
    loop {
        match events.try_recv() {
            Ok(MatchEvent::Recorded(summary)) => {
                tracing::debug!(
                    match_id = %summary.match_id,
                    rounds = summary.rounds,
                    "series match"
                );
                recorded += 1;
            }
            Ok(_) => {}
            Err(TryRecvError::Lagged(count)) => skipped += count,
            Err(TryRecvError::Empty | TryRecvError::Closed) => break,
        }
    }
    (recorded, skipped)
}

#[cfg(test)]
mod tests {
    use runtime::{MatchId, MatchSummary};

    use super::*;

    fn recorded() -> MatchEvent {
        MatchEvent::Recorded(MatchSummary {
            match_id: MatchId::new(),
            challenger: "alice".into(),
            opponent: "bob".into(),
            challenger_character: "alice-kyuu".into(),
            opponent_character: "bob-shimi".into(),
            winner: None,
            rounds: 10,
            digest: String::new(),
        })
    }

    #[test]
    fn draining_continues_past_a_lagged_buffer() {
        let (sender, mut receiver) = broadcast::channel(2);
        for _ in 0..5 {
            sender.send(recorded()).unwrap();
        }
        sender
            .send(MatchEvent::Replayed {
                match_id: MatchId::new(),
                verified: true,
            })
            .unwrap();

        // Capacity 2 keeps the last Recorded and the Replayed event.
        assert_eq!(drain_recorded(&mut receiver), (1, 4));
    }
}
