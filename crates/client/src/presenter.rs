//! Text rendering for CLI output.
//!
//! Functions here return strings rather than printing so they can be tested
//! and reused by other front-ends.
use std::fmt::Write;

use console::style;
use game_core::{ArchetypeRegistry, Attribute, BaseCharacter, PlayerId, StatBlock};
use runtime::{CharacterRecord, MatchRecord};

/// `STR 150 AGI 250 ...` in attribute order.
pub fn stat_line(stats: &StatBlock) -> String {
    Attribute::ALL
        .iter()
        .map(|attribute| format!("{} {:>3}", attribute.abbreviation(), stats.get(*attribute)))
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn roster_table(roster: &[BaseCharacter], registry: &ArchetypeRegistry) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", style("=== Roster ===").bold().green());
    for base in roster {
        let signature = if registry.is_registered(&base.signature) {
            style(base.signature.as_str()).cyan().to_string()
        } else {
            format!("{} (basic)", style(base.signature.as_str()).dim())
        };
        let _ = writeln!(
            out,
            "{:<8} {:<22} {}",
            style(&base.id).bold(),
            base.name,
            signature
        );
        let _ = writeln!(out, "         {}", stat_line(&base.base_stats));
    }
    out
}

pub fn collection_table(player: &PlayerId, characters: &[CharacterRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        style(format!("=== Collection: {player} ===")).bold().green()
    );
    if characters.is_empty() {
        let _ = writeln!(out, "(no characters)");
    }
    for record in characters {
        let marker = if record.active { "*" } else { " " };
        let items = record
            .items
            .iter()
            .map(|item| item.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(
            out,
            "{marker} {:<16} {:<8} {:<10} {}",
            record.id.as_str(),
            record.base,
            record.status.to_string(),
            items
        );
        let _ = writeln!(out, "  {}", stat_line(&record.stats));
    }
    out
}

fn outcome_label(record: &MatchRecord) -> String {
    match (&record.winner, record.winner_name()) {
        (Some(player), Some(name)) => format!("{name} ({player}) wins"),
        _ => "Draw".to_string(),
    }
}

pub fn match_summary(record: &MatchRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", style("=== Result ===").bold().yellow());
    let _ = writeln!(out, "{}", style(outcome_label(record)).bold());
    let _ = writeln!(out, "Rounds: {}", record.rounds);
    let _ = writeln!(out, "Steps:  {}", record.steps.len());
    let _ = writeln!(out, "Seed:   {}", record.seed);
    let _ = writeln!(out, "Match:  {}", record.id);
    let _ = writeln!(out, "Digest: {}", style(&record.digest).dim());
    out
}

/// Narration followed by the result block.
pub fn battle_report(record: &MatchRecord) -> String {
    format!("{}\n\n{}", record.narration, match_summary(record))
}

pub fn history_table(player: &PlayerId, matches: &[MatchRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        style(format!("=== History: {player} ===")).bold().green()
    );
    for record in matches {
        let result = match &record.winner {
            Some(winner) if winner == player => style("WIN ").green().to_string(),
            Some(_) => style("LOSS").red().to_string(),
            None => style("DRAW").dim().to_string(),
        };
        let _ = writeln!(
            out,
            "{} {} vs {}  {} rounds  {}",
            result,
            record.challenger.name,
            record.opponent.name,
            record.rounds,
            record.created_at.format("%Y-%m-%d %H:%M:%S"),
        );
    }
    out
}

/// Win/draw tally for a series between two players.
pub fn series_tally(first: &PlayerId, second: &PlayerId, matches: &[MatchRecord]) -> String {
    let wins = |player: &PlayerId| {
        matches
            .iter()
            .filter(|record| record.winner.as_ref() == Some(player))
            .count()
    };
    let draws = matches.iter().filter(|record| record.is_draw()).count();
    format!(
        "{first} {} - {} {second} ({draws} draws)",
        wins(first),
        wins(second)
    )
}
