//! Human-readable battle chronicle.
//!
//! Output is Discord-flavoured markdown: a bold header followed by one line per
//! step with an icon and a bold label.
use std::fmt::Write as _;

use super::step::{BattleStep, StepKind, StepPayload};

/// Renders the full chronicle for a finished battle.
pub fn render_narration(challenger: &str, opponent: &str, steps: &[BattleStep]) -> String {
    let mut out = format!("**Battle Chronicle: {challenger} vs {opponent}**\n");
    for step in steps {
        out.push('\n');
        out.push_str(&render_step(step));
    }
    out
}

/// Renders a single step as one line.
pub fn render_step(step: &BattleStep) -> String {
    let mut line = String::new();
    let check = step.check();
    let outcome = |line: &mut String| {
        if let Some(check) = check {
            let verdict = if check.success { "SUCCESS" } else { "FAILED" };
            let _ = write!(line, " - {verdict} ({}%)", check.chance);
        }
    };

    match step.kind {
        StepKind::Initiative => {
            let _ = write!(line, "🎯 **Initiative:** {}", step.description);
            if let Some(check) = check {
                let _ = write!(line, " ({} vs {})", check.attacker, check.defender);
            }
        }
        StepKind::TransformGate => {
            let label = check.map_or("Transform", |check| check.kind.label());
            let _ = write!(line, "⚡ **{label}:** {}", step.description);
            outcome(&mut line);
        }
        StepKind::ItemEffect => {
            let _ = write!(line, "🧵 **Item:** {}", step.description);
            if let Some(StepPayload::ItemBonus { percent }) = step.payload {
                let _ = write!(line, " (+{percent}%)");
            }
        }
        StepKind::CharmAttempt => {
            let _ = write!(line, "💖 **Charm:** {}", step.description);
            outcome(&mut line);
        }
        StepKind::CharmDrain => {
            let _ = write!(line, "🩸 **Drain:** {}", step.description);
        }
        StepKind::DominationAttempt => {
            let _ = write!(line, "🌀 **Domination:** {}", step.description);
            outcome(&mut line);
        }
        StepKind::SealAttempt => {
            let _ = write!(line, "🔒 **Seal:** {}", step.description);
            outcome(&mut line);
        }
        StepKind::BasicAttack => {
            let _ = write!(line, "⚔️ **Attack:** {}", step.description);
            if let Some(check) = check {
                let _ = write!(line, " ({}%)", check.chance);
            }
        }
        StepKind::Regeneration => {
            let _ = write!(line, "💚 **Regeneration:** {}", step.description);
        }
        StepKind::RegenerationSave => {
            let _ = write!(line, "✨ **Regeneration:** {}", step.description);
        }
        StepKind::SignatureVictory | StepKind::Victory => {
            let _ = write!(line, "👑 **Victory:** {}", step.description);
        }
        StepKind::Ko => {
            let _ = write!(line, "💀 **KO:** {}", step.description);
        }
        StepKind::Draw => {
            let _ = write!(line, "🤝 **Draw:** {}", step.description);
        }
    }
    line
}
