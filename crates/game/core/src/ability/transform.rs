//! Five-gate transformation: an instant win if every gate clears.
use super::{Archetype, TurnContext, TurnOutcome, basic_attack};
use crate::combat::CheckKind;
use crate::env::apply_percent;
use crate::record::{StepKind, StepPayload};
use crate::state::BattleSnapshot;

#[derive(Clone, Copy, Debug, Default)]
pub struct TransformMultiGate;

impl TransformMultiGate {
    pub const ID: &'static str = "transform_multi_gate";

    /// Approach, Grapple and Overwrite: sums of two attributes on each side.
    fn physical_gates(
        actor: &BattleSnapshot<'_>,
        target: &BattleSnapshot<'_>,
    ) -> [(CheckKind, u32, u32, String); 3] {
        let (a, d) = (&actor.stats, &target.stats);
        [
            (
                CheckKind::TransformApproach,
                a.agi + a.wit,
                d.agi + d.wit,
                format!("{} attempts transformation approach", actor.name()),
            ),
            (
                CheckKind::TransformGrapple,
                a.str + a.agi,
                d.str + d.agi,
                format!("{} attempts to grapple for transformation", actor.name()),
            ),
            (
                CheckKind::TransformOverwrite,
                a.wit + a.mag,
                d.wit + d.mag,
                format!("{} begins transformation overwrite", actor.name()),
            ),
        ]
    }
}

impl Archetype for TransformMultiGate {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn take_turn(
        &self,
        actor: &mut BattleSnapshot<'_>,
        target: &mut BattleSnapshot<'_>,
        ctx: &mut TurnContext<'_>,
    ) -> TurnOutcome {
        for (kind, attack, defense, description) in Self::physical_gates(actor, target) {
            let check = ctx.check(attack, defense, kind);
            ctx.log_check(StepKind::TransformGate, actor, description, check);
            if !check.success {
                basic_attack(actor, target, ctx);
                return TurnOutcome::Continue;
            }
        }

        // Rolled from the actor's side; a raw success means the target flinched away.
        let flinch = ctx.check(actor.stats.agi, target.stats.agi, CheckKind::AntiFlinch);
        ctx.log_check(
            StepKind::TransformGate,
            actor,
            format!("{} attempts to flinch away from transformation", target.name()),
            flinch.inverted(),
        );
        if flinch.success {
            basic_attack(actor, target, ctx);
            return TurnOutcome::Continue;
        }

        let mut resistance = target.stats.wil + target.stats.wit;
        if let Some((item, percent)) = ctx.will_resistance(target) {
            resistance = apply_percent(resistance, percent);
            ctx.log.push(
                StepKind::ItemEffect,
                Some(target.side()),
                format!("{}'s {} provide Will resistance", target.name(), item.name),
                Some(StepPayload::ItemBonus { percent }),
            );
        }

        let will = ctx.check(
            actor.stats.wil + actor.stats.wit,
            resistance,
            CheckKind::TransformWill,
        );
        ctx.log_check(
            StepKind::TransformGate,
            actor,
            format!("{} attempts final transformation override", actor.name()),
            will,
        );

        if will.success {
            ctx.log.push(
                StepKind::SignatureVictory,
                Some(actor.side()),
                format!("{} successfully transforms {}", actor.name(), target.name()),
                None,
            );
            return TurnOutcome::Victory;
        }

        basic_attack(actor, target, ctx);
        TurnOutcome::Continue
    }
}
