//! Regeneration that can only be stopped by a Seal.
use super::{Archetype, DefeatOutcome, TurnContext, TurnOutcome, basic_attack};
use crate::combat::CheckKind;
use crate::env::apply_percent;
use crate::record::{StepKind, StepPayload};
use crate::state::BattleSnapshot;

/// Fights with basic attacks, regenerates every turn, and survives being
/// downed unless the attacker lands a Seal.
#[derive(Clone, Copy, Debug, Default)]
pub struct RegenerationSealGated;

impl RegenerationSealGated {
    pub const ID: &'static str = "regeneration_seal_gated";
}

impl Archetype for RegenerationSealGated {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn on_turn_start(&self, actor: &mut BattleSnapshot<'_>, ctx: &mut TurnContext<'_>) {
        let amount = actor.heal(actor.percent_of_max(ctx.config.regeneration_percent));
        ctx.log.push(
            StepKind::Regeneration,
            Some(actor.side()),
            format!("{} regenerates {amount} HP", actor.name()),
            Some(StepPayload::Regeneration {
                amount,
                hp: actor.display_hp(),
            }),
        );
    }

    fn take_turn(
        &self,
        actor: &mut BattleSnapshot<'_>,
        target: &mut BattleSnapshot<'_>,
        ctx: &mut TurnContext<'_>,
    ) -> TurnOutcome {
        basic_attack(actor, target, ctx);
        TurnOutcome::Continue
    }

    fn resolve_downed(
        &self,
        attacker: &BattleSnapshot<'_>,
        downed: &mut BattleSnapshot<'_>,
        ctx: &mut TurnContext<'_>,
    ) -> DefeatOutcome {
        let mut seal = attacker.stats.wit + attacker.stats.mag;
        if let Some((_, percent)) = ctx.seal_boost(attacker) {
            seal = apply_percent(seal, percent);
        }

        let check = ctx.check(
            seal,
            downed.stats.wit + downed.stats.wil,
            CheckKind::Seal,
        );
        ctx.log_check(
            StepKind::SealAttempt,
            attacker,
            format!(
                "{} attempts to seal {}'s regeneration",
                attacker.name(),
                downed.name()
            ),
            check,
        );

        if check.success {
            ctx.log.push(
                StepKind::Victory,
                Some(attacker.side()),
                format!("{} successfully seals {}", attacker.name(), downed.name()),
                None,
            );
            return DefeatOutcome::Defeated;
        }

        downed.restore_to_percent(ctx.config.seal_restore_percent);
        ctx.log.push(
            StepKind::RegenerationSave,
            Some(downed.side()),
            format!("{}'s regeneration prevents defeat", downed.name()),
            Some(StepPayload::Restore {
                hp: downed.display_hp(),
            }),
        );
        DefeatOutcome::Survived
    }
}
