use super::{Archetype, TurnContext, TurnOutcome};
use crate::combat::{CheckKind, basic_attack_damage};
use crate::record::{StepKind, StepPayload};
use crate::state::BattleSnapshot;

/// Plain damage exchange; also the fallback for unregistered signatures.
#[derive(Clone, Copy, Debug, Default)]
pub struct BasicAttacker;

impl BasicAttacker {
    pub const ID: &'static str = "basic";
}

impl Archetype for BasicAttacker {
    fn id(&self) -> &'static str {
        Self::ID
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
}

/// Attack value `max(STR, MAG)` against defense `max(AGI, STA)`.
///
/// On success the target loses `min(30% of its max HP, 15% of attack)`. A
/// `basic_attack` step is logged either way, with zero damage on a miss.
/// Returns the damage dealt.
pub fn basic_attack(
    actor: &BattleSnapshot<'_>,
    target: &mut BattleSnapshot<'_>,
    ctx: &mut TurnContext<'_>,
) -> u32 {
    let attack = actor.stats.attack_value();
    let defense = target.stats.defense_value();
    let check = ctx.check(attack, defense, CheckKind::Attack);

    let damage = if check.success {
        let target_max = u32::try_from(target.max_hp().max(0)).unwrap_or(0);
        basic_attack_damage(attack, target_max, ctx.config)
    } else {
        0
    };
    target.take_damage(damage);

    ctx.log.push(
        StepKind::BasicAttack,
        Some(actor.side()),
        format!("{} attacks for {damage} damage", actor.name()),
        Some(StepPayload::Attack {
            check,
            damage,
            target_hp: target.display_hp(),
        }),
    );
    damage
}
