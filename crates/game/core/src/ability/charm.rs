//! Charm, drain and eventual domination.
use super::{Archetype, TurnContext, TurnOutcome, basic_attack};
use crate::combat::{CheckKind, charm_drain};
use crate::record::{StepKind, StepPayload};
use crate::state::{BattleSnapshot, StatusEffect, StatusKind};

#[derive(Clone, Copy, Debug, Default)]
pub struct CharmDrainSnowball;

impl CharmDrainSnowball {
    pub const ID: &'static str = "charm_drain_snowball";
}

impl Archetype for CharmDrainSnowball {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn take_turn(
        &self,
        actor: &mut BattleSnapshot<'_>,
        target: &mut BattleSnapshot<'_>,
        ctx: &mut TurnContext<'_>,
    ) -> TurnOutcome {
        let charm = ctx.check(actor.stats.cha, target.stats.wil, CheckKind::Charm);
        ctx.log_check(
            StepKind::CharmAttempt,
            actor,
            format!("{} attempts to charm {}", actor.name(), target.name()),
            charm,
        );

        if charm.success {
            let (damage, heal) = charm_drain(actor.stats.cha, ctx.config);
            target.take_damage(damage);
            actor.heal(heal);

            // Stacks already landed on this target, counted before the new record.
            let stacks = actor.charm_stacks_on(target.side());
            actor.push_status(StatusEffect {
                kind: StatusKind::Charm,
                target: target.side(),
            });

            ctx.log.push(
                StepKind::CharmDrain,
                Some(actor.side()),
                format!("Charm drains {damage} HP and heals {}", actor.name()),
                Some(StepPayload::Drain {
                    damage,
                    heal,
                    target_hp: target.display_hp(),
                }),
            );

            if stacks >= ctx.config.domination_stacks {
                let lock = ctx.check(actor.stats.wit, target.stats.wil, CheckKind::DominationLock);
                ctx.log_check(
                    StepKind::DominationAttempt,
                    actor,
                    format!("{} attempts to dominate {}", actor.name(), target.name()),
                    lock,
                );
                if lock.success {
                    ctx.log.push(
                        StepKind::SignatureVictory,
                        Some(actor.side()),
                        format!("{} dominates {} completely", actor.name(), target.name()),
                        None,
                    );
                    return TurnOutcome::Victory;
                }
            }
        }

        basic_attack(actor, target, ctx);
        TurnOutcome::Continue
    }
}
