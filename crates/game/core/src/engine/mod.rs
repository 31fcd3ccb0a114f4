//! Battle engine: the pure entry point that turns two builds and a random
//! source into a finished battle.
//!
//! ```text
//! Init -> Initiative -> Round 1..=max { first acts, second acts } -> Winner | Draw
//! ```
//!
//! Each turn runs the actor's archetype hooks in order: turn-start passive,
//! signature attempt, then the target's defeat rule if its HP dropped to zero.
mod turns;

use std::sync::Arc;

pub use turns::{TurnOrder, roll_initiative};

use crate::ability::{ArchetypeRegistry, DefeatOutcome, TurnContext, TurnOutcome};
use crate::config::BattleConfig;
use crate::env::{ItemDefinition, ItemOracle, RngOracle, apply_stat_effects};
use crate::error::BattleError;
use crate::record::{BattleLog, BattleStep, LogDigest, StepKind, log_digest, render_narration};
use crate::state::{BattleSnapshot, CharacterBuild, Combatants, ItemId, PlayerId, Side};

/// Result of a finished battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleOutcome {
    /// Owning player of the winning build; `None` on a draw.
    pub winner: Option<PlayerId>,
    pub winning_side: Option<Side>,
    /// Rounds started before the battle ended.
    pub rounds: u32,
    pub steps: Vec<BattleStep>,
    pub narration: String,
    /// SHA-256 over `steps`.
    pub digest: LogDigest,
    pub challenger_hp: u32,
    pub opponent_hp: u32,
}

impl BattleOutcome {
    pub fn is_draw(&self) -> bool {
        self.winning_side.is_none()
    }

    pub fn count(&self, kind: StepKind) -> usize {
        self.steps.iter().filter(|step| step.kind == kind).count()
    }

    /// Index of the first step of the given kind.
    pub fn position(&self, kind: StepKind) -> Option<usize> {
        self.steps.iter().position(|step| step.kind == kind)
    }
}

/// Item oracle that knows no items.
struct NoItems;

impl ItemOracle for NoItems {
    fn definition(&self, _id: &ItemId) -> Option<ItemDefinition> {
        None
    }

    fn all_definitions(&self) -> Vec<ItemDefinition> {
        Vec::new()
    }
}

/// Deterministic battle simulator.
///
/// The engine holds only static configuration and content; it can be shared
/// across threads and reused for any number of battles.
#[derive(Clone)]
pub struct BattleEngine {
    config: BattleConfig,
    registry: ArchetypeRegistry,
    items: Arc<dyn ItemOracle>,
}

impl BattleEngine {
    pub fn builder() -> BattleEngineBuilder {
        BattleEngineBuilder::default()
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn registry(&self) -> &ArchetypeRegistry {
        &self.registry
    }

    /// Simulates one battle.
    ///
    /// Fails only on invalid input, before any snapshot is built. Given the
    /// same builds and an RNG in the same state, the outcome is identical.
    pub fn simulate(
        &self,
        challenger: &CharacterBuild,
        opponent: &CharacterBuild,
        rng: &mut dyn RngOracle,
    ) -> Result<BattleOutcome, BattleError> {
        challenger.validate()?;
        opponent.validate()?;

        let span = tracing::debug_span!(
            "battle",
            challenger = %challenger.character,
            opponent = %opponent.character,
        );
        let _enter = span.enter();

        let mut combatants = Combatants::new(
            self.prepare(Side::Challenger, challenger),
            self.prepare(Side::Opponent, opponent),
        );
        let mut log = BattleLog::new();
        let mut ctx = TurnContext {
            log: &mut log,
            rng,
            items: self.items.as_ref(),
            config: &self.config,
        };

        let order = roll_initiative(&combatants, &mut ctx);
        tracing::trace!(first = %order.first, "initiative rolled");

        let mut winning_side = None;
        let mut rounds = 0;
        'rounds: for round in 1..=self.config.max_rounds {
            rounds = round;
            ctx.log.begin_round(round);

            for actor in order.sequence() {
                if let Some(side) = self.play_turn(actor, &mut combatants, &mut ctx) {
                    winning_side = Some(side);
                    break 'rounds;
                }
            }

            tracing::trace!(
                round,
                challenger_hp = combatants.get(Side::Challenger).hp(),
                opponent_hp = combatants.get(Side::Opponent).hp(),
                "round complete"
            );
        }

        if winning_side.is_none() {
            ctx.log.push(
                StepKind::Draw,
                None,
                "Battle ends in a draw after maximum rounds",
                None,
            );
        }

        let winner = winning_side.map(|side| combatants.get(side).player().clone());
        let challenger_hp = combatants.get(Side::Challenger).display_hp();
        let opponent_hp = combatants.get(Side::Opponent).display_hp();

        let steps = log.into_steps();
        let narration = render_narration(&challenger.name, &opponent.name, &steps);
        let digest = log_digest(&steps);

        tracing::debug!(
            winner = ?winning_side,
            rounds,
            steps = steps.len(),
            "battle resolved"
        );

        Ok(BattleOutcome {
            winner,
            winning_side,
            rounds,
            steps,
            narration,
            digest,
            challenger_hp,
            opponent_hp,
        })
    }

    fn prepare<'a>(&self, side: Side, build: &'a CharacterBuild) -> BattleSnapshot<'a> {
        let stats = apply_stat_effects(build.stats, &build.items, self.items.as_ref());
        BattleSnapshot::new(side, build, stats)
    }

    /// Runs one actor's turn. Returns the winning side if the battle ended.
    fn play_turn(
        &self,
        actor_side: Side,
        combatants: &mut Combatants<'_>,
        ctx: &mut TurnContext<'_>,
    ) -> Option<Side> {
        let (actor, target) = combatants.split_mut(actor_side);
        let archetype = self.registry.resolve(actor.archetype());

        archetype.on_turn_start(actor, ctx);
        if archetype.take_turn(actor, target, ctx) == TurnOutcome::Victory {
            return Some(actor_side);
        }

        if target.is_downed() {
            let defeat_rule = self.registry.resolve(target.archetype());
            if defeat_rule.resolve_downed(actor, target, ctx) == DefeatOutcome::Defeated {
                return Some(actor_side);
            }
        }

        None
    }
}

impl std::fmt::Debug for BattleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BattleEngine")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

/// Builder for [`BattleEngine`].
#[derive(Default)]
pub struct BattleEngineBuilder {
    config: Option<BattleConfig>,
    registry: Option<ArchetypeRegistry>,
    items: Option<Arc<dyn ItemOracle>>,
}

impl BattleEngineBuilder {
    pub fn config(mut self, config: BattleConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn registry(mut self, registry: ArchetypeRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn items(mut self, items: Arc<dyn ItemOracle>) -> Self {
        self.items = Some(items);
        self
    }

    /// Validates the configuration and builds the engine.
    pub fn build(self) -> Result<BattleEngine, BattleError> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        Ok(BattleEngine {
            config,
            registry: self.registry.unwrap_or_default(),
            items: self.items.unwrap_or_else(|| Arc::new(NoItems)),
        })
    }
}

#[cfg(test)]
mod tests;
