//! Signature abilities (archetypes).
//!
//! Each character's base definition names an archetype id. The engine looks
//! the id up in an [`ArchetypeRegistry`] and hands control to the matching
//! [`Archetype`] for every turn; unknown ids fall back to the basic attacker.
//!
//! Archetypes hook into three points of a battle:
//! - [`Archetype::on_turn_start`] runs before the actor acts
//! - [`Archetype::take_turn`] performs the actor's signature attempt
//! - [`Archetype::resolve_downed`] decides what happens when the archetype's
//!   holder drops to zero HP
mod basic;
mod charm;
mod regeneration;
mod transform;

use std::collections::HashMap;
use std::sync::Arc;

pub use basic::{BasicAttacker, basic_attack};
pub use charm::CharmDrainSnowball;
pub use regeneration::RegenerationSealGated;
pub use transform::TransformMultiGate;

use crate::combat::{CheckKind, CheckResult, opposed_check};
use crate::config::BattleConfig;
use crate::env::{ItemDefinition, ItemOracle, RngOracle, find_check_effect};
use crate::record::{BattleLog, StepKind, StepPayload};
use crate::state::{ArchetypeId, BattleSnapshot};

/// Everything a resolver may touch besides the two combatants.
pub struct TurnContext<'r> {
    pub log: &'r mut BattleLog,
    pub rng: &'r mut dyn RngOracle,
    pub items: &'r dyn ItemOracle,
    pub config: &'r BattleConfig,
}

impl TurnContext<'_> {
    /// Rolls an opposed check against the battle's RNG.
    pub fn check(&mut self, attacker: u32, defender: u32, kind: CheckKind) -> CheckResult {
        opposed_check(attacker, defender, kind, &mut *self.rng)
    }

    /// Item on `holder` granting Will resistance in the final transform gate.
    pub fn will_resistance(&self, holder: &BattleSnapshot<'_>) -> Option<(ItemDefinition, u32)> {
        find_check_effect(holder.items(), self.items, ItemDefinition::will_resistance)
    }

    /// Item on `holder` boosting its Seal attempts.
    pub fn seal_boost(&self, holder: &BattleSnapshot<'_>) -> Option<(ItemDefinition, u32)> {
        find_check_effect(holder.items(), self.items, ItemDefinition::seal_boost)
    }

    pub fn log_check(
        &mut self,
        kind: StepKind,
        actor: &BattleSnapshot<'_>,
        description: impl Into<String>,
        check: CheckResult,
    ) {
        self.log.push(
            kind,
            Some(actor.side()),
            description,
            Some(StepPayload::Check(check)),
        );
    }
}

/// Result of an archetype's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The battle goes on; the engine still checks whether the target is downed.
    Continue,
    /// The actor won outright (signature victory).
    Victory,
}

/// What happens to a combatant whose HP reached zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefeatOutcome {
    Defeated,
    Survived,
}

/// A signature ability.
pub trait Archetype: Send + Sync {
    /// Registry key, e.g. `"charm_drain_snowball"`.
    fn id(&self) -> &'static str;

    /// Called at the start of the holder's own turn.
    fn on_turn_start(&self, _actor: &mut BattleSnapshot<'_>, _ctx: &mut TurnContext<'_>) {}

    /// Performs the holder's action for this turn.
    fn take_turn(
        &self,
        actor: &mut BattleSnapshot<'_>,
        target: &mut BattleSnapshot<'_>,
        ctx: &mut TurnContext<'_>,
    ) -> TurnOutcome;

    /// Called when the holder has been reduced to zero HP by `attacker`.
    ///
    /// The default is a plain knockout.
    fn resolve_downed(
        &self,
        _attacker: &BattleSnapshot<'_>,
        downed: &mut BattleSnapshot<'_>,
        ctx: &mut TurnContext<'_>,
    ) -> DefeatOutcome {
        ctx.log.push(
            StepKind::Ko,
            Some(downed.side()),
            format!("{} is defeated", downed.name()),
            None,
        );
        DefeatOutcome::Defeated
    }
}

/// Archetypes keyed by id, with a fallback for unknown ids.
#[derive(Clone)]
pub struct ArchetypeRegistry {
    archetypes: HashMap<&'static str, Arc<dyn Archetype>>,
    fallback: Arc<dyn Archetype>,
}

impl ArchetypeRegistry {
    /// Empty registry; every id resolves to `fallback`.
    pub fn new(fallback: Arc<dyn Archetype>) -> Self {
        Self {
            archetypes: HashMap::new(),
            fallback,
        }
    }

    /// Registry with the built-in signature abilities.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new(Arc::new(BasicAttacker));
        registry.register(Arc::new(BasicAttacker));
        registry.register(Arc::new(TransformMultiGate));
        registry.register(Arc::new(CharmDrainSnowball));
        registry.register(Arc::new(RegenerationSealGated));
        registry
    }

    /// Registers an archetype, replacing any previous one with the same id.
    pub fn register(&mut self, archetype: Arc<dyn Archetype>) {
        self.archetypes.insert(archetype.id(), archetype);
    }

    /// Resolves an id, falling back to the basic attacker.
    pub fn resolve(&self, id: &ArchetypeId) -> &dyn Archetype {
        self.archetypes
            .get(id.as_str())
            .unwrap_or(&self.fallback)
            .as_ref()
    }

    pub fn is_registered(&self, id: &ArchetypeId) -> bool {
        self.archetypes.contains_key(id.as_str())
    }

    /// Registered ids in sorted order.
    pub fn ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.archetypes.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl Default for ArchetypeRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for ArchetypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArchetypeRegistry")
            .field("archetypes", &self.ids())
            .field("fallback", &self.fallback.id())
            .finish()
    }
}
