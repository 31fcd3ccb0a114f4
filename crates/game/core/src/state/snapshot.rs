//! Mutable per-battle view of a combatant.

use std::collections::btree_set;

use super::build::CharacterBuild;
use super::ids::{ArchetypeId, ItemId, PlayerId};
use crate::stats::StatBlock;

/// Which seat a combatant occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Side {
    Challenger,
    Opponent,
}

impl Side {
    pub const fn opposite(self) -> Self {
        match self {
            Side::Challenger => Side::Opponent,
            Side::Opponent => Side::Challenger,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusKind {
    /// One successful charm landed on `target`.
    Charm,
}

/// Status record kept by the combatant whose ability applied it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub kind: StatusKind,
    /// Side the effect was applied to.
    pub target: Side,
}

/// Per-battle state of one combatant.
///
/// `stats` is the working copy with item modifiers already folded in; the
/// wrapped build is never mutated. Max HP comes from the build's own stamina,
/// so stat items never raise it.
#[derive(Clone, Debug)]
pub struct BattleSnapshot<'a> {
    side: Side,
    build: &'a CharacterBuild,
    pub stats: StatBlock,
    hp: i32,
    max_hp: i32,
    status: Vec<StatusEffect>,
}

impl<'a> BattleSnapshot<'a> {
    /// Creates a snapshot at full HP from already-modified working stats.
    pub fn new(side: Side, build: &'a CharacterBuild, stats: StatBlock) -> Self {
        let max_hp = build.stats.max_hp();
        Self {
            side,
            build,
            stats,
            hp: max_hp,
            max_hp,
            status: Vec::new(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn build(&self) -> &'a CharacterBuild {
        self.build
    }

    pub fn name(&self) -> &'a str {
        &self.build.name
    }

    pub fn player(&self) -> &'a PlayerId {
        &self.build.player
    }

    pub fn archetype(&self) -> &'a ArchetypeId {
        &self.build.archetype
    }

    pub fn items(&self) -> btree_set::Iter<'a, ItemId> {
        self.build.items.iter()
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    /// HP as shown in logs: never below zero.
    pub fn display_hp(&self) -> u32 {
        u32::try_from(self.hp.max(0)).unwrap_or(0)
    }

    pub fn is_downed(&self) -> bool {
        self.hp <= 0
    }

    /// `floor(max_hp * percent / 100)`.
    pub fn percent_of_max(&self, percent: u32) -> u32 {
        let max = u64::try_from(self.max_hp.max(0)).unwrap_or(0);
        u32::try_from(max * u64::from(percent) / 100).unwrap_or(u32::MAX)
    }

    pub fn take_damage(&mut self, amount: u32) {
        let amount = i32::try_from(amount).unwrap_or(i32::MAX);
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Heals up to max HP and returns the amount actually gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        let amount = i32::try_from(amount).unwrap_or(i32::MAX);
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        u32::try_from((self.hp - before).max(0)).unwrap_or(0)
    }

    /// Sets HP to `percent` of max HP.
    ///
    /// Floors at 1 HP: with stamina of 3 or less the exact share rounds down
    /// to zero, which would leave a restored combatant still downed.
    pub fn restore_to_percent(&mut self, percent: u32) {
        let restored = i32::try_from(self.percent_of_max(percent)).unwrap_or(self.max_hp);
        self.hp = restored.max(1);
    }

    pub fn status(&self) -> &[StatusEffect] {
        &self.status
    }

    pub fn push_status(&mut self, effect: StatusEffect) {
        self.status.push(effect);
    }

    /// Number of charms this combatant has landed on `target`.
    pub fn charm_stacks_on(&self, target: Side) -> u32 {
        let count = self
            .status
            .iter()
            .filter(|effect| effect.kind == StatusKind::Charm && effect.target == target)
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }
}

/// Both combatants of a battle, addressable by [`Side`].
#[derive(Debug)]
pub struct Combatants<'a> {
    challenger: BattleSnapshot<'a>,
    opponent: BattleSnapshot<'a>,
}

impl<'a> Combatants<'a> {
    pub fn new(challenger: BattleSnapshot<'a>, opponent: BattleSnapshot<'a>) -> Self {
        Self {
            challenger,
            opponent,
        }
    }

    pub fn get(&self, side: Side) -> &BattleSnapshot<'a> {
        match side {
            Side::Challenger => &self.challenger,
            Side::Opponent => &self.opponent,
        }
    }

    /// Borrows the acting combatant and its target mutably at the same time.
    pub fn split_mut(&mut self, actor: Side) -> (&mut BattleSnapshot<'a>, &mut BattleSnapshot<'a>) {
        match actor {
            Side::Challenger => (&mut self.challenger, &mut self.opponent),
            Side::Opponent => (&mut self.opponent, &mut self.challenger),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Attribute;

    fn build(sta: u32) -> CharacterBuild {
        CharacterBuild::new(
            "p1",
            "c1",
            "Tester",
            "basic",
            StatBlock::uniform(100).with(Attribute::Stamina, sta),
        )
    }

    #[test]
    fn heal_is_capped_at_max_hp() {
        let build = build(400);
        let mut snapshot = BattleSnapshot::new(Side::Opponent, &build, build.stats);
        snapshot.take_damage(25);
        assert_eq!(snapshot.heal(40), 25);
        assert_eq!(snapshot.hp(), 400);
    }

    #[test]
    fn restore_sets_exact_share_of_max() {
        let build = build(333);
        let mut snapshot = BattleSnapshot::new(Side::Opponent, &build, build.stats);
        snapshot.take_damage(500);
        assert!(snapshot.is_downed());
        assert_eq!(snapshot.display_hp(), 0);

        snapshot.restore_to_percent(30);
        // floor(333 * 0.3) = 99
        assert_eq!(snapshot.hp(), 99);
    }

    #[test]
    fn restore_never_leaves_a_tiny_combatant_at_zero() {
        let build = build(3);
        let mut snapshot = BattleSnapshot::new(Side::Opponent, &build, build.stats);
        snapshot.take_damage(3);
        snapshot.restore_to_percent(30);
        assert_eq!(snapshot.hp(), 1);
    }

    #[test]
    fn charm_stacks_count_only_matching_target() {
        let build = build(100);
        let mut snapshot = BattleSnapshot::new(Side::Opponent, &build, build.stats);
        for target in [Side::Challenger, Side::Challenger, Side::Opponent] {
            snapshot.push_status(StatusEffect {
                kind: StatusKind::Charm,
                target,
            });
        }
        assert_eq!(snapshot.charm_stacks_on(Side::Challenger), 2);
        assert_eq!(snapshot.charm_stacks_on(Side::Opponent), 1);
    }

    #[test]
    fn max_hp_ignores_modified_working_stats() {
        let build = build(400);
        let boosted = build.stats.with(Attribute::Stamina, 500);
        let snapshot = BattleSnapshot::new(Side::Challenger, &build, boosted);
        assert_eq!(snapshot.stats.sta, 500);
        assert_eq!(snapshot.max_hp(), 400);
        assert_eq!(snapshot.hp(), 400);
    }

    #[test]
    fn split_mut_orders_actor_first() {
        let a = build(100);
        let b = build(200);
        let mut combatants = Combatants::new(
            BattleSnapshot::new(Side::Challenger, &a, a.stats),
            BattleSnapshot::new(Side::Opponent, &b, b.stats),
        );
        let (actor, target) = combatants.split_mut(Side::Opponent);
        assert_eq!(actor.max_hp(), 200);
        assert_eq!(target.max_hp(), 100);
    }
}
