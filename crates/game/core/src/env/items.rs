//! Item catalog oracle and the effects items contribute to a battle.
//!
//! Items never change during a battle. Stat effects are folded into the
//! working stats once when the snapshot is created; check effects (Will
//! resistance, Seal boost) are looked up when the matching check happens.
use crate::state::ItemId;
use crate::stats::{Attribute, StatBlock};

/// A single battle effect granted by an item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemEffect {
    /// `stat += floor(stat * percent / 100)` at battle start.
    StatPercent { stat: Attribute, percent: u32 },
    /// `stat += amount` at battle start.
    StatFlat { stat: Attribute, amount: u32 },
    /// Boosts the holder's defense in the final transform gate.
    WillResistance { percent: u32 },
    /// Boosts the holder's offense in Seal checks.
    SealBoost { percent: u32 },
}

/// Static definition of an item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<ItemEffect>,
}

impl ItemDefinition {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            effects: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: ItemEffect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn will_resistance(&self) -> Option<u32> {
        self.effects.iter().find_map(|effect| match effect {
            ItemEffect::WillResistance { percent } => Some(*percent),
            _ => None,
        })
    }

    pub fn seal_boost(&self) -> Option<u32> {
        self.effects.iter().find_map(|effect| match effect {
            ItemEffect::SealBoost { percent } => Some(*percent),
            _ => None,
        })
    }

    /// True when the item changes nothing inside a battle.
    pub fn is_inert(&self) -> bool {
        self.effects.is_empty()
    }
}

/// Item oracle providing static item definitions.
pub trait ItemOracle: Send + Sync {
    /// Returns the item definition for the given id.
    fn definition(&self, id: &ItemId) -> Option<ItemDefinition>;

    /// Returns every known item definition.
    fn all_definitions(&self) -> Vec<ItemDefinition>;
}

/// `value + floor(value * percent / 100)`.
pub fn apply_percent(value: u32, percent: u32) -> u32 {
    let bonus = u64::from(value) * u64::from(percent) / 100;
    u32::try_from(u64::from(value) + bonus).unwrap_or(u32::MAX)
}

/// Folds the stat effects of every equipped item into `stats`.
///
/// Items are visited in id order, effects in definition order. Unknown ids
/// are skipped.
pub fn apply_stat_effects<'i>(
    mut stats: StatBlock,
    items: impl IntoIterator<Item = &'i ItemId>,
    oracle: &(impl ItemOracle + ?Sized),
) -> StatBlock {
    for id in items {
        let Some(definition) = oracle.definition(id) else {
            continue;
        };
        for effect in &definition.effects {
            match *effect {
                ItemEffect::StatPercent { stat, percent } => {
                    let value = stats.get(stat);
                    stats.set(stat, apply_percent(value, percent));
                }
                ItemEffect::StatFlat { stat, amount } => {
                    let value = stats.get(stat);
                    stats.set(stat, value.saturating_add(amount));
                }
                ItemEffect::WillResistance { .. } | ItemEffect::SealBoost { .. } => {}
            }
        }
    }
    stats
}

/// First equipped item granting a check effect, with its percentage.
pub fn find_check_effect<'i>(
    items: impl IntoIterator<Item = &'i ItemId>,
    oracle: &(impl ItemOracle + ?Sized),
    select: impl Fn(&ItemDefinition) -> Option<u32>,
) -> Option<(ItemDefinition, u32)> {
    items.into_iter().find_map(|id| {
        let definition = oracle.definition(id)?;
        let percent = select(&definition)?;
        Some((definition, percent))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Catalog(HashMap<ItemId, ItemDefinition>);

    impl ItemOracle for Catalog {
        fn definition(&self, id: &ItemId) -> Option<ItemDefinition> {
            self.0.get(id).cloned()
        }

        fn all_definitions(&self) -> Vec<ItemDefinition> {
            self.0.values().cloned().collect()
        }
    }

    fn catalog() -> Catalog {
        let threads = ItemDefinition::new("sealing_threads", "Sealing Threads")
            .with_effect(ItemEffect::StatPercent {
                stat: Attribute::Will,
                percent: 10,
            })
            .with_effect(ItemEffect::WillResistance { percent: 15 })
            .with_effect(ItemEffect::SealBoost { percent: 15 });
        let crystal =
            ItemDefinition::new("essence_crystal", "Essence Crystal").with_effect(ItemEffect::StatFlat {
                stat: Attribute::Magic,
                amount: 5,
            });
        Catalog(
            [threads, crystal]
                .into_iter()
                .map(|def| (def.id.clone(), def))
                .collect(),
        )
    }

    #[test]
    fn percent_bonus_uses_floor() {
        // 355 + floor(35.5) = 390
        assert_eq!(apply_percent(355, 10), 390);
        // 350 + floor(52.5) = 402
        assert_eq!(apply_percent(350, 15), 402);
    }

    #[test]
    fn stat_effects_are_applied_once_per_item() {
        let ids = [ItemId::new("essence_crystal"), ItemId::new("sealing_threads")];
        let stats = apply_stat_effects(StatBlock::uniform(300), &ids, &catalog());
        assert_eq!(stats.wil, 330);
        assert_eq!(stats.mag, 305);
        assert_eq!(stats.str, 300);
    }

    #[test]
    fn unknown_items_are_ignored() {
        let ids = [ItemId::new("anti_regen_blade")];
        let stats = apply_stat_effects(StatBlock::uniform(300), &ids, &catalog());
        assert_eq!(stats, StatBlock::uniform(300));
    }

    #[test]
    fn check_effects_are_found_by_selector() {
        let ids = [ItemId::new("essence_crystal"), ItemId::new("sealing_threads")];
        let (definition, percent) =
            find_check_effect(&ids, &catalog(), ItemDefinition::will_resistance).unwrap();
        assert_eq!(definition.name, "Sealing Threads");
        assert_eq!(percent, 15);
        assert!(find_check_effect(&ids[..1], &catalog(), ItemDefinition::seal_boost).is_none());
    }
}
