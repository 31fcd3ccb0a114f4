//! Battle tuning parameters.
//!
//! Every percentage is an integer in `0..=100` applied with floor division so
//! that two runs with the same seed produce byte-identical logs.
use crate::error::BattleError;

/// Tunable constants consumed by the engine and the archetype resolvers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Hard cap on the number of rounds before the battle is declared a draw.
    pub max_rounds: u32,
    /// HP regained at the start of each turn by the regeneration archetype.
    pub regeneration_percent: u32,
    /// HP restored when a Seal attempt fails, as a share of max HP.
    pub seal_restore_percent: u32,
    /// Basic attack damage ceiling as a share of the target's max HP.
    pub damage_hp_cap_percent: u32,
    /// Basic attack damage as a share of the attacker's attack value.
    pub damage_attack_percent: u32,
    /// Charm drain as a share of the attacker's charisma.
    pub charm_drain_percent: u32,
    /// Share of the drained amount that heals the charmer.
    pub drain_heal_percent: u32,
    /// Charm stacks required before a domination attempt is made.
    pub domination_stacks: u32,
}

impl BattleConfig {
    pub const DEFAULT_MAX_ROUNDS: u32 = 10;
    pub const DEFAULT_REGENERATION_PERCENT: u32 = 10;
    pub const DEFAULT_SEAL_RESTORE_PERCENT: u32 = 30;
    pub const DEFAULT_DAMAGE_HP_CAP_PERCENT: u32 = 30;
    pub const DEFAULT_DAMAGE_ATTACK_PERCENT: u32 = 15;
    pub const DEFAULT_CHARM_DRAIN_PERCENT: u32 = 10;
    pub const DEFAULT_DRAIN_HEAL_PERCENT: u32 = 50;
    pub const DEFAULT_DOMINATION_STACKS: u32 = 3;

    pub const fn new() -> Self {
        Self {
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
            regeneration_percent: Self::DEFAULT_REGENERATION_PERCENT,
            seal_restore_percent: Self::DEFAULT_SEAL_RESTORE_PERCENT,
            damage_hp_cap_percent: Self::DEFAULT_DAMAGE_HP_CAP_PERCENT,
            damage_attack_percent: Self::DEFAULT_DAMAGE_ATTACK_PERCENT,
            charm_drain_percent: Self::DEFAULT_CHARM_DRAIN_PERCENT,
            drain_heal_percent: Self::DEFAULT_DRAIN_HEAL_PERCENT,
            domination_stacks: Self::DEFAULT_DOMINATION_STACKS,
        }
    }

    pub const fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Rejects configurations that would break termination or HP bounds.
    pub fn validate(&self) -> Result<(), BattleError> {
        if self.max_rounds == 0 {
            return Err(BattleError::InvalidConfig {
                field: "max_rounds",
                reason: "must be at least 1",
            });
        }

        let percents = [
            ("regeneration_percent", self.regeneration_percent),
            ("seal_restore_percent", self.seal_restore_percent),
            ("damage_hp_cap_percent", self.damage_hp_cap_percent),
            ("damage_attack_percent", self.damage_attack_percent),
            ("charm_drain_percent", self.charm_drain_percent),
            ("drain_heal_percent", self.drain_heal_percent),
        ];
        for (field, value) in percents {
            if value > 100 {
                return Err(BattleError::InvalidConfig {
                    field,
                    reason: "percentages must be within 0..=100",
                });
            }
        }

        // A seal failure that restores nothing would leave the regenerator at 0 HP.
        if self.seal_restore_percent == 0 {
            return Err(BattleError::InvalidConfig {
                field: "seal_restore_percent",
                reason: "must restore some HP",
            });
        }

        Ok(())
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = BattleConfig::default();
        assert_eq!(config.max_rounds, 10);
        assert_eq!(config.domination_stacks, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_rounds_is_rejected() {
        let config = BattleConfig::new().with_max_rounds(0);
        assert!(matches!(
            config.validate(),
            Err(BattleError::InvalidConfig {
                field: "max_rounds",
                ..
            })
        ));
    }

    #[test]
    fn percentages_above_hundred_are_rejected() {
        let config = BattleConfig {
            charm_drain_percent: 150,
            ..BattleConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
