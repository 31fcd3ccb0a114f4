use super::Attribute;
use crate::error::BattleError;
use crate::state::CharacterId;

/// Eight-attribute stat block.
///
/// Persisted builds keep every attribute within [`StatBlock::MIN`]..=[`StatBlock::MAX`].
/// Working copies inside a battle may exceed the maximum once item modifiers
/// are applied; they are never clamped back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock {
    pub str: u32,
    pub agi: u32,
    pub sta: u32,
    pub mag: u32,
    pub wit: u32,
    pub wil: u32,
    pub cha: u32,
    pub luk: u32,
}

impl StatBlock {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 999;

    /// Every attribute set to the same value.
    pub const fn uniform(value: u32) -> Self {
        Self {
            str: value,
            agi: value,
            sta: value,
            mag: value,
            wit: value,
            wil: value,
            cha: value,
            luk: value,
        }
    }

    pub const fn get(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::Strength => self.str,
            Attribute::Agility => self.agi,
            Attribute::Stamina => self.sta,
            Attribute::Magic => self.mag,
            Attribute::Wit => self.wit,
            Attribute::Will => self.wil,
            Attribute::Charisma => self.cha,
            Attribute::Luck => self.luk,
        }
    }

    pub fn get_mut(&mut self, attribute: Attribute) -> &mut u32 {
        match attribute {
            Attribute::Strength => &mut self.str,
            Attribute::Agility => &mut self.agi,
            Attribute::Stamina => &mut self.sta,
            Attribute::Magic => &mut self.mag,
            Attribute::Wit => &mut self.wit,
            Attribute::Will => &mut self.wil,
            Attribute::Charisma => &mut self.cha,
            Attribute::Luck => &mut self.luk,
        }
    }

    pub fn set(&mut self, attribute: Attribute, value: u32) {
        *self.get_mut(attribute) = value;
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, attribute: Attribute, value: u32) -> Self {
        self.set(attribute, value);
        self
    }

    /// Offensive value used by basic attacks: `max(STR, MAG)`.
    pub fn attack_value(&self) -> u32 {
        self.str.max(self.mag)
    }

    /// Defensive value used by basic attacks: `max(AGI, STA)`.
    pub fn defense_value(&self) -> u32 {
        self.agi.max(self.sta)
    }

    /// Max HP equals stamina.
    pub fn max_hp(&self) -> i32 {
        i32::try_from(self.sta).unwrap_or(i32::MAX)
    }

    /// Checks that every attribute lies within the persisted range.
    pub fn validate(&self, character: &CharacterId) -> Result<(), BattleError> {
        for attribute in Attribute::ALL {
            let value = self.get(attribute);
            if !(Self::MIN..=Self::MAX).contains(&value) {
                return Err(BattleError::AttributeOutOfRange {
                    character: character.clone(),
                    attribute,
                    value,
                });
            }
        }
        Ok(())
    }
}

impl Default for StatBlock {
    /// Baseline stats used by freshly rolled characters.
    fn default() -> Self {
        Self::uniform(100)
    }
}
