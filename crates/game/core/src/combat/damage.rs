//! Damage and drain formulas.
use crate::config::BattleConfig;

/// Basic attack damage.
///
/// ```text
/// damage = min(floor(target_max_hp * cap%), floor(attack * attack%))
/// ```
pub fn basic_attack_damage(attack: u32, target_max_hp: u32, config: &BattleConfig) -> u32 {
    let cap = percent_of(target_max_hp, config.damage_hp_cap_percent);
    let raw = percent_of(attack, config.damage_attack_percent);
    cap.min(raw)
}

/// Charm drain: damage from charisma, and the share that heals the charmer.
pub fn charm_drain(charisma: u32, config: &BattleConfig) -> (u32, u32) {
    let damage = percent_of(charisma, config.charm_drain_percent);
    let heal = percent_of(damage, config.drain_heal_percent);
    (damage, heal)
}

/// `floor(value * percent / 100)`.
pub fn percent_of(value: u32, percent: u32) -> u32 {
    u32::try_from(u64::from(value) * u64::from(percent) / 100).unwrap_or(u32::MAX)
}
