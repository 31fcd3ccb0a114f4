//! Combat resolution primitives: opposed checks and damage formulas.
mod check;
mod damage;

pub use check::{CheckKind, CheckResult, opposed_check, success_probability};
pub use damage::{basic_attack_damage, charm_drain, percent_of};
