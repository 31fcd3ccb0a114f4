//! Opposed checks.
//!
//! Every uncertain outcome in a battle is an opposed check between two
//! non-negative magnitudes `a` (the attempting side) and `b` (the resisting
//! side). It succeeds with probability `a / (a + b)`.
use crate::env::RngOracle;

/// Label of an opposed check; doubles as RNG context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CheckKind {
    #[strum(serialize = "Initiative")]
    Initiative,
    #[strum(serialize = "Attack")]
    Attack,
    #[strum(serialize = "Transform Approach")]
    TransformApproach,
    #[strum(serialize = "Transform Grapple")]
    TransformGrapple,
    #[strum(serialize = "Transform Overwrite")]
    TransformOverwrite,
    #[strum(serialize = "Anti-flinch")]
    AntiFlinch,
    #[strum(serialize = "Transform Will")]
    TransformWill,
    #[strum(serialize = "Charm")]
    Charm,
    #[strum(serialize = "Domination Lock")]
    DominationLock,
    #[strum(serialize = "Seal")]
    Seal,
}

impl CheckKind {
    /// Stable numeric context mixed into seeded draws.
    pub const fn context(self) -> u32 {
        match self {
            CheckKind::Initiative => 1,
            CheckKind::Attack => 2,
            CheckKind::TransformApproach => 3,
            CheckKind::TransformGrapple => 4,
            CheckKind::TransformOverwrite => 5,
            CheckKind::AntiFlinch => 6,
            CheckKind::TransformWill => 7,
            CheckKind::Charm => 8,
            CheckKind::DominationLock => 9,
            CheckKind::Seal => 10,
        }
    }

    pub fn label(self) -> &'static str {
        self.into()
    }
}

/// Outcome of one opposed check, recorded verbatim in the battle log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckResult {
    pub kind: CheckKind,
    pub success: bool,
    /// `floor(p * 100)`.
    pub chance: u32,
    /// `floor(r * 100)`, where `r` is the raw draw.
    pub roll: u32,
    /// Attempting magnitude.
    pub attacker: u32,
    /// Resisting magnitude.
    pub defender: u32,
}

impl CheckResult {
    /// Copy with the success flag flipped, used where a check is rolled from
    /// one side's perspective and logged from the other's.
    #[must_use]
    pub fn inverted(self) -> Self {
        Self {
            success: !self.success,
            ..self
        }
    }
}

/// `a / (a + b)`, or `None` when both magnitudes are zero.
pub fn success_probability(attacker: u32, defender: u32) -> Option<f64> {
    let total = u64::from(attacker) + u64::from(defender);
    if total == 0 {
        return None;
    }
    Some(f64::from(attacker) / total as f64)
}

/// Resolves an opposed check, consuming exactly one draw.
///
/// When both magnitudes are zero the check fails with chance 0; the draw is
/// still consumed so the RNG stream stays aligned with the log.
pub fn opposed_check(
    attacker: u32,
    defender: u32,
    kind: CheckKind,
    rng: &mut (impl RngOracle + ?Sized),
) -> CheckResult {
    let draw = rng.roll(kind);
    let probability = success_probability(attacker, defender).unwrap_or(0.0);

    CheckResult {
        kind,
        success: draw < probability,
        chance: percent_floor(probability),
        roll: percent_floor(draw),
        attacker,
        defender,
    }
}

fn percent_floor(value: f64) -> u32 {
    (value * 100.0).floor().clamp(0.0, 100.0) as u32
}
