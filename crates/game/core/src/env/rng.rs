//! RNG oracle for deterministic random number generation.
//!
//! Every opposed check draws exactly one value from the oracle, so a battle's
//! log is a pure function of the two builds and the oracle's seed.
//!
//! # Determinism
//!
//! All RNG implementations must be deterministic: given the same seed they
//! must produce the same sequence of draws. Replay verification depends on it.

use crate::combat::CheckKind;

/// Source of uniform draws consumed by opposed checks.
///
/// The check kind is passed as context so seeded generators can decorrelate
/// draws and test doubles can force individual outcomes.
pub trait RngOracle {
    /// Returns a uniform value in `[0, 1)`.
    fn roll(&mut self, check: CheckKind) -> f64;
}

impl<R: RngOracle + ?Sized> RngOracle for &mut R {
    fn roll(&mut self, check: CheckKind) -> f64 {
        (**self).roll(check)
    }
}

impl<R: RngOracle + ?Sized> RngOracle for Box<R> {
    fn roll(&mut self, check: CheckKind) -> f64 {
        (**self).roll(check)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// Uses PCG-XSH-RR, producing 32-bit output from 64-bit state. Each draw mixes
/// the battle seed, a draw counter and the check context through
/// [`compute_seed`] before stepping the generator, so draws are independent of
/// each other while remaining fully reproducible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    seed: u64,
    nonce: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// 2^32, used to map a `u32` draw into `[0, 1)`.
    const UNIT_SCALE: f64 = 4_294_967_296.0;

    pub const fn from_seed(seed: u64) -> Self {
        Self { seed, nonce: 0 }
    }

    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of values drawn so far.
    pub const fn draws(&self) -> u64 {
        self.nonce
    }

    /// Draws the next raw 32-bit value.
    pub fn next_u32(&mut self, context: u32) -> u32 {
        let mixed = compute_seed(self.seed, self.nonce, context);
        self.nonce = self.nonce.wrapping_add(1);
        Self::pcg_output(Self::pcg_step(mixed))
    }

    /// `state' = (state * multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn roll(&mut self, check: CheckKind) -> f64 {
        f64::from(self.next_u32(check.context())) / Self::UNIT_SCALE
    }
}

/// Compute a per-draw seed from the battle seed, draw counter and context.
///
/// Constants are based on SplitMix64 and FxHash multipliers.
pub fn compute_seed(battle_seed: u64, nonce: u64, context: u32) -> u64 {
    let mut hash = battle_seed;

    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(context).wrapping_mul(0x517cc1b727220a95);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Oracle returning the same value for every check unless overridden.
///
/// Useful for forcing outcomes: `0.0` passes any check with a non-zero chance,
/// [`FixedRng::ALWAYS_FAIL`] fails every check, and `0.5` favors whichever side
/// has the strictly larger magnitude.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedRng {
    default: f64,
    overrides: Vec<(CheckKind, f64)>,
}

impl FixedRng {
    /// Largest value below one; no check with chance below 100% can pass it.
    pub const ALWAYS_FAIL: f64 = 1.0 - f64::EPSILON;

    pub fn always(value: f64) -> Self {
        Self {
            default: value,
            overrides: Vec::new(),
        }
    }

    pub fn succeed_all() -> Self {
        Self::always(0.0)
    }

    pub fn fail_all() -> Self {
        Self::always(Self::ALWAYS_FAIL)
    }

    /// Overrides the draw for one check kind.
    #[must_use]
    pub fn with(mut self, check: CheckKind, value: f64) -> Self {
        self.overrides.retain(|(kind, _)| *kind != check);
        self.overrides.push((check, value));
        self
    }
}

impl RngOracle for FixedRng {
    fn roll(&mut self, check: CheckKind) -> f64 {
        self.overrides
            .iter()
            .find(|(kind, _)| *kind == check)
            .map_or(self.default, |(_, value)| *value)
    }
}

/// Oracle replaying a fixed list of draws, cycling when exhausted.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptedRng {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of values consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RngOracle for ScriptedRng {
    fn roll(&mut self, _check: CheckKind) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
