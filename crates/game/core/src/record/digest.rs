//! SHA-256 digest over a battle log.
//!
//! The digest is stored alongside persisted matches so a replay from the
//! recorded seed can be checked for byte-identical output.
use sha2::{Digest, Sha256};

use super::step::{BattleStep, StepPayload};
use crate::combat::CheckResult;
use crate::state::Side;

pub type LogDigest = [u8; 32];

/// Hashes every step in order with length-prefixed fields.
pub fn log_digest(steps: &[BattleStep]) -> LogDigest {
    let mut hasher = Sha256::new();
    hasher.update((steps.len() as u64).to_le_bytes());
    for step in steps {
        hash_str(&mut hasher, step.kind.as_str());
        hasher.update(step.round.to_le_bytes());
        hasher.update([side_tag(step.actor)]);
        hash_str(&mut hasher, &step.description);
        hash_payload(&mut hasher, step.payload.as_ref());
    }
    hasher.finalize().into()
}

fn hash_str(hasher: &mut Sha256, value: &str) {
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}

fn side_tag(side: Option<Side>) -> u8 {
    match side {
        None => 0,
        Some(Side::Challenger) => 1,
        Some(Side::Opponent) => 2,
    }
}

fn hash_check(hasher: &mut Sha256, check: &CheckResult) {
    hasher.update(check.kind.context().to_le_bytes());
    hasher.update([u8::from(check.success)]);
    for value in [check.chance, check.roll, check.attacker, check.defender] {
        hasher.update(value.to_le_bytes());
    }
}

fn hash_payload(hasher: &mut Sha256, payload: Option<&StepPayload>) {
    let Some(payload) = payload else {
        hasher.update([0u8]);
        return;
    };
    match payload {
        StepPayload::Check(check) => {
            hasher.update([1u8]);
            hash_check(hasher, check);
        }
        StepPayload::Attack {
            check,
            damage,
            target_hp,
        } => {
            hasher.update([2u8]);
            hash_check(hasher, check);
            hasher.update(damage.to_le_bytes());
            hasher.update(target_hp.to_le_bytes());
        }
        StepPayload::Drain {
            damage,
            heal,
            target_hp,
        } => {
            hasher.update([3u8]);
            for value in [damage, heal, target_hp] {
                hasher.update(value.to_le_bytes());
            }
        }
        StepPayload::Regeneration { amount, hp } => {
            hasher.update([4u8]);
            hasher.update(amount.to_le_bytes());
            hasher.update(hp.to_le_bytes());
        }
        StepPayload::Restore { hp } => {
            hasher.update([5u8]);
            hasher.update(hp.to_le_bytes());
        }
        StepPayload::ItemBonus { percent } => {
            hasher.update([6u8]);
            hasher.update(percent.to_le_bytes());
        }
    }
}
