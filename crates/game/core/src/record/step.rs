//! Battle log entries.
use crate::combat::CheckResult;
use crate::state::Side;

/// Kind of a logged step.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::IntoStaticStr,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum StepKind {
    Initiative,
    TransformGate,
    ItemEffect,
    SignatureVictory,
    CharmAttempt,
    CharmDrain,
    DominationAttempt,
    BasicAttack,
    Regeneration,
    SealAttempt,
    RegenerationSave,
    Victory,
    Ko,
    Draw,
}

impl StepKind {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Steps that end the battle.
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            StepKind::SignatureVictory | StepKind::Victory | StepKind::Ko | StepKind::Draw
        )
    }
}

/// Structured values attached to a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepPayload {
    Check(CheckResult),
    Attack {
        check: CheckResult,
        damage: u32,
        target_hp: u32,
    },
    Drain {
        damage: u32,
        heal: u32,
        target_hp: u32,
    },
    Regeneration {
        amount: u32,
        hp: u32,
    },
    Restore {
        hp: u32,
    },
    ItemBonus {
        percent: u32,
    },
}

impl StepPayload {
    /// The check carried by this payload, if any.
    pub fn check(&self) -> Option<&CheckResult> {
        match self {
            StepPayload::Check(check) | StepPayload::Attack { check, .. } => Some(check),
            _ => None,
        }
    }
}

/// One entry of the ordered battle log.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleStep {
    pub kind: StepKind,
    /// Round the step happened in; initiative is round 0.
    pub round: u32,
    /// Side the step is attributed to, if any.
    pub actor: Option<Side>,
    pub description: String,
    pub payload: Option<StepPayload>,
}

impl BattleStep {
    pub fn check(&self) -> Option<&CheckResult> {
        self.payload.as_ref().and_then(StepPayload::check)
    }
}

/// Append-only battle log.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BattleLog {
    round: u32,
    steps: Vec<BattleStep>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_round(&mut self, round: u32) {
        self.round = round;
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn push(
        &mut self,
        kind: StepKind,
        actor: Option<Side>,
        description: impl Into<String>,
        payload: Option<StepPayload>,
    ) {
        self.steps.push(BattleStep {
            kind,
            round: self.round,
            actor,
            description: description.into(),
            payload,
        });
    }

    pub fn steps(&self) -> &[BattleStep] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<BattleStep> {
        self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn count(&self, kind: StepKind) -> usize {
        self.steps.iter().filter(|step| step.kind == kind).count()
    }

    pub fn last(&self) -> Option<&BattleStep> {
        self.steps.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_kinds_use_snake_case_names() {
        assert_eq!(StepKind::RegenerationSave.as_str(), "regeneration_save");
        assert_eq!(StepKind::Ko.to_string(), "ko");
        assert!(StepKind::SignatureVictory.is_terminal());
        assert!(!StepKind::SealAttempt.is_terminal());
    }

    #[test]
    fn pushed_steps_carry_the_current_round() {
        let mut log = BattleLog::new();
        log.push(StepKind::Initiative, None, "A gains initiative", None);
        log.begin_round(3);
        log.push(StepKind::Draw, None, "draw", None);

        assert_eq!(log.steps()[0].round, 0);
        assert_eq!(log.steps()[1].round, 3);
        assert_eq!(log.count(StepKind::Draw), 1);
        assert_eq!(log.len(), 2);
    }
}
