//! Battle log, digest and narration.
mod digest;
mod narration;
mod step;

pub use digest::{LogDigest, log_digest};
pub use narration::{render_narration, render_step};
pub use step::{BattleLog, BattleStep, StepKind, StepPayload};
