//! Initiative and turn order.
use crate::ability::TurnContext;
use crate::combat::CheckKind;
use crate::record::StepKind;
use crate::state::{Combatants, Side};

/// Fixed acting order for every round of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnOrder {
    pub first: Side,
}

impl TurnOrder {
    pub const fn second(&self) -> Side {
        self.first.opposite()
    }

    pub const fn sequence(&self) -> [Side; 2] {
        [self.first, self.first.opposite()]
    }
}

/// One opposed agility check, challenger against opponent. The winner acts
/// first in every round.
pub fn roll_initiative(combatants: &Combatants<'_>, ctx: &mut TurnContext<'_>) -> TurnOrder {
    let challenger = combatants.get(Side::Challenger);
    let opponent = combatants.get(Side::Opponent);

    let check = ctx.check(
        challenger.stats.agi,
        opponent.stats.agi,
        CheckKind::Initiative,
    );
    let first = if check.success {
        challenger
    } else {
        opponent
    };

    ctx.log_check(
        StepKind::Initiative,
        first,
        format!("{} gains initiative", first.name()),
        check,
    );

    TurnOrder { first: first.side() }
}
