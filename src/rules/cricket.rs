//! Point-transfer Cricket.
//!
//! ## Open numbers (1-14, Miss)
//!
//! Face value times multiplier goes to the thrower. A Miss is worth
//! `GameConfig::miss_value`.
//!
//! ## Cricket numbers (15-20, Bull)
//!
//! While the thrower still has the number open, hits become marks. Hits
//! beyond the third mark overflow:
//! - If any opponent still has the number open, each open opponent is
//!   credited `value * overflow * remaining_marks / 2`.
//! - Otherwise the thrower scores `value * overflow`.
//!
//! Once the thrower has closed the number, every hit transfers:
//! - Open opponents are credited `value * remaining_marks * multiplier / 2`.
//! - If nobody has it open, the thrower scores `value * multiplier`.
//!
//! Marks never exceed 3, and the thrower's own total never goes down.

use crate::core::{
    CricketNumber, GameConfig, GameState, Marks, PlayerId, Points, Target, Throw,
    TRANSFER_DIVISOR,
};

use super::engine::{MarkChange, ScoringRules, ThrowOutcome};

/// House rules for point-transfer Cricket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CricketRules {
    miss_value: u32,
}

impl Default for CricketRules {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl CricketRules {
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            miss_value: config.miss_value,
        }
    }

    /// Point value of one hit on `target`.
    #[must_use]
    pub fn value(&self, target: Target) -> u32 {
        match target {
            Target::Cricket(number) => number.value(),
            Target::Open(face) => face as u32,
            Target::Miss => self.miss_value,
        }
    }

    /// Credit every opponent still open on `number` with
    /// `value * hits * remaining / TRANSFER_DIVISOR`.
    fn transfer(
        state: &GameState,
        actor: PlayerId,
        number: CricketNumber,
        hits: u8,
        outcome: &mut ThrowOutcome,
    ) {
        for (player, opponent) in state.players.others(actor) {
            let remaining = opponent.marks.remaining(number);
            if remaining == 0 {
                continue;
            }
            let raw = number.value() as u64 * hits as u64 * remaining as u64;
            // raw / divisor points == raw * 2 / divisor half-points
            outcome.credit(player, Points::from_halves(raw * 2 / TRANSFER_DIVISOR));
        }
    }

    fn score_cricket(
        &self,
        state: &GameState,
        actor: PlayerId,
        number: CricketNumber,
        outcome: &mut ThrowOutcome,
    ) {
        let multiplier = outcome.throw.multiplier.factor();
        let hits = state.players[actor].marks.get(number);
        let opponents_open = state.opponents_open(actor, number);

        if hits < Marks::CLOSED {
            let new_hits = hits + multiplier;
            let overflow = new_hits.saturating_sub(Marks::CLOSED);

            outcome.marks = Some(MarkChange {
                number,
                before: hits,
                after: new_hits.min(Marks::CLOSED),
            });

            if overflow == 0 {
                return;
            }
            if opponents_open {
                Self::transfer(state, actor, number, overflow, outcome);
            } else {
                outcome.credit(actor, Points::whole(number.value() as u64 * overflow as u64));
            }
        } else if opponents_open {
            Self::transfer(state, actor, number, multiplier, outcome);
        } else {
            outcome.credit(actor, Points::whole(number.value() as u64 * multiplier as u64));
        }
    }
}

impl ScoringRules for CricketRules {
    fn score(&self, state: &GameState, throw: Throw) -> ThrowOutcome {
        let actor = state.current_player;
        let mut outcome = ThrowOutcome::empty(actor, throw);

        match throw.target {
            Target::Cricket(number) => self.score_cricket(state, actor, number, &mut outcome),
            open => {
                debug_assert!(
                    !matches!(open, Target::Open(face) if face == 0 || face > Target::MAX_OPEN),
                    "open target out of range: {open:?}"
                );
                let points = self.value(open) as u64 * throw.multiplier.factor() as u64;
                outcome.credit(actor, Points::whole(points));
            }
        }

        outcome
    }
}
