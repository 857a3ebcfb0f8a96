//! Scoring rules trait.
//!
//! A `ScoringRules` implementation turns one throw into a `ThrowOutcome`:
//! the actor's new mark count and the points credited to each player.
//! Scoring is pure. The caller decides when to apply the outcome.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CricketNumber, Player, PlayerId, PlayerMap, Points, GameState, Throw};

/// Points credited to one player by a throw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credit {
    pub player: PlayerId,
    pub points: Points,
}

/// New mark count for the actor on a cricket number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkChange {
    pub number: CricketNumber,
    pub before: u8,
    pub after: u8,
}

/// Everything one throw changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrowOutcome {
    /// The player who threw.
    pub actor: PlayerId,

    pub throw: Throw,

    /// Set when the throw landed on a cricket number.
    pub marks: Option<MarkChange>,

    /// Point credits, at most one per player.
    /// Most throws credit zero or one player, so no heap allocation.
    pub credits: SmallVec<[Credit; 4]>,
}

impl ThrowOutcome {
    /// An outcome with no marks and no credits.
    #[must_use]
    pub fn empty(actor: PlayerId, throw: Throw) -> Self {
        Self {
            actor,
            throw,
            marks: None,
            credits: SmallVec::new(),
        }
    }

    /// Credit `points` to `player`. Zero credits are dropped.
    pub fn credit(&mut self, player: PlayerId, points: Points) {
        if points.is_zero() {
            return;
        }
        match self.credits.iter_mut().find(|c| c.player == player) {
            Some(existing) => existing.points += points,
            None => self.credits.push(Credit { player, points }),
        }
    }

    /// Total points this throw credits to `player`.
    #[must_use]
    pub fn points_for(&self, player: PlayerId) -> Points {
        self.credits
            .iter()
            .filter(|c| c.player == player)
            .fold(Points::ZERO, |acc, c| acc + c.points)
    }

    /// Did this throw give points to someone other than the actor?
    #[must_use]
    pub fn is_transfer(&self) -> bool {
        self.credits.iter().any(|c| c.player != self.actor)
    }

    /// Did this throw close a number for the actor?
    #[must_use]
    pub fn closed_number(&self) -> Option<CricketNumber> {
        self.marks
            .filter(|m| m.before < 3 && m.after >= 3)
            .map(|m| m.number)
    }

    /// Write marks and credits into `players`.
    pub fn apply_to(&self, players: &mut PlayerMap<Player>) {
        if let Some(change) = self.marks {
            players[self.actor].marks.set(change.number, change.after);
        }
        for credit in &self.credits {
            players[credit.player].total += credit.points;
        }
    }
}

/// Scoring rules trait.
///
/// ## Implementation Notes
///
/// - `score` must be deterministic and must not mutate anything
/// - `score` may assume the throw is well-formed
pub trait ScoringRules {
    /// Score `throw` for the current player of `state`.
    fn score(&self, state: &GameState, throw: Throw) -> ThrowOutcome;

    /// Updated players after `throw`, leaving `state` untouched.
    fn apply(&self, state: &GameState, throw: Throw) -> (PlayerMap<Player>, ThrowOutcome) {
        let outcome = self.score(state, throw);
        let mut players = state.players.clone();
        outcome.apply_to(&mut players);
        (players, outcome)
    }
}
