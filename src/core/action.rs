//! Throw representation: target + multiplier.
//!
//! A `Throw` is the single input the scoring engine accepts. A
//! `ThrowRecord` adds who threw it and when, for the session's throw log.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::board::{CricketNumber, Multiplier, Target};
use super::error::BoardError;
use super::player::PlayerId;

/// One dart.
///
/// ```
/// use dart_cricket::core::{Multiplier, Target, Throw};
///
/// let triple_twenty = Throw::new(Target::number(20).unwrap(), Multiplier::Triple);
/// assert_eq!(triple_twenty.to_string(), "Triple 20");
///
/// let parsed = Throw::parse("bull", "2").unwrap();
/// assert_eq!(parsed, Throw::new(Target::bull(), Multiplier::Double));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Throw {
    pub target: Target,
    pub multiplier: Multiplier,
}

impl Throw {
    #[must_use]
    pub const fn new(target: Target, multiplier: Multiplier) -> Self {
        Self { target, multiplier }
    }

    /// A single on `target`.
    #[must_use]
    pub const fn single(target: Target) -> Self {
        Self::new(target, Multiplier::Single)
    }

    /// A throw on a cricket number.
    #[must_use]
    pub const fn cricket(number: CricketNumber, multiplier: Multiplier) -> Self {
        Self::new(Target::Cricket(number), multiplier)
    }

    /// A single Miss.
    #[must_use]
    pub const fn miss() -> Self {
        Self::single(Target::Miss)
    }

    /// Parse untrusted target and multiplier text.
    pub fn parse(target: &str, multiplier: &str) -> Result<Self, BoardError> {
        Ok(Self::new(target.parse()?, multiplier.parse()?))
    }
}

impl fmt::Display for Throw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target {
            Target::Miss if self.multiplier == Multiplier::Single => write!(f, "Miss"),
            target => write!(f, "{} {}", self.multiplier, target),
        }
    }
}

/// A throw with the context it was made in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrowRecord {
    /// The player who threw.
    pub player: PlayerId,

    pub throw: Throw,

    /// Round the throw was made in.
    pub round: u32,

    /// Position within the player's turn (0-2).
    pub throw_in_turn: u8,
}

impl ThrowRecord {
    #[must_use]
    pub fn new(player: PlayerId, throw: Throw, round: u32, throw_in_turn: u8) -> Self {
        Self {
            player,
            throw,
            round,
            throw_in_turn,
        }
    }
}
