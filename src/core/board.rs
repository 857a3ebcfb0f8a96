//! Board targets and multipliers.
//!
//! ## Categories
//!
//! - **Cricket numbers** (20, 19, 18, 17, 16, 15, Bull) are tracked by marks
//!   and can be closed.
//! - **Open numbers** (1-14) and **Miss** only ever add to a player's total.
//!
//! Parsing is the boundary where malformed input is rejected. Once a
//! `Target` or `Multiplier` exists, the scoring rules assume it is valid.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::BoardError;

/// A number subject to closing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CricketNumber {
    Twenty,
    Nineteen,
    Eighteen,
    Seventeen,
    Sixteen,
    Fifteen,
    Bull,
}

impl CricketNumber {
    /// All cricket numbers in scoreboard order.
    pub const ALL: [CricketNumber; 7] = [
        CricketNumber::Twenty,
        CricketNumber::Nineteen,
        CricketNumber::Eighteen,
        CricketNumber::Seventeen,
        CricketNumber::Sixteen,
        CricketNumber::Fifteen,
        CricketNumber::Bull,
    ];

    /// Number of cricket numbers.
    pub const COUNT: usize = 7;

    /// Position in scoreboard order (0 = Twenty, 6 = Bull).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Point value of one hit: face value, or 25 for Bull.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            CricketNumber::Twenty => 20,
            CricketNumber::Nineteen => 19,
            CricketNumber::Eighteen => 18,
            CricketNumber::Seventeen => 17,
            CricketNumber::Sixteen => 16,
            CricketNumber::Fifteen => 15,
            CricketNumber::Bull => 25,
        }
    }

    /// Face value on the board (15-20). `None` for Bull.
    #[must_use]
    pub const fn face(self) -> Option<u8> {
        match self {
            CricketNumber::Twenty => Some(20),
            CricketNumber::Nineteen => Some(19),
            CricketNumber::Eighteen => Some(18),
            CricketNumber::Seventeen => Some(17),
            CricketNumber::Sixteen => Some(16),
            CricketNumber::Fifteen => Some(15),
            CricketNumber::Bull => None,
        }
    }

    /// Look up the cricket number for a face value (15-20).
    #[must_use]
    pub const fn from_face(face: u8) -> Option<Self> {
        match face {
            20 => Some(CricketNumber::Twenty),
            19 => Some(CricketNumber::Nineteen),
            18 => Some(CricketNumber::Eighteen),
            17 => Some(CricketNumber::Seventeen),
            16 => Some(CricketNumber::Sixteen),
            15 => Some(CricketNumber::Fifteen),
            _ => None,
        }
    }
}

impl fmt::Display for CricketNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.face() {
            Some(face) => write!(f, "{}", face),
            None => write!(f, "Bull"),
        }
    }
}

/// Something a dart can land on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// 15-20 or Bull.
    Cricket(CricketNumber),
    /// 1-14. Direct construction is unchecked; scoring assumes the face
    /// is in range. Use `Target::number` for untrusted input.
    Open(u8),
    /// Off the board.
    Miss,
}

impl Target {
    /// Highest open (non-cricket) face value.
    pub const MAX_OPEN: u8 = 14;

    /// Every board target: 20 down to 1, then Bull and Miss.
    pub const ALL: [Target; 22] = {
        let mut all = [Target::Miss; 22];
        let mut i = 0;
        while i < 20 {
            let face = 20 - i as u8;
            all[i] = match CricketNumber::from_face(face) {
                Some(number) => Target::Cricket(number),
                None => Target::Open(face),
            };
            i += 1;
        }
        all[20] = Target::Cricket(CricketNumber::Bull);
        all
    };

    /// Target for a numbered segment (1-20).
    pub fn number(face: u8) -> Result<Self, BoardError> {
        match face {
            1..=14 => Ok(Target::Open(face)),
            15..=20 => CricketNumber::from_face(face)
                .map(Target::Cricket)
                .ok_or(BoardError::InvalidNumber(face)),
            _ => Err(BoardError::InvalidNumber(face)),
        }
    }

    /// The Bull.
    #[must_use]
    pub const fn bull() -> Self {
        Target::Cricket(CricketNumber::Bull)
    }

    /// The cricket number this target marks, if any.
    #[must_use]
    pub const fn cricket(self) -> Option<CricketNumber> {
        match self {
            Target::Cricket(number) => Some(number),
            _ => None,
        }
    }

    /// Is this an open number (1-14 or Miss)?
    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Target::Cricket(_))
    }
}

impl From<CricketNumber> for Target {
    fn from(number: CricketNumber) -> Self {
        Target::Cricket(number)
    }
}

impl TryFrom<u8> for Target {
    type Error = BoardError;

    fn try_from(face: u8) -> Result<Self, Self::Error> {
        Target::number(face)
    }
}

impl FromStr for Target {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("bull") {
            return Ok(Target::bull());
        }
        if trimmed.eq_ignore_ascii_case("miss") {
            return Ok(Target::Miss);
        }
        let face: u8 = trimmed
            .parse()
            .map_err(|_| BoardError::UnknownTarget(s.to_string()))?;
        Target::number(face)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Cricket(number) => write!(f, "{}", number),
            Target::Open(face) => write!(f, "{}", face),
            Target::Miss => write!(f, "Miss"),
        }
    }
}

/// Single, double or triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Multiplier {
    Single = 1,
    Double = 2,
    Triple = 3,
}

impl Multiplier {
    pub const ALL: [Multiplier; 3] = [Multiplier::Single, Multiplier::Double, Multiplier::Triple];

    /// Marks (or point multiples) one throw is worth.
    #[must_use]
    pub const fn factor(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Multiplier {
    type Error = BoardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Multiplier::Single),
            2 => Ok(Multiplier::Double),
            3 => Ok(Multiplier::Triple),
            other => Err(BoardError::InvalidMultiplier(other)),
        }
    }
}

impl FromStr for Multiplier {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "single" | "s" => Ok(Multiplier::Single),
            "2" | "double" | "d" => Ok(Multiplier::Double),
            "3" | "triple" | "t" => Ok(Multiplier::Triple),
            _ => Err(BoardError::UnknownMultiplier(s.to_string())),
        }
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Multiplier::Single => "Single",
            Multiplier::Double => "Double",
            Multiplier::Triple => "Triple",
        };
        write!(f, "{}", name)
    }
}
