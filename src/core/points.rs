//! Exact point totals.
//!
//! Point transfers are halved, so totals can land on half points
//! (a single Bull onto an opponent with two marks is worth 12.5).
//! `Points` counts half-points in an integer to keep the arithmetic exact.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// A non-negative score with half-point resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Points(u64);

impl Points {
    pub const ZERO: Points = Points(0);

    /// Whole points.
    #[must_use]
    pub const fn whole(points: u64) -> Self {
        Self(points * 2)
    }

    /// Build from a count of half-points.
    #[must_use]
    pub const fn from_halves(halves: u64) -> Self {
        Self(halves)
    }

    /// Raw half-point count.
    #[must_use]
    pub const fn halves(self) -> u64 {
        self.0
    }

    /// Does this total include a half point?
    #[must_use]
    pub const fn has_half(self) -> bool {
        self.0 % 2 == 1
    }

    #[must_use]
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 2.0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for Points {
    type Output = Points;

    fn add(self, rhs: Points) -> Points {
        Points(self.0 + rhs.0)
    }
}

impl AddAssign for Points {
    fn add_assign(&mut self, rhs: Points) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_half() {
            write!(f, "{}.5", self.0 / 2)
        } else {
            write!(f, "{}", self.0 / 2)
        }
    }
}
