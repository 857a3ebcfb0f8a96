//! Seeded random throw source.

use crate::core::{CricketNumber, GameRng, Multiplier, Target, Throw};

/// Relative weights for what a simulated player does next.
#[derive(Clone, Debug, PartialEq)]
pub struct ThrowerConfig {
    /// Weight of hitting 15-20 or Bull.
    pub cricket_weight: f32,

    /// Weight of hitting 1-14.
    pub open_weight: f32,

    /// Weight of missing the board.
    pub miss_weight: f32,

    /// Weight of pressing undo instead of throwing.
    pub undo_weight: f32,
}

impl Default for ThrowerConfig {
    fn default() -> Self {
        Self {
            cricket_weight: 0.6,
            open_weight: 0.3,
            miss_weight: 0.1,
            undo_weight: 0.0,
        }
    }
}

impl ThrowerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_cricket_weight(mut self, weight: f32) -> Self {
        self.cricket_weight = weight;
        self
    }

    #[must_use]
    pub fn with_open_weight(mut self, weight: f32) -> Self {
        self.open_weight = weight;
        self
    }

    #[must_use]
    pub fn with_miss_weight(mut self, weight: f32) -> Self {
        self.miss_weight = weight;
        self
    }

    /// Interleave undo presses with throws.
    #[must_use]
    pub fn with_undo_weight(mut self, weight: f32) -> Self {
        self.undo_weight = weight;
        self
    }

    fn weights(&self) -> [f32; 4] {
        [
            self.cricket_weight,
            self.open_weight,
            self.miss_weight,
            self.undo_weight,
        ]
    }
}

/// One simulated user action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimAction {
    Throw(Throw),
    Undo,
}

/// Draws throws the way the scoreboard offers them: Bull only as single or
/// double, Miss only as single, every other segment with any multiplier.
#[derive(Clone, Debug)]
pub struct RandomThrower {
    rng: GameRng,
    config: ThrowerConfig,
}

impl RandomThrower {
    #[must_use]
    pub fn new(seed: u64, config: ThrowerConfig) -> Self {
        Self::from_rng(GameRng::new(seed), config)
    }

    #[must_use]
    pub fn from_rng(rng: GameRng, config: ThrowerConfig) -> Self {
        Self { rng, config }
    }

    /// An independent thrower with the same weights.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self {
            rng: self.rng.fork(),
            config: self.config.clone(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ThrowerConfig {
        &self.config
    }

    /// Next user action. Falls back to a Miss if every weight is zero.
    pub fn next_action(&mut self) -> SimAction {
        match self.rng.choose_weighted(&self.config.weights()) {
            Some(3) => SimAction::Undo,
            Some(kind) => SimAction::Throw(self.throw_of_kind(kind)),
            None => SimAction::Throw(Throw::miss()),
        }
    }

    /// Next throw, ignoring the undo weight.
    pub fn next_throw(&mut self) -> Throw {
        let weights = self.config.weights();
        match self.rng.choose_weighted(&weights[..3]) {
            Some(kind) => self.throw_of_kind(kind),
            None => Throw::miss(),
        }
    }

    fn throw_of_kind(&mut self, kind: usize) -> Throw {
        match kind {
            0 => self.cricket_throw(),
            1 => self.open_throw(),
            _ => Throw::miss(),
        }
    }

    fn multiplier(&mut self, max: usize) -> Multiplier {
        Multiplier::ALL[self.rng.gen_range_usize(0..max)]
    }

    fn cricket_throw(&mut self) -> Throw {
        let number = CricketNumber::ALL[self.rng.gen_range_usize(0..CricketNumber::COUNT)];
        let multiplier = match number {
            CricketNumber::Bull => self.multiplier(2),
            _ => self.multiplier(3),
        };
        Throw::cricket(number, multiplier)
    }

    fn open_throw(&mut self) -> Throw {
        let face = self.rng.gen_range_usize(1..Target::MAX_OPEN as usize + 1) as u8;
        let multiplier = self.multiplier(3);
        Throw::new(Target::Open(face), multiplier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let mut a = RandomThrower::new(7, ThrowerConfig::default());
        let mut b = RandomThrower::new(7, ThrowerConfig::default());

        for _ in 0..50 {
            assert_eq!(a.next_action(), b.next_action());
        }
    }

    #[test]
    fn test_throws_are_board_legal() {
        let mut thrower = RandomThrower::new(3, ThrowerConfig::default());

        for _ in 0..500 {
            let throw = thrower.next_throw();
            match throw.target {
                Target::Cricket(CricketNumber::Bull) => {
                    assert_ne!(throw.multiplier, Multiplier::Triple)
                }
                Target::Miss => assert_eq!(throw.multiplier, Multiplier::Single),
                Target::Open(face) => assert!((1..=Target::MAX_OPEN).contains(&face)),
                Target::Cricket(_) => {}
            }
        }
    }

    #[test]
    fn test_only_misses() {
        let config = ThrowerConfig::new()
            .with_cricket_weight(0.0)
            .with_open_weight(0.0)
            .with_miss_weight(1.0);
        let mut thrower = RandomThrower::new(1, config);

        for _ in 0..20 {
            assert_eq!(thrower.next_action(), SimAction::Throw(Throw::miss()));
        }
    }

    #[test]
    fn test_next_throw_skips_undo() {
        let config = ThrowerConfig::new()
            .with_cricket_weight(0.0)
            .with_open_weight(0.0)
            .with_miss_weight(0.0)
            .with_undo_weight(10.0);
        let mut thrower = RandomThrower::new(9, config);

        for _ in 0..20 {
            assert_eq!(thrower.next_throw(), Throw::miss());
        }
    }

    #[test]
    fn test_fork_diverges() {
        let mut thrower = RandomThrower::new(5, ThrowerConfig::default());
        let mut forked = thrower.fork();

        let a: Vec<_> = (0..20).map(|_| thrower.next_throw()).collect();
        let b: Vec<_> = (0..20).map(|_| forked.next_throw()).collect();
        assert_ne!(a, b);
    }
}
