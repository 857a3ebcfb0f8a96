//! Game configuration.
//!
//! A `GameConfig` fixes the house rules for a session:
//! - How many players may join
//! - What a Miss is worth
//! - Whether undo rolls back the throw counter that drives rounds
//!
//! Defaults reproduce the scorekeeper's observed behavior.

use serde::{Deserialize, Serialize};

/// Throws in one player's turn.
pub const THROWS_PER_TURN: u8 = 3;

/// Divisor applied to points transferred onto opponents.
pub const TRANSFER_DIVISOR: u64 = 2;

/// What `undo` restores besides players and turn pointers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UndoPolicy {
    /// Leave `total_turns` untouched. Rounds can drift after undo.
    #[default]
    KeepTotalTurns,
    /// Restore `total_turns` from the snapshot as well.
    RestoreTotalTurns,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Fewest players a game may start with.
    pub min_players: usize,

    /// Most players a game may start with.
    pub max_players: usize,

    /// Points awarded for a single Miss.
    ///
    /// Defaults to 25 (the Bull value), which the scorekeeper has always
    /// awarded. Set to 0 to make misses worthless.
    pub miss_value: u32,

    pub undo_policy: UndoPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_players: 1,
            max_players: 8,
            miss_value: 25,
            undo_policy: UndoPolicy::default(),
        }
    }
}

impl GameConfig {
    /// Default house rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the allowed player range.
    #[must_use]
    pub fn with_player_range(mut self, min: usize, max: usize) -> Self {
        assert!(min > 0, "Must have at least 1 player");
        assert!(max <= 255, "At most 255 players supported");
        assert!(min <= max, "Minimum players exceeds maximum");
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Set the value of a Miss.
    #[must_use]
    pub fn with_miss_value(mut self, value: u32) -> Self {
        self.miss_value = value;
        self
    }

    #[must_use]
    pub fn with_undo_policy(mut self, policy: UndoPolicy) -> Self {
        self.undo_policy = policy;
        self
    }

    /// Is `count` an allowed number of players?
    #[must_use]
    pub fn accepts_player_count(&self, count: usize) -> bool {
        (self.min_players..=self.max_players).contains(&count)
    }
}
