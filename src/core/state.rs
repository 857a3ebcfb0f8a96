//! Canonical game state.
//!
//! `GameState` is one owned record: the players plus the turn pointers.
//! It has value semantics, so a clone is an independent snapshot that later
//! mutation of the live state cannot reach.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::board::{CricketNumber, Multiplier};
use super::config::THROWS_PER_TURN;
use super::player::{Player, PlayerId, PlayerMap};

/// Players, turn pointer and counters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub players: PlayerMap<Player>,

    /// Whose turn it is.
    pub current_player: PlayerId,

    /// Throws already made in the current turn (0-2).
    pub throw_count: u8,

    /// Round number (starts at 1).
    pub round: u32,

    /// Throws made over the whole game.
    pub total_turns: u32,

    /// Multiplier of the last throw, kept for display only.
    pub last_multiplier: Option<Multiplier>,
}

impl GameState {
    /// Fresh state: everyone at zero, first player to throw, round 1.
    ///
    /// # Panics
    ///
    /// Panics if `names` is empty.
    pub fn new<S: AsRef<str>>(names: &[S]) -> Self {
        let players = PlayerMap::from_vec(names.iter().map(|n| Player::new(n.as_ref())).collect());

        Self {
            players,
            current_player: PlayerId::new(0),
            throw_count: 0,
            round: 1,
            total_turns: 0,
            last_multiplier: None,
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.current_player]
    }

    /// Throws in one full round (every player throws a full turn).
    #[must_use]
    pub fn throws_per_round(&self) -> u32 {
        THROWS_PER_TURN as u32 * self.player_count() as u32
    }

    /// Does any player other than `player` still have `number` open?
    #[must_use]
    pub fn opponents_open(&self, player: PlayerId, number: CricketNumber) -> bool {
        self.players
            .others(player)
            .any(|(_, p)| !p.marks.is_closed(number))
    }

    /// Header shown above the scoreboard.
    ///
    /// ```
    /// use dart_cricket::core::GameState;
    ///
    /// let state = GameState::new(&["A", "B"]);
    /// assert_eq!(state.status_line(), "Round: 1, A, Throw 1 / 3");
    /// ```
    #[must_use]
    pub fn status_line(&self) -> String {
        format!(
            "Round: {}, {}, Throw {} / {}",
            self.round,
            self.current().name,
            self.throw_count + 1,
            THROWS_PER_TURN
        )
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.status_line())?;
        for (_, player) in self.players.iter() {
            writeln!(f, "{} ({})", player.name, player.total)?;
            for (number, _) in player.marks.iter() {
                writeln!(f, "  {}: {}", number, player.marks.rendered(number))?;
            }
        }
        Ok(())
    }
}
