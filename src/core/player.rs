//! Players, per-player storage, and cricket marks.
//!
//! ## PlayerId
//!
//! Type-safe seat index. The first player to throw is `PlayerId(0)`.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access by `PlayerId`.
//!
//! ## Player
//!
//! Name, marks on every cricket number, and running total.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::board::CricketNumber;
use super::points::Points;

/// Seat index, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The next seat, wrapping around after the last player.
    #[must_use]
    pub const fn next(self, player_count: usize) -> Self {
        Self(((self.0 as usize + 1) % player_count) as u8)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use dart_cricket::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use dart_cricket::core::{PlayerId, PlayerMap};
///
/// let mut darts: PlayerMap<u32> = PlayerMap::with_value(2, 0);
/// darts[PlayerId::new(1)] += 3;
/// assert_eq!(darts[PlayerId::new(1)], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8).map(|i| factory(PlayerId(i))).collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Build from one value per seat, in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= 255, "At most 255 players supported");
        Self { data }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over every seat except `player`.
    pub fn others(&self, player: PlayerId) -> impl Iterator<Item = (PlayerId, &T)> {
        self.iter().filter(move |(id, _)| *id != player)
    }

    /// Values in seat order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// Hits on each cricket number, each in 0..=3.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Marks([u8; CricketNumber::COUNT]);

impl Marks {
    /// Marks needed to close a number.
    pub const CLOSED: u8 = 3;

    #[must_use]
    pub const fn new() -> Self {
        Self([0; CricketNumber::COUNT])
    }

    #[must_use]
    pub fn get(&self, number: CricketNumber) -> u8 {
        self.0[number.index()]
    }

    /// Set the hit count, capped at `CLOSED`.
    pub fn set(&mut self, number: CricketNumber, hits: u8) {
        self.0[number.index()] = hits.min(Self::CLOSED);
    }

    #[must_use]
    pub fn is_closed(&self, number: CricketNumber) -> bool {
        self.get(number) >= Self::CLOSED
    }

    /// Marks still needed to close `number`.
    #[must_use]
    pub fn remaining(&self, number: CricketNumber) -> u8 {
        Self::CLOSED.saturating_sub(self.get(number))
    }

    /// Has every cricket number been closed?
    #[must_use]
    pub fn all_closed(&self) -> bool {
        CricketNumber::ALL.iter().all(|&n| self.is_closed(n))
    }

    /// Checkmarks for display, one per hit.
    #[must_use]
    pub fn rendered(&self, number: CricketNumber) -> String {
        "✅".repeat(self.get(number).min(Self::CLOSED) as usize)
    }

    /// (number, hits) pairs in scoreboard order.
    pub fn iter(&self) -> impl Iterator<Item = (CricketNumber, u8)> + '_ {
        CricketNumber::ALL.iter().map(move |&n| (n, self.get(n)))
    }
}

/// One player's scoreboard row.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub marks: Marks,
    pub total: Points,
}

impl Player {
    /// A fresh player with no marks and no points.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            marks: Marks::new(),
            total: Points::ZERO,
        }
    }
}

/// Trim names and fill blanks with `"Player {n}"` (1-based).
///
/// ```
/// use dart_cricket::core::normalize_names;
///
/// let names = normalize_names(&["  Ann ", "", "   "]);
/// assert_eq!(names, vec!["Ann", "Player 2", "Player 3"]);
/// ```
pub fn normalize_names<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let trimmed = name.as_ref().trim();
            if trimmed.is_empty() {
                format!("Player {}", i + 1)
            } else {
                trimmed.to_string()
            }
        })
        .collect()
}
