//! Core scoring types: board, players, points, throws, state, configuration.
//!
//! Everything here is plain data with value semantics. Only the session
//! engine mutates a `GameState`.

pub mod board;
pub mod player;
pub mod points;
pub mod action;
pub mod state;
pub mod config;
pub mod rng;
pub mod error;

pub use board::{CricketNumber, Multiplier, Target};
pub use player::{normalize_names, Marks, Player, PlayerId, PlayerMap};
pub use points::Points;
pub use action::{Throw, ThrowRecord};
pub use state::GameState;
pub use config::{GameConfig, UndoPolicy, THROWS_PER_TURN, TRANSFER_DIVISOR};
pub use rng::{GameRng, GameRngState};
pub use error::{BoardError, SessionError};
