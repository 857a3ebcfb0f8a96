//! # dart-cricket
//!
//! Scoring engine for point-transfer Cricket darts.
//!
//! ## Design Principles
//!
//! 1. **One Owned State**: A single `GameState` record per game, mutated
//!    only by the session engine. Callers read immutable references.
//!
//! 2. **Pure Scoring**: `ScoringRules` turns a throw into a `ThrowOutcome`
//!    without touching state. Turn and round bookkeeping happen once per
//!    throw, after scoring.
//!
//! 3. **Copy Before Mutate**: Every throw snapshots the pre-throw state
//!    onto the undo history first.
//!
//! ## Modules
//!
//! - `core`: Board targets, players, points, throws, state, config, errors
//! - `rules`: `ScoringRules` trait and the Cricket house rules
//! - `history`: Undo snapshot stack
//! - `session`: `GameEngine` and the `GameSession` orchestrator
//! - `simulate`: Seeded random play for stress tests and benchmarks

pub mod core;
pub mod rules;
pub mod history;
pub mod session;
pub mod simulate;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    CricketNumber, Multiplier, Target,
    Player, PlayerId, PlayerMap, Marks, Points,
    Throw, ThrowRecord,
    GameState, GameConfig, UndoPolicy,
    GameRng, GameRngState,
    BoardError, SessionError,
};

pub use crate::rules::{CricketRules, ScoringRules, ThrowOutcome, Credit, MarkChange};

pub use crate::history::{HistoryEntry, HistoryStack};

pub use crate::session::{GameEngine, GameSession};

pub use crate::simulate::{RandomThrower, ThrowerConfig, SimAction, SimulationSummary};
