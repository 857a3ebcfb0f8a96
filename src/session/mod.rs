//! Game engine and session orchestration.
//!
//! ## Control Flow
//!
//! 1. `start_game(names)` builds a fresh `GameState` and an empty history
//! 2. `submit_throw(throw)` pushes a snapshot, scores the throw through
//!    `ScoringRules`, then advances throw, player and round counters once
//! 3. `undo()` pops the latest snapshot and restores it wholesale
//! 4. `restart()` drops the game entirely
//!
//! Every call runs to completion before the next one is admitted; the
//! session is a plain owned value with no interior mutability.

mod engine;
mod session;

pub use engine::GameEngine;
pub use session::GameSession;
