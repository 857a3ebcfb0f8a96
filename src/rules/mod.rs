//! Scoring rules.
//!
//! `ScoringRules` is the seam between the game engine and the house rules:
//! the engine owns turn bookkeeping and never interprets marks or points
//! itself. `CricketRules` is the point-transfer Cricket implementation.

mod cricket;
pub mod engine;

pub use cricket::CricketRules;
pub use engine::{Credit, MarkChange, ScoringRules, ThrowOutcome};
