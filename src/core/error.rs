//! Boundary errors.
//!
//! The scoring engine itself is total over well-formed input. Errors only
//! arise when converting untrusted input into board types or when driving a
//! session that has no game in progress.

use thiserror::Error;

/// Malformed target or multiplier.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("no board segment numbered {0} (expected 1-20)")]
    InvalidNumber(u8),
    #[error("unknown target {0:?}")]
    UnknownTarget(String),
    #[error("invalid multiplier {0} (expected 1, 2 or 3)")]
    InvalidMultiplier(u8),
    #[error("unknown multiplier {0:?}")]
    UnknownMultiplier(String),
}

/// Errors returned by `GameSession`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no game in progress")]
    NoGameInProgress,
    #[error("{count} players requested, expected {min}-{max}")]
    PlayerCount { count: usize, min: usize, max: usize },
    #[error(transparent)]
    Board(#[from] BoardError),
}
