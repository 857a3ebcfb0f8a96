//! Simulated play.
//!
//! Drives a `GameSession` with seeded random throws (and optionally undo
//! presses). Used to stress the scoring invariants and for benchmarks.
//!
//! ```
//! use dart_cricket::session::GameSession;
//! use dart_cricket::simulate::{play, RandomThrower, ThrowerConfig};
//!
//! let mut session = GameSession::default();
//! session.start_game(&["A", "B", "C"]).unwrap();
//!
//! let mut thrower = RandomThrower::new(42, ThrowerConfig::default());
//! let summary = play(&mut session, 90, &mut thrower).unwrap();
//!
//! assert_eq!(summary.throws, 90);
//! assert_eq!(session.state().unwrap().round, 11);
//! ```

mod thrower;

pub use thrower::{RandomThrower, SimAction, ThrowerConfig};

use log::debug;

use crate::core::SessionError;
use crate::session::GameSession;

/// Counts from a simulated stretch of play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimulationSummary {
    /// Throws submitted.
    pub throws: usize,

    /// Undo presses, including ones on an empty history.
    pub undos: usize,

    /// Throws that credited points to someone other than the thrower.
    pub transfers: usize,
}

/// Perform `actions` simulated user actions on `session`.
pub fn play(
    session: &mut GameSession,
    actions: usize,
    thrower: &mut RandomThrower,
) -> Result<SimulationSummary, SessionError> {
    let mut summary = SimulationSummary::default();

    for _ in 0..actions {
        match thrower.next_action() {
            SimAction::Throw(throw) => {
                session.submit_throw(throw)?;
                summary.throws += 1;
                if session.last_outcome().is_some_and(|o| o.is_transfer()) {
                    summary.transfers += 1;
                }
            }
            SimAction::Undo => {
                session.undo()?;
                summary.undos += 1;
            }
        }
    }

    debug!("simulated {:?}", summary);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_requires_game() {
        let mut session = GameSession::default();
        let mut thrower = RandomThrower::new(1, ThrowerConfig::default());

        assert_eq!(
            play(&mut session, 1, &mut thrower),
            Err(SessionError::NoGameInProgress)
        );
    }

    #[test]
    fn test_play_with_undo() {
        let mut session = GameSession::default();
        session.start_game(&["A", "B"]).unwrap();
        let mut thrower = RandomThrower::new(11, ThrowerConfig::new().with_undo_weight(0.3));

        let summary = play(&mut session, 200, &mut thrower).unwrap();

        assert_eq!(summary.throws + summary.undos, 200);
        assert!(summary.undos > 0);
        assert!(session.history_len() <= summary.throws);
    }
}
