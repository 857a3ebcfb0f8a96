//! Session orchestrator: engine + history behind four entry points.

use log::{debug, info};

use crate::core::{normalize_names, GameConfig, GameState, SessionError, Throw, ThrowRecord};
use crate::history::HistoryStack;
use crate::rules::ThrowOutcome;

use super::engine::GameEngine;

/// A game in progress.
#[derive(Clone, Debug)]
struct ActiveGame {
    engine: GameEngine,
    history: HistoryStack,
}

/// Scorekeeping session.
///
/// `start_game`, `submit_throw`, `undo` and `restart` are the only ways to
/// change anything. Callers read state through `state()` and never hold a
/// mutable reference to it.
///
/// ```
/// use dart_cricket::core::{CricketNumber, Multiplier, Throw};
/// use dart_cricket::session::GameSession;
///
/// let mut session = GameSession::default();
/// session.start_game(&["A", "B"]).unwrap();
///
/// let state = session
///     .submit_throw(Throw::cricket(CricketNumber::Twenty, Multiplier::Triple))
///     .unwrap();
/// assert_eq!(state.throw_count, 1);
///
/// let state = session.undo().unwrap();
/// assert_eq!(state.throw_count, 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameSession {
    config: GameConfig,
    game: Option<ActiveGame>,
    last_outcome: Option<ThrowOutcome>,
}

impl GameSession {
    /// A session with no game in progress.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            game: None,
            last_outcome: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a fresh game, replacing any game in progress.
    ///
    /// Names are trimmed and blanks become `"Player {n}"`.
    pub fn start_game<S: AsRef<str>>(&mut self, names: &[S]) -> Result<&GameState, SessionError> {
        let count = names.len();
        if !self.config.accepts_player_count(count) {
            return Err(SessionError::PlayerCount {
                count,
                min: self.config.min_players,
                max: self.config.max_players,
            });
        }

        let names = normalize_names(names);
        info!("starting game for {} players: {}", count, names.join(", "));

        self.last_outcome = None;
        let game = self.game.insert(ActiveGame {
            engine: GameEngine::start(&self.config, &names),
            history: HistoryStack::new(),
        });
        Ok(game.engine.state())
    }

    /// Snapshot the current state, then score `throw` and advance turns.
    pub fn submit_throw(&mut self, throw: Throw) -> Result<&GameState, SessionError> {
        let game = self.game.as_mut().ok_or(SessionError::NoGameInProgress)?;

        game.history.push(game.engine.snapshot(throw));
        self.last_outcome = Some(game.engine.submit_throw(throw));

        Ok(game.engine.state())
    }

    /// Parse untrusted target and multiplier text, then submit the throw.
    pub fn submit_input(&mut self, target: &str, multiplier: &str) -> Result<&GameState, SessionError> {
        let throw = Throw::parse(target, multiplier)?;
        self.submit_throw(throw)
    }

    /// Restore the state from before the last throw.
    ///
    /// With an empty history this changes nothing.
    pub fn undo(&mut self) -> Result<&GameState, SessionError> {
        let game = self.game.as_mut().ok_or(SessionError::NoGameInProgress)?;

        match game.history.pop() {
            Some(entry) => {
                debug!("undo {} ({} left)", entry.record.throw, game.history.len());
                game.engine.restore(entry);
                self.last_outcome = None;
            }
            None => debug!("undo with empty history"),
        }

        Ok(game.engine.state())
    }

    /// Tear down the game. The caller goes back to player setup.
    pub fn restart(&mut self) {
        if self.game.take().is_some() {
            info!("game restarted");
        }
        self.last_outcome = None;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.game.is_some()
    }

    /// Current state, if a game is in progress.
    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        self.game.as_ref().map(|g| g.engine.state())
    }

    /// What the most recent throw changed. Cleared by undo.
    #[must_use]
    pub fn last_outcome(&self) -> Option<&ThrowOutcome> {
        self.last_outcome.as_ref()
    }

    /// Number of throws that can be undone.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.game.as_ref().map_or(0, |g| g.history.len())
    }

    /// Throws of the current game still on the undo stack, oldest first.
    #[must_use]
    pub fn throws(&self) -> Vec<ThrowRecord> {
        self.game
            .as_ref()
            .map(|g| g.history.records().copied().collect())
            .unwrap_or_default()
    }
}
