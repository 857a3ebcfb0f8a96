//! Game engine: the only place a `GameState` is mutated.

use log::debug;

use crate::core::{
    GameConfig, GameState, PlayerId, Throw, ThrowRecord, UndoPolicy, THROWS_PER_TURN,
};
use crate::history::HistoryEntry;
use crate::rules::{CricketRules, ScoringRules, ThrowOutcome};

/// Owns the canonical state and applies throws to it.
///
/// The engine does not keep history. `snapshot` hands out the pre-throw
/// entry and `restore` puts one back; the session decides when.
#[derive(Clone, Debug)]
pub struct GameEngine<R: ScoringRules = CricketRules> {
    rules: R,
    state: GameState,
    undo_policy: UndoPolicy,
}

impl GameEngine<CricketRules> {
    /// Start a game with the house rules from `config`.
    ///
    /// # Panics
    ///
    /// Panics if `names` is empty.
    pub fn start<S: AsRef<str>>(config: &GameConfig, names: &[S]) -> Self {
        Self::with_rules(CricketRules::from_config(config), config.undo_policy, names)
    }
}

impl<R: ScoringRules> GameEngine<R> {
    /// Start a game with custom scoring rules.
    pub fn with_rules<S: AsRef<str>>(rules: R, undo_policy: UndoPolicy, names: &[S]) -> Self {
        Self {
            rules,
            state: GameState::new(names),
            undo_policy,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Copy of the current state paired with the throw about to be applied.
    #[must_use]
    pub fn snapshot(&self, throw: Throw) -> HistoryEntry {
        let record = ThrowRecord::new(
            self.state.current_player,
            throw,
            self.state.round,
            self.state.throw_count,
        );
        HistoryEntry::new(self.state.clone(), record)
    }

    /// Score `throw`, then advance the turn and round counters once.
    pub fn submit_throw(&mut self, throw: Throw) -> ThrowOutcome {
        let (players, outcome) = self.rules.apply(&self.state, throw);
        self.state.players = players;
        self.state.last_multiplier = Some(throw.multiplier);

        debug!(
            "{} threw {}: credits {:?}",
            self.state.players[outcome.actor].name, throw, outcome.credits
        );

        self.advance();
        outcome
    }

    /// Replace the live state with a snapshot.
    ///
    /// `total_turns` is only rolled back under `UndoPolicy::RestoreTotalTurns`.
    /// The display multiplier becomes the one of the undone throw.
    pub fn restore(&mut self, entry: HistoryEntry) {
        let total_turns = self.state.total_turns;
        let multiplier = entry.multiplier();

        self.state = entry.state;
        self.state.last_multiplier = Some(multiplier);
        if self.undo_policy == UndoPolicy::KeepTotalTurns {
            self.state.total_turns = total_turns;
        }

        debug!(
            "restored round {} {} throw {} (total turns {})",
            self.state.round,
            self.state.current().name,
            self.state.throw_count + 1,
            self.state.total_turns
        );
    }

    fn advance(&mut self) {
        let state = &mut self.state;
        let player_count = state.player_count();

        state.total_turns += 1;

        state.throw_count += 1;
        if state.throw_count >= THROWS_PER_TURN {
            state.throw_count = 0;
            state.current_player = state.current_player.next(player_count);
        }

        if state.total_turns % state.throws_per_round() == 0 {
            state.round += 1;
        }
    }

    /// Seat of the player to throw next.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.state.current_player
    }
}
