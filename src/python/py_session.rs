//! Session bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::prelude::*;

use crate::core::{CricketNumber, GameConfig, GameState, PlayerId, UndoPolicy};
use crate::session::GameSession;

use super::py_core::{board_err, session_err, PyThrow};

/// Python wrapper for GameSession.
#[pyclass(name = "GameSession")]
pub struct PyGameSession {
    session: GameSession,
}

impl PyGameSession {
    fn state(&self) -> PyResult<&GameState> {
        self.session
            .state()
            .ok_or_else(|| session_err(crate::core::SessionError::NoGameInProgress))
    }
}

#[pymethods]
impl PyGameSession {
    /// Create a session with no game in progress.
    ///
    /// # Arguments
    /// - miss_value: points awarded for a Miss (25 by default)
    /// - restore_total_turns: roll back the round counter input on undo
    #[new]
    #[pyo3(signature = (miss_value = 25, restore_total_turns = false))]
    fn new(miss_value: u32, restore_total_turns: bool) -> Self {
        let policy = if restore_total_turns {
            UndoPolicy::RestoreTotalTurns
        } else {
            UndoPolicy::KeepTotalTurns
        };
        let config = GameConfig::new()
            .with_miss_value(miss_value)
            .with_undo_policy(policy);
        Self {
            session: GameSession::new(config),
        }
    }

    /// Start a game. Blank names become "Player N".
    fn start_game(&mut self, names: Vec<String>) -> PyResult<()> {
        self.session.start_game(&names).map_err(session_err)?;
        Ok(())
    }

    /// Submit a throw.
    fn submit_throw(&mut self, throw: &PyThrow) -> PyResult<()> {
        self.session.submit_throw(throw.0).map_err(session_err)?;
        Ok(())
    }

    /// Submit a throw from target text and multiplier.
    #[pyo3(signature = (target, multiplier = 1))]
    fn submit(&mut self, target: &str, multiplier: u8) -> PyResult<()> {
        let throw = PyThrow::new(target, multiplier)?;
        self.submit_throw(&throw)
    }

    /// Undo the last throw. Does nothing if there is nothing to undo.
    fn undo(&mut self) -> PyResult<()> {
        self.session.undo().map_err(session_err)?;
        Ok(())
    }

    /// End the game and return to setup.
    fn restart(&mut self) {
        self.session.restart();
    }

    #[getter]
    fn is_active(&self) -> bool {
        self.session.is_active()
    }

    #[getter]
    fn round(&self) -> PyResult<u32> {
        Ok(self.state()?.round)
    }

    #[getter]
    fn current_player(&self) -> PyResult<usize> {
        Ok(self.state()?.current_player.index())
    }

    #[getter]
    fn throw_count(&self) -> PyResult<u8> {
        Ok(self.state()?.throw_count)
    }

    #[getter]
    fn total_turns(&self) -> PyResult<u32> {
        Ok(self.state()?.total_turns)
    }

    /// Player names in seat order.
    #[getter]
    fn names(&self) -> PyResult<Vec<String>> {
        Ok(self
            .state()?
            .players
            .iter()
            .map(|(_, p)| p.name.clone())
            .collect())
    }

    /// Totals in seat order.
    fn totals(&self) -> PyResult<Vec<f64>> {
        Ok(self
            .state()?
            .players
            .iter()
            .map(|(_, p)| p.total.as_f64())
            .collect())
    }

    /// Hits on a cricket number ("15"-"20" or "bull") for a seat.
    fn marks(&self, player: usize, number: &str) -> PyResult<u8> {
        let state = self.state()?;
        let number = number
            .parse::<crate::core::Target>()
            .map_err(board_err)?
            .cricket()
            .ok_or_else(|| {
                PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                    "{} is not a cricket number",
                    number
                ))
            })?;
        if player >= state.player_count() {
            return Err(PyErr::new::<pyo3::exceptions::PyIndexError, _>(format!(
                "no player at seat {}",
                player
            )));
        }
        Ok(state.player(PlayerId::new(player as u8)).marks.get(number))
    }

    /// Marks as a numpy array, [players, 7], columns 20..15 then Bull.
    fn marks_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let state = self.state()?;
        let rows = state.player_count();

        let flat: Vec<u8> = state
            .players
            .iter()
            .flat_map(|(_, p)| CricketNumber::ALL.iter().map(move |&n| p.marks.get(n)))
            .collect();

        PyArray1::from_vec_bound(py, flat).reshape([rows, CricketNumber::COUNT])
    }

    /// Number of throws that can be undone.
    fn history_len(&self) -> usize {
        self.session.history_len()
    }

    /// Plain-text scoreboard.
    fn scoreboard(&self) -> PyResult<String> {
        Ok(self.state()?.to_string())
    }

    fn __repr__(&self) -> String {
        match self.session.state() {
            Some(state) => format!("GameSession({})", state.status_line()),
            None => "GameSession(not started)".to_string(),
        }
    }
}
