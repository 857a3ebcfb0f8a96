//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{BoardError, Multiplier, SessionError, Target, Throw};

pub(crate) fn board_err(e: BoardError) -> PyErr {
    PyErr::new::<PyValueError, _>(format!("{}", e))
}

pub(crate) fn session_err(e: SessionError) -> PyErr {
    PyErr::new::<PyValueError, _>(format!("{}", e))
}

/// Python wrapper for Throw.
#[pyclass(name = "Throw")]
#[derive(Clone, Debug)]
pub struct PyThrow(pub Throw);

#[pymethods]
impl PyThrow {
    /// Create a throw.
    ///
    /// # Arguments
    /// - target: "1"-"20", "bull" or "miss"
    /// - multiplier: 1, 2 or 3
    #[new]
    #[pyo3(signature = (target, multiplier = 1))]
    pub(crate) fn new(target: &str, multiplier: u8) -> PyResult<Self> {
        let target = target.parse::<Target>().map_err(board_err)?;
        let multiplier = Multiplier::try_from(multiplier).map_err(board_err)?;
        Ok(Self(Throw::new(target, multiplier)))
    }

    #[getter]
    fn target(&self) -> String {
        self.0.target.to_string()
    }

    #[getter]
    fn multiplier(&self) -> u8 {
        self.0.multiplier.factor()
    }

    fn __repr__(&self) -> String {
        format!("Throw({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}
