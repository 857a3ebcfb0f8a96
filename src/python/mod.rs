//! Python bindings for the dart-cricket scoring engine.
//!
//! # Quick Start
//!
//! ```python
//! import dart_cricket as dc
//!
//! session = dc.GameSession()
//! session.start_game(["Ann", "Bob"])
//!
//! session.submit_throw(dc.Throw("20", 3))
//! session.undo()
//!
//! marks = session.marks_numpy()  # uint8 array, [players, 7]
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_session;

pub use py_core::*;
pub use py_session::*;

/// dart_cricket: point-transfer Cricket scoring with undo.
#[pymodule]
fn dart_cricket(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyThrow>()?;
    m.add_class::<PyGameSession>()?;

    Ok(())
}
