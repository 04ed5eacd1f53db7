//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::{BoardId, Player};

/// Read-only Python view of a player record.
#[pyclass(name = "Player")]
#[derive(Clone, Debug)]
pub struct PyPlayer(pub Player);

#[pymethods]
impl PyPlayer {
    #[getter]
    fn id(&self) -> u64 {
        self.0.id.raw()
    }

    #[getter]
    fn name(&self) -> String {
        self.0.name.clone()
    }

    /// `"blue"`, `"red"` or `None` when unassigned.
    #[getter]
    fn board(&self) -> Option<&'static str> {
        self.0.board.map(BoardId::as_str)
    }

    #[getter]
    fn x(&self) -> f64 {
        self.0.position.x
    }

    #[getter]
    fn y(&self) -> f64 {
        self.0.position.y
    }

    fn __repr__(&self) -> String {
        match self.0.board {
            Some(board) => format!(
                "Player(id={}, name={:?}, board={}, x={:.1}, y={:.1})",
                self.0.id.raw(),
                self.0.name,
                board,
                self.0.position.x,
                self.0.position.y
            ),
            None => format!("Player(id={}, name={:?}, board=None)", self.0.id.raw(), self.0.name),
        }
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
