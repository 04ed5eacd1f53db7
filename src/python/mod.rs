//! Python bindings for the tactics board.
//!
//! # Quick Start
//!
//! ```python
//! import tactics_board as tb
//!
//! board = tb.TacticsBoard(seed=42)
//! blue, red = board.random_allocation()
//! print(board.board_players("blue"))
//! board.reset()
//! ```

use pyo3::prelude::*;

mod py_board;
mod py_core;

pub use py_board::*;
pub use py_core::*;

/// tactics_board: player placement for a two-board football tactics planner.
#[pymodule]
fn tactics_board(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayer>()?;
    m.add_class::<PyTacticsBoard>()?;

    Ok(())
}
