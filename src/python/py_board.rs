//! Board bindings for Python.

use std::time::Instant;

use pyo3::prelude::*;

use crate::board::TacticsBoard;
use crate::core::{BoardConfig, BoardId, FormationTemplate, PlayerId, Position};
use crate::placement::{BoardRect, DropEvent, DropHit, Point};

use super::py_core::PyPlayer;

fn parse_board(board: &str) -> PyResult<BoardId> {
    board
        .parse()
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e)))
}

/// Python wrapper for TacticsBoard.
#[pyclass(name = "TacticsBoard")]
pub struct PyTacticsBoard {
    inner: TacticsBoard,
}

#[pymethods]
impl PyTacticsBoard {
    /// Create a board.
    ///
    /// # Arguments
    /// - seed: RNG seed for random allocation (entropy if None)
    /// - formation: "4-4-2" or "4-3-3"
    /// - min_unassigned: players required before random allocation runs
    /// - clamp_drops: clamp dropped coordinates into [0, 100]
    /// - default_roster: seed the pool with the built-in names
    #[new]
    #[pyo3(signature = (
        seed = None,
        formation = "4-4-2",
        min_unassigned = 24,
        clamp_drops = false,
        default_roster = true
    ))]
    fn new(
        seed: Option<u64>,
        formation: &str,
        min_unassigned: usize,
        clamp_drops: bool,
        default_roster: bool,
    ) -> PyResult<Self> {
        let formation = match formation {
            "4-4-2" => FormationTemplate::four_four_two(),
            "4-3-3" => FormationTemplate::four_three_three(),
            other => {
                return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                    "unknown formation: {}",
                    other
                )))
            }
        };

        let mut config = BoardConfig::new()
            .with_formation(formation)
            .with_min_unassigned(min_unassigned)
            .with_clamp_drops(clamp_drops);
        config.seed = seed;

        let result = if default_roster {
            TacticsBoard::with_default_roster(config)
        } else {
            TacticsBoard::new(config)
        };
        let inner = result.map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e)))?;
        Ok(Self { inner })
    }

    /// All players in roster order.
    fn players(&self) -> Vec<PyPlayer> {
        self.inner.roster().iter().cloned().map(PyPlayer).collect()
    }

    /// Players placed on `board`.
    fn board_players(&self, board: &str) -> PyResult<Vec<PyPlayer>> {
        let board = parse_board(board)?;
        Ok(self.inner.roster().on_board(board).cloned().map(PyPlayer).collect())
    }

    /// Add a player; returns the new id, or None for a blank name.
    fn add_player(&mut self, name: &str) -> Option<u64> {
        self.inner.add_player(name).map(PlayerId::raw)
    }

    /// Drop a player on a board at a client-space pointer position.
    ///
    /// Returns True if the player was placed.
    #[allow(clippy::too_many_arguments)]
    fn drop_on_board(
        &mut self,
        player: u64,
        board: &str,
        pointer_x: f64,
        pointer_y: f64,
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    ) -> PyResult<bool> {
        let event = DropEvent {
            player: PlayerId(player),
            pointer: Point::new(pointer_x, pointer_y),
            hits: vec![DropHit::board(parse_board(board)?, BoardRect::new(left, top, width, height))],
        };
        Ok(self.inner.drop_player(&event, Instant::now()).is_some())
    }

    /// Place a player at board percentages, stored exactly as given.
    fn place_player(&mut self, player: u64, board: &str, x: f64, y: f64) -> PyResult<bool> {
        let board = parse_board(board)?;
        Ok(self.inner.place_player(PlayerId(player), board, Position::new(x, y)))
    }

    /// Return a player to the pool.
    fn unplace_player(&mut self, player: u64) -> bool {
        self.inner.unplace_player(PlayerId(player))
    }

    /// Randomly fill both formations. Raises ValueError if the pool is too small.
    ///
    /// Returns (blue_ids, red_ids) in formation order.
    fn random_allocation(&mut self) -> PyResult<(Vec<u64>, Vec<u64>)> {
        let allocation = self
            .inner
            .random_allocation(Instant::now())
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e)))?;
        Ok((
            allocation.blue.into_iter().map(PlayerId::raw).collect(),
            allocation.red.into_iter().map(PlayerId::raw).collect(),
        ))
    }

    /// Return every player to the pool.
    fn reset(&mut self) {
        self.inner.reset(Instant::now());
    }

    /// The current feedback message, if one is showing.
    fn notice(&self) -> Option<String> {
        self.inner.visible_notice(Instant::now()).map(ToString::to_string)
    }

    /// Player position as (x, y), or None if unassigned or unknown.
    fn position(&self, player: u64) -> Option<(f64, f64)> {
        let p = self.inner.roster().get(PlayerId(player))?;
        p.board.map(|_| {
            let Position { x, y } = p.position;
            (x, y)
        })
    }

    fn __len__(&self) -> usize {
        self.inner.roster().len()
    }

    fn __repr__(&self) -> String {
        let roster = self.inner.roster();
        format!(
            "TacticsBoard(players={}, blue={}, red={}, unassigned={})",
            roster.len(),
            roster.on_board(BoardId::Blue).count(),
            roster.on_board(BoardId::Red).count(),
            roster.unassigned_count()
        )
    }
}
