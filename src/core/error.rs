//! Error types for roster, placement and configuration.

use thiserror::Error;

/// A board identifier that is neither `"blue"` nor `"red"`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown board id: {0:?}")]
pub struct ParseBoardError(pub String);

/// Placement operations that were rejected without touching the roster.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("not enough unassigned players: need at least {required}, have {available}")]
    NotEnoughPlayers { required: usize, available: usize },
}

/// Invalid board configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("formation template has no slots")]
    EmptyFormation,

    #[error("formation template must have exactly one goalkeeper, found {0}")]
    GoalkeeperCount(usize),

    #[error("formation slot {index} is outside the board: ({x}, {y})")]
    SlotOutOfBounds { index: usize, x: f64, y: f64 },

    #[error("allocation threshold {min_unassigned} is below the {required} players two teams consume")]
    ThresholdTooLow { min_unassigned: usize, required: usize },

    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
}
