//! Player records and board identifiers.
//!
//! ## PlayerId
//!
//! Opaque, stable identifier allocated by the roster.
//!
//! ## BoardId
//!
//! One of the two formation surfaces. The string forms `"blue"` and `"red"`
//! are what the presentation layer uses as drop-target ids.
//!
//! ## Player
//!
//! A named token that is either in the unassigned pool or placed on a board
//! at a percentage coordinate.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::ParseBoardError;

/// Unique identifier for a player token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for PlayerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({})", self.0)
    }
}

/// A formation surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardId {
    Blue,
    Red,
}

impl BoardId {
    /// Both boards, blue first.
    pub const ALL: [BoardId; 2] = [BoardId::Blue, BoardId::Red];

    /// The identifier used by the presentation layer.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            BoardId::Blue => "blue",
            BoardId::Red => "red",
        }
    }
}

impl std::fmt::Display for BoardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoardId {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blue" => Ok(BoardId::Blue),
            "red" => Ok(BoardId::Red),
            other => Err(ParseBoardError(other.to_string())),
        }
    }
}

/// A coordinate expressed as percentages of the board's width and height.
///
/// Values are nominally in `[0, 100]` but are not clamped: a drop just
/// outside the pitch can produce a negative or >100 component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// The placeholder position of an unassigned player.
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Reflect vertically, so a formation faces the other end of the pitch.
    #[must_use]
    pub fn mirrored(self) -> Self {
        Self {
            x: self.x,
            y: 100.0 - self.y,
        }
    }

    /// Clamp both components into `[0, 100]`.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            x: self.x.clamp(0.0, 100.0),
            y: self.y.clamp(0.0, 100.0),
        }
    }

    /// Whether both components lie within `[0, 100]`.
    #[must_use]
    pub fn in_bounds(self) -> bool {
        (0.0..=100.0).contains(&self.x) && (0.0..=100.0).contains(&self.y)
    }
}

/// A player token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    /// `None` while the player sits in the unassigned pool.
    pub board: Option<BoardId>,
}

impl Player {
    /// Create an unassigned player.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            position: Position::ORIGIN,
            board: None,
        }
    }

    #[must_use]
    pub fn is_assigned(&self) -> bool {
        self.board.is_some()
    }

    #[must_use]
    pub fn is_on(&self, board: BoardId) -> bool {
        self.board == Some(board)
    }

    /// Copy of this player placed on `board` at `position`.
    #[must_use]
    pub fn placed(&self, board: BoardId, position: Position) -> Self {
        Self {
            board: Some(board),
            position,
            ..self.clone()
        }
    }

    /// Copy of this player returned to the pool.
    #[must_use]
    pub fn unplaced(&self) -> Self {
        Self {
            board: None,
            position: Position::ORIGIN,
            ..self.clone()
        }
    }
}
