//! Drop-target resolution.
//!
//! The roster panel and the two boards are independent drop targets that can
//! overlap on screen. The gesture source reports every target under the
//! pointer, innermost first. The first target that accepts the drop handles
//! it; the rest are suppressed, so a player dropped on the roster panel is
//! never also placed on the board underneath.

use serde::{Deserialize, Serialize};

use super::manual::{relative_position, BoardRect, Point};
use crate::core::{BoardId, PlayerId, Position, RosterStore};

/// Something a player token can be dropped on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropTarget {
    Board(BoardId),
    RosterPanel,
}

/// A drop target under the pointer, with its bounding rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DropHit {
    pub target: DropTarget,
    pub rect: BoardRect,
}

impl DropHit {
    #[must_use]
    pub const fn board(board: BoardId, rect: BoardRect) -> Self {
        Self {
            target: DropTarget::Board(board),
            rect,
        }
    }

    #[must_use]
    pub const fn roster_panel(rect: BoardRect) -> Self {
        Self {
            target: DropTarget::RosterPanel,
            rect,
        }
    }
}

/// A completed drag gesture.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DropEvent {
    pub player: PlayerId,
    /// Client-space pointer position at release.
    pub pointer: Point,
    /// Targets under the pointer, innermost first.
    pub hits: Vec<DropHit>,
}

/// What a drop resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum DropResolution {
    Placed {
        player: PlayerId,
        board: BoardId,
        position: Position,
    },
    Returned {
        player: PlayerId,
    },
}

impl DropResolution {
    /// The player the drop moved.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match self {
            DropResolution::Placed { player, .. } | DropResolution::Returned { player } => *player,
        }
    }

    /// Commit the resolution to the store.
    ///
    /// Returns `false` if the player no longer exists.
    pub fn apply(&self, store: &mut RosterStore) -> bool {
        match *self {
            DropResolution::Placed {
                player,
                board,
                position,
            } => store.place_player(player, board, position),
            DropResolution::Returned { player } => store.unplace_player(player),
        }
    }
}

/// Pick the handling target for a drop.
///
/// The roster panel always accepts. A board accepts when its rectangle can
/// normalize the pointer. Returns `None` when nothing accepts, in which case
/// the roster must be left alone.
#[must_use]
pub fn resolve_drop(event: &DropEvent, clamp: bool) -> Option<DropResolution> {
    for hit in &event.hits {
        match hit.target {
            DropTarget::RosterPanel => {
                return Some(DropResolution::Returned {
                    player: event.player,
                });
            }
            DropTarget::Board(board) => {
                if let Some(position) = relative_position(event.pointer, hit.rect, clamp) {
                    return Some(DropResolution::Placed {
                        player: event.player,
                        board,
                        position,
                    });
                }
                log::debug!("{} rejected drop: degenerate rect {:?}", board, hit.rect);
            }
        }
    }
    None
}
