//! Manual placement: pointer coordinates to board percentages.

use serde::{Deserialize, Serialize};

use crate::core::Position;

/// A point in client (viewport) space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A drop target's bounding rectangle in client space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoardRect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A rectangle with no area cannot normalize a pointer.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Normalize a pointer position into board percentages.
///
/// `x = (px - left) / width * 100`, likewise for `y`. Returns `None` for a
/// degenerate rectangle. With `clamp` unset, out-of-board pointers yield
/// components outside `[0, 100]`.
///
/// ```
/// use tactics_board::placement::{relative_position, BoardRect, Point};
///
/// let rect = BoardRect::new(100.0, 50.0, 200.0, 400.0);
/// let pos = relative_position(Point::new(200.0, 150.0), rect, false).unwrap();
/// assert_eq!((pos.x, pos.y), (50.0, 25.0));
/// ```
#[must_use]
pub fn relative_position(pointer: Point, rect: BoardRect, clamp: bool) -> Option<Position> {
    if rect.is_degenerate() {
        return None;
    }

    let position = Position::new(
        (pointer.x - rect.left) / rect.width * 100.0,
        (pointer.y - rect.top) / rect.height * 100.0,
    );

    Some(if clamp { position.clamped() } else { position })
}
