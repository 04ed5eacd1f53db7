//! # tactics-board
//!
//! Player placement for a two-board football tactics planner.
//!
//! Player tokens live in an unassigned pool or on one of two boards
//! ("blue" and "red") at a percentage coordinate. Users drag tokens between
//! the pool and the boards, fill both boards from the pool with a random
//! formation, reset everything back to the pool, and export a board as an
//! image.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not mutation**: every roster change produces a new
//!    immutable `Roster`. Persistent vectors from `im` make this O(1) to
//!    clone and cheap to update.
//!
//! 2. **Single writer**: `RosterStore` is the only thing that installs new
//!    snapshots. The placement engine computes, the store commits.
//!
//! 3. **Reproducible randomness**: random allocation takes an explicit
//!    seeded `BoardRng`, never a global generator.
//!
//! 4. **Presentation at arm's length**: gestures arrive as `DropEvent`s,
//!    feedback leaves as `Notice`s, and platform export capabilities are
//!    `ExportTier` trait objects supplied by the host.
//!
//! ## Modules
//!
//! - `core`: players, roster snapshots and store, RNG, configuration, errors
//! - `placement`: pointer normalization, drop resolution, random allocation
//! - `feedback`: the transient notice toast
//! - `export`: board snapshots and the ordered export fallback chain
//! - `board`: `TacticsBoard`, the application root tying it all together

pub mod board;
pub mod core;
pub mod export;
pub mod feedback;
pub mod placement;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, BoardId, BoardRng, BoardRngState, ConfigError, FormationRole, FormationSlot,
    FormationTemplate, ParseBoardError, PlacementError, Player, PlayerId, Position, Roster,
    RosterStore, DEFAULT_ROSTER,
};

pub use crate::placement::{
    allocate_random, relative_position, resolve_drop, Allocation, BoardRect, DropEvent, DropHit,
    DropResolution, DropTarget, PlacementEngine, Point,
};

pub use crate::feedback::{FeedbackToast, Notice};

pub use crate::export::{
    BoardImage, BoardSnapshot, ExportChain, ExportError, ExportOutcome, ExportTier, Rasterizer,
    ShareRequest, TierError, TierKind,
};

pub use crate::board::TacticsBoard;
