//! Core board types: players, roster snapshots, RNG, configuration, errors.
//!
//! Everything here is presentation-agnostic. The placement engine computes
//! new `Roster` snapshots from these types and `RosterStore` commits them.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod roster;

pub use config::{BoardConfig, FormationRole, FormationSlot, FormationTemplate, DEFAULT_ROSTER};
pub use error::{ConfigError, ParseBoardError, PlacementError};
pub use player::{BoardId, Player, PlayerId, Position};
pub use rng::{BoardRng, BoardRngState};
pub use roster::{Roster, RosterStore};
