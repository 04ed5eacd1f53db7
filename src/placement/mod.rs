//! Placement engine: manual drops, random allocation, reset.
//!
//! The functions in the submodules are pure: they read a `Roster` snapshot
//! and compute a new one (or a resolution to apply). `PlacementEngine` binds
//! them to a configuration and an RNG and commits results to a
//! `RosterStore`.
//!
//! ## Key Types
//!
//! - `Point`, `BoardRect`: client-space pointer and target geometry
//! - `DropTarget`, `DropHit`, `DropEvent`: what the gesture source reports
//! - `DropResolution`: the placement a drop turned into
//! - `Allocation`: the result of a random allocation

pub mod allocation;
pub mod drop;
pub mod manual;

pub use allocation::{allocate_random, Allocation};
pub use drop::{resolve_drop, DropEvent, DropHit, DropResolution, DropTarget};
pub use manual::{relative_position, BoardRect, Point};

use crate::core::{BoardConfig, BoardRng, PlacementError, RosterStore};

/// Placement rules bound to a configuration and random source.
#[derive(Clone, Debug)]
pub struct PlacementEngine {
    config: BoardConfig,
    rng: BoardRng,
}

impl PlacementEngine {
    /// Create an engine. Uses `config.seed` if set, entropy otherwise.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => BoardRng::new(seed),
            None => BoardRng::from_entropy(),
        };
        Self { config, rng }
    }

    /// Create an engine with an explicit random source.
    #[must_use]
    pub fn with_rng(config: BoardConfig, rng: BoardRng) -> Self {
        Self { config, rng }
    }

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[must_use]
    pub fn rng(&self) -> &BoardRng {
        &self.rng
    }

    /// Resolve a drop and commit it.
    ///
    /// Returns `None` if no target accepted the drop or the player is not in
    /// the roster; the store is unchanged in both cases.
    pub fn drop_player(&self, store: &mut RosterStore, event: &DropEvent) -> Option<DropResolution> {
        let resolution = resolve_drop(event, self.config.clamp_drops)?;
        resolution.apply(store).then_some(resolution)
    }

    /// Randomly allocate both teams from the unassigned pool and commit.
    pub fn allocate(&mut self, store: &mut RosterStore) -> Result<Allocation, PlacementError> {
        let allocation = allocate_random(
            store.roster(),
            &self.config.formation,
            self.config.min_unassigned,
            &mut self.rng,
        )?;
        store.replace(allocation.roster.clone());
        Ok(allocation)
    }

    /// Return every player to the pool. Always succeeds.
    pub fn reset(&self, store: &mut RosterStore) {
        store.reset_all();
    }
}
