//! Random formation allocation.
//!
//! Shuffles the unassigned pool, fills the blue formation with the first
//! `team_size` players and the red formation (mirrored) with the next
//! `team_size`. Everyone else keeps their state. The result is a single new
//! roster snapshot, so the store sees the whole allocation at once.

use rustc_hash::FxHashMap;

use crate::core::{BoardId, BoardRng, FormationTemplate, PlacementError, PlayerId, Position, Roster};

/// Outcome of a successful allocation.
#[derive(Clone, Debug, PartialEq)]
pub struct Allocation {
    /// The new snapshot, in the input roster order.
    pub roster: Roster,
    /// Blue players in formation fill order.
    pub blue: Vec<PlayerId>,
    /// Red players in formation fill order.
    pub red: Vec<PlayerId>,
}

/// Allocate two teams from the unassigned pool.
///
/// Fails with [`PlacementError::NotEnoughPlayers`] when fewer than
/// `min_unassigned` players are unassigned; the input roster is untouched
/// either way. `min_unassigned` is expected to cover both teams; it is
/// raised to `2 * team_size` if it does not.
pub fn allocate_random(
    roster: &Roster,
    template: &FormationTemplate,
    min_unassigned: usize,
    rng: &mut BoardRng,
) -> Result<Allocation, PlacementError> {
    let team_size = template.team_size();
    let required = min_unassigned.max(team_size * 2);

    let mut pool: Vec<PlayerId> = roster.unassigned().map(|p| p.id).collect();
    if pool.len() < required {
        log::warn!(
            "random allocation rejected: {} unassigned, {} required",
            pool.len(),
            required
        );
        return Err(PlacementError::NotEnoughPlayers {
            required,
            available: pool.len(),
        });
    }

    rng.shuffle(&mut pool);

    let blue = pool[..team_size].to_vec();
    let red = pool[team_size..team_size * 2].to_vec();

    let mut targets: FxHashMap<PlayerId, (BoardId, Position)> = FxHashMap::default();
    for (&id, position) in blue.iter().zip(template.blue_positions()) {
        targets.insert(id, (BoardId::Blue, position));
    }
    for (&id, position) in red.iter().zip(template.red_positions()) {
        targets.insert(id, (BoardId::Red, position));
    }

    let roster = roster.map(|p| match targets.get(&p.id) {
        Some(&(board, position)) => p.placed(board, position),
        None => p.clone(),
    });

    log::info!(
        "allocated {} ({}): {} blue, {} red, {} left in pool",
        template.name,
        team_size,
        blue.len(),
        red.len(),
        pool.len() - team_size * 2
    );

    Ok(Allocation { roster, blue, red })
}
