//! Roster snapshots and the store that owns them.
//!
//! ## Roster
//!
//! An immutable snapshot of every player. Backed by `im::Vector`, so cloning
//! is O(1) and a functional update shares structure with the previous
//! snapshot. Every mutating method takes `&self` and returns a new roster.
//!
//! ## RosterStore
//!
//! The single writer. Holds the current snapshot plus the id allocator and a
//! revision counter, and swaps in a new snapshot on every effective change.
//! Readers holding an older snapshot never observe partial updates.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::{BoardId, Player, PlayerId, Position};

/// Immutable snapshot of all players, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    players: Vector<Player>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from existing player records.
    pub fn from_players(players: impl IntoIterator<Item = Player>) -> Self {
        Self {
            players: players.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Iterate over all players in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Look up a player by id.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    fn index_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    /// Players in the unassigned pool.
    pub fn unassigned(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| !p.is_assigned())
    }

    /// Number of players in the unassigned pool.
    #[must_use]
    pub fn unassigned_count(&self) -> usize {
        self.unassigned().count()
    }

    /// Players placed on `board`.
    pub fn on_board(&self, board: BoardId) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(move |p| p.is_on(board))
    }

    /// Snapshot with `player` appended.
    #[must_use]
    pub fn with_player(&self, player: Player) -> Self {
        let mut players = self.players.clone();
        players.push_back(player);
        Self { players }
    }

    /// Snapshot with the player `id` replaced by `f(player)`.
    ///
    /// Returns `None` if no player has that id.
    #[must_use]
    pub fn with_updated(&self, id: PlayerId, f: impl FnOnce(&Player) -> Player) -> Option<Self> {
        let index = self.index_of(id)?;
        let updated = f(&self.players[index]);
        Some(Self {
            players: self.players.update(index, updated),
        })
    }

    /// Snapshot with every player mapped through `f`.
    #[must_use]
    pub fn map(&self, f: impl Fn(&Player) -> Player) -> Self {
        Self {
            players: self.players.iter().map(f).collect(),
        }
    }

    /// Snapshot with `id` placed on `board` at `position`.
    #[must_use]
    pub fn placed(&self, id: PlayerId, board: BoardId, position: Position) -> Option<Self> {
        self.with_updated(id, |p| p.placed(board, position))
    }

    /// Snapshot with `id` returned to the pool.
    #[must_use]
    pub fn unplaced(&self, id: PlayerId) -> Option<Self> {
        self.with_updated(id, Player::unplaced)
    }

    /// Snapshot with every player returned to the pool.
    #[must_use]
    pub fn reset(&self) -> Self {
        self.map(Player::unplaced)
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Player;
    type IntoIter = im::vector::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}

/// Owner of the current roster snapshot.
///
/// ## Usage
///
/// ```
/// use tactics_board::core::{BoardId, Position, RosterStore};
///
/// let mut store = RosterStore::new();
/// let id = store.add_player("Kai").unwrap();
///
/// let before = store.snapshot();
/// store.place_player(id, BoardId::Blue, Position::new(50.0, 50.0));
///
/// assert!(before.get(id).unwrap().board.is_none());
/// assert_eq!(store.get(id).unwrap().board, Some(BoardId::Blue));
/// ```
#[derive(Clone, Debug)]
pub struct RosterStore {
    roster: Roster,
    next_id: u64,
    revision: u64,
}

impl Default for RosterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            roster: Roster::new(),
            next_id: 1,
            revision: 0,
        }
    }

    /// Create a store seeded with unassigned players, ids `1..=n`.
    pub fn with_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut store = Self::new();
        for name in names {
            store.add_player(name);
        }
        store.revision = 0;
        store
    }

    /// The current snapshot. O(1).
    #[must_use]
    pub fn snapshot(&self) -> Roster {
        self.roster.clone()
    }

    /// Borrow the current snapshot.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Number of effective changes since creation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.roster.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.roster.get(id)
    }

    fn commit(&mut self, roster: Roster) {
        self.roster = roster;
        self.revision += 1;
    }

    fn alloc_id(&mut self) -> PlayerId {
        let id = PlayerId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add an unassigned player.
    ///
    /// The name is trimmed; an empty result is ignored and returns `None`.
    pub fn add_player(&mut self, name: &str) -> Option<PlayerId> {
        let name = name.trim();
        if name.is_empty() {
            log::debug!("ignoring empty player name");
            return None;
        }

        let id = self.alloc_id();
        let roster = self.roster.with_player(Player::new(id, name));
        self.commit(roster);
        log::info!("added {} ({:?})", id, name);
        Some(id)
    }

    /// Place a player on a board.
    ///
    /// Position is stored as given. Returns `false` if `id` is unknown.
    pub fn place_player(&mut self, id: PlayerId, board: BoardId, position: Position) -> bool {
        match self.roster.placed(id, board, position) {
            Some(roster) => {
                self.commit(roster);
                log::debug!("placed {} on {} at ({:.1}, {:.1})", id, board, position.x, position.y);
                true
            }
            None => {
                log::debug!("place ignored: {} not in roster", id);
                false
            }
        }
    }

    /// Return a player to the unassigned pool.
    ///
    /// Returns `false` if `id` is unknown.
    pub fn unplace_player(&mut self, id: PlayerId) -> bool {
        match self.roster.unplaced(id) {
            Some(roster) => {
                self.commit(roster);
                log::debug!("returned {} to the pool", id);
                true
            }
            None => false,
        }
    }

    /// Return every player to the unassigned pool.
    pub fn reset_all(&mut self) {
        let roster = self.roster.reset();
        self.commit(roster);
        log::info!("reset {} players", self.roster.len());
    }

    /// Install a snapshot computed elsewhere.
    ///
    /// Used by the placement engine for multi-player updates so that the
    /// whole change lands at once.
    pub fn replace(&mut self, roster: Roster) {
        self.commit(roster);
    }
}
