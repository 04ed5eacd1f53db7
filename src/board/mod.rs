//! The tactics board application root.
//!
//! `TacticsBoard` owns the roster store, the placement engine and the
//! feedback toast, and is the only thing the presentation layer talks to.
//! Each method corresponds to one user action; it mutates the roster through
//! the engine and posts the matching notice. Render from `roster()` after any
//! call.
//!
//! ```
//! use std::time::Instant;
//! use tactics_board::board::TacticsBoard;
//! use tactics_board::core::{BoardConfig, BoardId};
//! use tactics_board::feedback::Notice;
//!
//! let mut board = TacticsBoard::with_default_roster(BoardConfig::new().with_seed(1)).unwrap();
//! let now = Instant::now();
//!
//! board.random_allocation(now).unwrap();
//! assert_eq!(board.roster().on_board(BoardId::Blue).count(), 11);
//! assert_eq!(board.visible_notice(now), Some(&Notice::AllocationComplete));
//! ```

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use crate::core::{
    BoardConfig, BoardId, ConfigError, PlacementError, PlayerId, Position, Roster, RosterStore,
    DEFAULT_ROSTER,
};
use crate::export::{BoardSnapshot, ExportChain, ExportError, ExportOutcome, ShareRequest, TierKind};
use crate::feedback::{FeedbackToast, Notice};
use crate::placement::{Allocation, DropEvent, DropResolution, PlacementEngine};

/// Board state plus everything needed to act on it.
#[derive(Debug)]
pub struct TacticsBoard {
    store: RosterStore,
    engine: PlacementEngine,
    toast: FeedbackToast,
    active: BoardId,
    dragging: Option<PlayerId>,
}

impl TacticsBoard {
    /// Create an empty board. Fails if the configuration is invalid.
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        Self::with_roster(config, RosterStore::new())
    }

    /// Create a board seeded with [`DEFAULT_ROSTER`].
    pub fn with_default_roster(config: BoardConfig) -> Result<Self, ConfigError> {
        Self::with_roster(config, RosterStore::with_names(DEFAULT_ROSTER))
    }

    /// Create a board around an existing store.
    pub fn with_roster(config: BoardConfig, store: RosterStore) -> Result<Self, ConfigError> {
        config.validate()?;
        let toast = FeedbackToast::from_millis(config.feedback_ms);
        Ok(Self {
            store,
            engine: PlacementEngine::new(config),
            toast,
            active: BoardId::Blue,
            dragging: None,
        })
    }

    /// The current roster snapshot.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        self.store.roster()
    }

    #[must_use]
    pub fn store(&self) -> &RosterStore {
        &self.store
    }

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        self.engine.config()
    }

    /// The board last selected by the user.
    #[must_use]
    pub fn active_board(&self) -> BoardId {
        self.active
    }

    pub fn select_board(&mut self, board: BoardId) {
        self.active = board;
    }

    /// The player currently being dragged, if any.
    #[must_use]
    pub fn dragging(&self) -> Option<PlayerId> {
        self.dragging
    }

    /// The notice to display at `now`.
    #[must_use]
    pub fn visible_notice(&self, now: Instant) -> Option<&Notice> {
        self.toast.visible(now)
    }

    /// Clear an expired notice.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.toast.tick(now)
    }

    /// Add a player to the pool. Blank names are ignored.
    pub fn add_player(&mut self, name: &str) -> Option<PlayerId> {
        self.store.add_player(name)
    }

    /// Place a player at board percentages, stored exactly as given.
    ///
    /// Unlike a drop, no pointer normalization or clamping is applied and no
    /// notice is posted. Returns `false` if `id` is unknown.
    pub fn place_player(&mut self, id: PlayerId, board: BoardId, position: Position) -> bool {
        self.store.place_player(id, board, position)
    }

    /// Return a player to the pool. Returns `false` if `id` is unknown.
    pub fn unplace_player(&mut self, id: PlayerId) -> bool {
        self.store.unplace_player(id)
    }

    /// A drag gesture picked up `player`.
    pub fn begin_drag(&mut self, player: PlayerId, now: Instant) {
        self.dragging = Some(player);
        self.toast.show(Notice::DragStarted, now);
    }

    /// A drag gesture ended.
    ///
    /// A drop that lands on no target is silent. A drop that targets
    /// something but cannot be applied posts a failure notice.
    pub fn drop_player(&mut self, event: &DropEvent, now: Instant) -> Option<DropResolution> {
        self.dragging = None;
        if event.hits.is_empty() {
            return None;
        }

        let resolution = self.engine.drop_player(&mut self.store, event);
        let notice = match resolution {
            Some(_) => Notice::PlayerPlaced,
            None => Notice::PlacementFailed,
        };
        self.toast.show(notice, now);
        resolution
    }

    /// Randomly fill both formations from the unassigned pool.
    pub fn random_allocation(&mut self, now: Instant) -> Result<Allocation, PlacementError> {
        match self.engine.allocate(&mut self.store) {
            Ok(allocation) => {
                self.toast.show(Notice::AllocationComplete, now);
                Ok(allocation)
            }
            Err(e) => {
                self.toast.show(Notice::from(&e), now);
                Err(e)
            }
        }
    }

    /// Return every player to the pool.
    pub fn reset(&mut self, now: Instant) {
        self.engine.reset(&mut self.store);
        self.toast.show(Notice::PlayersReset, now);
    }

    /// Export `board` through `chain`.
    ///
    /// Only the clipboard tier and total failure post a notice; share sheets
    /// and downloads are their own feedback.
    pub fn export_board(
        &mut self,
        board: BoardId,
        chain: &mut ExportChain,
        now: Instant,
    ) -> Result<ExportOutcome, ExportError> {
        let snapshot = BoardSnapshot::capture(self.store.roster(), board);
        let unix_millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let request = ShareRequest::for_board(board, unix_millis);

        let result = chain.export(&snapshot, &request);
        match &result {
            Ok(outcome) if outcome.tier == TierKind::ClipboardImage => {
                self.toast.show(Notice::CopiedToClipboard, now);
            }
            Ok(_) => {}
            Err(e) => {
                log::warn!("export of {} board failed: {}", board, e);
                self.toast.show(Notice::ExportFailed, now);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{BoardImage, ExportTier, Rasterizer, TierError};
    use crate::placement::{BoardRect, DropHit, Point};

    fn board() -> TacticsBoard {
        TacticsBoard::with_default_roster(BoardConfig::new().with_seed(42)).unwrap()
    }

    struct Blank;

    impl Rasterizer for Blank {
        fn rasterize(&mut self, _snapshot: &BoardSnapshot) -> Result<BoardImage, String> {
            Ok(BoardImage::png(Vec::new()))
        }
    }

    struct Always(TierKind, bool);

    impl ExportTier for Always {
        fn kind(&self) -> TierKind {
            self.0
        }

        fn deliver(&mut self, _image: &BoardImage, _request: &ShareRequest) -> Result<(), TierError> {
            if self.1 {
                Ok(())
            } else {
                Err(TierError::Cancelled)
            }
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = BoardConfig::new().with_min_unassigned(5);
        assert!(TacticsBoard::new(config).is_err());
    }

    #[test]
    fn test_default_roster_loaded() {
        let board = board();
        assert_eq!(board.roster().len(), 29);
        assert_eq!(board.roster().unassigned_count(), 29);
        assert_eq!(board.active_board(), BoardId::Blue);
    }

    #[test]
    fn test_drag_and_drop_notices() {
        let mut board = board();
        let now = Instant::now();
        let id = PlayerId(5);

        board.begin_drag(id, now);
        assert_eq!(board.dragging(), Some(id));
        assert_eq!(board.visible_notice(now), Some(&Notice::DragStarted));

        let event = DropEvent {
            player: id,
            pointer: Point::new(50.0, 50.0),
            hits: vec![DropHit::board(BoardId::Red, BoardRect::new(0.0, 0.0, 100.0, 100.0))],
        };
        assert!(board.drop_player(&event, now).is_some());
        assert_eq!(board.dragging(), None);
        assert_eq!(board.visible_notice(now), Some(&Notice::PlayerPlaced));
    }

    #[test]
    fn test_direct_placement_stores_exact_position() {
        let config = BoardConfig::new().with_seed(42).with_clamp_drops(true);
        let mut board = TacticsBoard::with_default_roster(config).unwrap();
        let now = Instant::now();

        assert!(board.place_player(PlayerId(2), BoardId::Blue, Position::new(57.0, 33.3)));
        assert!(board.place_player(PlayerId(3), BoardId::Red, Position::new(120.0, -5.0)));
        assert!(!board.place_player(PlayerId(999), BoardId::Red, Position::new(1.0, 1.0)));

        assert_eq!(board.roster().get(PlayerId(2)).unwrap().position, Position::new(57.0, 33.3));
        assert_eq!(board.roster().get(PlayerId(3)).unwrap().position, Position::new(120.0, -5.0));
        assert_eq!(board.visible_notice(now), None);

        assert!(board.unplace_player(PlayerId(2)));
        assert!(!board.unplace_player(PlayerId(999)));
        let p = board.roster().get(PlayerId(2)).unwrap();
        assert_eq!(p.board, None);
        assert_eq!(p.position, Position::ORIGIN);
        assert_eq!(board.visible_notice(now), None);
    }

    #[test]
    fn test_drop_outside_is_silent() {
        let mut board = board();
        let now = Instant::now();
        let event = DropEvent {
            player: PlayerId(1),
            pointer: Point::new(0.0, 0.0),
            hits: Vec::new(),
        };

        assert!(board.drop_player(&event, now).is_none());
        assert_eq!(board.visible_notice(now), None);
        assert_eq!(board.store().revision(), 0);
    }

    #[test]
    fn test_allocation_failure_notice() {
        let mut board = TacticsBoard::new(BoardConfig::new().with_seed(1)).unwrap();
        let now = Instant::now();

        assert!(board.random_allocation(now).is_err());
        assert_eq!(board.visible_notice(now), Some(&Notice::NotEnoughPlayers { required: 24 }));
    }

    #[test]
    fn test_reset_notice() {
        let mut board = board();
        let now = Instant::now();
        board.random_allocation(now).unwrap();

        board.reset(now);

        assert_eq!(board.roster().unassigned_count(), 29);
        assert_eq!(board.visible_notice(now), Some(&Notice::PlayersReset));
    }

    #[test]
    fn test_export_notices() {
        let mut board = board();
        let now = Instant::now();

        let mut clipboard = ExportChain::new(Blank).with_tier(Always(TierKind::ClipboardImage, true));
        let outcome = board.export_board(BoardId::Blue, &mut clipboard, now).unwrap();
        assert_eq!(outcome.tier, TierKind::ClipboardImage);
        assert_eq!(board.visible_notice(now), Some(&Notice::CopiedToClipboard));

        let mut failing = ExportChain::new(Blank).with_tier(Always(TierKind::Download, false));
        assert!(board.export_board(BoardId::Red, &mut failing, now).is_err());
        assert_eq!(board.visible_notice(now), Some(&Notice::ExportFailed));
    }

    #[test]
    fn test_export_leaves_roster() {
        let mut board = board();
        let now = Instant::now();
        let before = board.store().revision();

        let mut chain = ExportChain::new(Blank).with_tier(Always(TierKind::Download, true));
        board.export_board(BoardId::Blue, &mut chain, now).unwrap();

        assert_eq!(board.store().revision(), before);
    }
}
