//! What an export sees: one board's players, and the share metadata.

use serde::{Deserialize, Serialize};

use crate::core::{BoardId, Player, Roster};

/// Share sheet title.
pub const SHARE_TITLE: &str = "ARK足球战术板";

/// Share sheet body text.
pub const SHARE_TEXT: &str = "分享我的战术板配置";

/// File name attached to a native file share.
pub const SHARE_FILE_NAME: &str = "tactics-board.png";

/// The players on one board at export time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub board: BoardId,
    pub players: Vec<Player>,
}

impl BoardSnapshot {
    /// Capture `board` from a roster snapshot.
    #[must_use]
    pub fn capture(roster: &Roster, board: BoardId) -> Self {
        Self {
            board,
            players: roster.on_board(board).cloned().collect(),
        }
    }
}

/// A rasterized board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardImage {
    pub bytes: Vec<u8>,
    pub mime: String,
}

impl BoardImage {
    /// A PNG image.
    #[must_use]
    pub fn png(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            mime: "image/png".to_string(),
        }
    }
}

/// Metadata handed to each export tier alongside the image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    /// File name for the download fallback, unique per board and export time.
    pub file_name: String,
    /// Fixed file name attached to a native file share.
    pub share_file_name: String,
}

impl ShareRequest {
    /// Request for `board` exported at `unix_millis`.
    #[must_use]
    pub fn for_board(board: BoardId, unix_millis: u128) -> Self {
        Self {
            title: SHARE_TITLE.to_string(),
            text: SHARE_TEXT.to_string(),
            file_name: format!("tactics-board-{board}-{unix_millis}.png"),
            share_file_name: SHARE_FILE_NAME.to_string(),
        }
    }
}
