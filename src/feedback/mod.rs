//! Transient user feedback.
//!
//! A `FeedbackToast` shows at most one `Notice` at a time. Showing a new
//! notice replaces the current one and restarts its timer, so an earlier
//! notice's expiry can never hide a later one. Time is always passed in,
//! which keeps the toast free of timers and testable.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::core::PlacementError;

/// A message for the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    DragStarted,
    PlayerPlaced,
    PlacementFailed,
    AllocationComplete,
    PlayersReset,
    NotEnoughPlayers { required: usize },
    CopiedToClipboard,
    ExportFailed,
}

impl Notice {
    /// Whether the notice reports a failure.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Notice::PlacementFailed | Notice::NotEnoughPlayers { .. } | Notice::ExportFailed
        )
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::DragStarted => f.write_str("开始拖动球员"),
            Notice::PlayerPlaced => f.write_str("球员已放置"),
            Notice::PlacementFailed => f.write_str("放置失败"),
            Notice::AllocationComplete => f.write_str("已完成随机分配"),
            Notice::PlayersReset => f.write_str("已重置所有球员"),
            Notice::NotEnoughPlayers { required } => {
                write!(f, "需要至少{required}名未分配球员进行随机分配")
            }
            Notice::CopiedToClipboard => f.write_str("战术板已复制到剪贴板"),
            Notice::ExportFailed => f.write_str("分享失败，请重试"),
        }
    }
}

impl From<&PlacementError> for Notice {
    fn from(err: &PlacementError) -> Self {
        match err {
            PlacementError::NotEnoughPlayers { required, .. } => Notice::NotEnoughPlayers {
                required: *required,
            },
        }
    }
}

/// Single-slot notice display with expiry.
#[derive(Clone, Debug)]
pub struct FeedbackToast {
    duration: Duration,
    current: Option<(Notice, Instant)>,
}

impl FeedbackToast {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            current: None,
        }
    }

    /// Create a toast from a millisecond duration.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Show `notice` until `now + duration`, replacing any current notice.
    pub fn show(&mut self, notice: Notice, now: Instant) {
        log::debug!("notice: {}", notice);
        self.current = Some((notice, now + self.duration));
    }

    /// The notice visible at `now`, if any.
    #[must_use]
    pub fn visible(&self, now: Instant) -> Option<&Notice> {
        match &self.current {
            Some((notice, until)) if now < *until => Some(notice),
            _ => None,
        }
    }

    /// Drop an expired notice. Returns `true` if one was cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.current.is_some() && self.visible(now).is_none() {
            self.current = None;
            return true;
        }
        false
    }

    /// Hide the current notice immediately.
    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

impl Default for FeedbackToast {
    fn default() -> Self {
        Self::from_millis(2000)
    }
}
