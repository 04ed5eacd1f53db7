//! Ordered export fallback chain.
//!
//! The board is rasterized once, then offered to each tier in order. A tier
//! that is unavailable is skipped; a tier that fails (including the user
//! dismissing a share sheet) hands over to the next one. The first tier to
//! succeed wins. Callers only ever see which tier delivered, never the
//! platform details.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::snapshot::{BoardImage, BoardSnapshot, ShareRequest};

/// The kinds of delivery a platform may offer, in the usual fallback order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TierKind {
    NativeShareFile,
    NativeShareText,
    ClipboardImage,
    Download,
}

impl std::fmt::Display for TierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TierKind::NativeShareFile => "native share (file)",
            TierKind::NativeShareText => "native share (text)",
            TierKind::ClipboardImage => "clipboard image",
            TierKind::Download => "download",
        };
        f.write_str(name)
    }
}

/// Why a single tier did not deliver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TierError {
    #[error("capability unavailable")]
    Unavailable,
    #[error("cancelled by user")]
    Cancelled,
    #[error("{0}")]
    Failed(String),
}

/// Why an export produced nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    #[error("rasterization failed: {0}")]
    Rasterize(String),
    #[error("every export tier failed ({attempted} attempted)")]
    Exhausted { attempted: usize },
}

/// Renders a board snapshot to an image.
pub trait Rasterizer {
    fn rasterize(&mut self, snapshot: &BoardSnapshot) -> Result<BoardImage, String>;
}

/// One way of getting an image to the user.
pub trait ExportTier {
    /// Which delivery this tier performs.
    fn kind(&self) -> TierKind;

    /// Capability check. Unavailable tiers are skipped without an attempt.
    fn is_available(&self) -> bool {
        true
    }

    /// Deliver the image.
    fn deliver(&mut self, image: &BoardImage, request: &ShareRequest) -> Result<(), TierError>;
}

/// A successful export.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExportOutcome {
    pub tier: TierKind,
    /// Tiers tried before the one that delivered.
    pub failed_attempts: usize,
}

/// Rasterizer plus tiers in priority order.
pub struct ExportChain {
    rasterizer: Box<dyn Rasterizer>,
    tiers: Vec<Box<dyn ExportTier>>,
}

impl std::fmt::Debug for ExportChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kinds: Vec<TierKind> = self.tiers.iter().map(|t| t.kind()).collect();
        f.debug_struct("ExportChain").field("tiers", &kinds).finish()
    }
}

impl ExportChain {
    /// Create a chain with no tiers.
    pub fn new(rasterizer: impl Rasterizer + 'static) -> Self {
        Self {
            rasterizer: Box::new(rasterizer),
            tiers: Vec::new(),
        }
    }

    /// Append a tier (lower priority than those already added).
    #[must_use]
    pub fn with_tier(mut self, tier: impl ExportTier + 'static) -> Self {
        self.tiers.push(Box::new(tier));
        self
    }

    /// Tier kinds in priority order.
    #[must_use]
    pub fn tier_kinds(&self) -> Vec<TierKind> {
        self.tiers.iter().map(|t| t.kind()).collect()
    }

    /// Export a snapshot.
    pub fn export(
        &mut self,
        snapshot: &BoardSnapshot,
        request: &ShareRequest,
    ) -> Result<ExportOutcome, ExportError> {
        let image = self
            .rasterizer
            .rasterize(snapshot)
            .map_err(ExportError::Rasterize)?;

        let mut attempted = 0;
        for tier in &mut self.tiers {
            let kind = tier.kind();
            if !tier.is_available() {
                log::debug!("export tier {} unavailable, skipping", kind);
                continue;
            }

            match tier.deliver(&image, request) {
                Ok(()) => {
                    log::info!("exported {} board via {}", snapshot.board, kind);
                    return Ok(ExportOutcome {
                        tier: kind,
                        failed_attempts: attempted,
                    });
                }
                Err(e) => {
                    attempted += 1;
                    log::warn!("export tier {} failed: {}", kind, e);
                }
            }
        }

        Err(ExportError::Exhausted { attempted })
    }
}
