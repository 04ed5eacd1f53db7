//! Board export.
//!
//! Export reads a `BoardSnapshot` and nothing else; it never touches the
//! roster. Platform capabilities (native share, clipboard, download) are
//! supplied by the host as `ExportTier` implementations and tried in order
//! by `ExportChain`.

pub mod chain;
pub mod snapshot;

pub use chain::{ExportChain, ExportError, ExportOutcome, ExportTier, Rasterizer, TierError, TierKind};
pub use snapshot::{BoardImage, BoardSnapshot, ShareRequest, SHARE_FILE_NAME, SHARE_TEXT, SHARE_TITLE};
