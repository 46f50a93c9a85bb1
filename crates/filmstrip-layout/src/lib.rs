#![forbid(unsafe_code)]

//! Thumbnail layout sizing for video-conference filmstrips.
//!
//! This crate computes how large video thumbnails should be under two
//! layout modes:
//!
//! - [`TileSizer`] - N-column × M-row grid ("tile view") sizing from the
//!   viewport, the grid shape, and mode flags
//! - [`HorizontalSizer`] - single-row strip ("horizontal view") sizing
//!   from available height alone
//! - [`LayoutConfig`] - tunable margins, clamp bounds, and aspect ratio
//! - [`event`] - result payloads and the dispatch seam toward the host
//!   state store
//! - [`cache`] - memoization of tile computations for repeated triggers
//!
//! All computations are pure, synchronous, and deterministic: identical
//! inputs always produce bit-identical results, which makes resize
//! handling idempotent. Numeric inputs are clamped rather than rejected,
//! so there are no error paths anywhere in the crate.
//!
//! # Usage
//!
//! ```
//! use filmstrip_layout::{GridShape, LayoutFlags, Size, TileSizer};
//!
//! let sizer = TileSizer::new();
//! let result = sizer.compute(
//!     GridShape::new(4, 2),
//!     Size::new(1280, 720),
//!     LayoutFlags {
//!         panel_open: true,
//!         panel_reserved_width: 200,
//!         responsive_disabled: false,
//!     },
//! );
//! assert!(result.filmstrip_width <= 1080);
//! ```

pub mod cache;
pub mod config;
pub mod event;
pub mod horizontal;
pub mod tile;

pub use cache::{LayoutCache, LayoutCacheKey, LayoutCacheStats};
pub use config::LayoutConfig;
pub use event::{LayoutEvent, LayoutSink, LayoutUpdater, SinkFn};
pub use filmstrip_core::geometry::{AspectRatio, Size};
pub use horizontal::{HorizontalLayoutResult, HorizontalSizer};
use serde::{Deserialize, Serialize};
pub use tile::{TileLayoutResult, TileSizer};

/// The shape of the thumbnail grid in tile view.
///
/// Supplied externally (by a participant-count-to-grid resolver); this
/// crate never derives it. Callers must pass `columns, rows ≥ 1` — the
/// constructor sanitizes zeros to 1 rather than failing, so a misuse
/// degrades to a 1×1 grid instead of a division by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridShape {
    /// Number of thumbnail columns (≥ 1).
    pub columns: u16,
    /// Number of thumbnail rows (≥ 1).
    pub rows: u16,
}

impl GridShape {
    /// Create a grid shape. Zero counts are sanitized to 1.
    #[must_use]
    pub const fn new(columns: u16, rows: u16) -> Self {
        Self {
            columns: if columns == 0 { 1 } else { columns },
            rows: if rows == 0 { 1 } else { rows },
        }
    }

    /// Total number of tiles in the grid.
    #[inline]
    #[must_use]
    pub const fn tile_count(&self) -> u32 {
        self.columns as u32 * self.rows as u32
    }
}

impl Default for GridShape {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl std::fmt::Display for GridShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}

/// Mode flags affecting a layout computation.
///
/// Passed explicitly on every call instead of being read from ambient
/// state, so the sizers stay pure functions of their arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LayoutFlags {
    /// Whether the side panel (chat, participants) is open.
    pub panel_open: bool,
    /// Width reserved for the side panel when open, in pixels.
    pub panel_reserved_width: u32,
    /// Disable adaptive sizing and use the configured fixed size.
    ///
    /// An escape hatch for constrained displays: sizing stability is
    /// prioritized over viewport fit.
    pub responsive_disabled: bool,
}

/// Final thumbnail dimensions, in pixels.
///
/// Always respects the configured aspect ratio and clamp bounds: the
/// constraining dimension is clamped and the other is derived from it
/// by rounding through [`AspectRatio`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ThumbnailSize {
    /// Thumbnail width in pixels.
    pub width: u32,
    /// Thumbnail height in pixels.
    pub height: u32,
}

impl ThumbnailSize {
    /// Create a thumbnail size without any ratio adjustment.
    #[inline]
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Build from a width, deriving height through the ratio.
    #[must_use]
    pub const fn from_width(width: u32, ratio: AspectRatio) -> Self {
        Self {
            width,
            height: ratio.height_for(width),
        }
    }

    /// Build from a height, deriving width through the ratio.
    #[must_use]
    pub const fn from_height(height: u32, ratio: AspectRatio) -> Self {
        Self {
            width: ratio.width_for(height),
            height,
        }
    }
}

impl std::fmt::Display for ThumbnailSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
