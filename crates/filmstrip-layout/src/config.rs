//! Tunable sizing policy: margins, clamp bounds, aspect ratio.
//!
//! The numeric constants here are configuration, not hard requirements.
//! The defaults are pinned by the property tests, so any retuning shows
//! up as an explicit test change.

use filmstrip_core::geometry::AspectRatio;
use serde::{Deserialize, Serialize};

use crate::ThumbnailSize;

/// Side margin reserved per tile column, in pixels.
pub const TILE_SIDE_MARGIN: u32 = 20;

/// Vertical margin reserved per tile row, in pixels.
pub const TILE_VERTICAL_MARGIN: u32 = 20;

/// Margin above and below the single-row strip, in pixels (each side).
pub const STRIP_VERTICAL_MARGIN: u32 = 15;

/// Usability floor for thumbnail width. Clamping here may overflow the
/// viewport; the consuming UI scrolls instead of shrinking further.
pub const MIN_THUMBNAIL_WIDTH: u32 = 160;

/// Upper bound for thumbnail width (90 and 200 px heights carried
/// through 16:9 give the width bounds).
pub const MAX_THUMBNAIL_WIDTH: u32 = 356;

/// Usability floor for thumbnail height.
pub const MIN_THUMBNAIL_HEIGHT: u32 = 90;

/// Upper bound for thumbnail height.
pub const MAX_THUMBNAIL_HEIGHT: u32 = 200;

/// Thumbnail size used verbatim when adaptive sizing is disabled.
pub const FIXED_TILE_SIZE: ThumbnailSize = ThumbnailSize::new(320, 180);

/// Sizing policy shared by both sizers.
///
/// # Invariants
///
/// 1. `min_width ≤ max_width` and `min_height ≤ max_height` (the bound
///    setters sanitize a crossed pair by raising the upper bound).
/// 2. The defaults are mutually consistent: the width bounds equal the
///    height bounds carried through the default aspect ratio, so either
///    clamp axis yields a thumbnail inside both ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Fixed width:height policy for every thumbnail.
    pub aspect_ratio: AspectRatio,
    /// Side margin reserved per tile column.
    pub tile_side_margin: u32,
    /// Vertical margin reserved per tile row.
    pub tile_vertical_margin: u32,
    /// Margin above and below the horizontal strip (each side).
    pub strip_vertical_margin: u32,
    /// Minimum thumbnail width.
    pub min_width: u32,
    /// Maximum thumbnail width.
    pub max_width: u32,
    /// Minimum thumbnail height.
    pub min_height: u32,
    /// Maximum thumbnail height.
    pub max_height: u32,
    /// Size returned when `responsive_disabled` is set.
    pub fixed_tile_size: ThumbnailSize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: AspectRatio::WIDESCREEN,
            tile_side_margin: TILE_SIDE_MARGIN,
            tile_vertical_margin: TILE_VERTICAL_MARGIN,
            strip_vertical_margin: STRIP_VERTICAL_MARGIN,
            min_width: MIN_THUMBNAIL_WIDTH,
            max_width: MAX_THUMBNAIL_WIDTH,
            min_height: MIN_THUMBNAIL_HEIGHT,
            max_height: MAX_THUMBNAIL_HEIGHT,
            fixed_tile_size: FIXED_TILE_SIZE,
        }
    }
}

impl LayoutConfig {
    /// Set the aspect ratio (builder pattern).
    #[must_use]
    pub fn aspect_ratio(mut self, ratio: AspectRatio) -> Self {
        self.aspect_ratio = ratio;
        self
    }

    /// Set the width clamp bounds. A crossed pair is sanitized so that
    /// `max ≥ min`.
    #[must_use]
    pub fn width_bounds(mut self, min: u32, max: u32) -> Self {
        self.min_width = min;
        self.max_width = max.max(min);
        self
    }

    /// Set the height clamp bounds. A crossed pair is sanitized so that
    /// `max ≥ min`.
    #[must_use]
    pub fn height_bounds(mut self, min: u32, max: u32) -> Self {
        self.min_height = min;
        self.max_height = max.max(min);
        self
    }

    /// Clamp a candidate width to the configured bounds.
    #[inline]
    pub(crate) fn clamp_width(&self, width: u32) -> u32 {
        width.clamp(self.min_width, self.max_width.max(self.min_width))
    }

    /// Clamp a candidate height to the configured bounds.
    #[inline]
    pub(crate) fn clamp_height(&self, height: u32) -> u32 {
        height.clamp(self.min_height, self.max_height.max(self.min_height))
    }
}
