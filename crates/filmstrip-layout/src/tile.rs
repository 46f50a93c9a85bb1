#![forbid(unsafe_code)]

//! Tile view sizing: fit an N×M thumbnail grid into the viewport.
//!
//! [`TileSizer`] derives the largest thumbnail that lets `columns`
//! thumbnails (plus per-column side margins) fit the usable width and
//! `rows` thumbnails (plus per-row vertical margins) fit the usable
//! height, then clamps to the configured bounds.
//!
//! # Invariants
//!
//! 1. `filmstrip_width == columns * (tile_side_margin + thumbnail.width)`
//!    exactly, on every path (adaptive, fixed, and min-clamped).
//! 2. `min_width ≤ thumbnail.width ≤ max_width` in adaptive mode;
//!    `thumbnail.height` is derived from the width through the ratio.
//! 3. Opening the side panel never produces a wider thumbnail than the
//!    same viewport with the panel closed (usable width is monotone).
//! 4. Pure and deterministic: identical inputs yield bit-identical
//!    results.
//!
//! # Failure Modes
//!
//! None. Zero or degenerate viewports clamp to the minimum thumbnail;
//! clamping to the minimum may overflow the viewport, in which case the
//! consuming UI scrolls the grid instead of shrinking below the
//! usability floor.

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::{GridShape, LayoutFlags, Size, ThumbnailSize};

/// Computed tile view dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileLayoutResult {
    /// The grid shape the computation was made for.
    pub grid: GridShape,
    /// Final thumbnail dimensions.
    pub thumbnail: ThumbnailSize,
    /// Total filmstrip width: `columns * (side_margin + thumbnail.width)`.
    pub filmstrip_width: u32,
}

/// Sizer for the tile ("grid") view.
#[derive(Debug, Clone, Copy, Default)]
pub struct TileSizer {
    config: LayoutConfig,
}

impl TileSizer {
    /// Create a sizer with the default [`LayoutConfig`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sizer with an explicit configuration.
    #[must_use]
    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Compute thumbnail dimensions and filmstrip width for a grid.
    ///
    /// Callers must pass `columns, rows ≥ 1` (a [`GridShape`] enforces
    /// this at construction). All other inputs are clamped, never
    /// rejected.
    #[must_use]
    pub fn compute(&self, grid: GridShape, viewport: Size, flags: LayoutFlags) -> TileLayoutResult {
        let thumbnail = if flags.responsive_disabled {
            // Fixed-size policy: sizing stability over viewport fit.
            self.config.fixed_tile_size
        } else {
            self.adaptive_size(grid, viewport, flags)
        };

        TileLayoutResult {
            grid,
            thumbnail,
            filmstrip_width: filmstrip_width(grid, thumbnail, &self.config),
        }
    }

    fn adaptive_size(&self, grid: GridShape, viewport: Size, flags: LayoutFlags) -> ThumbnailSize {
        let usable_width = if flags.panel_open {
            viewport.width.saturating_sub(flags.panel_reserved_width)
        } else {
            viewport.width
        };
        let usable_height = viewport.height;

        let columns = grid.columns.max(1) as u32;
        let rows = grid.rows.max(1) as u32;

        // Largest width such that `columns` thumbnails plus per-column
        // side margins fit the usable width.
        let width_limit = (usable_width / columns).saturating_sub(self.config.tile_side_margin);

        // Same bound along the vertical axis, converted to a width
        // candidate through the ratio so the two are comparable.
        let height_limit = (usable_height / rows).saturating_sub(self.config.tile_vertical_margin);
        let width_from_height = self.config.aspect_ratio.width_for(height_limit);

        let width = self.config.clamp_width(width_limit.min(width_from_height));
        ThumbnailSize::from_width(width, self.config.aspect_ratio)
    }
}

/// The algebraic identity for total filmstrip width.
fn filmstrip_width(grid: GridShape, thumbnail: ThumbnailSize, config: &LayoutConfig) -> u32 {
    (grid.columns.max(1) as u32)
        .saturating_mul(config.tile_side_margin.saturating_add(thumbnail.width))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        MAX_THUMBNAIL_WIDTH, MIN_THUMBNAIL_HEIGHT, MIN_THUMBNAIL_WIDTH, TILE_SIDE_MARGIN,
    };

    fn flags(panel_open: bool, reserved: u32) -> LayoutFlags {
        LayoutFlags {
            panel_open,
            panel_reserved_width: reserved,
            responsive_disabled: false,
        }
    }

    #[test]
    fn four_by_two_with_panel_open() {
        // Usable width 1280 - 200 = 1080; 1080/4 - 20 = 250.
        let result = TileSizer::new().compute(
            GridShape::new(4, 2),
            Size::new(1280, 720),
            flags(true, 200),
        );
        assert_eq!(result.thumbnail.width, 250);
        assert_eq!(result.thumbnail.height, 141); // round(250 * 9/16)
        assert_eq!(result.filmstrip_width, 4 * (TILE_SIDE_MARGIN + 250));
        assert!(result.filmstrip_width <= 1080);
    }

    #[test]
    fn panel_closed_uses_full_width() {
        let sizer = TileSizer::new();
        let grid = GridShape::new(4, 2);
        let viewport = Size::new(1280, 720);
        let open = sizer.compute(grid, viewport, flags(true, 200));
        let closed = sizer.compute(grid, viewport, flags(false, 200));
        assert!(open.thumbnail.width <= closed.thumbnail.width);
    }

    #[test]
    fn height_constrained_grid() {
        // Short viewport: height becomes the constraining axis.
        // 360/2 - 20 = 160 height limit → width candidate 284.
        // Width limit: 1920/2 - 20 = 940. min(940, 284) = 284.
        let result = TileSizer::new().compute(
            GridShape::new(2, 2),
            Size::new(1920, 360),
            LayoutFlags::default(),
        );
        assert_eq!(result.thumbnail.width, 284);
        assert_eq!(result.thumbnail.height, 160); // round(284 * 9/16)
    }

    #[test]
    fn zero_viewport_clamps_to_minimum() {
        let result = TileSizer::new().compute(
            GridShape::new(3, 3),
            Size::ZERO,
            LayoutFlags::default(),
        );
        assert_eq!(result.thumbnail.width, MIN_THUMBNAIL_WIDTH);
        assert_eq!(result.thumbnail.height, MIN_THUMBNAIL_HEIGHT);
        // Overflow accepted: the grid scrolls in the consuming UI.
        assert_eq!(result.filmstrip_width, 3 * (TILE_SIDE_MARGIN + MIN_THUMBNAIL_WIDTH));
    }

    #[test]
    fn panel_wider_than_viewport_clamps_to_minimum() {
        let result = TileSizer::new().compute(
            GridShape::new(2, 1),
            Size::new(300, 720),
            flags(true, 800),
        );
        assert_eq!(result.thumbnail.width, MIN_THUMBNAIL_WIDTH);
    }

    #[test]
    fn huge_viewport_clamps_to_maximum() {
        let result = TileSizer::new().compute(
            GridShape::new(1, 1),
            Size::new(10_000, 10_000),
            LayoutFlags::default(),
        );
        assert_eq!(result.thumbnail.width, MAX_THUMBNAIL_WIDTH);
    }

    #[test]
    fn responsive_disabled_ignores_viewport() {
        let sizer = TileSizer::new();
        let grid = GridShape::new(5, 3);
        let disabled = LayoutFlags {
            responsive_disabled: true,
            ..LayoutFlags::default()
        };
        let a = sizer.compute(grid, Size::new(1920, 1080), disabled);
        let b = sizer.compute(grid, Size::new(800, 600), disabled);
        assert_eq!(a.thumbnail, b.thumbnail);
        assert_eq!(a.thumbnail, sizer.config().fixed_tile_size);
        // The filmstrip identity still holds for the fixed size.
        assert_eq!(a.filmstrip_width, 5 * (TILE_SIDE_MARGIN + 320));
    }

    #[test]
    fn deterministic_across_calls() {
        let sizer = TileSizer::new();
        let grid = GridShape::new(4, 3);
        let viewport = Size::new(1366, 768);
        let f = flags(true, 315);
        assert_eq!(sizer.compute(grid, viewport, f), sizer.compute(grid, viewport, f));
    }

    #[test]
    fn filmstrip_identity_over_column_counts() {
        let sizer = TileSizer::new();
        for columns in 1..=8u16 {
            let result = sizer.compute(
                GridShape::new(columns, 2),
                Size::new(1600, 900),
                LayoutFlags::default(),
            );
            assert_eq!(
                result.filmstrip_width,
                columns as u32 * (TILE_SIDE_MARGIN + result.thumbnail.width),
                "identity broken at {columns} columns"
            );
        }
    }

    #[test]
    fn custom_config_is_honored() {
        let config = LayoutConfig::default()
            .aspect_ratio(crate::AspectRatio::STANDARD)
            .width_bounds(80, 640);
        let result = TileSizer::with_config(config).compute(
            GridShape::new(2, 1),
            Size::new(1000, 2000),
            LayoutFlags::default(),
        );
        // 1000/2 - 20 = 480 width limit; height limit is not binding.
        assert_eq!(result.thumbnail.width, 480);
        assert_eq!(result.thumbnail.height, 360); // 4:3
    }

    #[test]
    fn serde_payload_shape() {
        let result = TileSizer::new().compute(
            GridShape::new(2, 1),
            Size::new(800, 600),
            LayoutFlags::default(),
        );
        let json = serde_json::to_value(result).unwrap();
        assert!(json.get("grid").is_some());
        assert!(json.get("thumbnail").is_some());
        assert!(json.get("filmstrip_width").is_some());
    }
}
