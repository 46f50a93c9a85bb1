//! Horizontal view sizing: a single scrollable row of thumbnails.
//!
//! Only height is fit-constrained here; the row scrolls horizontally, so
//! no column/row concept applies.

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::ThumbnailSize;

/// Computed horizontal view dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HorizontalLayoutResult {
    /// Final thumbnail dimensions.
    pub thumbnail: ThumbnailSize,
}

/// Sizer for the horizontal ("strip") view.
#[derive(Debug, Clone, Copy, Default)]
pub struct HorizontalSizer {
    config: LayoutConfig,
}

impl HorizontalSizer {
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

    /// Compute thumbnail dimensions from the available strip height.
    ///
    /// Callers pass a best-effort value (0 when unknown). Zero or tiny
    /// heights clamp to the minimum pair; oversized heights clamp to the
    /// maximum.
    #[must_use]
    pub fn compute(&self, available_height: u32) -> HorizontalLayoutResult {
        let inner = available_height.saturating_sub(2 * self.config.strip_vertical_margin);
        let height = self.config.clamp_height(inner);
        HorizontalLayoutResult {
            thumbnail: ThumbnailSize::from_height(height, self.config.aspect_ratio),
        }
    }
}
