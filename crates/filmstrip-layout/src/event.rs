#![forbid(unsafe_code)]

//! Layout update payloads and the dispatch seam toward the host store.
//!
//! The sizers are pure; everything side-effecting lives here. A
//! [`LayoutUpdater`] owns the sizers, the tile cache, and a
//! [`LayoutSink`], recomputes on each trigger (resize, panel toggle,
//! grid change), and hands the resulting [`LayoutEvent`] to the sink.
//! The payloads are plain immutable records; how the store persists or
//! broadcasts them is not this crate's concern.
//!
//! # Invariants
//!
//! 1. Every `update_*` call dispatches exactly one event, even when the
//!    computation was served from the cache (each trigger fully
//!    replaces the prior result in shared state).
//! 2. Events carry the same value the call returns.
//!
//! # Failure Modes
//!
//! None within this crate; a sink that panics propagates to the caller.

use serde::{Deserialize, Serialize};

use crate::cache::{LayoutCache, LayoutCacheKey, LayoutCacheStats};
use crate::config::LayoutConfig;
use crate::horizontal::{HorizontalLayoutResult, HorizontalSizer};
use crate::tile::{TileLayoutResult, TileSizer};
use crate::{GridShape, LayoutFlags, Size};

/// A layout update payload for the external state store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "dimensions")]
pub enum LayoutEvent {
    /// Tile view dimensions changed.
    TileViewChanged(TileLayoutResult),
    /// Horizontal view dimensions changed.
    HorizontalViewChanged(HorizontalLayoutResult),
}

/// Receiver of layout update events.
///
/// The seam that decouples the sizing engine from the host state-update
/// mechanism. Tests use `Vec<LayoutEvent>`; hosts typically adapt their
/// store's dispatch function via [`SinkFn`].
pub trait LayoutSink {
    /// Deliver one layout update.
    fn dispatch(&mut self, event: LayoutEvent);
}

impl LayoutSink for Vec<LayoutEvent> {
    fn dispatch(&mut self, event: LayoutEvent) {
        self.push(event);
    }
}

/// Adapter implementing [`LayoutSink`] for any closure.
#[derive(Debug, Clone)]
pub struct SinkFn<F>(pub F);

impl<F: FnMut(LayoutEvent)> LayoutSink for SinkFn<F> {
    fn dispatch(&mut self, event: LayoutEvent) {
        (self.0)(event);
    }
}

/// Trigger-driven recomputation glue.
///
/// Owns both sizers, the tile cache, and the sink. Callers serialize
/// trigger events on one logical thread; the updater itself holds no
/// interior mutability and no shared state.
#[derive(Debug)]
pub struct LayoutUpdater<S: LayoutSink> {
    tile: TileSizer,
    horizontal: HorizontalSizer,
    cache: LayoutCache,
    sink: S,
}

impl<S: LayoutSink> LayoutUpdater<S> {
    /// Create an updater with the default [`LayoutConfig`].
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self::with_config(LayoutConfig::default(), sink)
    }

    /// Create an updater with an explicit configuration.
    #[must_use]
    pub fn with_config(config: LayoutConfig, sink: S) -> Self {
        Self {
            tile: TileSizer::with_config(config),
            horizontal: HorizontalSizer::with_config(config),
            cache: LayoutCache::default(),
            sink,
        }
    }

    /// Recompute tile view dimensions and dispatch the update.
    ///
    /// Served from the cache when the same trigger inputs were seen
    /// before; the event is dispatched either way.
    pub fn update_tile_view(
        &mut self,
        grid: GridShape,
        viewport: Size,
        flags: LayoutFlags,
    ) -> TileLayoutResult {
        let key = LayoutCacheKey::new(grid, viewport, flags);
        let tile = &self.tile;
        let result = self
            .cache
            .get_or_compute(key, || tile.compute(grid, viewport, flags));

        #[cfg(feature = "tracing")]
        tracing::debug!(
            grid = %grid,
            thumbnail = %result.thumbnail,
            filmstrip_width = result.filmstrip_width,
            "tile view dimensions updated"
        );

        self.sink.dispatch(LayoutEvent::TileViewChanged(result));
        result
    }

    /// Recompute horizontal view dimensions and dispatch the update.
    pub fn update_horizontal_view(&mut self, available_height: u32) -> HorizontalLayoutResult {
        let result = self.horizontal.compute(available_height);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            thumbnail = %result.thumbnail,
            "horizontal view dimensions updated"
        );

        self.sink
            .dispatch(LayoutEvent::HorizontalViewChanged(result));
        result
    }

    /// Replace the sizing configuration, invalidating cached results.
    pub fn set_config(&mut self, config: LayoutConfig) {
        self.tile = TileSizer::with_config(config);
        self.horizontal = HorizontalSizer::with_config(config);
        self.cache.invalidate_all();
    }

    /// Cache statistics for the tile view computations.
    #[must_use]
    pub fn cache_stats(&self) -> LayoutCacheStats {
        self.cache.stats()
    }

    /// Borrow the sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the updater and return the sink.
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
