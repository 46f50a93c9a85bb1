//! Memoization of tile layout computations.
//!
//! [`LayoutCache`] stores [`TileLayoutResult`] values keyed by the full
//! input tuple (grid shape, viewport, flags). The sizers are pure
//! functions of that tuple, so a cached value is always valid for its
//! key; staleness only arises when the sizing configuration itself
//! changes, which is handled by generation-based invalidation.
//!
//! Resize and panel-toggle triggers need no invalidation: the viewport
//! and flags are part of the key.
//!
//! # Cache Eviction
//!
//! Least-recently-used eviction by access count when at capacity
//! (default 64 entries).

use filmstrip_core::geometry::Size;
use rustc_hash::FxHashMap;

use crate::tile::TileLayoutResult;
use crate::{GridShape, LayoutFlags};

/// Key for layout cache lookups: every input that affects the result.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct LayoutCacheKey {
    /// The requested grid shape.
    pub grid: GridShape,
    /// The raw viewport snapshot.
    pub viewport: Size,
    /// The mode flags.
    pub flags: LayoutFlags,
}

impl LayoutCacheKey {
    /// Create a cache key from layout inputs.
    #[inline]
    #[must_use]
    pub fn new(grid: GridShape, viewport: Size, flags: LayoutFlags) -> Self {
        Self {
            grid,
            viewport,
            flags,
        }
    }
}

/// Cached result with metadata for invalidation and eviction.
#[derive(Clone, Copy, Debug)]
struct CachedEntry {
    result: TileLayoutResult,
    generation: u64,
    access_count: u32,
}

/// Statistics about layout cache performance.
#[derive(Debug, Clone, Default)]
pub struct LayoutCacheStats {
    /// Number of entries currently in the cache.
    pub entries: usize,
    /// Total cache hits since creation or last reset.
    pub hits: u64,
    /// Total cache misses since creation or last reset.
    pub misses: u64,
    /// Hit rate as a fraction (0.0 to 1.0).
    pub hit_rate: f64,
}

/// Cache for tile layout computations.
///
/// Each entry is tagged with a generation number; calling
/// [`invalidate_all()`](LayoutCache::invalidate_all) bumps the
/// generation in O(1), making all existing entries stale without
/// touching them.
#[derive(Debug)]
pub struct LayoutCache {
    entries: FxHashMap<LayoutCacheKey, CachedEntry>,
    generation: u64,
    max_entries: usize,
    hits: u64,
    misses: u64,
}

impl LayoutCache {
    /// Create a new cache with the specified maximum capacity.
    #[inline]
    #[must_use]
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: FxHashMap::with_capacity_and_hasher(max_entries, Default::default()),
            generation: 0,
            max_entries: max_entries.max(1),
            hits: 0,
            misses: 0,
        }
    }

    /// Get the cached result for `key` or compute and cache a new one.
    pub fn get_or_compute<F>(&mut self, key: LayoutCacheKey, compute: F) -> TileLayoutResult
    where
        F: FnOnce() -> TileLayoutResult,
    {
        if let Some(entry) = self.entries.get_mut(&key)
            && entry.generation == self.generation
        {
            self.hits += 1;
            entry.access_count = entry.access_count.saturating_add(1);
            return entry.result;
        }

        self.misses += 1;
        let result = compute();

        if self.entries.len() >= self.max_entries {
            self.evict_lru();
        }

        self.entries.insert(
            key,
            CachedEntry {
                result,
                generation: self.generation,
                access_count: 1,
            },
        );

        result
    }

    /// Invalidate all entries by bumping the generation.
    ///
    /// Call this when the sizing configuration changes; resize triggers
    /// never require it because the viewport is part of the key.
    #[inline]
    pub fn invalidate_all(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Get current cache statistics.
    #[must_use]
    pub fn stats(&self) -> LayoutCacheStats {
        let total = self.hits + self.misses;
        LayoutCacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
            hit_rate: if total > 0 {
                self.hits as f64 / total as f64
            } else {
                0.0
            },
        }
    }

    /// Reset statistics counters to zero.
    #[inline]
    pub fn reset_stats(&mut self) {
        self.hits = 0;
        self.misses = 0;
    }

    /// Clear all entries, immediately freeing memory.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    /// Current number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum capacity before eviction.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.max_entries
    }

    /// Evict the least recently used entry.
    fn evict_lru(&mut self) {
        if let Some(key) = self
            .entries
            .iter()
            .min_by_key(|(_, e)| e.access_count)
            .map(|(k, _)| *k)
        {
            self.entries.remove(&key);
        }
    }
}

impl Default for LayoutCache {
    /// Creates a cache with a default capacity of 64 entries.
    fn default() -> Self {
        Self::new(64)
    }
}
