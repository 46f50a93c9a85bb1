//! Geometric primitives.

use serde::{Deserialize, Serialize};

/// A width/height pair in pixels.
///
/// Used for raw viewport snapshots before any reserved-panel subtraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// A zero-area size.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Create a new size.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Area in pixels.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Check if the size has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A fixed display aspect ratio (width : height).
///
/// Stored as a rational so pixel conversions stay exact at the anchor
/// values instead of drifting through floating point. Conversions round
/// half-up, so converting a width to a height and back lands on the same
/// value at the clamp anchors (160 ↔ 90 and 356 ↔ 200 under 16:9).
///
/// # Invariants
///
/// 1. Both terms are ≥ 1 (the constructor sanitizes zeros to 1 rather
///    than rejecting them).
/// 2. `width_for` and `height_for` never panic and never overflow
///    (intermediate math is `u64`, result saturates at `u32::MAX`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AspectRatio {
    num: u32,
    den: u32,
}

impl AspectRatio {
    /// Standard widescreen video ratio, 16:9.
    pub const WIDESCREEN: Self = Self { num: 16, den: 9 };

    /// Legacy 4:3 ratio.
    pub const STANDARD: Self = Self { num: 4, den: 3 };

    /// Create a ratio of `num` width units to `den` height units.
    ///
    /// Zero terms are sanitized to 1.
    #[must_use]
    pub const fn new(num: u32, den: u32) -> Self {
        Self {
            num: if num == 0 { 1 } else { num },
            den: if den == 0 { 1 } else { den },
        }
    }

    /// Width corresponding to `height` under this ratio, rounded half-up.
    #[inline]
    #[must_use]
    pub const fn width_for(self, height: u32) -> u32 {
        round_div(height as u64 * self.num as u64, self.den as u64)
    }

    /// Height corresponding to `width` under this ratio, rounded half-up.
    #[inline]
    #[must_use]
    pub const fn height_for(self, width: u32) -> u32 {
        round_div(width as u64 * self.den as u64, self.num as u64)
    }

    /// The ratio as a float (width / height).
    #[inline]
    #[must_use]
    pub fn as_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::WIDESCREEN
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.num, self.den)
    }
}

/// Integer division rounding half-up, saturating at `u32::MAX`.
const fn round_div(numerator: u64, denominator: u64) -> u32 {
    let q = (numerator + denominator / 2) / denominator;
    if q > u32::MAX as u64 { u32::MAX } else { q as u32 }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
