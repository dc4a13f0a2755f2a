//! Key-color classification and scan statistics

use crate::color::{distance, Rgb};
use crate::error::MaskError;

/// Default key color: the flat purple artists paint into atlases.
pub const DEFAULT_KEY_COLOR: Rgb = Rgb::new(0xA3, 0x49, 0xA4);

/// Default matching tolerance.
pub const DEFAULT_TOLERANCE: f64 = 0.12;

/// Decides whether a pixel belongs to the key-colored region.
///
/// A color matches when its [`distance`] to the key is `<= tolerance`.
/// The comparison is inclusive, so a pixel exactly at the tolerance
/// boundary matches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyMatcher {
    key: Rgb,
    tolerance: f64,
}

impl KeyMatcher {
    /// Create a matcher, rejecting tolerances outside `[0, 1]` and NaN.
    pub fn new(key: Rgb, tolerance: f64) -> Result<Self, MaskError> {
        if !(0.0..=1.0).contains(&tolerance) {
            return Err(MaskError::InvalidTolerance(tolerance));
        }
        Ok(Self { key, tolerance })
    }

    #[inline]
    pub fn key(&self) -> Rgb {
        self.key
    }

    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Distance of `color` to the key and whether it matches.
    #[inline]
    pub fn classify(&self, color: Rgb) -> (f64, bool) {
        let d = distance(color, self.key);
        (d, d <= self.tolerance)
    }
}

impl Default for KeyMatcher {
    fn default() -> Self {
        Self {
            key: DEFAULT_KEY_COLOR,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Running counters of one scan over an image.
///
/// `min_distance` starts at 1.0 and `max_distance` at 0.0, so the bounds
/// stay meaningful whether nothing or everything matched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanStats {
    /// Pixels whose distance was within tolerance
    pub matched: usize,
    /// Pixels scanned
    pub total: usize,
    /// Smallest distance seen
    pub min_distance: f64,
    /// Largest distance seen
    pub max_distance: f64,
}

impl ScanStats {
    pub fn new() -> Self {
        Self {
            matched: 0,
            total: 0,
            min_distance: 1.0,
            max_distance: 0.0,
        }
    }

    /// Fold one classified pixel into the counters.
    #[inline]
    pub fn record(&mut self, distance: f64, matched: bool) {
        self.total += 1;
        self.min_distance = self.min_distance.min(distance);
        self.max_distance = self.max_distance.max(distance);
        if matched {
            self.matched += 1;
        }
    }

    /// Combine counters of two disjoint scans (e.g. two image chunks).
    pub fn merge(self, other: ScanStats) -> ScanStats {
        ScanStats {
            matched: self.matched + other.matched,
            total: self.total + other.total,
            min_distance: self.min_distance.min(other.min_distance),
            max_distance: self.max_distance.max(other.max_distance),
        }
    }

    /// No pixel matched. Callers treat this as a warning, not an error.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.matched == 0
    }

    /// Matched share of scanned pixels in percent (0 for empty images).
    pub fn coverage_percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            100.0 * self.matched as f64 / self.total as f64
        }
    }
}

impl Default for ScanStats {
    fn default() -> Self {
        Self::new()
    }
}
