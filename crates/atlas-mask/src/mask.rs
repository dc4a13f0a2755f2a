//! Mask generation
//!
//! A mask is an [`RgbaImage`] of the same size as the scanned image where
//! selected pixels are opaque white and everything else is transparent
//! black. Masks are saved once and reapplied with [`apply_mask`](crate::apply_mask).

use crate::color::Rgba;
use crate::image::RgbaImage;
use crate::matcher::{KeyMatcher, ScanStats};

/// Mask value for a selected pixel.
pub const MASK_SELECTED: Rgba = Rgba::OPAQUE_WHITE;
/// Mask value for a pixel that is left alone.
pub const MASK_CLEAR: Rgba = Rgba::TRANSPARENT;

/// Channel level above which a mask channel counts as set.
const MASK_THRESHOLD: u8 = 128;

/// Result of [`generate_mask`].
#[derive(Debug, Clone, PartialEq)]
pub struct MaskOutput {
    /// The binary mask, same dimensions as the input
    pub mask: RgbaImage,
    /// Match count and distance bounds
    pub stats: ScanStats,
}

/// Scan `image` and mark every pixel within tolerance of the key color.
///
/// Alpha is ignored for matching. The mask only ever contains
/// [`MASK_SELECTED`] and [`MASK_CLEAR`]. Zero matches is not an error;
/// check [`ScanStats::is_empty`].
///
/// # Example
///
/// ```
/// use atlas_mask::{generate_mask, KeyMatcher, Rgb, Rgba, RgbaImage};
///
/// let key = Rgb::new(163, 73, 164);
/// let image = RgbaImage::new(2, 2, Rgba::from_rgb(key, 255));
/// let out = generate_mask(&image, &KeyMatcher::new(key, 0.12).unwrap());
///
/// assert_eq!(out.stats.matched, 4);
/// assert!(out.mask.pixels().iter().all(|&p| p == Rgba::OPAQUE_WHITE));
/// ```
pub fn generate_mask(image: &RgbaImage, matcher: &KeyMatcher) -> MaskOutput {
    let mut stats = ScanStats::new();
    let mut mask = RgbaImage::new(image.width(), image.height(), MASK_CLEAR);

    for (dst, px) in mask.pixels_mut().iter_mut().zip(image.pixels()) {
        let (d, matched) = matcher.classify(px.rgb());
        stats.record(d, matched);
        if matched {
            *dst = MASK_SELECTED;
        }
    }

    MaskOutput { mask, stats }
}

/// Whether a mask pixel selects its atlas pixel.
///
/// Accepts both mask conventions: white RGB (`red > 128`) or opaque alpha
/// (`alpha > 128`). Either is enough.
#[inline]
pub fn is_selected(mask_pixel: Rgba) -> bool {
    mask_pixel.r > MASK_THRESHOLD || mask_pixel.a > MASK_THRESHOLD
}
