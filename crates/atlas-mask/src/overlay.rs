//! Overlay preview: repaint matches directly, without a saved mask

use crate::blend::BlendMode;
use crate::color::Rgb;
use crate::image::RgbaImage;
use crate::matcher::{KeyMatcher, ScanStats};

/// Result of [`generate_overlay`].
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayOutput {
    /// The input image with matched pixels repainted
    pub image: RgbaImage,
    /// Match count and distance bounds
    pub stats: ScanStats,
}

/// Repaint every pixel within tolerance of the key color.
///
/// Uses the same scan and matching rule as
/// [`generate_mask`](crate::generate_mask), so the overlay shows exactly
/// what the mask would select. The image is consumed and modified in
/// place; unmatched pixels and all alpha values are untouched.
///
/// # Example
///
/// ```
/// use atlas_mask::{generate_overlay, BlendMode, KeyMatcher, Rgb, Rgba, RgbaImage};
///
/// let key = Rgb::new(163, 73, 164);
/// let image = RgbaImage::new(1, 1, Rgba::from_rgb(key, 90));
/// let matcher = KeyMatcher::new(key, 0.12).unwrap();
///
/// let out = generate_overlay(image, &matcher, Rgb::new(255, 0, 0), BlendMode::Replace);
/// assert_eq!(out.image.get(0, 0), Some(Rgba::new(255, 0, 0, 90)));
/// ```
pub fn generate_overlay(
    mut image: RgbaImage,
    matcher: &KeyMatcher,
    paint: Rgb,
    blend: BlendMode,
) -> OverlayOutput {
    let mut stats = ScanStats::new();

    for px in image.pixels_mut() {
        let (d, matched) = matcher.classify(px.rgb());
        stats.record(d, matched);
        if matched {
            *px = blend.blend(*px, paint);
        }
    }

    OverlayOutput { image, stats }
}
