//! Reapplying a saved mask to an atlas

use crate::blend::BlendMode;
use crate::color::Rgb;
use crate::error::MaskError;
use crate::image::RgbaImage;
use crate::mask::is_selected;

/// Result of [`apply_mask`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyOutput {
    /// The atlas with selected pixels repainted
    pub image: RgbaImage,
    /// Number of repainted pixels
    pub painted: usize,
    /// Number of pixels in the atlas
    pub total: usize,
}

impl ApplyOutput {
    /// Painted share of the atlas in percent (0 for empty images).
    pub fn coverage_percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            100.0 * self.painted as f64 / self.total as f64
        }
    }
}

/// Repaint the atlas pixels a previously generated mask selects.
///
/// The mask must have exactly the atlas dimensions; it is never resampled
/// or cropped. Selection follows [`is_selected`], so intermediate mask
/// values are tolerated. The atlas is consumed and returned repainted.
///
/// # Errors
///
/// [`MaskError::DimensionMismatch`] when sizes differ.
///
/// # Example
///
/// ```
/// use atlas_mask::{apply_mask, BlendMode, Rgb, Rgba, RgbaImage, MASK_SELECTED};
///
/// let atlas = RgbaImage::new(1, 1, Rgba::new(1, 2, 3, 40));
/// let mask = RgbaImage::new(1, 1, MASK_SELECTED);
///
/// let out = apply_mask(atlas, &mask, Rgb::new(0, 0, 255), BlendMode::Replace).unwrap();
/// assert_eq!(out.painted, 1);
/// assert_eq!(out.image.get(0, 0), Some(Rgba::new(0, 0, 255, 40)));
/// ```
pub fn apply_mask(
    mut atlas: RgbaImage,
    mask: &RgbaImage,
    paint: Rgb,
    blend: BlendMode,
) -> Result<ApplyOutput, MaskError> {
    if atlas.dimensions() != mask.dimensions() {
        return Err(MaskError::DimensionMismatch {
            atlas: atlas.dimensions(),
            mask: mask.dimensions(),
        });
    }

    let mut painted = 0;
    for (px, &m) in atlas.pixels_mut().iter_mut().zip(mask.pixels()) {
        if is_selected(m) {
            *px = blend.blend(*px, paint);
            painted += 1;
        }
    }

    let total = atlas.len();
    Ok(ApplyOutput {
        image: atlas,
        painted,
        total,
    })
}
