//! Recolorer builder -- the primary entry point for the crate.
//!
//! [`Recolorer`] bundles key color, tolerance and blend mode so the same
//! settings drive mask generation, overlay previews and mask application.

use crate::apply::{apply_mask, ApplyOutput};
use crate::blend::BlendMode;
use crate::color::Rgb;
use crate::error::MaskError;
use crate::image::RgbaImage;
use crate::mask::{generate_mask, MaskOutput};
use crate::matcher::{KeyMatcher, DEFAULT_TOLERANCE};
use crate::overlay::{generate_overlay, OverlayOutput};

/// Key-color recoloring builder.
///
/// - Constructor takes the key color; tolerance defaults to 0.12 and blend
///   mode to [`BlendMode::Replace`]
/// - Configuration methods consume and return `self`
/// - [`validate()`](Self::validate) checks the tolerance once; the
///   returned value is reusable across images
///
/// # Example
///
/// ```
/// use atlas_mask::{Recolorer, Rgb, Rgba, RgbaImage};
///
/// let key: Rgb = "#A349A4".parse().unwrap();
/// let recolorer = Recolorer::new(key).tolerance(0.1).validate().unwrap();
///
/// let atlas = RgbaImage::new(2, 2, Rgba::from_rgb(key, 255));
/// let mask = recolorer.mask(&atlas);
/// assert_eq!(mask.stats.matched, 4);
///
/// let painted = recolorer
///     .apply(atlas, &mask.mask, Rgb::new(255, 0, 0))
///     .unwrap();
/// assert_eq!(painted.painted, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recolorer {
    key: Rgb,
    tolerance: f64,
    blend: BlendMode,
}

/// A [`Recolorer`] whose tolerance has been checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidRecolorer {
    matcher: KeyMatcher,
    blend: BlendMode,
}

impl Recolorer {
    pub fn new(key: Rgb) -> Self {
        Self {
            key,
            tolerance: DEFAULT_TOLERANCE,
            blend: BlendMode::default(),
        }
    }

    /// Set the matching tolerance (`0.0..=1.0`).
    #[inline]
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set how selected pixels are repainted.
    #[inline]
    pub fn blend(mut self, blend: BlendMode) -> Self {
        self.blend = blend;
        self
    }

    /// Check the configuration.
    ///
    /// # Errors
    ///
    /// [`MaskError::InvalidTolerance`] if the tolerance is outside `[0, 1]`.
    pub fn validate(self) -> Result<ValidRecolorer, MaskError> {
        Ok(ValidRecolorer {
            matcher: KeyMatcher::new(self.key, self.tolerance)?,
            blend: self.blend,
        })
    }
}

impl ValidRecolorer {
    #[inline]
    pub fn matcher(&self) -> &KeyMatcher {
        &self.matcher
    }

    #[inline]
    pub fn blend_mode(&self) -> BlendMode {
        self.blend
    }

    /// Build a selection mask for `image`.
    pub fn mask(&self, image: &RgbaImage) -> MaskOutput {
        generate_mask(image, &self.matcher)
    }

    /// Repaint matches in `image` directly.
    pub fn overlay(&self, image: RgbaImage, paint: Rgb) -> OverlayOutput {
        generate_overlay(image, &self.matcher, paint, self.blend)
    }

    /// Repaint the pixels `mask` selects in `atlas`.
    pub fn apply(
        &self,
        atlas: RgbaImage,
        mask: &RgbaImage,
        paint: Rgb,
    ) -> Result<ApplyOutput, MaskError> {
        apply_mask(atlas, mask, paint, self.blend)
    }
}
