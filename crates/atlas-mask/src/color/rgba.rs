//! RGBA pixel type

use super::rgb::Rgb;

/// One image pixel: an [`Rgb`] color plus 8-bit alpha.
///
/// Alpha 0 is fully transparent, 255 fully opaque. Matching never looks
/// at alpha, and repainting never changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    /// Opaque white.
    pub const OPAQUE_WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build a pixel from a color and an alpha value.
    #[inline]
    pub const fn from_rgb(color: Rgb, a: u8) -> Self {
        Self::new(color.r, color.g, color.b, a)
    }

    /// The color part of the pixel, alpha dropped.
    #[inline]
    pub const fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Replace the color channels, keeping this pixel's alpha.
    ///
    /// # Example
    /// ```
    /// use atlas_mask::{Rgb, Rgba};
    /// let px = Rgba::new(10, 20, 30, 77).with_rgb(Rgb::new(255, 0, 0));
    /// assert_eq!(px, Rgba::new(255, 0, 0, 77));
    /// ```
    #[inline]
    pub const fn with_rgb(self, color: Rgb) -> Self {
        Self::from_rgb(color, self.a)
    }

    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}
