//! Owned RGBA image buffer
//!
//! [`RgbaImage`] holds `width * height` [`Rgba`] pixels in row-major order
//! with the origin at the top-left. Dimensions are fixed at construction.

use crate::color::Rgba;
use crate::error::MaskError;

/// An in-memory RGBA8 image.
///
/// # Example
///
/// ```
/// use atlas_mask::{RgbaImage, Rgba};
///
/// let mut image = RgbaImage::new(2, 1, Rgba::TRANSPARENT);
/// image.set(1, 0, Rgba::OPAQUE_WHITE);
///
/// assert_eq!(image.get(1, 0), Some(Rgba::OPAQUE_WHITE));
/// assert_eq!(image.to_rgba8(), vec![0, 0, 0, 0, 255, 255, 255, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl RgbaImage {
    /// Create an image with every pixel set to `fill`.
    pub fn new(width: u32, height: u32, fill: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    /// Create an image from a pixel vector in row-major order.
    ///
    /// Fails with [`MaskError::BufferSize`] if `pixels.len()` is not
    /// `width * height` (reported in bytes).
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba>) -> Result<Self, MaskError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(MaskError::BufferSize {
                expected: expected * 4,
                actual: pixels.len() * 4,
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create an image from raw `[R, G, B, A, R, G, B, A, ...]` bytes.
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> Result<Self, MaskError> {
        let expected = width as usize * height as usize * 4;
        if bytes.len() != expected {
            return Err(MaskError::BufferSize {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|px| Rgba::new(px[0], px[1], px[2], px[3]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Flatten to raw `[R, G, B, A, ...]` bytes, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            bytes.extend_from_slice(&px.to_bytes());
        }
        bytes
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Overwrite the pixel at `(x, y)`. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, pixel: Rgba) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = pixel;
        }
    }

    /// All pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// All pixels, row-major, mutable.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.pixels
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }
}
