//! Test colors and atlas builders.

use atlas_mask::{Rgb, Rgba, RgbaImage};

/// Default key color (#A349A4)
pub const PURPLE: Rgb = Rgb::new(163, 73, 164);

/// Per-channel complement of the key color
pub const PURPLE_COMPLEMENT: Rgb = Rgb::new(92, 182, 91);

pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const GREEN: Rgb = Rgb::new(0, 255, 0);

/// Solid image of one color and alpha
pub fn solid(width: u32, height: u32, color: Rgb, alpha: u8) -> RgbaImage {
    RgbaImage::new(width, height, Rgba::from_rgb(color, alpha))
}

/// 4x4 atlas: left half purple with varying alpha, right half grey.
/// One near-purple pixel at (1, 3) that only matches with tolerance.
pub fn half_purple_atlas() -> RgbaImage {
    let mut image = RgbaImage::new(4, 4, Rgba::new(120, 120, 120, 255));
    for y in 0..4 {
        for x in 0..2 {
            image.set(x, y, Rgba::from_rgb(PURPLE, 60 * y as u8 + 15));
        }
    }
    image.set(1, 3, Rgba::new(170, 70, 160, 200));
    image
}
