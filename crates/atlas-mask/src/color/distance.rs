//! Normalized RGB distance
//!
//! The single comparison primitive behind key-color matching. Distances are
//! plain Euclidean distances in 8-bit RGB space divided by the largest
//! possible distance (black to white), so tolerances live in `[0, 1]`
//! regardless of channel depth.

use super::rgb::Rgb;

/// Sum of squared channel differences between black and white: `3 * 255²`.
const MAX_SQUARED_DISTANCE: u32 = 3 * 255 * 255;

/// Normalized Euclidean distance between two colors, in `[0, 1]`.
///
/// `0.0` means identical colors, `1.0` is black vs. white.
///
/// # Example
/// ```
/// use atlas_mask::{color::distance, Rgb};
///
/// assert_eq!(distance(Rgb::BLACK, Rgb::WHITE), 1.0);
/// assert_eq!(distance(Rgb::new(163, 73, 164), Rgb::new(163, 73, 164)), 0.0);
/// ```
#[inline]
pub fn distance(c1: Rgb, c2: Rgb) -> f64 {
    let dr = c1.r as i32 - c2.r as i32;
    let dg = c1.g as i32 - c2.g as i32;
    let db = c1.b as i32 - c2.b as i32;
    let squared = (dr * dr + dg * dg + db * db) as u32;

    // Numerator and denominator go through the same sqrt so the extreme
    // case divides two identical floats.
    (squared as f64).sqrt() / (MAX_SQUARED_DISTANCE as f64).sqrt()
}
