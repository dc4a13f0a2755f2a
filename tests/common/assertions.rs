//! Assertion helpers for tests.

use atlas_mask::{Rgb, Rgba, RgbaImage};
use pretty_assertions::assert_eq;

/// Assert every pixel of `mask` is opaque white or transparent black,
/// and return the selected positions
pub fn selected_positions(mask: &RgbaImage) -> Vec<(u32, u32)> {
    let mut selected = Vec::new();
    for y in 0..mask.height() {
        for x in 0..mask.width() {
            match mask.get(x, y).unwrap() {
                Rgba::OPAQUE_WHITE => selected.push((x, y)),
                Rgba::TRANSPARENT => {}
                other => panic!("Non-binary mask value {other:?} at ({x}, {y})"),
            }
        }
    }
    selected
}

/// Assert `after` equals `before` except that pixels in `painted` have
/// RGB == `paint` with their alpha unchanged
pub fn assert_repainted(before: &RgbaImage, after: &RgbaImage, painted: &[(u32, u32)], paint: Rgb) {
    assert_eq!(before.dimensions(), after.dimensions());
    for y in 0..before.height() {
        for x in 0..before.width() {
            let b = before.get(x, y).unwrap();
            let a = after.get(x, y).unwrap();
            if painted.contains(&(x, y)) {
                assert_eq!(a, b.with_rgb(paint), "pixel ({x}, {y}) should be repainted");
            } else {
                assert_eq!(a, b, "pixel ({x}, {y}) should be untouched");
            }
        }
    }
}
