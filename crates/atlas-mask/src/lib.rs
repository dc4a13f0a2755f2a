//! atlas-mask: key-color masks and recoloring for texture atlases
//!
//! Artists mark a region of a texture atlas with a flat "key" color (by
//! convention purple `#A349A4`). This crate finds those pixels, turns them
//! into a reusable binary mask, and repaints them with any other color
//! while keeping the original alpha.
//!
//! # Quick Start
//!
//! ```
//! use atlas_mask::{Recolorer, Rgb, Rgba, RgbaImage, BlendMode};
//!
//! let key: Rgb = "#A349A4".parse().unwrap();
//! let recolorer = Recolorer::new(key)
//!     .tolerance(0.12)
//!     .blend(BlendMode::Replace)
//!     .validate()
//!     .unwrap();
//!
//! let atlas = RgbaImage::new(4, 4, Rgba::from_rgb(key, 255));
//!
//! // Generate once...
//! let generated = recolorer.mask(&atlas);
//! assert_eq!(generated.stats.matched, 16);
//!
//! // ...apply as often as needed with different paint colors.
//! let red = recolorer.apply(atlas.clone(), &generated.mask, Rgb::new(255, 0, 0)).unwrap();
//! let green = recolorer.apply(atlas, &generated.mask, Rgb::new(0, 255, 0)).unwrap();
//! assert_eq!(red.painted, green.painted);
//! ```
//!
//! # Matching
//!
//! A pixel matches when the normalized Euclidean distance between its RGB
//! and the key color is `<= tolerance`:
//!
//! ```text
//! d = sqrt(dr² + dg² + db²) / sqrt(3 · 255²)        d ∈ [0, 1]
//! ```
//!
//! Alpha never takes part in matching. Tolerance 0 selects only the exact
//! key color, tolerance 1 selects everything.
//!
//! # Masks
//!
//! Generated masks are binary: opaque white selects, transparent black
//! does not. When applying, a mask pixel selects if its red channel *or*
//! its alpha channel is above 128, so masks painted by hand as white-on-
//! black or as alpha cut-outs both work. Masks and atlases must have
//! identical dimensions.
//!
//! # Operations
//!
//! | Operation | Input | Output |
//! |-----------|-------|--------|
//! | [`generate_mask`] | image, matcher | mask + [`ScanStats`] |
//! | [`generate_overlay`] | image, matcher, paint, blend | repainted image + [`ScanStats`] |
//! | [`apply_mask`] | atlas, mask, paint, blend | repainted image + painted count |
//!
//! All operations are single-pass, single-threaded, and take or return
//! images by value.

pub mod api;
pub mod apply;
pub mod blend;
pub mod color;
pub mod error;
pub mod image;
pub mod mask;
pub mod matcher;
pub mod overlay;


pub use api::{Recolorer, ValidRecolorer};
pub use apply::{apply_mask, ApplyOutput};
pub use blend::BlendMode;
pub use color::{Hsv, Rgb, Rgba};
pub use error::{MaskError, ParseColorError};
pub use image::RgbaImage;
pub use mask::{generate_mask, is_selected, MaskOutput, MASK_CLEAR, MASK_SELECTED};
pub use matcher::{KeyMatcher, ScanStats, DEFAULT_KEY_COLOR, DEFAULT_TOLERANCE};
pub use overlay::{generate_overlay, OverlayOutput};
