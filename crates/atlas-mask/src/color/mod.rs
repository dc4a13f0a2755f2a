//! Color types and the distance metric
//!
//! - [`Rgb`]: key and paint colors, parsed from `#RRGGBB`
//! - [`Rgba`]: image pixels
//! - [`Hsv`]: used by [`BlendMode::PreserveLuminance`](crate::BlendMode::PreserveLuminance)
//! - [`distance()`]: normalized Euclidean distance used for matching

mod distance;
mod hsv;
mod rgb;
mod rgba;

pub use distance::distance;
pub use hsv::Hsv;
pub use rgb::Rgb;
pub use rgba::Rgba;
