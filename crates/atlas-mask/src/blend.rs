//! How a selected pixel is repainted

use std::fmt;
use std::str::FromStr;

use crate::color::{Hsv, Rgb, Rgba};
use crate::error::MaskError;

/// Repaint strategy for selected pixels. Alpha is always kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// RGB becomes the paint color.
    #[default]
    Replace,
    /// Each channel is scaled by the paint channel (`orig * paint / 255`).
    Multiply,
    /// Hue and saturation from the paint, value (brightness) from the
    /// original pixel. Keeps baked shading visible under the new color.
    PreserveLuminance,
}

impl BlendMode {
    /// Repaint `original` with `paint`, keeping its alpha.
    #[inline]
    pub fn blend(self, original: Rgba, paint: Rgb) -> Rgba {
        match self {
            BlendMode::Replace => original.with_rgb(paint),
            BlendMode::Multiply => {
                let mul = |o: u8, p: u8| ((o as u16 * p as u16 + 127) / 255) as u8;
                Rgba::new(
                    mul(original.r, paint.r),
                    mul(original.g, paint.g),
                    mul(original.b, paint.b),
                    original.a,
                )
            }
            BlendMode::PreserveLuminance => {
                let value = Hsv::from(original.rgb()).v;
                let tint = Hsv::from(paint);
                original.with_rgb(Rgb::from(Hsv::new(tint.h, tint.s, value)))
            }
        }
    }

    /// Canonical CLI/config name.
    pub fn as_str(self) -> &'static str {
        match self {
            BlendMode::Replace => "replace",
            BlendMode::Multiply => "multiply",
            BlendMode::PreserveLuminance => "preserve-luminance",
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlendMode {
    type Err = MaskError;

    /// Case-insensitive; `-` and `_` separators are optional, so
    /// `preserveLuminance`, `preserve_luminance` and `preserve-luminance`
    /// all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "replace" => Ok(BlendMode::Replace),
            "multiply" => Ok(BlendMode::Multiply),
            "preserveluminance" => Ok(BlendMode::PreserveLuminance),
            _ => Err(MaskError::InvalidBlendMode(s.to_string())),
        }
    }
}
