//! 8-bit RGB color type
//!
//! [`Rgb`] is the value type for key colors and paint colors. It parses
//! from and formats to `#RRGGBB` hex strings.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;

/// An opaque color with three 8-bit channels.
///
/// Used for key colors (the color pixels are compared against) and paint
/// colors (the color substituted into matched pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// The per-channel complement (`255 - c`).
    ///
    /// # Example
    /// ```
    /// use atlas_mask::Rgb;
    /// assert_eq!(Rgb::new(163, 73, 164).complement(), Rgb::new(92, 182, 91));
    /// ```
    #[inline]
    pub const fn complement(self) -> Self {
        Self::new(255 - self.r, 255 - self.g, 255 - self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    /// Formats as uppercase `#RRGGBB`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Accepts `#RRGGBB` or `RRGGBB`, case-insensitive, with surrounding
    /// whitespace trimmed. Anything that is not exactly six hex digits
    /// after stripping the `#` is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use atlas_mask::Rgb;
    ///
    /// let purple: Rgb = "#A349A4".parse().unwrap();
    /// assert_eq!(purple, Rgb::new(163, 73, 164));
    ///
    /// assert!("ABC".parse::<Rgb>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        let len = s.chars().count();
        if len != 6 {
            return Err(ParseColorError::InvalidLength(len));
        }

        let mut nibbles = [0u8; 6];
        for (slot, c) in nibbles.iter_mut().zip(s.chars()) {
            *slot = c.to_digit(16).ok_or(ParseColorError::InvalidDigit(c))? as u8;
        }

        Ok(Self::new(
            (nibbles[0] << 4) | nibbles[1],
            (nibbles[2] << 4) | nibbles[3],
            (nibbles[4] << 4) | nibbles[5],
        ))
    }
}
