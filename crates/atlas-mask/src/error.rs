//! Error types for color parsing and mask operations

use std::fmt;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Wrong number of characters after stripping '#' (must be exactly 6)
    InvalidLength(usize),
    /// A character that is not a hexadecimal digit
    InvalidDigit(char),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength(len) => {
                write!(
                    f,
                    "invalid hex color length {} (expected 6 digits, e.g. #A349A4)",
                    len
                )
            }
            ParseColorError::InvalidDigit(c) => {
                write!(f, "invalid hex digit {:?}", c)
            }
        }
    }
}

impl std::error::Error for ParseColorError {}

/// Error type for mask generation and application.
#[derive(Debug, Clone, PartialEq)]
pub enum MaskError {
    /// Atlas and mask differ in size; masks are never resampled
    DimensionMismatch {
        /// Atlas size (width, height)
        atlas: (u32, u32),
        /// Mask size (width, height)
        mask: (u32, u32),
    },
    /// Raw pixel buffer does not hold `width * height` RGBA pixels
    BufferSize {
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },
    /// Tolerance outside `[0, 1]` or NaN
    InvalidTolerance(f64),
    /// Unknown blend mode name
    InvalidBlendMode(String),
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskError::DimensionMismatch { atlas, mask } => write!(
                f,
                "atlas and mask sizes differ: {}x{} vs {}x{}",
                atlas.0, atlas.1, mask.0, mask.1
            ),
            MaskError::BufferSize { expected, actual } => write!(
                f,
                "pixel buffer has {} bytes, expected {}",
                actual, expected
            ),
            MaskError::InvalidTolerance(t) => {
                write!(f, "tolerance {} is outside 0..=1", t)
            }
            MaskError::InvalidBlendMode(name) => write!(
                f,
                "unknown blend mode {:?} (expected replace, multiply or preserve-luminance)",
                name
            ),
        }
    }
}

impl std::error::Error for MaskError {}
