use std::path::PathBuf;

use atlas_mask::{MaskError, ParseColorError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecolorError {
    #[error("Invalid color {value:?}")]
    InvalidColorFormat {
        value: String,
        #[source]
        source: ParseColorError,
    },

    #[error("Atlas and mask have different sizes: {}x{} vs {}x{}", .atlas.0, .atlas.1, .mask.0, .mask.1)]
    DimensionMismatch { atlas: (u32, u32), mask: (u32, u32) },

    #[error("{option} requires {required}")]
    MissingRequiredOption {
        option: &'static str,
        required: &'static str,
    },

    #[error("Tolerance {0} is outside 0..=1")]
    InvalidTolerance(f64),

    #[error("Unknown blend mode {0:?} (expected replace, multiply or preserve-luminance)")]
    InvalidBlendMode(String),

    #[error("Image error: {0}")]
    Image(String),

    #[error("Failed to decode PNG {path}")]
    PngDecode {
        path: PathBuf,
        #[source]
        source: png::DecodingError,
    },

    #[error("Unsupported PNG layout in {path}: {detail}")]
    UnsupportedPng { path: PathBuf, detail: String },

    #[error("Failed to encode PNG")]
    PngEncode(#[from] png::EncodingError),

    #[error("Config error in {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("IO error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RecolorError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RecolorError::Io {
            path: path.into(),
            source,
        }
    }

    /// Parse a hex color, keeping the offending input for the message.
    pub fn parse_color(value: &str) -> Result<atlas_mask::Rgb, Self> {
        value
            .parse()
            .map_err(|source| RecolorError::InvalidColorFormat {
                value: value.to_string(),
                source,
            })
    }
}

impl From<MaskError> for RecolorError {
    fn from(e: MaskError) -> Self {
        match e {
            MaskError::DimensionMismatch { atlas, mask } => {
                RecolorError::DimensionMismatch { atlas, mask }
            }
            MaskError::InvalidTolerance(t) => RecolorError::InvalidTolerance(t),
            MaskError::InvalidBlendMode(name) => RecolorError::InvalidBlendMode(name),
            MaskError::BufferSize { .. } => RecolorError::Image(e.to_string()),
        }
    }
}
