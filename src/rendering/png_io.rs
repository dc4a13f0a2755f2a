//! PNG decode/encode for atlases and masks.
//!
//! Every input is normalized to 8-bit RGBA on load (palette and grayscale
//! images are expanded, 16-bit channels stripped, missing alpha becomes
//! opaque). Every output is written as 8-bit RGBA.

use std::fs::{self, File};
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

use atlas_mask::{Rgba, RgbaImage};

use crate::error::RecolorError;

/// Read and decode a PNG file.
pub fn read_png(path: &Path) -> Result<RgbaImage, RecolorError> {
    let file = File::open(path).map_err(|e| RecolorError::io(path, e))?;
    let image = decode_png(BufReader::new(file), path)?;
    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Decoded PNG"
    );
    Ok(image)
}

/// Decode a PNG stream into RGBA8. `path` is only used in error messages.
pub fn decode_png<R: Read>(reader: R, path: &Path) -> Result<RgbaImage, RecolorError> {
    let decode_err = |source| RecolorError::PngDecode {
        path: path.to_path_buf(),
        source,
    };

    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder.read_info().map_err(decode_err)?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).map_err(decode_err)?;

    if info.bit_depth != png::BitDepth::Eight {
        return Err(RecolorError::UnsupportedPng {
            path: path.to_path_buf(),
            detail: format!("bit depth {:?} after normalization", info.bit_depth),
        });
    }

    let channels = match info.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        png::ColorType::Indexed => {
            return Err(RecolorError::UnsupportedPng {
                path: path.to_path_buf(),
                detail: "indexed color was not expanded".to_string(),
            })
        }
    };

    let width = info.width as usize;
    let mut pixels = Vec::with_capacity(width * info.height as usize);
    for row in buf.chunks_exact(info.line_size).take(info.height as usize) {
        for px in row[..width * channels].chunks_exact(channels) {
            pixels.push(match *px {
                [g] => Rgba::new(g, g, g, 255),
                [g, a] => Rgba::new(g, g, g, a),
                [r, g, b] => Rgba::new(r, g, b, 255),
                [r, g, b, a] => Rgba::new(r, g, b, a),
                _ => unreachable!("chunks_exact yields {channels}-byte pixels"),
            });
        }
    }

    Ok(RgbaImage::from_pixels(info.width, info.height, pixels)?)
}

/// Encode an image as an 8-bit RGBA PNG.
///
/// With `optimize`, the image is encoded with fast settings and then
/// re-compressed by oxipng. Transparent pixels keep their RGB values.
pub fn encode_png(image: &RgbaImage, optimize: bool) -> Result<Vec<u8>, RecolorError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        if optimize {
            // oxipng picks filters and compression afterwards
            encoder.set_compression(png::Compression::Fast);
            encoder.set_filter(png::FilterType::NoFilter);
        }
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&image.to_rgba8())?;
    }
    let png_bytes = buf.into_inner();

    if !optimize {
        return Ok(png_bytes);
    }

    match oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    ) {
        Ok(optimized) => {
            tracing::debug!(
                before = png_bytes.len(),
                after = optimized.len(),
                "Optimized PNG"
            );
            Ok(optimized)
        }
        Err(e) => {
            tracing::warn!(%e, "PNG optimization failed, keeping plain encoding");
            Ok(png_bytes)
        }
    }
}

/// Encode and write an image, creating parent directories as needed.
///
/// Returns the number of bytes written.
pub fn write_png(path: &Path, image: &RgbaImage, optimize: bool) -> Result<usize, RecolorError> {
    ensure_parent_dir(path)?;
    let bytes = encode_png(image, optimize)?;
    fs::write(path, &bytes).map_err(|e| RecolorError::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Wrote PNG");
    Ok(bytes.len())
}

/// Create the parent directory of `path` if it does not exist.
pub fn ensure_parent_dir(path: &Path) -> Result<(), RecolorError> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => {
            fs::create_dir_all(dir).map_err(|e| RecolorError::io(dir, e))?;
            tracing::debug!(dir = %dir.display(), "Created output directory");
            Ok(())
        }
        _ => Ok(()),
    }
}
