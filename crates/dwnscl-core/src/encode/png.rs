//! PNG encoding for the pixelated result.
//!
//! PNG is lossless, so the flat block colors survive the round trip exactly.
//! The encoder is deterministic: identical images produce identical bytes.

use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::{Path, PathBuf};

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError};
use thiserror::Error;

use crate::output::OutputImage;

/// Errors that can occur while encoding or writing the output.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The output file could not be created or written.
    #[error("could not write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

fn validate(image: &OutputImage) -> Result<(), EncodeError> {
    if image.width == 0 || image.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: image.width,
            height: image.height,
        });
    }

    let expected = (image.width as usize) * (image.height as usize) * 4;
    if image.pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: image.pixels.len(),
        });
    }
    Ok(())
}

fn encode_into<W: Write>(writer: W, image: &OutputImage) -> Result<(), ImageError> {
    PngEncoder::new(writer).write_image(
        &image.pixels,
        image.width,
        image.height,
        ExtendedColorType::Rgba8,
    )
}

/// Encode an output image to PNG bytes.
pub fn encode_png(image: &OutputImage) -> Result<Vec<u8>, EncodeError> {
    validate(image)?;

    let mut buffer = Cursor::new(Vec::new());
    encode_into(&mut buffer, image).map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode `image` as PNG and write it to `path`, replacing any existing file.
///
/// The file handle is owned by this call and closed on every return path.
/// A failure part-way through writing can leave a truncated file behind; it
/// is not removed.
pub fn write_png(path: impl AsRef<Path>, image: &OutputImage) -> Result<(), EncodeError> {
    let path = path.as_ref();
    validate(image)?;

    let io_err = |source| EncodeError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);

    encode_into(&mut writer, image).map_err(|e| match e {
        ImageError::IoError(source) => io_err(source),
        other => EncodeError::EncodingFailed(other.to_string()),
    })?;
    writer.flush().map_err(io_err)?;

    log::debug!("wrote {}x{} PNG to {}", image.width, image.height, path.display());
    Ok(())
}
