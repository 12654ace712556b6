//! Content-sniffing image loader.

use std::path::Path;

use super::{format_registry, DecodeError, SourceImage};

/// Decode an image from bytes, detecting the format from its signature.
///
/// The file extension plays no part in detection. Any bit depth or color
/// type the decoder produces is converted to straight RGBA8.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes match no known signature.
/// Returns `DecodeError::UnsupportedFormat` if the format is known but not registered.
/// Returns `DecodeError::Corrupted` if decoding fails.
pub fn decode_image(bytes: &[u8]) -> Result<SourceImage, DecodeError> {
    let format = image::guess_format(bytes).map_err(|_| DecodeError::InvalidFormat)?;

    if !format_registry().supports(format) {
        return Err(DecodeError::UnsupportedFormat(format!("{:?}", format)));
    }
    log::debug!("detected {:?} ({} bytes)", format, bytes.len());

    let img = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| DecodeError::Corrupted(e.to_string()))?;

    Ok(SourceImage::from_rgba_image(img.into_rgba8()))
}

/// Read and decode the image at `path`.
///
/// The whole file is read before decoding, so the handle is closed by the
/// time this returns.
pub fn load_image(path: impl AsRef<Path>) -> Result<SourceImage, DecodeError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| DecodeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    decode_image(&bytes)
}
