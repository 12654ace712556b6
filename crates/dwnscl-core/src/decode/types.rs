//! Core types for image decoding.

use std::path::PathBuf;

use thiserror::Error;

/// Error types for image loading and decoding.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input file could not be opened or read.
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content does not match any known image signature.
    #[error("Invalid or unrecognized image format")]
    InvalidFormat,

    /// The content was recognized but no decoder is registered for it.
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    Corrupted(String),
}

impl DecodeError {
    /// Returns true if the failure happened while reading the file rather
    /// than while interpreting its content.
    pub fn is_io(&self) -> bool {
        matches!(self, DecodeError::Io { .. })
    }
}

/// A decoded image with straight (non-premultiplied) RGBA8 pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    /// Length should be width * height * 4.
    pub pixels: Vec<u8>,
}

impl SourceImage {
    /// Create a new SourceImage with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * 4,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a single-color image. Mostly useful for tests and fixtures.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let count = (width as usize) * (height as usize);
        Self::new(width, height, rgba.repeat(count))
    }

    /// Create a SourceImage from an image::RgbaImage.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// RGBA value at (x, y).
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y as usize) * (self.width as usize) + x as usize) * 4;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}
