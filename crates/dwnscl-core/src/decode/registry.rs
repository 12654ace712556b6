//! Registry of the image formats the loader accepts.
//!
//! The set is built once, on first use, and lives for the rest of the
//! process. Repeated calls to [`format_registry`] return the same instance.

use std::sync::OnceLock;

use image::ImageFormat;

/// The decoders available to [`super::decode_image`].
#[derive(Debug)]
pub struct FormatRegistry {
    formats: Vec<ImageFormat>,
}

impl FormatRegistry {
    fn init() -> Self {
        let formats: Vec<ImageFormat> = [ImageFormat::Png, ImageFormat::Jpeg]
            .into_iter()
            .filter(|format| format.reading_enabled())
            .collect();
        log::debug!("registered image decoders: {:?}", formats);
        Self { formats }
    }

    /// Returns true if `format` can be decoded.
    pub fn supports(&self, format: ImageFormat) -> bool {
        self.formats.contains(&format)
    }

    /// All registered formats, in registration order.
    pub fn formats(&self) -> &[ImageFormat] {
        &self.formats
    }
}

/// Get the process-wide format registry, initializing it on first call.
pub fn format_registry() -> &'static FormatRegistry {
    static REGISTRY: OnceLock<FormatRegistry> = OnceLock::new();
    REGISTRY.get_or_init(FormatRegistry::init)
}
