//! Image loading for the pixelation pipeline.
//!
//! This module provides functionality for:
//! - Reading an input file into memory
//! - Detecting its format from content, never from the extension
//! - Decoding PNG and JPEG into a flat RGBA8 buffer
//!
//! Decoders are listed in a process-wide [`FormatRegistry`] that is built
//! once on first use.

mod loader;
mod registry;
mod types;

pub use loader::{decode_image, load_image};
pub use registry::{format_registry, FormatRegistry};
pub use types::{DecodeError, SourceImage};
