//! Output encoding for the pixelation pipeline.
//!
//! This module provides functionality for:
//! - Encoding the expanded image as PNG, in memory or straight to a file
//! - Deriving the output path from the input path and scale

mod path;
mod png;

pub use path::output_path;
pub use png::{encode_png, write_png, EncodeError};
