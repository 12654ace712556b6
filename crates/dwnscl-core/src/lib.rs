//! dwnscl core - block-averaging pixelation
//!
//! The pipeline is strictly linear:
//!
//! 1. [`decode::load_image`] reads and decodes the input into a [`SourceImage`]
//! 2. [`BlockGrid::average`] reduces it to one mean color per block
//! 3. [`expand`] paints each block's mean back at full size
//! 4. [`encode::write_png`] writes the result as PNG
//!
//! Every stage returns a `Result`; none of them print or exit.

pub mod block;
pub mod decode;
pub mod encode;
mod output;

pub use block::{BlockGrid, BlockScale, ScaleError};
pub use decode::{DecodeError, SourceImage};
pub use encode::EncodeError;
pub use output::{expand, pixelate, OutputImage};

use thiserror::Error;

/// Any failure from a pipeline stage.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Scale(#[from] ScaleError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

impl PipelineError {
    /// Process exit status for this failure. All pipeline failures are fatal.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Short label for the failed stage, used in diagnostics.
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::Decode(e) if e.is_io() => "file could not be opened",
            PipelineError::Decode(_) => "file could not be decoded",
            PipelineError::Scale(_) => "invalid scale",
            PipelineError::Encode(EncodeError::Io { .. }) => "output could not be written",
            PipelineError::Encode(_) => "output could not be encoded",
        }
    }
}
