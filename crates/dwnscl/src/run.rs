//! One pass of the pipeline: load, average, expand, write.

use std::path::PathBuf;

use dwnscl_core::decode::load_image;
use dwnscl_core::encode::{output_path, write_png};
use dwnscl_core::{expand, BlockGrid, BlockScale, PipelineError};

use crate::cli::Invocation;

/// Pixelate the invocation's input and return the path written.
///
/// The scale is validated before the input is opened. Each stage consumes
/// the previous stage's result; the decoded source is released once its
/// block means are known.
pub fn run(invocation: &Invocation) -> Result<PathBuf, PipelineError> {
    let scale = BlockScale::new(invocation.scale_value)?;

    let source = load_image(&invocation.input)?;
    let (width, height) = (source.width, source.height);
    println!("{} {} {}", width, height, invocation.scale_value);

    let grid = BlockGrid::average(&source, scale);
    drop(source);

    let output = expand(&grid, width, height);
    let path = output_path(&invocation.input, &invocation.scale_text);
    write_png(&path, &output)?;

    println!("Pixelated image saved as: {}", path.display());
    Ok(path)
}
