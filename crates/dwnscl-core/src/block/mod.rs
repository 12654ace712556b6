//! Block averaging.
//!
//! The source is tiled into `scale`×`scale` blocks starting at the top-left
//! corner. Blocks on the right and bottom edges are clipped to the image, and
//! their mean is taken over the pixels they actually contain.

mod grid;
mod scale;

pub use grid::{block_bounds, BlockGrid, Rgb};
pub use scale::{BlockScale, ScaleError};
