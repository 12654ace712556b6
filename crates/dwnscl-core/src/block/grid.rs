//! Per-block mean colors.

use std::ops::Range;

use super::BlockScale;
use crate::decode::SourceImage;

/// An averaged block color.
pub type Rgb = [u8; 3];

/// Pixel rectangle covered by block (bx, by), clipped to the image.
///
/// Edge blocks are narrower or shorter than `scale` when the image size is
/// not a multiple of it. A block that starts past the image is empty.
pub fn block_bounds(
    bx: u32,
    by: u32,
    scale: BlockScale,
    width: u32,
    height: u32,
) -> (Range<u32>, Range<u32>) {
    let s = scale.get() as u64;
    let axis = |b: u32, len: u32| {
        let start = (b as u64 * s).min(len as u64) as u32;
        let end = ((b as u64 + 1) * s).min(len as u64) as u32;
        start..end
    };
    (axis(bx, width), axis(by, height))
}

/// Grid of ceil(W/S) × ceil(H/S) block means, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockGrid {
    cols: u32,
    rows: u32,
    scale: BlockScale,
    colors: Vec<Rgb>,
}

impl BlockGrid {
    /// Average every block of `image`.
    ///
    /// Each channel is the truncated mean over the pixels that actually fall
    /// inside the block. Alpha is ignored.
    pub fn average(image: &SourceImage, scale: BlockScale) -> Self {
        let cols = scale.blocks_for(image.width);
        let rows = scale.blocks_for(image.height);
        let s = scale.get() as usize;
        let width = image.width as usize;

        if image.is_empty() {
            return Self {
                cols,
                rows,
                scale,
                colors: Vec::new(),
            };
        }

        let mut sums = vec![[0u64; 3]; cols as usize * rows as usize];

        // Walk the source once in memory order, folding each row into its block row.
        let rows_in_buffer = image.pixels.chunks_exact(width * 4).take(image.height as usize);
        for (y, row) in rows_in_buffer.enumerate() {
            let block_row = &mut sums[(y / s) * cols as usize..][..cols as usize];
            for (x, px) in row.chunks_exact(4).enumerate() {
                let sum = &mut block_row[x / s];
                sum[0] += px[0] as u64;
                sum[1] += px[1] as u64;
                sum[2] += px[2] as u64;
            }
        }

        let mut colors = Vec::with_capacity(sums.len());
        for by in 0..rows {
            for bx in 0..cols {
                let (xs, ys) = block_bounds(bx, by, scale, image.width, image.height);
                let count = xs.len() as u64 * ys.len() as u64;
                let sum = sums[(by * cols + bx) as usize];
                colors.push([
                    (sum[0] / count) as u8,
                    (sum[1] / count) as u8,
                    (sum[2] / count) as u8,
                ]);
            }
        }

        log::debug!(
            "averaged {}x{} image into {}x{} blocks of {}",
            image.width,
            image.height,
            cols,
            rows,
            scale
        );

        Self {
            cols,
            rows,
            scale,
            colors,
        }
    }

    /// Mean color of block (bx, by).
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the grid.
    #[inline]
    pub fn get(&self, bx: u32, by: u32) -> Rgb {
        assert!(bx < self.cols && by < self.rows, "block ({bx}, {by}) out of range");
        self.colors[(by * self.cols + bx) as usize]
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn scale(&self) -> BlockScale {
        self.scale
    }

    /// Row-major block colors.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
