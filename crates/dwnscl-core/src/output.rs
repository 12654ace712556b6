//! Re-expansion of block means to a full-size output image.

use crate::block::{BlockGrid, BlockScale};
use crate::decode::SourceImage;

/// Full-size pixelated result, RGBA8 with alpha fixed at 255.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputImage {
    pub width: u32,
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    pub pixels: Vec<u8>,
}

impl OutputImage {
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
}

/// Paint every pixel of a `width`×`height` canvas with its block's mean.
///
/// Pixel (x, y) takes block (x/S, y/S). An index past the last block on
/// either axis is clamped to that last block.
pub fn expand(grid: &BlockGrid, width: u32, height: u32) -> OutputImage {
    let s = grid.scale().get();
    let mut pixels = Vec::with_capacity((width as usize) * (height as usize) * 4);

    if grid.cols() > 0 && grid.rows() > 0 {
        let last_col = grid.cols() - 1;
        let last_row = grid.rows() - 1;

        for y in 0..height {
            let by = (y / s).min(last_row);
            for x in 0..width {
                let bx = (x / s).min(last_col);
                let [r, g, b] = grid.get(bx, by);
                pixels.extend_from_slice(&[r, g, b, 255]);
            }
        }
    }

    OutputImage {
        width,
        height,
        pixels,
    }
}

/// Average `image` in blocks of `scale` and expand back to its original size.
pub fn pixelate(image: &SourceImage, scale: BlockScale) -> OutputImage {
    let grid = BlockGrid::average(image, scale);
    expand(&grid, image.width, image.height)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn image_strategy() -> impl Strategy<Value = SourceImage> {
        (1u32..=32, 1u32..=32).prop_flat_map(|(w, h)| {
            let len = (w * h * 4) as usize;
            prop::collection::vec(any::<u8>(), len..=len)
                .prop_map(move |pixels| SourceImage::new(w, h, pixels))
        })
    }

    proptest! {
        /// Property: Output dimensions always equal input dimensions.
        #[test]
        fn prop_dimensions_preserved(img in image_strategy(), s in 1i64..=64) {
            let out = pixelate(&img, BlockScale::new(s).unwrap());
            prop_assert_eq!(out.width, img.width);
            prop_assert_eq!(out.height, img.height);
            prop_assert_eq!(out.pixels.len(), img.pixels.len());
        }

        /// Property: Scale 1 reproduces the input RGB exactly, with opaque alpha.
        #[test]
        fn prop_scale_one_is_identity(img in image_strategy()) {
            let out = pixelate(&img, BlockScale::new(1).unwrap());
            for (src, dst) in img.pixels.chunks_exact(4).zip(out.pixels.chunks_exact(4)) {
                prop_assert_eq!(&src[..3], &dst[..3]);
                prop_assert_eq!(dst[3], 255);
            }
        }

        /// Property: Every pixel inside one block gets the same color.
        #[test]
        fn prop_blocks_are_flat(img in image_strategy(), s in 1u32..=8) {
            let out = pixelate(&img, BlockScale::new(s as i64).unwrap());
            for y in 0..out.height {
                for x in 0..out.width {
                    let anchor = out.pixel((x / s) * s, (y / s) * s);
                    prop_assert_eq!(out.pixel(x, y), anchor);
                }
            }
        }
    }
}
