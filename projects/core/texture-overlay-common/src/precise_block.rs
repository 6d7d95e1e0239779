//! # Precise Block
//!
//! The canonical tile every native block format decodes into, regardless of the format's
//! own block size. Formats with 4x4 blocks fill it from a single native block, raw pixel
//! formats fill it from sixteen 1x1 blocks.
//!
//! ## Memory Layout
//!
//! The pixels are stored in row-major order:
//! ```text
//! [ 0] [ 1] [ 2] [ 3]
//! [ 4] [ 5] [ 6] [ 7]
//! [ 8] [ 9] [10] [11]
//! [12] [13] [14] [15]
//! ```

use crate::precise_color::PreciseColor;
use core::ops::{Index, IndexMut};

/// Side length of the canonical tile, which is the largest native block side supported.
pub const CANONICAL_BLOCK_SIDE: usize = 4;

/// Number of pixels in the canonical tile.
pub const CANONICAL_BLOCK_PIXELS: usize = CANONICAL_BLOCK_SIDE * CANONICAL_BLOCK_SIDE;

/// A 4x4 tile of [`PreciseColor`] pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PreciseBlock {
    /// The 16 pixels in the block (row-major order)
    /// (i.e. `pixels[0]` is top-left, `pixels[3]` is top-right, etc.)
    pub pixels: [PreciseColor; CANONICAL_BLOCK_PIXELS],
}

impl PreciseBlock {
    /// Constructs a block filled with 16 copies of `pixel`.
    ///
    /// # Examples
    ///
    /// ```
    /// use texture_overlay_common::precise_block::PreciseBlock;
    /// use texture_overlay_common::precise_color::PreciseColor;
    ///
    /// let red = PreciseColor::opaque(1.0, 0.0, 0.0);
    /// let block = PreciseBlock::new(red);
    /// assert!(block.pixels.iter().all(|&p| p == red));
    /// ```
    pub const fn new(pixel: PreciseColor) -> Self {
        Self {
            pixels: [pixel; CANONICAL_BLOCK_PIXELS],
        }
    }

    /// Gets the pixel at `(x, y)`, or [`None`] if either coordinate is outside `0..4`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<PreciseColor> {
        if x >= CANONICAL_BLOCK_SIDE || y >= CANONICAL_BLOCK_SIDE {
            return None;
        }
        Some(self.pixels[y * CANONICAL_BLOCK_SIDE + x])
    }

    /// Sets the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// If either coordinate is outside `0..4`.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, pixel: PreciseColor) {
        assert!(x < CANONICAL_BLOCK_SIDE && y < CANONICAL_BLOCK_SIDE);
        self.pixels[y * CANONICAL_BLOCK_SIDE + x] = pixel;
    }

    /// Combines two blocks pixel by pixel.
    ///
    /// # Examples
    ///
    /// ```
    /// use texture_overlay_common::precise_block::PreciseBlock;
    /// use texture_overlay_common::precise_color::PreciseColor;
    ///
    /// let a = PreciseBlock::new(PreciseColor::opaque(0.25, 0.25, 0.25));
    /// let b = PreciseBlock::new(PreciseColor::opaque(0.5, 0.5, 0.5));
    /// let sum = PreciseBlock::map_pairwise(&a, &b, |x, y| x + y);
    /// assert_eq!(sum.pixels[0], PreciseColor::new(0.75, 0.75, 0.75, 2.0));
    /// ```
    #[inline]
    pub fn map_pairwise(
        a: &PreciseBlock,
        b: &PreciseBlock,
        mut func: impl FnMut(PreciseColor, PreciseColor) -> PreciseColor,
    ) -> PreciseBlock {
        let mut out = PreciseBlock::default();
        for ((dst, &lhs), &rhs) in out.pixels.iter_mut().zip(&a.pixels).zip(&b.pixels) {
            *dst = func(lhs, rhs);
        }
        out
    }
}

impl Index<usize> for PreciseBlock {
    type Output = PreciseColor;

    #[inline]
    fn index(&self, index: usize) -> &PreciseColor {
        &self.pixels[index]
    }
}

impl IndexMut<usize> for PreciseBlock {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut PreciseColor {
        &mut self.pixels[index]
    }
}
