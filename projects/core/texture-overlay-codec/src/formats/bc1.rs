//! BC1 (DXT1) decoding.
//!
//! A block is 8 bytes: two little endian RGB565 endpoints followed by 32 bits of 2-bit palette
//! indices, pixel 0 in the lowest bits. When `c0 > c1` (as packed integers) the palette holds four
//! opaque colours; otherwise it holds three colours and transparent black.
//!
//! Interpolation happens on the normalised colours, so no rounding to 8 bits takes place.

use texture_overlay_common::color_565::Color565;
use texture_overlay_common::precise_block::PreciseBlock;
use texture_overlay_common::precise_color::PreciseColor;

/// Size of a BC1 block in bytes.
pub const BC1_BLOCK_BYTES: usize = 8;

/// Builds the 4 entry palette for a pair of endpoints.
///
/// `four_colour` selects between the four colour palette and the three colour + transparent one.
/// BC3 always uses the four colour palette.
#[inline]
pub(crate) fn colour_palette(c0: Color565, c1: Color565, four_colour: bool) -> [PreciseColor; 4] {
    let p0 = c0.to_precise(u8::MAX);
    let p1 = c1.to_precise(u8::MAX);

    if four_colour {
        [
            p0,
            p1,
            PreciseColor::average(&[p0, p0, p1]),
            PreciseColor::average(&[p0, p1, p1]),
        ]
    } else {
        [
            p0,
            p1,
            PreciseColor::average(&[p0, p1]),
            PreciseColor::TRANSPARENT,
        ]
    }
}

/// Expands 16 packed 2-bit indices through `palette`.
#[inline]
pub(crate) fn expand_indices(palette: &[PreciseColor; 4], indices: u32) -> PreciseBlock {
    let mut block = PreciseBlock::default();
    for (pixel, dst) in block.pixels.iter_mut().enumerate() {
        *dst = palette[((indices >> (pixel * 2)) & 0b11) as usize];
    }
    block
}

/// Decodes one BC1 block.
///
/// # Examples
///
/// ```
/// use texture_overlay_codec::formats::bc1::decode_bc1_block;
/// use texture_overlay_common::precise_color::PreciseColor;
///
/// // c0 = white, c1 = black, every index 1.
/// let block = decode_bc1_block(&[0xFF, 0xFF, 0x00, 0x00, 0x55, 0x55, 0x55, 0x55]);
/// assert!(block.pixels.iter().all(|&p| p == PreciseColor::opaque(0.0, 0.0, 0.0)));
/// ```
pub fn decode_bc1_block(src: &[u8; BC1_BLOCK_BYTES]) -> PreciseBlock {
    let c0 = Color565::from_le_bytes([src[0], src[1]]);
    let c1 = Color565::from_le_bytes([src[2], src[3]]);
    let indices = u32::from_le_bytes([src[4], src[5], src[6], src[7]]);

    let palette = colour_palette(c0, c1, c0.greater_than(&c1));
    expand_indices(&palette, indices)
}
