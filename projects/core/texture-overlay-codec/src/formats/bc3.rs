//! BC3 (DXT5) decoding.
//!
//! A block is 16 bytes: an 8 byte alpha block (two 8-bit endpoints and 48 bits of 3-bit
//! indices) followed by an 8 byte BC1 style colour block. The colour block always uses the
//! four colour palette.

use super::bc1::{colour_palette, expand_indices};
use texture_overlay_common::color_565::Color565;
use texture_overlay_common::precise_block::PreciseBlock;

/// Size of a BC3 block in bytes.
pub const BC3_BLOCK_BYTES: usize = 16;

/// Builds the 8 entry alpha ramp, normalised to `[0, 1]`.
///
/// With `a0 > a1` six values are interpolated between the endpoints; otherwise four are, and
/// codes 6 and 7 are fully transparent and fully opaque.
pub fn alpha_ramp(a0: u8, a1: u8) -> [f64; 8] {
    let (a0f, a1f) = (a0 as f64, a1 as f64);
    let mut ramp = [0.0; 8];

    for (code, value) in ramp.iter_mut().enumerate() {
        *value = match code {
            0 => a0f,
            1 => a1f,
            _ if a0 > a1 => {
                let n = (code - 1) as f64;
                ((7.0 - n) * a0f + n * a1f) / 7.0
            }
            6 => 0.0,
            7 => 255.0,
            _ => {
                let n = (code - 1) as f64;
                ((5.0 - n) * a0f + n * a1f) / 5.0
            }
        } / 255.0;
    }
    ramp
}

/// Decodes one BC3 block.
pub fn decode_bc3_block(src: &[u8; BC3_BLOCK_BYTES]) -> PreciseBlock {
    let ramp = alpha_ramp(src[0], src[1]);
    let alpha_indices = u64::from_le_bytes([src[2], src[3], src[4], src[5], src[6], src[7], 0, 0]);

    let c0 = Color565::from_le_bytes([src[8], src[9]]);
    let c1 = Color565::from_le_bytes([src[10], src[11]]);
    let indices = u32::from_le_bytes([src[12], src[13], src[14], src[15]]);

    let mut block = expand_indices(&colour_palette(c0, c1, true), indices);
    for (pixel, dst) in block.pixels.iter_mut().enumerate() {
        dst.a = ramp[((alpha_indices >> (pixel * 3)) & 0b111) as usize];
    }
    block
}
