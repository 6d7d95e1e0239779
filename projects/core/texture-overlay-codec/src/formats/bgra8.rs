//! Uncompressed 8-bit BGRA pixels.

use texture_overlay_common::color_8888::Color8888;
use texture_overlay_common::precise_color::PreciseColor;

/// Decodes one BGRA8 pixel.
#[inline]
pub fn decode_bgra8_pixel(src: &[u8; Color8888::BYTES]) -> PreciseColor {
    PreciseColor::from(Color8888::from_bgra_bytes(*src))
}

/// Encodes one pixel as BGRA8, clamping each channel to `[0, 1]` and flooring `value * 255.999`.
#[inline]
pub fn encode_bgra8_pixel(pixel: PreciseColor, dst: &mut [u8; Color8888::BYTES]) {
    *dst = pixel.to_color_8888().to_bgra_bytes();
}
