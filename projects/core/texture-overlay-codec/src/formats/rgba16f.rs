//! Half-float RGBA pixels (`R16G16B16A16_FLOAT`).
//!
//! Values are widened to `f64` as stored; out of range channels are not clamped on decode.

use texture_overlay_common::float16_color::Float16Color;
use texture_overlay_common::precise_color::PreciseColor;

/// Decodes one half-float RGBA pixel.
#[inline]
pub fn decode_rgba16f_pixel(src: &[u8; Float16Color::BYTES]) -> PreciseColor {
    PreciseColor::from(Float16Color::from_le_bytes(*src))
}
