//! Half precision RGBA pixel, as stored by the `FloatRgba` pixel format.

use half::f16;

/// A single `R16G16B16A16_FLOAT` pixel.
///
/// Stored as four little endian binary16 values in R, G, B, A order (8 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Float16Color {
    /// Red component
    pub r: f16,
    /// Green component
    pub g: f16,
    /// Blue component
    pub b: f16,
    /// Alpha component
    pub a: f16,
}

impl Float16Color {
    /// Size of one pixel in bytes.
    pub const BYTES: usize = 8;

    /// Creates a pixel from four `f32` channels, rounding each to binary16.
    pub fn from_f32(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: f16::from_f32(r),
            g: f16::from_f32(g),
            b: f16::from_f32(b),
            a: f16::from_f32(a),
        }
    }

    /// Reads a pixel from its 8 byte little endian representation.
    #[inline]
    pub fn from_le_bytes(bytes: [u8; 8]) -> Self {
        Self {
            r: f16::from_le_bytes([bytes[0], bytes[1]]),
            g: f16::from_le_bytes([bytes[2], bytes[3]]),
            b: f16::from_le_bytes([bytes[4], bytes[5]]),
            a: f16::from_le_bytes([bytes[6], bytes[7]]),
        }
    }

    /// Returns the 8 byte little endian representation of this pixel.
    #[inline]
    pub fn to_le_bytes(self) -> [u8; 8] {
        let [r0, r1] = self.r.to_le_bytes();
        let [g0, g1] = self.g.to_le_bytes();
        let [b0, b1] = self.b.to_le_bytes();
        let [a0, a1] = self.a.to_le_bytes();
        [r0, r1, g0, g1, b0, b1, a0, a1]
    }
}
