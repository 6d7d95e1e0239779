//! Packed RGB565 colour endpoints of BC1 and BC3 blocks.

use crate::color_8888::Color8888;
use crate::precise_color::PreciseColor;

/// Represents a 16-bit RGB565 color (5 bits red, 6 bits green, 5 bits blue)
/// As encountered in the colour endpoints of BC1 and BC3 blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Color565 {
    /// The underlying 16-bit RGB565 value
    value: u16,
}

impl Color565 {
    /// Creates a new [`Color565`] from the raw 16-bit value
    #[inline]
    pub fn from_raw(value: u16) -> Self {
        Self { value }
    }

    /// Creates a new [`Color565`] from two little endian bytes, as stored in a block.
    #[inline]
    pub fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self::from_raw(u16::from_le_bytes(bytes))
    }

    /// The 5-bit red field, unexpanded.
    #[inline]
    pub fn red_bits(&self) -> u8 {
        ((self.value >> 11) & 0x1F) as u8
    }

    /// The 6-bit green field, unexpanded.
    #[inline]
    pub fn green_bits(&self) -> u8 {
        ((self.value >> 5) & 0x3F) as u8
    }

    /// The 5-bit blue field, unexpanded.
    #[inline]
    pub fn blue_bits(&self) -> u8 {
        (self.value & 0x1F) as u8
    }

    /// Compares two [`Color565`] values as packed integers.
    ///
    /// This is the comparison BC1 uses to pick between the four colour and
    /// the three colour + transparent palette.
    #[inline]
    pub fn greater_than(&self, other: &Self) -> bool {
        self.value > other.value
    }

    /// Converts this colour into a [`PreciseColor`].
    ///
    /// The 5/6/5 bit fields are shifted into the top of an 8-bit channel
    /// (`r << 3`, `g << 2`, `b << 3`) without replicating the high bits,
    /// then normalised by 255. Pure white therefore maps to `248/255, 252/255, 248/255`.
    ///
    /// # Examples
    ///
    /// ```
    /// use texture_overlay_common::color_565::Color565;
    ///
    /// let black = Color565::from_raw(0).to_precise(0xFF);
    /// assert_eq!(black.r, 0.0);
    /// assert_eq!(black.a, 1.0);
    /// ```
    #[inline]
    pub fn to_precise(&self, alpha: u8) -> PreciseColor {
        PreciseColor::from(Color8888::new(
            self.red_bits() << 3,
            self.green_bits() << 2,
            self.blue_bits() << 3,
            alpha,
        ))
    }
}
