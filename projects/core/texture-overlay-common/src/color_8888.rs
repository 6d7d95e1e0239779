//! 8-bit BGRA pixels, the layout of uncompressed host textures.

/// Represents a single 8-bit per channel pixel, laid out in memory as
/// `B8G8R8A8` (blue first), which is the layout of the uncompressed output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Color8888 {
    /// Blue component (0-255)
    pub b: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Red component (0-255)
    pub r: u8,
    /// Alpha component (0-255)
    pub a: u8,
}

impl Color8888 {
    /// Size of one pixel in bytes.
    pub const BYTES: usize = 4;

    /// Constructs a new [`Color8888`] from the specified red, green, blue, and alpha components.
    ///
    /// # Examples
    ///
    /// ```
    /// use texture_overlay_common::color_8888::Color8888;
    ///
    /// let pixel = Color8888::new(255, 0, 0, 255);
    /// assert_eq!(pixel.to_bgra_bytes(), [0, 0, 255, 255]);
    /// ```
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    /// Reads a pixel stored as `[b, g, r, a]`.
    #[inline]
    pub fn from_bgra_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[2], bytes[1], bytes[0], bytes[3])
    }

    /// Returns the pixel as `[b, g, r, a]`.
    #[inline]
    pub fn to_bgra_bytes(self) -> [u8; 4] {
        [self.b, self.g, self.r, self.a]
    }
}
