//! Pixel formats a texture may be stored in, and the per-format block metadata
//! (block width, block height, bytes per block) the rest of the workspace sizes buffers with.

use core::fmt;
use derive_enum_all_values::AllValues;

/// The storage format of a texture's pixel data.
///
/// Not every format here can be decoded; see `NativeFormat` in the codec crate for the ones
/// that can.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum PixelFormat {
    /// No known format.
    Unknown,
    /// BC1, 4x4 blocks of 8 bytes.
    Dxt1,
    /// BC2, 4x4 blocks of 16 bytes.
    Dxt3,
    /// BC3, 4x4 blocks of 16 bytes.
    Dxt5,
    /// BC4, 4x4 blocks of 8 bytes.
    Bc4,
    /// BC5, 4x4 blocks of 16 bytes.
    Bc5,
    /// BC7, 4x4 blocks of 16 bytes.
    Bc7,
    /// Uncompressed 8-bit BGRA.
    B8G8R8A8,
    /// Uncompressed 8-bit RGBA.
    R8G8B8A8,
    /// Uncompressed 8-bit single channel.
    G8,
    /// Uncompressed half-float RGBA.
    FloatRgba,
    /// ASTC with 8x8 blocks.
    Astc8x8,
    /// ASTC with 10x8 blocks.
    Astc10x8,
}

/// Block metadata for a [`PixelFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelFormatInfo {
    /// Display name of the format.
    pub name: &'static str,
    /// Width of one block in pixels.
    pub block_size_x: usize,
    /// Height of one block in pixels.
    pub block_size_y: usize,
    /// Size of one block in bytes.
    pub block_bytes: usize,
    /// Whether the format can be used at all on this platform.
    pub supported: bool,
}

impl PixelFormatInfo {
    const fn new(
        name: &'static str,
        block_size_x: usize,
        block_size_y: usize,
        block_bytes: usize,
        supported: bool,
    ) -> Self {
        Self {
            name,
            block_size_x,
            block_size_y,
            block_bytes,
            supported,
        }
    }

    /// Whether blocks of this format are square.
    #[inline]
    pub const fn has_square_blocks(&self) -> bool {
        self.block_size_x == self.block_size_y
    }

    /// Number of bytes needed for one mip of the given size.
    ///
    /// Partial blocks at the edges count as whole blocks, so a 2x2 mip of a 4x4 block
    /// format still occupies one block.
    ///
    /// # Examples
    ///
    /// ```
    /// use texture_overlay_common::pixel_format::PixelFormat;
    ///
    /// assert_eq!(PixelFormat::Dxt1.info().mip_bytes(16, 16), 16 * 8);
    /// assert_eq!(PixelFormat::B8G8R8A8.info().mip_bytes(16, 16), 16 * 16 * 4);
    /// assert_eq!(PixelFormat::Dxt5.info().mip_bytes(2, 2), 16);
    /// ```
    #[inline]
    pub const fn mip_bytes(&self, size_x: usize, size_y: usize) -> usize {
        size_x.div_ceil(self.block_size_x) * size_y.div_ceil(self.block_size_y) * self.block_bytes
    }

    /// [`PixelFormatInfo::mip_bytes`] for untrusted dimensions; [`None`] if the size does not
    /// fit in a `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use texture_overlay_common::pixel_format::PixelFormat;
    ///
    /// let info = PixelFormat::B8G8R8A8.info();
    /// assert_eq!(info.checked_mip_bytes(16, 16), Some(16 * 16 * 4));
    /// assert_eq!(info.checked_mip_bytes(usize::MAX, 2), None);
    /// ```
    #[inline]
    pub const fn checked_mip_bytes(&self, size_x: usize, size_y: usize) -> Option<usize> {
        let blocks_x = size_x.div_ceil(self.block_size_x);
        let blocks_y = size_y.div_ceil(self.block_size_y);
        match blocks_x.checked_mul(blocks_y) {
            Some(blocks) => blocks.checked_mul(self.block_bytes),
            None => None,
        }
    }
}

impl PixelFormat {
    /// Returns the block metadata for this format.
    pub const fn info(self) -> PixelFormatInfo {
        match self {
            PixelFormat::Unknown => PixelFormatInfo::new("PF_Unknown", 1, 1, 0, false),
            PixelFormat::Dxt1 => PixelFormatInfo::new("PF_DXT1", 4, 4, 8, true),
            PixelFormat::Dxt3 => PixelFormatInfo::new("PF_DXT3", 4, 4, 16, true),
            PixelFormat::Dxt5 => PixelFormatInfo::new("PF_DXT5", 4, 4, 16, true),
            PixelFormat::Bc4 => PixelFormatInfo::new("PF_BC4", 4, 4, 8, true),
            PixelFormat::Bc5 => PixelFormatInfo::new("PF_BC5", 4, 4, 16, true),
            PixelFormat::Bc7 => PixelFormatInfo::new("PF_BC7", 4, 4, 16, true),
            PixelFormat::B8G8R8A8 => PixelFormatInfo::new("PF_B8G8R8A8", 1, 1, 4, true),
            PixelFormat::R8G8B8A8 => PixelFormatInfo::new("PF_R8G8B8A8", 1, 1, 4, true),
            PixelFormat::G8 => PixelFormatInfo::new("PF_G8", 1, 1, 1, true),
            PixelFormat::FloatRgba => PixelFormatInfo::new("PF_FloatRGBA", 1, 1, 8, true),
            PixelFormat::Astc8x8 => PixelFormatInfo::new("PF_ASTC_8x8", 8, 8, 16, true),
            PixelFormat::Astc10x8 => PixelFormatInfo::new("PF_ASTC_10x8", 10, 8, 16, true),
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().name)
    }
}
