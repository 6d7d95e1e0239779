//! Native block formats the codec can convert to and from [`PreciseBlock`].
//!
//! A native block is the smallest unit a format stores: a whole 4x4 tile for BC1 and BC3, or a
//! single pixel for the uncompressed formats. The [`BlockMapper`](crate::BlockMapper) reads as
//! many native blocks as it needs to fill one canonical 4x4 tile and hands each of them, along
//! with the cell it covers, to [`NativeFormat::decode_into`].

pub mod bc1;
pub mod bc3;
pub mod bgra8;
pub mod rgba16f;

use crate::error::BlockMapperError;
use derive_enum_all_values::AllValues;
use texture_overlay_common::pixel_format::PixelFormat;
use texture_overlay_common::precise_block::{PreciseBlock, CANONICAL_BLOCK_SIDE};

/// A pixel format with a block codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum NativeFormat {
    /// BC1 (DXT1), decode only.
    Bc1,
    /// BC3 (DXT5), decode only.
    Bc3,
    /// 8-bit BGRA, decode and encode.
    Bgra8,
    /// Half-float RGBA, decode only.
    Rgba16F,
}

impl NativeFormat {
    /// Returns the codec for `format`, or [`None`] if it has none.
    ///
    /// # Examples
    ///
    /// ```
    /// use texture_overlay_codec::NativeFormat;
    /// use texture_overlay_common::pixel_format::PixelFormat;
    ///
    /// assert_eq!(NativeFormat::from_pixel_format(PixelFormat::Dxt5), Some(NativeFormat::Bc3));
    /// assert_eq!(NativeFormat::from_pixel_format(PixelFormat::Bc7), None);
    /// ```
    pub const fn from_pixel_format(format: PixelFormat) -> Option<Self> {
        match format {
            PixelFormat::Dxt1 => Some(Self::Bc1),
            PixelFormat::Dxt5 => Some(Self::Bc3),
            PixelFormat::B8G8R8A8 => Some(Self::Bgra8),
            PixelFormat::FloatRgba => Some(Self::Rgba16F),
            _ => None,
        }
    }

    /// The [`PixelFormat`] this codec handles.
    pub const fn pixel_format(self) -> PixelFormat {
        match self {
            Self::Bc1 => PixelFormat::Dxt1,
            Self::Bc3 => PixelFormat::Dxt5,
            Self::Bgra8 => PixelFormat::B8G8R8A8,
            Self::Rgba16F => PixelFormat::FloatRgba,
        }
    }

    /// Side length of a native block, in pixels.
    pub const fn block_side(self) -> usize {
        self.pixel_format().info().block_size_x
    }

    /// Size of a native block, in bytes.
    pub const fn block_bytes(self) -> usize {
        self.pixel_format().info().block_bytes
    }

    /// Whether [`NativeFormat::encode_from`] is implemented for this format.
    pub const fn has_encoder(self) -> bool {
        matches!(self, Self::Bgra8)
    }

    /// Decodes one native block from `src` into `block`.
    ///
    /// `cell_x` and `cell_y` are the pixel coordinates, inside `block`, of the native block's
    /// top left pixel. `extent` is how many columns and rows of `block`, counted from its
    /// origin, lie inside the mip; decoded pixels beyond it are left untouched.
    /// `src` must hold exactly [`NativeFormat::block_bytes`] bytes.
    pub fn decode_into(
        self,
        src: &[u8],
        block: &mut PreciseBlock,
        cell_x: usize,
        cell_y: usize,
        extent: (usize, usize),
    ) -> Result<(), BlockMapperError> {
        match self {
            Self::Bc1 => paste_tile(block, &bc1::decode_bc1_block(fixed(src)?), extent),
            Self::Bc3 => paste_tile(block, &bc3::decode_bc3_block(fixed(src)?), extent),
            Self::Bgra8 | Self::Rgba16F if cell_x >= extent.0 || cell_y >= extent.1 => {}
            Self::Bgra8 => block.set(cell_x, cell_y, bgra8::decode_bgra8_pixel(fixed(src)?)),
            Self::Rgba16F => block.set(cell_x, cell_y, rgba16f::decode_rgba16f_pixel(fixed(src)?)),
        }
        Ok(())
    }

    /// Encodes the native block at `cell_x`, `cell_y` of `block` into `dst`.
    ///
    /// `dst` must hold exactly [`NativeFormat::block_bytes`] bytes.
    pub fn encode_from(
        self,
        block: &PreciseBlock,
        cell_x: usize,
        cell_y: usize,
        dst: &mut [u8],
    ) -> Result<(), BlockMapperError> {
        match self {
            Self::Bgra8 => {
                let pixel = block.get(cell_x, cell_y).ok_or(
                    BlockMapperError::UnalignedCoordinates {
                        x: cell_x,
                        y: cell_y,
                    },
                )?;
                let actual = dst.len();
                let dst: &mut [u8; 4] = dst.try_into().map_err(|_| {
                    BlockMapperError::TruncatedBlock {
                        expected: 4,
                        actual,
                    }
                })?;
                bgra8::encode_bgra8_pixel(pixel, dst);
                Ok(())
            }
            Self::Bc1 | Self::Bc3 | Self::Rgba16F => {
                Err(BlockMapperError::EncodeUnsupported(self.pixel_format()))
            }
        }
    }
}

fn fixed<const N: usize>(src: &[u8]) -> Result<&[u8; N], BlockMapperError> {
    src.try_into().map_err(|_| BlockMapperError::TruncatedBlock {
        expected: N,
        actual: src.len(),
    })
}

// 4x4 native tiles always land on the canonical tile's origin.
fn paste_tile(block: &mut PreciseBlock, tile: &PreciseBlock, extent: (usize, usize)) {
    let visible_x = extent.0.min(CANONICAL_BLOCK_SIDE);
    let visible_y = extent.1.min(CANONICAL_BLOCK_SIDE);
    for y in 0..visible_y {
        let row = y * CANONICAL_BLOCK_SIDE;
        block.pixels[row..row + visible_x].copy_from_slice(&tile.pixels[row..row + visible_x]);
    }
}
