//! # Block mapper
//!
//! Gives access to one mip of a [`Texture`] as a grid of canonical 4x4 [`PreciseBlock`]s,
//! whatever the texture's native block size is.
//!
//! Opening a mapper pins the texture in memory: every mip is forced resident, pending streaming
//! is waited on, and the mip's discardable bulk-data flags are cleared so its payload survives
//! being locked. Dropping the mapper restores the original flags and drops the residency request.
//!
//! Each [`BlockMapper::read_block`] or [`BlockMapper::write_block`] call locks the mip only for
//! the duration of the call.
//!
//! ```
//! use texture_overlay_codec::{BlockMapper, MemoryTexture};
//! use texture_overlay_common::pixel_format::PixelFormat;
//! use texture_overlay_common::precise_block::PreciseBlock;
//! use texture_overlay_common::precise_color::PreciseColor;
//!
//! let mut texture = MemoryTexture::new("Canvas", PixelFormat::B8G8R8A8, 8, 8).unwrap();
//! let mut mapper = BlockMapper::open(&mut texture, 0).unwrap();
//!
//! let red = PreciseBlock::new(PreciseColor::opaque(1.0, 0.0, 0.0));
//! mapper.write_block(4, 4, &red).unwrap();
//! assert_eq!(mapper.read_block(4, 4).unwrap(), red);
//! ```

use crate::error::{BlockMapperError, TextureError};
use crate::formats::NativeFormat;
use crate::texture::{BulkDataFlags, Texture};
use core::ops::Range;
use texture_overlay_common::precise_block::{PreciseBlock, CANONICAL_BLOCK_SIDE};

/// How long, in seconds, an open mapper asks the host to keep the texture resident.
pub const FORCE_RESIDENT_SECONDS: f32 = 3600.0;

/// Block addressing for one mip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MipLayout {
    format: NativeFormat,
    size_x: usize,
    size_y: usize,
    blocks_per_row: usize,
}

impl MipLayout {
    fn new(format: NativeFormat, size_x: usize, size_y: usize) -> Self {
        Self {
            format,
            size_x,
            size_y,
            blocks_per_row: size_x.div_ceil(format.block_side()),
        }
    }

    fn check_coordinates(&self, x: usize, y: usize) -> Result<(), BlockMapperError> {
        if x % CANONICAL_BLOCK_SIDE != 0 || y % CANONICAL_BLOCK_SIDE != 0 {
            return Err(BlockMapperError::UnalignedCoordinates { x, y });
        }
        if x >= self.size_x || y >= self.size_y {
            return Err(BlockMapperError::CoordinatesOutOfMip {
                x,
                y,
                size_x: self.size_x,
                size_y: self.size_y,
            });
        }
        Ok(())
    }

    /// Native block cells of the canonical block at (`x`, `y`) that lie inside the mip,
    /// as offsets inside the canonical block.
    fn cells(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
        let side = self.format.block_side();
        let (size_x, size_y) = (self.size_x, self.size_y);
        (0..CANONICAL_BLOCK_SIDE)
            .step_by(side)
            .flat_map(move |by| {
                (0..CANONICAL_BLOCK_SIDE)
                    .step_by(side)
                    .map(move |bx| (bx, by))
            })
            .filter(move |&(bx, by)| x + bx < size_x && y + by < size_y)
    }

    /// Byte range of the native block covering pixel (`px`, `py`).
    fn block_range(
        &self,
        px: usize,
        py: usize,
        mip_bytes: usize,
    ) -> Result<Range<usize>, BlockMapperError> {
        let side = self.format.block_side();
        let index = (py / side) * self.blocks_per_row + px / side;
        let start = index * self.format.block_bytes();
        let end = start + self.format.block_bytes();
        if end > mip_bytes {
            return Err(BlockMapperError::BlockOutOfBounds { index, mip_bytes });
        }
        Ok(start..end)
    }

    fn decode(&self, data: &[u8], x: usize, y: usize) -> Result<PreciseBlock, BlockMapperError> {
        let mut block = PreciseBlock::default();
        let extent = (self.size_x - x, self.size_y - y);
        for (bx, by) in self.cells(x, y) {
            let range = self.block_range(x + bx, y + by, data.len())?;
            self.format.decode_into(&data[range], &mut block, bx, by, extent)?;
        }
        Ok(block)
    }

    fn encode(
        &self,
        block: &PreciseBlock,
        data: &mut [u8],
        x: usize,
        y: usize,
    ) -> Result<(), BlockMapperError> {
        for (bx, by) in self.cells(x, y) {
            let range = self.block_range(x + bx, y + by, data.len())?;
            self.format.encode_from(block, bx, by, &mut data[range])?;
        }
        Ok(())
    }
}

/// A mip of a texture opened for block access.
///
/// The mapper borrows the texture mutably for its whole lifetime, so no other code can touch
/// the texture while its flags are modified.
pub struct BlockMapper<'t, T: Texture + ?Sized> {
    texture: &'t mut T,
    mip: usize,
    layout: MipLayout,
    original_flags: BulkDataFlags,
}

impl<'t, T: Texture + ?Sized> BlockMapper<'t, T> {
    /// Opens `mip` of `texture`.
    ///
    /// # Errors
    ///
    /// - [`BlockMapperError::UnsupportedFormat`] if the texture's format has no codec.
    /// - [`BlockMapperError::MipOutOfRange`] if `mip` is not resident.
    /// - [`BlockMapperError::IndivisibleBlockSide`] if the format's blocks do not tile a 4x4 block.
    /// - [`BlockMapperError::Texture`] if the host fails to report or update the mip's flags.
    pub fn open(texture: &'t mut T, mip: usize) -> Result<Self, BlockMapperError> {
        let format = NativeFormat::from_pixel_format(texture.pixel_format()).ok_or_else(|| {
            BlockMapperError::UnsupportedFormat {
                format: texture.pixel_format(),
                texture: texture.name().to_owned(),
            }
        })?;

        let available = texture.num_resident_mips();
        let dimensions = texture
            .mip_dimensions(mip)
            .filter(|_| mip < available)
            .ok_or_else(|| BlockMapperError::MipOutOfRange {
                texture: texture.name().to_owned(),
                requested: mip,
                available,
            })?;

        let block_side = format.block_side();
        if CANONICAL_BLOCK_SIDE % block_side != 0 {
            return Err(BlockMapperError::IndivisibleBlockSide {
                format: format.pixel_format(),
                block_side,
            });
        }

        texture.force_mip_levels_resident(FORCE_RESIDENT_SECONDS);
        texture.wait_for_streaming();

        let original_flags = match clear_discardable(texture, mip) {
            Ok(flags) => flags,
            Err(err) => {
                texture.force_mip_levels_resident(0.0);
                return Err(err.into());
            }
        };

        tracing::debug!(
            "Opened mip {} ({}x{}) of {} as {:?}",
            mip,
            dimensions.width,
            dimensions.height,
            texture.name(),
            format
        );

        Ok(Self {
            texture,
            mip,
            layout: MipLayout::new(format, dimensions.width, dimensions.height),
            original_flags,
        })
    }

    /// The opened mip.
    pub fn mip(&self) -> usize {
        self.mip
    }

    /// Codec used for the mip.
    pub fn format(&self) -> NativeFormat {
        self.layout.format
    }

    /// Width of the opened mip in pixels.
    pub fn size_x(&self) -> usize {
        self.layout.size_x
    }

    /// Height of the opened mip in pixels.
    pub fn size_y(&self) -> usize {
        self.layout.size_y
    }

    /// Decodes the 4x4 block whose top left pixel is (`x`, `y`).
    ///
    /// Pixels past the edge of the mip read as transparent black.
    pub fn read_block(&mut self, x: usize, y: usize) -> Result<PreciseBlock, BlockMapperError> {
        self.layout.check_coordinates(x, y)?;

        let layout = self.layout;
        let data = self.texture.lock_mip_read(self.mip)?;
        let result = layout.decode(data, x, y);
        self.texture.unlock_mip(self.mip)?;
        result
    }

    /// Encodes `block` over the 4x4 block whose top left pixel is (`x`, `y`).
    ///
    /// Pixels past the edge of the mip are discarded.
    pub fn write_block(
        &mut self,
        x: usize,
        y: usize,
        block: &PreciseBlock,
    ) -> Result<(), BlockMapperError> {
        let format = self.layout.format;
        if !format.has_encoder() {
            return Err(BlockMapperError::EncodeUnsupported(format.pixel_format()));
        }
        self.layout.check_coordinates(x, y)?;

        let layout = self.layout;
        let data = self.texture.lock_mip_write(self.mip)?;
        let result = layout.encode(block, data, x, y);
        self.texture.unlock_mip(self.mip)?;
        result
    }
}

impl<T: Texture + ?Sized> Drop for BlockMapper<'_, T> {
    fn drop(&mut self) {
        if let Err(err) = self
            .texture
            .set_bulk_data_flags(self.mip, self.original_flags)
        {
            tracing::warn!(
                "Failed to restore bulk data flags of mip {} of {}: {}",
                self.mip,
                self.texture.name(),
                err
            );
        }
        self.texture.force_mip_levels_resident(0.0);
    }
}

fn clear_discardable<T: Texture + ?Sized>(
    texture: &mut T,
    mip: usize,
) -> Result<BulkDataFlags, TextureError> {
    let flags = texture.bulk_data_flags(mip)?;
    texture.set_bulk_data_flags(mip, flags - BulkDataFlags::DISCARDABLE)?;
    Ok(flags)
}
