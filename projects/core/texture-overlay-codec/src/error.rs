//! Error types for texture access and block mapping.

use texture_overlay_common::pixel_format::PixelFormat;
use thiserror::Error;

/// Errors reported by a [`Texture`](crate::texture::Texture) host.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextureError {
    /// The requested mip does not exist.
    #[error("Mip {mip} is out of range, the texture has {num_mips} mips")]
    MipOutOfRange { mip: usize, num_mips: usize },

    /// The mip's data is already locked.
    #[error("Mip {mip} is already locked")]
    AlreadyLocked { mip: usize },

    /// An unlock was requested for a mip that is not locked.
    #[error("Mip {mip} is not locked")]
    NotLocked { mip: usize },

    /// A mip buffer does not match the size its dimensions and format require.
    #[error("Mip {mip} holds {actual} bytes, but {expected} bytes are required")]
    InvalidMipData {
        mip: usize,
        expected: usize,
        actual: usize,
    },

    /// A texture or mip was created with unusable dimensions.
    #[error("Invalid dimensions {size_x} x {size_y} for {format}")]
    InvalidDimensions {
        size_x: usize,
        size_y: usize,
        format: PixelFormat,
    },
}

/// Errors that can occur while opening, reading or writing a mip through a
/// [`BlockMapper`](crate::block_mapper::BlockMapper).
///
/// These all indicate a bug in the caller or broken content, rather than a condition to recover from.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BlockMapperError {
    /// No block codec exists for the texture's pixel format.
    #[error("Unsupported format {format}, cannot create a block mapper for texture {texture}")]
    UnsupportedFormat { format: PixelFormat, texture: String },

    /// The requested mip is not resident.
    #[error("Requested mip {requested}, but texture {texture} only has {available} mips")]
    MipOutOfRange {
        texture: String,
        requested: usize,
        available: usize,
    },

    /// The format can be read, but not written.
    #[error("Encoding is unimplemented for {0}")]
    EncodeUnsupported(PixelFormat),

    /// Native blocks of this format do not tile the canonical 4x4 block evenly.
    #[error("{format} has {block_side} pixel blocks, which do not evenly divide the canonical block")]
    IndivisibleBlockSide { format: PixelFormat, block_side: usize },

    /// Block coordinates were not aligned to the canonical block side.
    #[error("Block coordinates ({x}, {y}) are not aligned to the canonical block side")]
    UnalignedCoordinates { x: usize, y: usize },

    /// Block coordinates lie outside the mip.
    #[error("Block coordinates ({x}, {y}) lie outside the {size_x} x {size_y} mip")]
    CoordinatesOutOfMip {
        x: usize,
        y: usize,
        size_x: usize,
        size_y: usize,
    },

    /// A native block lies past the end of the mip's data.
    #[error("Native block {index} lies outside the mip data ({mip_bytes} bytes)")]
    BlockOutOfBounds { index: usize, mip_bytes: usize },

    /// A native block slice had the wrong length.
    #[error("Native block holds {actual} bytes, but {expected} bytes are required")]
    TruncatedBlock { expected: usize, actual: usize },

    /// The texture host reported an error.
    #[error("Texture error: {0}")]
    Texture(#[from] TextureError),
}
