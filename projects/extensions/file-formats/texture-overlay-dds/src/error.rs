//! Errors of the DDS loader and writer.

use texture_overlay_codec::TextureError;
use texture_overlay_common::pixel_format::PixelFormat;
use thiserror::Error;

/// An error that occurred while loading or saving a DDS file.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DdsError {
    /// The data does not start with a DDS header.
    #[error("Data is not a DDS file")]
    NotADds,

    /// The file is a DDS, but its pixel format is not one this crate knows.
    #[error("Unsupported DDS pixel format {0}")]
    UnsupportedFormat(PixelFormat),

    /// The file ends before all of its mips.
    #[error("DDS data is truncated: {expected} bytes needed, {actual} available")]
    Truncated { expected: usize, actual: usize },

    /// The texture host reported an error.
    #[error("Texture error: {0}")]
    Texture(#[from] TextureError),
}
