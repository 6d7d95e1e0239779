//! Reading DDS files into [`MemoryTexture`]s.

use crate::dds::parse_dds;
use crate::error::DdsError;
use texture_overlay_codec::{MemoryTexture, TextureError};
use texture_overlay_common::pixel_format::PixelFormat;

/// Loads a DDS file into a [`MemoryTexture`] named `name`.
///
/// Every mip the header declares is copied out of `data`; each mip halves the previous
/// one's dimensions, down to a minimum of 1 pixel.
///
/// # Errors
///
/// - [`DdsError::NotADds`] if `data` does not start with a DDS header
/// - [`DdsError::UnsupportedFormat`] if the header names a format this crate does not know
/// - [`DdsError::Truncated`] if `data` ends before the last declared mip
/// - [`DdsError::Texture`] if the header declares a zero width or height, or one whose mip
///   size does not fit in memory
pub fn load_dds(name: &str, data: &[u8]) -> Result<MemoryTexture, DdsError> {
    let info = parse_dds(data).ok_or(DdsError::NotADds)?;
    if info.format == PixelFormat::Unknown {
        return Err(DdsError::UnsupportedFormat(info.format));
    }

    let width = info.width as usize;
    let height = info.height as usize;
    let format_info = info.format.info();
    let mut texture = MemoryTexture::empty(name, info.format, width, height)?;

    let mut offset = info.data_offset;
    let (mut mip_x, mut mip_y) = (width, height);
    for _ in 0..info.mip_count {
        let length = format_info.checked_mip_bytes(mip_x, mip_y).ok_or(
            TextureError::InvalidDimensions {
                size_x: mip_x,
                size_y: mip_y,
                format: info.format,
            },
        )?;
        let end = offset.checked_add(length).ok_or(DdsError::Truncated {
            expected: usize::MAX,
            actual: data.len(),
        })?;
        let mip_data = data.get(offset..end).ok_or(DdsError::Truncated {
            expected: end,
            actual: data.len(),
        })?;

        texture.push_mip(mip_x, mip_y, mip_data.to_vec())?;
        offset = end;
        mip_x = (mip_x / 2).max(1);
        mip_y = (mip_y / 2).max(1);
    }

    if offset < data.len() {
        tracing::debug!(
            "DDS {} has {} trailing bytes after its last mip",
            name,
            data.len() - offset
        );
    }

    tracing::debug!(
        "Loaded DDS {} ({}x{}, {}, {} mips)",
        name,
        width,
        height,
        info.format,
        info.mip_count
    );
    Ok(texture)
}
