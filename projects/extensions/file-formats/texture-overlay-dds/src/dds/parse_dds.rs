use super::{constants::*, likely_dds};
use endian_writer::{EndianReader, LittleEndianReader};
use texture_overlay_common::pixel_format::PixelFormat;

/// The information of the DDS file supplied to the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DdsInfo {
    /// Pixel format of every mip. [`PixelFormat::Unknown`] if the header names a format
    /// this crate does not know.
    pub format: PixelFormat,
    /// Width of mip 0 in pixels.
    pub width: u32,
    /// Height of mip 0 in pixels.
    pub height: u32,
    /// Number of mips stored in the file, at least 1.
    pub mip_count: u32,
    /// Offset of the first mip's data from the start of the file.
    pub data_offset: usize,
}

/// Attempts to parse the header of a DDS file from the given slice.
///
/// # Return
///
/// `None` if the data does not start with the DDS magic, or if the length is insufficient
/// to read the headers.
///
/// Otherwise, a [`DdsInfo`]. For DX10 headers, the `DXGI_FORMAT` field determines the format;
/// for legacy headers, the FOURCC or the RGB bit masks do.
#[inline]
pub fn parse_dds(data: &[u8]) -> Option<DdsInfo> {
    if !likely_dds(data) {
        return None;
    }

    // SAFETY: likely_dds checked data.len() >= DDS_HEADER_SIZE (128), every header field read
    // below lies inside it.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    let fourcc = unsafe { reader.read_u32_at(FOURCC_OFFSET as isize) };

    let (format, data_offset) = if fourcc == FOURCC_DX10 {
        // DX10 header present, ensure the data is long enough.
        if data.len() < DDS_HEADER_SIZE + DX10_HEADER_SIZE {
            return None;
        }

        // SAFETY: We checked data.len() >= DDS_HEADER_SIZE + DX10_HEADER_SIZE (148),
        // so DX10_FORMAT_OFFSET (0x80) + 4 is safe
        let dxgi_format = unsafe { reader.read_u32_at(DX10_FORMAT_OFFSET as isize) };
        (
            dxgi_to_pixel_format(dxgi_format),
            DDS_HEADER_SIZE + DX10_HEADER_SIZE,
        )
    } else {
        let pixel_flags = unsafe { reader.read_u32_at(DDS_PIXELFORMAT_FLAGS_OFFSET as isize) };

        let format = if (pixel_flags & DDPF_FOURCC) != 0 {
            match fourcc {
                FOURCC_DXT1 => PixelFormat::Dxt1,
                FOURCC_DXT3 => PixelFormat::Dxt3,
                FOURCC_DXT5 => PixelFormat::Dxt5,
                FOURCC_A16B16G16R16F => PixelFormat::FloatRgba,
                _ => PixelFormat::Unknown,
            }
        } else if (pixel_flags & DDPF_RGB) != 0 {
            detect_uncompressed_format(data, pixel_flags)
        } else {
            // Other formats (YUV, Luminance, Alpha-only, etc.) are not supported
            PixelFormat::Unknown
        };

        (format, DDS_HEADER_SIZE)
    };

    let flags = unsafe { reader.read_u32_at(DDS_FLAGS_OFFSET as isize) };
    let height = unsafe { reader.read_u32_at(DDS_HEIGHT_OFFSET as isize) };
    let width = unsafe { reader.read_u32_at(DDS_WIDTH_OFFSET as isize) };
    let raw_mip_count = unsafe { reader.read_u32_at(DDS_MIPMAP_COUNT_OFFSET as isize) };

    let mip_count = if (flags & DDSD_MIPMAPCOUNT) != 0 {
        raw_mip_count.max(1)
    } else {
        1
    };

    Some(DdsInfo {
        format,
        width,
        height,
        mip_count,
        data_offset,
    })
}

fn dxgi_to_pixel_format(dxgi_format: u32) -> PixelFormat {
    match dxgi_format {
        DXGI_FORMAT_BC1_TYPELESS | DXGI_FORMAT_BC1_UNORM | DXGI_FORMAT_BC1_UNORM_SRGB => {
            PixelFormat::Dxt1
        }
        DXGI_FORMAT_BC2_TYPELESS | DXGI_FORMAT_BC2_UNORM | DXGI_FORMAT_BC2_UNORM_SRGB => {
            PixelFormat::Dxt3
        }
        DXGI_FORMAT_BC3_TYPELESS | DXGI_FORMAT_BC3_UNORM | DXGI_FORMAT_BC3_UNORM_SRGB => {
            PixelFormat::Dxt5
        }
        DXGI_FORMAT_BC7_TYPELESS | DXGI_FORMAT_BC7_UNORM | DXGI_FORMAT_BC7_UNORM_SRGB => {
            PixelFormat::Bc7
        }
        DXGI_FORMAT_R8G8B8A8_TYPELESS
        | DXGI_FORMAT_R8G8B8A8_UNORM
        | DXGI_FORMAT_R8G8B8A8_UNORM_SRGB => PixelFormat::R8G8B8A8,
        DXGI_FORMAT_B8G8R8A8_UNORM
        | DXGI_FORMAT_B8G8R8A8_TYPELESS
        | DXGI_FORMAT_B8G8R8A8_UNORM_SRGB => PixelFormat::B8G8R8A8,
        DXGI_FORMAT_R16G16B16A16_TYPELESS | DXGI_FORMAT_R16G16B16A16_FLOAT => {
            PixelFormat::FloatRgba
        }
        _ => PixelFormat::Unknown,
    }
}

/// Detects uncompressed DDS format by examining bit masks and bit count
///
/// # Preconditions
///
/// The DDPF_RGB flag has already been checked by the caller, and `data` holds a full header.
fn detect_uncompressed_format(data: &[u8], pixel_flags: u32) -> PixelFormat {
    // SAFETY: all offsets lie inside the 128 byte header the caller validated.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    let (rgb_bit_count, r_mask, g_mask, b_mask, a_mask) = unsafe {
        (
            reader.read_u32_at(DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET as isize),
            reader.read_u32_at(DDS_PIXELFORMAT_RBITMASK_OFFSET as isize),
            reader.read_u32_at(DDS_PIXELFORMAT_GBITMASK_OFFSET as isize),
            reader.read_u32_at(DDS_PIXELFORMAT_BBITMASK_OFFSET as isize),
            reader.read_u32_at(DDS_PIXELFORMAT_ABITMASK_OFFSET as isize),
        )
    };

    // Only 32-bit formats with an alpha channel are read.
    if rgb_bit_count != 32 || (pixel_flags & DDPF_ALPHAPIXELS) == 0 {
        return PixelFormat::Unknown;
    }

    match (r_mask, g_mask, b_mask, a_mask) {
        (RGBA8888_RED_MASK, RGBA8888_GREEN_MASK, RGBA8888_BLUE_MASK, RGBA8888_ALPHA_MASK) => {
            PixelFormat::R8G8B8A8
        }
        (BGRA8888_RED_MASK, BGRA8888_GREEN_MASK, BGRA8888_BLUE_MASK, BGRA8888_ALPHA_MASK) => {
            PixelFormat::B8G8R8A8
        }
        _ => PixelFormat::Unknown,
    }
}
