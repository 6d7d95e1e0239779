//! Common test imports and utilities for DDS tests
#![allow(unused_imports)]

pub use alloc::{vec, vec::Vec};
extern crate alloc;

// External crates commonly used in tests
pub use rstest::rstest;

pub use texture_overlay_codec::MemoryTexture;
pub use texture_overlay_common::pixel_format::PixelFormat;

use crate::dds::constants::*;
use endian_writer::{EndianWriter, LittleEndianWriter};

/// Whether `format` is written with a DX10 header by [`create_dds`].
fn uses_dx10_header(format: PixelFormat) -> bool {
    matches!(format, PixelFormat::Bc7 | PixelFormat::FloatRgba)
}

/// Size of the headers [`create_dds`] writes for `format`.
pub fn header_size(format: PixelFormat) -> usize {
    if uses_dx10_header(format) {
        DDS_HEADER_SIZE + DX10_HEADER_SIZE
    } else {
        DDS_HEADER_SIZE
    }
}

/// Total bytes of a mip chain starting at `width` x `height`.
fn mip_chain_length(format: PixelFormat, width: u32, height: u32, mipmap_count: u32) -> usize {
    let info = format.info();
    let (mut mip_x, mut mip_y) = (width as usize, height as usize);
    let mut total = 0;
    for _ in 0..mipmap_count {
        total += info.mip_bytes(mip_x, mip_y);
        mip_x = (mip_x / 2).max(1);
        mip_y = (mip_y / 2).max(1);
    }
    total
}

/// Helper function to create a basic DDS header with common fields
fn create_dds_header_base(data: &mut [u8], width: u32, height: u32, mipmap_count: u32) {
    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };

    unsafe {
        writer.write_u32_at(DDS_MAGIC, 0);
        writer.write_u32_at(DDS_HEADER_STRUCT_SIZE, DDS_SIZE_OFFSET as isize);

        let mut flags = DDSD_CAPS | DDSD_HEIGHT | DDSD_WIDTH | DDSD_PIXELFORMAT | DDSD_LINEARSIZE;
        if mipmap_count > 1 {
            flags |= DDSD_MIPMAPCOUNT;
        }
        writer.write_u32_at(flags, DDS_FLAGS_OFFSET as isize);

        writer.write_u32_at(height, DDS_HEIGHT_OFFSET as isize);
        writer.write_u32_at(width, DDS_WIDTH_OFFSET as isize);

        if mipmap_count > 1 {
            writer.write_u32_at(mipmap_count, DDS_MIPMAP_COUNT_OFFSET as isize);
        }
    }
}

/// Helper function to write pixel format flags for FOURCC-based formats
fn write_fourcc_pixel_format(data: &mut [u8], fourcc: &[u8; 4]) {
    data[FOURCC_OFFSET..FOURCC_OFFSET + 4].copy_from_slice(fourcc);
    unsafe {
        let mut writer = LittleEndianWriter::new(data.as_mut_ptr());
        writer.write_u32_at(DDPF_FOURCC, DDS_PIXELFORMAT_FLAGS_OFFSET as isize);
    }
}

/// Helper function to write DX10 format information
fn write_dx10_format(data: &mut [u8], dxgi_format: u32) {
    data[FOURCC_OFFSET..FOURCC_OFFSET + 4].copy_from_slice(b"DX10");
    unsafe {
        let mut writer = LittleEndianWriter::new(data.as_mut_ptr());
        writer.write_u32_at(DDPF_FOURCC, DDS_PIXELFORMAT_FLAGS_OFFSET as isize);
        writer.write_u32_at(dxgi_format, DX10_FORMAT_OFFSET as isize);
    }
}

/// Helper function to write uncompressed pixel format information
fn write_uncompressed_pixel_format(
    data: &mut [u8],
    red_mask: u32,
    green_mask: u32,
    blue_mask: u32,
    alpha_mask: u32,
) {
    unsafe {
        let mut writer = LittleEndianWriter::new(data.as_mut_ptr());
        writer.write_u32_at(
            DDPF_RGB | DDPF_ALPHAPIXELS,
            DDS_PIXELFORMAT_FLAGS_OFFSET as isize,
        );
        writer.write_u32_at(32, DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET as isize);
        writer.write_u32_at(red_mask, DDS_PIXELFORMAT_RBITMASK_OFFSET as isize);
        writer.write_u32_at(green_mask, DDS_PIXELFORMAT_GBITMASK_OFFSET as isize);
        writer.write_u32_at(blue_mask, DDS_PIXELFORMAT_BBITMASK_OFFSET as isize);
        writer.write_u32_at(alpha_mask, DDS_PIXELFORMAT_ABITMASK_OFFSET as isize);
    }
}

/// Creates a DDS file of `format` whose mip data is a repeating byte pattern.
///
/// Formats without a DDS representation get an unrecognised FOURCC.
pub fn create_dds(format: PixelFormat, width: u32, height: u32, mipmap_count: u32) -> Vec<u8> {
    let header_size = header_size(format);
    let data_size = mip_chain_length(format, width, height, mipmap_count);
    let mut data = vec![0u8; header_size + data_size];

    create_dds_header_base(&mut data, width, height, mipmap_count);

    match format {
        PixelFormat::Dxt1 => write_fourcc_pixel_format(&mut data, b"DXT1"),
        PixelFormat::Dxt3 => write_fourcc_pixel_format(&mut data, b"DXT3"),
        PixelFormat::Dxt5 => write_fourcc_pixel_format(&mut data, b"DXT5"),
        PixelFormat::Bc7 => write_dx10_format(&mut data, DXGI_FORMAT_BC7_UNORM),
        PixelFormat::FloatRgba => write_dx10_format(&mut data, DXGI_FORMAT_R16G16B16A16_FLOAT),
        PixelFormat::R8G8B8A8 => write_uncompressed_pixel_format(
            &mut data,
            RGBA8888_RED_MASK,
            RGBA8888_GREEN_MASK,
            RGBA8888_BLUE_MASK,
            RGBA8888_ALPHA_MASK,
        ),
        PixelFormat::B8G8R8A8 => write_uncompressed_pixel_format(
            &mut data,
            BGRA8888_RED_MASK,
            BGRA8888_GREEN_MASK,
            BGRA8888_BLUE_MASK,
            BGRA8888_ALPHA_MASK,
        ),
        _ => write_fourcc_pixel_format(&mut data, b"UNKN"),
    }

    // Fill texture data area with test pattern
    #[allow(clippy::needless_range_loop)]
    for x in header_size..data.len() {
        data[x] = ((x - header_size) % 251) as u8;
    }

    data
}

/// Builds a square texture with one mip per entry of `sides`, each filled with a byte pattern.
pub fn patterned_texture(name: &str, format: PixelFormat, sides: &[usize]) -> MemoryTexture {
    let mut texture = MemoryTexture::empty(name, format, sides[0], sides[0]).unwrap();
    for (mip, &side) in sides.iter().enumerate() {
        let bytes = format.info().mip_bytes(side, side);
        let data = (0..bytes).map(|x| (x * 7 + mip) as u8).collect();
        texture.push_mip(side, side, data).unwrap();
    }
    texture
}
