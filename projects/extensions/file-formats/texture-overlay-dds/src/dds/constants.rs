//! DDS format constants and definitions

/// Magic header for DDS files
pub(crate) const DDS_MAGIC: u32 = 0x44445320_u32.to_be();

/// Offset of the FOURCC header used in DX9 and below.
pub(crate) const FOURCC_OFFSET: usize = 0x54;

pub(crate) const FOURCC_DXT1: u32 = 0x31545844_u32.to_le(); // 'DXT1'
pub(crate) const FOURCC_DXT3: u32 = 0x33545844_u32.to_le(); // 'DXT3'
pub(crate) const FOURCC_DXT5: u32 = 0x35545844_u32.to_le(); // 'DXT5'
pub(crate) const FOURCC_DX10: u32 = 0x30315844_u32.to_le(); // 'DX10'

/// D3DFMT_A16B16G16R16F, stored as a plain number in the FOURCC field.
pub(crate) const FOURCC_A16B16G16R16F: u32 = 113_u32.to_le();

/// Offset of the DXGI format header used in DX10 and above.
pub(crate) const DX10_FORMAT_OFFSET: usize = 0x80;
pub(crate) const DX10_RESOURCE_DIMENSION_OFFSET: usize = 0x84;
pub(crate) const DX10_ARRAY_SIZE_OFFSET: usize = 0x8C;

/// D3D10_RESOURCE_DIMENSION_TEXTURE2D
pub(crate) const DX10_DIMENSION_TEXTURE2D: u32 = 3;

// DXGI format constants for DX10 header
pub(crate) const DXGI_FORMAT_R16G16B16A16_TYPELESS: u32 = 9_u32.to_le();
pub(crate) const DXGI_FORMAT_R16G16B16A16_FLOAT: u32 = 10_u32.to_le();

pub(crate) const DXGI_FORMAT_R8G8B8A8_TYPELESS: u32 = 27_u32.to_le();
pub(crate) const DXGI_FORMAT_R8G8B8A8_UNORM: u32 = 28_u32.to_le();
pub(crate) const DXGI_FORMAT_R8G8B8A8_UNORM_SRGB: u32 = 29_u32.to_le();

pub(crate) const DXGI_FORMAT_BC1_TYPELESS: u32 = 70_u32.to_le();
pub(crate) const DXGI_FORMAT_BC1_UNORM: u32 = 71_u32.to_le();
pub(crate) const DXGI_FORMAT_BC1_UNORM_SRGB: u32 = 72_u32.to_le();

pub(crate) const DXGI_FORMAT_BC2_TYPELESS: u32 = 73_u32.to_le();
pub(crate) const DXGI_FORMAT_BC2_UNORM: u32 = 74_u32.to_le();
pub(crate) const DXGI_FORMAT_BC2_UNORM_SRGB: u32 = 75_u32.to_le();

pub(crate) const DXGI_FORMAT_BC3_TYPELESS: u32 = 76_u32.to_le();
pub(crate) const DXGI_FORMAT_BC3_UNORM: u32 = 77_u32.to_le();
pub(crate) const DXGI_FORMAT_BC3_UNORM_SRGB: u32 = 78_u32.to_le();

pub(crate) const DXGI_FORMAT_B8G8R8A8_UNORM: u32 = 87_u32.to_le();
pub(crate) const DXGI_FORMAT_B8G8R8A8_TYPELESS: u32 = 90_u32.to_le();
pub(crate) const DXGI_FORMAT_B8G8R8A8_UNORM_SRGB: u32 = 91_u32.to_le();

pub(crate) const DXGI_FORMAT_BC7_TYPELESS: u32 = 97_u32.to_le();
pub(crate) const DXGI_FORMAT_BC7_UNORM: u32 = 98_u32.to_le();
pub(crate) const DXGI_FORMAT_BC7_UNORM_SRGB: u32 = 99_u32.to_le();

// Size of the regular DDS header
pub(crate) const DDS_HEADER_SIZE: usize = 0x80;
pub(crate) const DX10_HEADER_SIZE: usize = 20;

/// Value of the `dwSize` field; the header minus the magic.
pub(crate) const DDS_HEADER_STRUCT_SIZE: u32 = 124;
/// Value of the `ddspf.dwSize` field.
pub(crate) const DDS_PIXELFORMAT_STRUCT_SIZE: u32 = 32;

// DDS header field offsets
pub(crate) const DDS_SIZE_OFFSET: usize = 0x04;
pub(crate) const DDS_FLAGS_OFFSET: usize = 0x08;
pub(crate) const DDS_HEIGHT_OFFSET: usize = 0x0C;
pub(crate) const DDS_WIDTH_OFFSET: usize = 0x10;
pub(crate) const DDS_PITCH_OR_LINEAR_SIZE_OFFSET: usize = 0x14;
pub(crate) const DDS_MIPMAP_COUNT_OFFSET: usize = 0x1C;
pub(crate) const DDS_CAPS_OFFSET: usize = 0x6C;

// DDS pixel format offsets (within the 32-byte DDSPIXELFORMAT structure at offset 0x4C)
pub(crate) const DDS_PIXELFORMAT_OFFSET: usize = 0x4C;
pub(crate) const DDS_PIXELFORMAT_FLAGS_OFFSET: usize = 0x50;
pub(crate) const DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET: usize = 0x58;
pub(crate) const DDS_PIXELFORMAT_RBITMASK_OFFSET: usize = 0x5C;
pub(crate) const DDS_PIXELFORMAT_GBITMASK_OFFSET: usize = 0x60;
pub(crate) const DDS_PIXELFORMAT_BBITMASK_OFFSET: usize = 0x64;
pub(crate) const DDS_PIXELFORMAT_ABITMASK_OFFSET: usize = 0x68;

// DDS header flags
pub(crate) const DDSD_CAPS: u32 = 0x1;
pub(crate) const DDSD_HEIGHT: u32 = 0x2;
pub(crate) const DDSD_WIDTH: u32 = 0x4;
pub(crate) const DDSD_PITCH: u32 = 0x8;
pub(crate) const DDSD_PIXELFORMAT: u32 = 0x1000;
pub(crate) const DDSD_MIPMAPCOUNT: u32 = 0x20000;
pub(crate) const DDSD_LINEARSIZE: u32 = 0x80000;

// DDS caps
pub(crate) const DDSCAPS_COMPLEX: u32 = 0x8;
pub(crate) const DDSCAPS_TEXTURE: u32 = 0x1000;
pub(crate) const DDSCAPS_MIPMAP: u32 = 0x400000;

// DDS pixel format flags
pub(crate) const DDPF_ALPHAPIXELS: u32 = 0x1;
pub(crate) const DDPF_FOURCC: u32 = 0x4;
pub(crate) const DDPF_RGB: u32 = 0x40;

// R8G8B8A8_UNORM: R=byte0, G=byte1, B=byte2, A=byte3 (0xAABBGGRR)
pub(crate) const RGBA8888_RED_MASK: u32 = 0x000000FF;
pub(crate) const RGBA8888_GREEN_MASK: u32 = 0x0000FF00;
pub(crate) const RGBA8888_BLUE_MASK: u32 = 0x00FF0000;
pub(crate) const RGBA8888_ALPHA_MASK: u32 = 0xFF000000;

// B8G8R8A8_UNORM: R=byte2, G=byte1, B=byte0, A=byte3 (0xAARRGGBB)
pub(crate) const BGRA8888_RED_MASK: u32 = 0x00FF0000;
pub(crate) const BGRA8888_GREEN_MASK: u32 = 0x0000FF00;
pub(crate) const BGRA8888_BLUE_MASK: u32 = 0x000000FF;
pub(crate) const BGRA8888_ALPHA_MASK: u32 = 0xFF000000;
