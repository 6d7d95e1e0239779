//! Writing textures out as DDS files.

use crate::dds::constants::*;
use crate::error::DdsError;
use endian_writer::{EndianWriter, LittleEndianWriter};
use texture_overlay_codec::Texture;
use texture_overlay_common::pixel_format::PixelFormat;

/// How the pixel format is declared in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeaderKind {
    FourCC(u32),
    Rgb {
        red_mask: u32,
        green_mask: u32,
        blue_mask: u32,
        alpha_mask: u32,
    },
    Dx10(u32),
}

impl HeaderKind {
    fn for_format(format: PixelFormat) -> Option<Self> {
        match format {
            PixelFormat::Dxt1 => Some(Self::FourCC(FOURCC_DXT1)),
            PixelFormat::Dxt3 => Some(Self::FourCC(FOURCC_DXT3)),
            PixelFormat::Dxt5 => Some(Self::FourCC(FOURCC_DXT5)),
            PixelFormat::B8G8R8A8 => Some(Self::Rgb {
                red_mask: BGRA8888_RED_MASK,
                green_mask: BGRA8888_GREEN_MASK,
                blue_mask: BGRA8888_BLUE_MASK,
                alpha_mask: BGRA8888_ALPHA_MASK,
            }),
            PixelFormat::R8G8B8A8 => Some(Self::Rgb {
                red_mask: RGBA8888_RED_MASK,
                green_mask: RGBA8888_GREEN_MASK,
                blue_mask: RGBA8888_BLUE_MASK,
                alpha_mask: RGBA8888_ALPHA_MASK,
            }),
            PixelFormat::FloatRgba => Some(Self::Dx10(DXGI_FORMAT_R16G16B16A16_FLOAT)),
            PixelFormat::Bc7 => Some(Self::Dx10(DXGI_FORMAT_BC7_UNORM)),
            _ => None,
        }
    }

    fn header_size(self) -> usize {
        match self {
            Self::Dx10(_) => DDS_HEADER_SIZE + DX10_HEADER_SIZE,
            _ => DDS_HEADER_SIZE,
        }
    }
}

/// Serializes every mip of `texture` into a DDS file.
///
/// Block compressed formats from the DXT family and 8-bit RGB(A) formats use a legacy header;
/// half-float RGBA and BC7 use a DX10 header. Each mip is locked for reading while it is copied.
///
/// # Errors
///
/// - [`DdsError::UnsupportedFormat`] if the texture's format has no DDS representation here
/// - [`DdsError::Texture`] if a mip cannot be locked or unlocked
///
/// # Examples
///
/// ```
/// use texture_overlay_codec::MemoryTexture;
/// use texture_overlay_common::pixel_format::PixelFormat;
/// use texture_overlay_dds::{load_dds, save_dds};
///
/// let mut texture = MemoryTexture::new("Decal", PixelFormat::B8G8R8A8, 4, 4).unwrap();
/// let bytes = save_dds(&mut texture).unwrap();
///
/// let reloaded = load_dds("Decal", &bytes).unwrap();
/// assert_eq!(reloaded.mip(0), texture.mip(0));
/// ```
pub fn save_dds<T: Texture + ?Sized>(texture: &mut T) -> Result<Vec<u8>, DdsError> {
    let format = texture.pixel_format();
    let kind = HeaderKind::for_format(format).ok_or(DdsError::UnsupportedFormat(format))?;
    let num_mips = texture.num_mips();

    let header_size = kind.header_size();
    let mut output = vec![0u8; header_size];
    write_header(&mut output, &*texture, kind);

    for mip in 0..num_mips {
        let data = texture.lock_mip_read(mip)?;
        output.extend_from_slice(data);
        texture.unlock_mip(mip)?;
    }

    tracing::debug!(
        "Saved {} as DDS ({} mips, {} bytes)",
        texture.name(),
        num_mips,
        output.len()
    );
    Ok(output)
}

fn write_header<T: Texture + ?Sized>(header: &mut [u8], texture: &T, kind: HeaderKind) {
    debug_assert!(header.len() >= kind.header_size());

    let format = texture.pixel_format();
    let info = format.info();
    let width = texture.size_x();
    let height = texture.size_y();
    let num_mips = texture.num_mips() as u32;
    let is_block_compressed = info.block_size_x > 1;

    let mut flags = DDSD_CAPS | DDSD_HEIGHT | DDSD_WIDTH | DDSD_PIXELFORMAT;
    let pitch_or_linear_size = if is_block_compressed {
        flags |= DDSD_LINEARSIZE;
        info.mip_bytes(width, height)
    } else {
        flags |= DDSD_PITCH;
        width * info.block_bytes
    };

    let mut caps = DDSCAPS_TEXTURE;
    if num_mips > 1 {
        flags |= DDSD_MIPMAPCOUNT;
        caps |= DDSCAPS_COMPLEX | DDSCAPS_MIPMAP;
    }

    // SAFETY: header is at least kind.header_size() bytes long; every offset written below
    // lies inside the legacy header, or inside the DX10 extension only for HeaderKind::Dx10.
    let mut writer = unsafe { LittleEndianWriter::new(header.as_mut_ptr()) };
    unsafe {
        writer.write_u32_at(DDS_MAGIC, 0);
        writer.write_u32_at(DDS_HEADER_STRUCT_SIZE, DDS_SIZE_OFFSET as isize);
        writer.write_u32_at(flags, DDS_FLAGS_OFFSET as isize);
        writer.write_u32_at(height as u32, DDS_HEIGHT_OFFSET as isize);
        writer.write_u32_at(width as u32, DDS_WIDTH_OFFSET as isize);
        writer.write_u32_at(
            pitch_or_linear_size as u32,
            DDS_PITCH_OR_LINEAR_SIZE_OFFSET as isize,
        );
        writer.write_u32_at(num_mips, DDS_MIPMAP_COUNT_OFFSET as isize);
        writer.write_u32_at(DDS_PIXELFORMAT_STRUCT_SIZE, DDS_PIXELFORMAT_OFFSET as isize);
        writer.write_u32_at(caps, DDS_CAPS_OFFSET as isize);

        match kind {
            HeaderKind::FourCC(fourcc) => {
                writer.write_u32_at(DDPF_FOURCC, DDS_PIXELFORMAT_FLAGS_OFFSET as isize);
                writer.write_u32_at(fourcc, FOURCC_OFFSET as isize);
            }
            HeaderKind::Rgb {
                red_mask,
                green_mask,
                blue_mask,
                alpha_mask,
            } => {
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
            HeaderKind::Dx10(dxgi_format) => {
                writer.write_u32_at(DDPF_FOURCC, DDS_PIXELFORMAT_FLAGS_OFFSET as isize);
                writer.write_u32_at(FOURCC_DX10, FOURCC_OFFSET as isize);
                writer.write_u32_at(dxgi_format, DX10_FORMAT_OFFSET as isize);
                writer.write_u32_at(
                    DX10_DIMENSION_TEXTURE2D,
                    DX10_RESOURCE_DIMENSION_OFFSET as isize,
                );
                writer.write_u32_at(1, DX10_ARRAY_SIZE_OFFSET as isize);
            }
        }
    }
}
