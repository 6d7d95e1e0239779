//! Common test imports and utilities for the compositor.
#![allow(unused_imports)]

// External crates commonly used in tests
pub use rstest::rstest;

pub use crate::apply::{apply_binary_op, apply_binary_op_with_settings, Composite, OUTPUT_FORMAT};
pub use crate::compatibility::{are_textures_compatible, is_format_supported, is_pow2_square};
pub use crate::error::CompositeError;
pub use crate::mip_match::{choose_compatible_mips, MipMatch, MipMatchError};
pub use crate::operators::{overlay_blocks, overlay_textures};
pub use crate::settings::{CompositorSettings, CompositorSettingsBuilder};

pub use texture_overlay_codec::{
    BulkDataFlags, MemoryTexture, MipDimensions, Texture, TransientTexture,
};
pub use texture_overlay_common::color_8888::Color8888;
pub use texture_overlay_common::pixel_format::PixelFormat;
pub use texture_overlay_common::precise_block::PreciseBlock;
pub use texture_overlay_common::precise_color::PreciseColor;

/// Builds a square texture with one zero filled mip per entry of `sides`.
pub fn texture_with_mips(name: &str, format: PixelFormat, sides: &[usize]) -> MemoryTexture {
    let mut texture = MemoryTexture::empty(name, format, sides[0], sides[0]).unwrap();
    for &side in sides {
        let bytes = format.info().mip_bytes(side, side);
        texture.push_mip(side, side, vec![0; bytes]).unwrap();
    }
    texture
}

/// Builds a square `B8G8R8A8` texture with one mip per entry of `sides`, every pixel set to `bgra`.
pub fn solid_bgra_texture(name: &str, sides: &[usize], bgra: [u8; 4]) -> MemoryTexture {
    let mut texture =
        MemoryTexture::empty(name, PixelFormat::B8G8R8A8, sides[0], sides[0]).unwrap();
    for &side in sides {
        texture.push_mip(side, side, bgra.repeat(side * side)).unwrap();
    }
    texture
}
