//! Common test imports and utilities for the codec.
#![allow(unused_imports)]

// External crates commonly used in tests
pub use rstest::rstest;

pub use crate::block_mapper::{BlockMapper, FORCE_RESIDENT_SECONDS};
pub use crate::error::{BlockMapperError, TextureError};
pub use crate::formats::NativeFormat;
pub use crate::memory_texture::MemoryTexture;
pub use crate::texture::{BulkDataFlags, MipDimensions, Texture, TransientTexture};

pub use texture_overlay_common::color_565::Color565;
pub use texture_overlay_common::color_8888::Color8888;
pub use texture_overlay_common::float16_color::Float16Color;
pub use texture_overlay_common::pixel_format::PixelFormat;
pub use texture_overlay_common::precise_block::PreciseBlock;
pub use texture_overlay_common::precise_color::PreciseColor;
