#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]

pub mod block_mapper;
pub mod error;
pub mod formats;
pub mod memory_texture;
pub mod texture;

pub use block_mapper::BlockMapper;
pub use error::{BlockMapperError, TextureError};
pub use formats::NativeFormat;
pub use memory_texture::MemoryTexture;
pub use texture::{BulkDataFlags, MipDimensions, Texture, TransientTexture};

#[cfg(test)]
pub mod test_prelude;
