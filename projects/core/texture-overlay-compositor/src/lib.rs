#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![warn(missing_docs)]

pub mod apply;
pub mod compatibility;
pub mod error;
pub mod mip_match;
pub mod operators;
pub mod settings;

pub use apply::{apply_binary_op, apply_binary_op_with_settings, Composite, OUTPUT_FORMAT};
pub use compatibility::{are_textures_compatible, is_format_supported, is_pow2_square};
pub use error::CompositeError;
pub use mip_match::{choose_compatible_mips, MipMatch, MipMatchError};
pub use operators::{overlay_blocks, overlay_textures};
pub use settings::{CompositorSettings, CompositorSettingsBuilder};

#[cfg(test)]
pub mod test_prelude;
