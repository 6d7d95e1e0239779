//! Common test imports and utilities for the shared types.
#![allow(unused_imports)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use alloc::{format, string::String, vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

pub use crate::color_565::Color565;
pub use crate::color_8888::Color8888;
pub use crate::float16_color::Float16Color;
pub use crate::pixel_format::{PixelFormat, PixelFormatInfo};
pub use crate::precise_block::{PreciseBlock, CANONICAL_BLOCK_PIXELS, CANONICAL_BLOCK_SIDE};
pub use crate::precise_color::PreciseColor;
