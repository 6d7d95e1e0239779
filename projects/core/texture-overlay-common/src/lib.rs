#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod color_565;
pub mod color_8888;
pub mod float16_color;
pub mod pixel_format;
pub mod precise_block;
pub mod precise_color;

#[cfg(test)]
mod test_prelude;
