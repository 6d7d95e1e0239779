#![doc = include_str!("../README.MD")]

#[cfg(test)]
pub mod test_prelude;

pub mod dds;
pub mod error;
pub mod load_dds;
pub mod save_dds;

pub use dds::{likely_dds, parse_dds, DdsInfo};
pub use error::DdsError;
pub use load_dds::load_dds;
pub use save_dds::save_dds;
