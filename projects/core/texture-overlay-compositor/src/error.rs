//! Fatal compositing errors.

use texture_overlay_codec::{BlockMapperError, TextureError};
use thiserror::Error;

/// An error that aborted compositing part way through.
///
/// Unlike the mismatches that return [`Composite::Unchanged`](crate::apply::Composite::Unchanged),
/// these indicate a broken texture host or corrupt input data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompositeError {
    /// Reading or writing a block failed.
    #[error(transparent)]
    Codec(#[from] BlockMapperError),

    /// Allocating the output texture or one of its mips failed.
    #[error(transparent)]
    Texture(#[from] TextureError),
}
