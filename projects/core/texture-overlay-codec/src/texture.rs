//! # Texture host contract
//!
//! The codec never owns texture storage. It talks to whatever asset system holds the
//! textures through [`Texture`] (read/write access to existing textures) and
//! [`TransientTexture`] (allocation of new ones).
//!
//! Both traits mirror what a streaming texture asset exposes: per-mip dimensions, a
//! lockable byte buffer per mip, bulk-data flags that say whether the buffer may be
//! discarded after upload, and a residency request that keeps mips loaded.

use crate::error::TextureError;
use core::ops::{BitOr, Sub};
use texture_overlay_common::pixel_format::PixelFormat;

/// Width and height of one mip, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MipDimensions {
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
}

impl MipDimensions {
    /// Creates a new [`MipDimensions`].
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

/// Bulk-data flags of a mip's backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BulkDataFlags(u32);

impl BulkDataFlags {
    /// No flags set.
    pub const NONE: Self = Self(0);
    /// The payload may be discarded once uploaded, even in the editor.
    pub const ALWAYS_ALLOW_DISCARD: Self = Self(1 << 0);
    /// The payload may only be read once, then it is freed.
    pub const SINGLE_USE: Self = Self(1 << 1);
    /// Every flag that prevents a mip from being locked for direct access.
    pub const DISCARDABLE: Self = Self(Self::ALWAYS_ALLOW_DISCARD.0 | Self::SINGLE_USE.0);

    /// Creates flags from their raw representation.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw representation.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether every flag in `other` is also set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether any flag in `other` is also set in `self`.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Sets every flag in `other`.
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Clears every flag in `other`.
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }
}

impl BitOr for BulkDataFlags {
    type Output = Self;

    fn bitor(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl Sub for BulkDataFlags {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }
}

/// A texture owned by the host.
///
/// Lock calls are exclusive: a mip locked once must be unlocked before it can be locked again.
/// Callers are expected to serialise access to a texture; nothing here is thread safe.
pub trait Texture {
    /// Name of the texture, used in logs and in the name of derived textures.
    fn name(&self) -> &str;

    /// Storage format of every mip.
    fn pixel_format(&self) -> PixelFormat;

    /// Width of the texture in pixels.
    fn size_x(&self) -> usize;

    /// Height of the texture in pixels.
    fn size_y(&self) -> usize;

    /// Number of mips in the texture's mip chain.
    fn num_mips(&self) -> usize;

    /// Number of mips that may currently be mapped.
    fn num_resident_mips(&self) -> usize {
        self.num_mips()
    }

    /// Dimensions of a mip, or [`None`] if it does not exist.
    fn mip_dimensions(&self, mip: usize) -> Option<MipDimensions>;

    /// Current bulk-data flags of a mip.
    fn bulk_data_flags(&self, mip: usize) -> Result<BulkDataFlags, TextureError>;

    /// Replaces the bulk-data flags of a mip.
    fn set_bulk_data_flags(&mut self, mip: usize, flags: BulkDataFlags)
        -> Result<(), TextureError>;

    /// Requests every mip be kept resident for `seconds`. Zero drops the request.
    fn force_mip_levels_resident(&mut self, seconds: f32);

    /// Blocks until any pending load or streaming of the texture has finished.
    fn wait_for_streaming(&mut self);

    /// Locks a mip for reading and returns its data.
    fn lock_mip_read(&mut self, mip: usize) -> Result<&[u8], TextureError>;

    /// Locks a mip for reading and writing and returns its data.
    fn lock_mip_write(&mut self, mip: usize) -> Result<&mut [u8], TextureError>;

    /// Releases a lock taken by [`Texture::lock_mip_read`] or [`Texture::lock_mip_write`].
    fn unlock_mip(&mut self, mip: usize) -> Result<(), TextureError>;
}

/// A texture type the host can allocate on demand.
pub trait TransientTexture: Texture + Sized {
    /// Allocates a new texture with a single, zero filled mip of the given size.
    fn create_transient(
        name: &str,
        size_x: usize,
        size_y: usize,
        format: PixelFormat,
    ) -> Result<Self, TextureError>;

    /// Appends a zero filled mip of `num_bytes` bytes, returning its index.
    fn add_mip(
        &mut self,
        size_x: usize,
        size_y: usize,
        num_bytes: usize,
    ) -> Result<usize, TextureError>;

    /// Rebuilds the renderable resource after the mips were modified.
    fn update_resource(&mut self);
}
