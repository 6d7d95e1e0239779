//! A [`Texture`] host that keeps every mip in a plain `Vec<u8>`.
//!
//! Used wherever textures do not come from a streaming asset system: tests, benchmarks and
//! file loaders such as the DDS extension. Locks, bulk-data flags and residency requests are
//! tracked so that callers honouring the host contract can be checked against it.

use crate::error::TextureError;
use crate::texture::{BulkDataFlags, MipDimensions, Texture, TransientTexture};
use texture_overlay_common::pixel_format::PixelFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LockMode {
    ReadOnly,
    ReadWrite,
}

/// One mip of a [`MemoryTexture`].
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryMip {
    dimensions: MipDimensions,
    data: Vec<u8>,
    flags: BulkDataFlags,
    lock: Option<LockMode>,
}

impl MemoryMip {
    /// Dimensions of this mip.
    pub fn dimensions(&self) -> MipDimensions {
        self.dimensions
    }

    /// Raw native block data of this mip.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// An in-memory texture.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryTexture {
    name: String,
    format: PixelFormat,
    size_x: usize,
    size_y: usize,
    mips: Vec<MemoryMip>,
    resident_mips: Option<usize>,
    resident_seconds: f32,
    streaming_pending: bool,
    resource_revision: u32,
}

impl MemoryTexture {
    /// Creates a texture whose mip 0 is `size_x` x `size_y` and zero filled.
    ///
    /// # Examples
    ///
    /// ```
    /// use texture_overlay_codec::{MemoryTexture, Texture};
    /// use texture_overlay_common::pixel_format::PixelFormat;
    ///
    /// let texture = MemoryTexture::new("Icon", PixelFormat::Dxt1, 8, 8).unwrap();
    /// assert_eq!(texture.num_mips(), 1);
    /// assert_eq!(texture.mip(0).unwrap().data().len(), 4 * 8);
    /// ```
    pub fn new(
        name: impl Into<String>,
        format: PixelFormat,
        size_x: usize,
        size_y: usize,
    ) -> Result<Self, TextureError> {
        let mut texture = Self::empty(name, format, size_x, size_y)?;
        let bytes = format
            .info()
            .checked_mip_bytes(size_x, size_y)
            .ok_or(TextureError::InvalidDimensions {
                size_x,
                size_y,
                format,
            })?;
        texture.push_mip(size_x, size_y, vec![0; bytes])?;
        Ok(texture)
    }

    /// Creates a texture with no mips. Mips are added with [`MemoryTexture::push_mip`];
    /// the first one pushed should match `size_x` x `size_y`.
    pub fn empty(
        name: impl Into<String>,
        format: PixelFormat,
        size_x: usize,
        size_y: usize,
    ) -> Result<Self, TextureError> {
        if size_x == 0 || size_y == 0 {
            return Err(TextureError::InvalidDimensions {
                size_x,
                size_y,
                format,
            });
        }

        Ok(Self {
            name: name.into(),
            format,
            size_x,
            size_y,
            mips: Vec::new(),
            resident_mips: None,
            resident_seconds: 0.0,
            streaming_pending: false,
            resource_revision: 0,
        })
    }

    /// Appends a mip holding `data`, returning its index.
    ///
    /// `data` must be exactly as long as the texture's format requires for the given size.
    pub fn push_mip(
        &mut self,
        size_x: usize,
        size_y: usize,
        data: Vec<u8>,
    ) -> Result<usize, TextureError> {
        let mip = self.mips.len();
        if size_x == 0 || size_y == 0 {
            return Err(TextureError::InvalidDimensions {
                size_x,
                size_y,
                format: self.format,
            });
        }

        let expected = self
            .format
            .info()
            .checked_mip_bytes(size_x, size_y)
            .ok_or(TextureError::InvalidDimensions {
                size_x,
                size_y,
                format: self.format,
            })?;
        if data.len() != expected {
            return Err(TextureError::InvalidMipData {
                mip,
                expected,
                actual: data.len(),
            });
        }

        self.mips.push(MemoryMip {
            dimensions: MipDimensions::new(size_x, size_y),
            data,
            flags: BulkDataFlags::NONE,
            lock: None,
        });
        Ok(mip)
    }

    /// Limits how many mips report as resident, simulating a partially streamed texture.
    pub fn with_resident_mips(mut self, resident_mips: usize) -> Self {
        self.resident_mips = Some(resident_mips);
        self
    }

    /// Marks the texture as still streaming; the next [`Texture::wait_for_streaming`] clears it.
    pub fn set_streaming_pending(&mut self, pending: bool) {
        self.streaming_pending = pending;
    }

    /// Whether the texture is still waiting on streaming.
    pub fn is_streaming_pending(&self) -> bool {
        self.streaming_pending
    }

    /// Borrows a mip directly, bypassing the lock protocol.
    pub fn mip(&self, mip: usize) -> Option<&MemoryMip> {
        self.mips.get(mip)
    }

    /// Number of seconds of the most recent residency request (zero when none is active).
    pub fn resident_seconds(&self) -> f32 {
        self.resident_seconds
    }

    /// Whether a mip is currently locked.
    pub fn is_locked(&self, mip: usize) -> bool {
        self.mips.get(mip).is_some_and(|m| m.lock.is_some())
    }

    /// How many times [`TransientTexture::update_resource`] has been called.
    pub fn resource_revision(&self) -> u32 {
        self.resource_revision
    }

    fn mip_mut(&mut self, mip: usize) -> Result<&mut MemoryMip, TextureError> {
        let num_mips = self.mips.len();
        self.mips
            .get_mut(mip)
            .ok_or(TextureError::MipOutOfRange { mip, num_mips })
    }

    fn lock(&mut self, mip: usize, mode: LockMode) -> Result<&mut MemoryMip, TextureError> {
        let entry = self.mip_mut(mip)?;
        if entry.lock.is_some() {
            return Err(TextureError::AlreadyLocked { mip });
        }
        entry.lock = Some(mode);
        Ok(entry)
    }
}

impl Texture for MemoryTexture {
    fn name(&self) -> &str {
        &self.name
    }

    fn pixel_format(&self) -> PixelFormat {
        self.format
    }

    fn size_x(&self) -> usize {
        self.size_x
    }

    fn size_y(&self) -> usize {
        self.size_y
    }

    fn num_mips(&self) -> usize {
        self.mips.len()
    }

    fn num_resident_mips(&self) -> usize {
        self.resident_mips
            .map_or(self.mips.len(), |resident| resident.min(self.mips.len()))
    }

    fn mip_dimensions(&self, mip: usize) -> Option<MipDimensions> {
        self.mips.get(mip).map(|m| m.dimensions)
    }

    fn bulk_data_flags(&self, mip: usize) -> Result<BulkDataFlags, TextureError> {
        self.mips
            .get(mip)
            .map(|m| m.flags)
            .ok_or(TextureError::MipOutOfRange {
                mip,
                num_mips: self.mips.len(),
            })
    }

    fn set_bulk_data_flags(
        &mut self,
        mip: usize,
        flags: BulkDataFlags,
    ) -> Result<(), TextureError> {
        self.mip_mut(mip)?.flags = flags;
        Ok(())
    }

    fn force_mip_levels_resident(&mut self, seconds: f32) {
        self.resident_seconds = seconds;
    }

    fn wait_for_streaming(&mut self) {
        self.streaming_pending = false;
    }

    fn lock_mip_read(&mut self, mip: usize) -> Result<&[u8], TextureError> {
        Ok(&self.lock(mip, LockMode::ReadOnly)?.data)
    }

    fn lock_mip_write(&mut self, mip: usize) -> Result<&mut [u8], TextureError> {
        Ok(&mut self.lock(mip, LockMode::ReadWrite)?.data)
    }

    fn unlock_mip(&mut self, mip: usize) -> Result<(), TextureError> {
        let entry = self.mip_mut(mip)?;
        if entry.lock.take().is_none() {
            return Err(TextureError::NotLocked { mip });
        }
        Ok(())
    }
}

impl TransientTexture for MemoryTexture {
    fn create_transient(
        name: &str,
        size_x: usize,
        size_y: usize,
        format: PixelFormat,
    ) -> Result<Self, TextureError> {
        Self::new(name, format, size_x, size_y)
    }

    fn add_mip(
        &mut self,
        size_x: usize,
        size_y: usize,
        num_bytes: usize,
    ) -> Result<usize, TextureError> {
        self.push_mip(size_x, size_y, vec![0; num_bytes])
    }

    fn update_resource(&mut self) {
        self.resource_revision += 1;
    }
}
