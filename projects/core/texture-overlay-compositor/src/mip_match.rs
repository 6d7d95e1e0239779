//! # Mip matching
//!
//! Two textures of different sizes can only be composited at mips where they have identical
//! dimensions. [`choose_compatible_mips`] finds the first such pair, scanning the bottom
//! texture's mips in ascending order and, for each, the top texture's mips in ascending order.
//!
//! The first match is returned, not the largest one. Because the smaller texture always drives
//! the outer scan, for power-of-two mip chains the first match is also the largest shared size.

use crate::compatibility::is_format_supported;
use texture_overlay_codec::Texture;
use texture_overlay_common::pixel_format::PixelFormat;
use thiserror::Error;

/// A pair of mips, one per texture, that share the same dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MipMatch {
    /// Shared width in pixels.
    pub size_x: usize,
    /// Shared height in pixels.
    pub size_y: usize,
    /// Mip index into the bottom texture.
    pub bot_mip: usize,
    /// Mip index into the top texture.
    pub top_mip: usize,
}

impl MipMatch {
    /// Exchanges the bottom and top mip indices.
    pub fn swapped(self) -> Self {
        Self {
            bot_mip: self.top_mip,
            top_mip: self.bot_mip,
            ..self
        }
    }
}

/// Why no [`MipMatch`] could be found.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MipMatchError {
    /// At least one texture is stored in a format the compositor cannot read.
    #[error("Pixel formats {bot} and {top} are not compatible")]
    UnsupportedFormats {
        /// Format of the bottom texture.
        bot: PixelFormat,
        /// Format of the top texture.
        top: PixelFormat,
    },

    /// A texture is not square.
    #[error("Texture {texture} is {size_x} x {size_y}, which is not square")]
    NotSquare {
        /// Name of the offending texture.
        texture: String,
        /// Width in pixels.
        size_x: usize,
        /// Height in pixels.
        size_y: usize,
    },

    /// A texture has no mips.
    #[error("Texture {texture} has no mips")]
    NoMips {
        /// Name of the offending texture.
        texture: String,
    },

    /// Mip 0 of a texture does not have the texture's own dimensions.
    #[error("Mip 0 of texture {texture} does not match the texture size")]
    InconsistentMip0 {
        /// Name of the offending texture.
        texture: String,
    },

    /// No mip of one texture matches any mip of the other.
    #[error("Did not find any compatible mips")]
    NoCompatibleMips,
}

/// Finds the first pair of mips at which `bot` and `top` have the same dimensions.
///
/// If `bot` is wider than `top`, the search runs with the textures exchanged and the resulting
/// mip indices are exchanged back, so [`MipMatch::bot_mip`] always indexes `bot`.
///
/// # Examples
///
/// ```
/// use texture_overlay_codec::MemoryTexture;
/// use texture_overlay_common::pixel_format::PixelFormat;
/// use texture_overlay_compositor::{choose_compatible_mips, MipMatch};
///
/// let mut bot = MemoryTexture::new("Bot", PixelFormat::B8G8R8A8, 8, 8).unwrap();
/// bot.push_mip(4, 4, vec![0; 64]).unwrap();
/// let top = MemoryTexture::new("Top", PixelFormat::Dxt1, 4, 4).unwrap();
///
/// let found = choose_compatible_mips(&bot, &top).unwrap();
/// assert_eq!(found, MipMatch { size_x: 4, size_y: 4, bot_mip: 1, top_mip: 0 });
/// ```
pub fn choose_compatible_mips(
    bot: &dyn Texture,
    top: &dyn Texture,
) -> Result<MipMatch, MipMatchError> {
    let (bot_format, top_format) = (bot.pixel_format(), top.pixel_format());
    tracing::debug!("Input formats are {}, {}", bot_format, top_format);

    if !is_format_supported(bot_format) || !is_format_supported(top_format) {
        return Err(MipMatchError::UnsupportedFormats {
            bot: bot_format,
            top: top_format,
        });
    }

    if bot.size_x() > top.size_x() {
        tracing::debug!("Swapping texture order");
        return choose_compatible_mips(top, bot).map(MipMatch::swapped);
    }

    check_mip_chain(bot, "Bot")?;
    check_mip_chain(top, "Top")?;

    for bot_mip in 0..bot.num_mips() {
        let Some(bot_dims) = bot.mip_dimensions(bot_mip) else {
            continue;
        };
        for top_mip in 0..top.num_mips() {
            let Some(top_dims) = top.mip_dimensions(top_mip) else {
                continue;
            };
            if bot_dims != top_dims {
                tracing::trace!(
                    "No match: bot mip {} is {}x{}, top mip {} is {}x{}",
                    bot_mip,
                    bot_dims.width,
                    bot_dims.height,
                    top_mip,
                    top_dims.width,
                    top_dims.height
                );
                continue;
            }

            tracing::debug!(
                "Found compatible mips: bot[{}] and top[{}] are {}x{}",
                bot_mip,
                top_mip,
                bot_dims.width,
                bot_dims.height
            );
            return Ok(MipMatch {
                size_x: bot_dims.width,
                size_y: bot_dims.height,
                bot_mip,
                top_mip,
            });
        }
    }

    Err(MipMatchError::NoCompatibleMips)
}

fn check_mip_chain(texture: &dyn Texture, role: &str) -> Result<(), MipMatchError> {
    tracing::debug!(
        "{} is {}x{}, has {} mips",
        role,
        texture.size_x(),
        texture.size_y(),
        texture.num_mips()
    );

    if texture.size_x() != texture.size_y() {
        return Err(MipMatchError::NotSquare {
            texture: texture.name().to_owned(),
            size_x: texture.size_x(),
            size_y: texture.size_y(),
        });
    }

    let mip0 = texture
        .mip_dimensions(0)
        .ok_or_else(|| MipMatchError::NoMips {
            texture: texture.name().to_owned(),
        })?;
    if mip0.width != texture.size_x() || mip0.height != texture.size_y() {
        return Err(MipMatchError::InconsistentMip0 {
            texture: texture.name().to_owned(),
        });
    }
    Ok(())
}
