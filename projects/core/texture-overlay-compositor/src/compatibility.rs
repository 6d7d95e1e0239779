//! Shape and format checks that decide whether two textures can be composited.

use texture_overlay_codec::Texture;
use texture_overlay_common::pixel_format::PixelFormat;

/// Whether the compositor can read textures stored as `format`.
///
/// # Examples
///
/// ```
/// use texture_overlay_common::pixel_format::PixelFormat;
/// use texture_overlay_compositor::is_format_supported;
///
/// assert!(is_format_supported(PixelFormat::Dxt1));
/// assert!(!is_format_supported(PixelFormat::Dxt3));
/// ```
pub const fn is_format_supported(format: PixelFormat) -> bool {
    matches!(
        format,
        PixelFormat::Dxt1 | PixelFormat::Dxt5 | PixelFormat::B8G8R8A8 | PixelFormat::FloatRgba
    )
}

/// Whether `texture` is square, has a power-of-two side, and is stored in a supported format
/// with square blocks.
pub fn is_pow2_square(texture: &dyn Texture) -> bool {
    if texture.size_x() != texture.size_y() {
        return false;
    }

    let bits = texture.size_x().count_ones();
    if bits != 1 {
        tracing::trace!("count_ones({}) = {}", texture.size_x(), bits);
        return false;
    }

    let info = texture.pixel_format().info();
    info.supported && info.has_square_blocks()
}

/// Whether `bot` and `top` both pass [`is_pow2_square`].
///
/// The first failing texture is logged.
pub fn are_textures_compatible(bot: &dyn Texture, top: &dyn Texture) -> bool {
    if !is_pow2_square(bot) {
        tracing::error!("Cannot process: bot {} is not a power-of-two square", bot.name());
        return false;
    }
    if !is_pow2_square(top) {
        tracing::error!("Cannot process: top {} is not a power-of-two square", top.name());
        return false;
    }
    true
}
