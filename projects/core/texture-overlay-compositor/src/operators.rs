//! Block operators for [`apply_binary_op`].

use crate::apply::{apply_binary_op, Composite};
use crate::error::CompositeError;
use texture_overlay_codec::{Texture, TransientTexture};
use texture_overlay_common::precise_block::PreciseBlock;
use texture_overlay_common::precise_color::PreciseColor;

/// Composites `top` over `bot` pixel by pixel with [`PreciseColor::over`].
///
/// # Examples
///
/// ```
/// use texture_overlay_common::precise_block::PreciseBlock;
/// use texture_overlay_common::precise_color::PreciseColor;
/// use texture_overlay_compositor::overlay_blocks;
///
/// let bot = PreciseBlock::new(PreciseColor::opaque(1.0, 0.0, 0.0));
/// let top = PreciseBlock::new(PreciseColor::TRANSPARENT);
/// assert_eq!(overlay_blocks(&bot, &top), bot);
/// ```
pub fn overlay_blocks(bot: &PreciseBlock, top: &PreciseBlock) -> PreciseBlock {
    PreciseBlock::map_pairwise(bot, top, PreciseColor::over)
}

/// Composites `top` over `bot` into a new texture.
pub fn overlay_textures<'b, T, U>(
    bot: &'b mut T,
    top: &mut U,
) -> Result<Composite<'b, T>, CompositeError>
where
    T: TransientTexture,
    U: Texture,
{
    apply_binary_op(bot, top, overlay_blocks)
}
