//! # Applying a binary operator across two textures
//!
//! [`apply_binary_op`] allocates a new `B8G8R8A8` texture sized after the first pair of
//! matching mips (see [`choose_compatible_mips`]) and fills it one canonical 4x4 block at a
//! time with `op(bot_block, top_block)`.
//!
//! Both input mip chains are walked downwards in lockstep from the matched pair, halving the
//! size after each mip, until either chain runs out or the size drops below the minimum mip
//! side (4 by default).

use crate::compatibility::are_textures_compatible;
use crate::error::CompositeError;
use crate::mip_match::choose_compatible_mips;
use crate::settings::CompositorSettings;
use texture_overlay_codec::{BlockMapper, Texture, TransientTexture};
use texture_overlay_common::pixel_format::PixelFormat;
use texture_overlay_common::precise_block::{PreciseBlock, CANONICAL_BLOCK_SIDE};

/// Pixel format of every texture produced by the compositor.
pub const OUTPUT_FORMAT: PixelFormat = PixelFormat::B8G8R8A8;

/// Outcome of [`apply_binary_op`].
#[derive(Debug)]
pub enum Composite<'b, T> {
    /// A new texture was produced.
    Created(T),
    /// The inputs could not be composited; this is the bottom texture, untouched.
    Unchanged(&'b mut T),
}

impl<'b, T> Composite<'b, T> {
    /// Whether a new texture was produced.
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    /// The new texture, or [`None`] if the operation did not occur.
    pub fn created(self) -> Option<T> {
        match self {
            Self::Created(texture) => Some(texture),
            Self::Unchanged(_) => None,
        }
    }
}

/// Combines `bot` and `top` with `op` using the default [`CompositorSettings`].
///
/// See [`apply_binary_op_with_settings`].
pub fn apply_binary_op<'b, T, U, F>(
    bot: &'b mut T,
    top: &mut U,
    op: F,
) -> Result<Composite<'b, T>, CompositeError>
where
    T: TransientTexture,
    U: Texture,
    F: FnMut(&PreciseBlock, &PreciseBlock) -> PreciseBlock,
{
    apply_binary_op_with_settings(bot, top, op, &CompositorSettings::default())
}

/// Combines `bot` and `top` with `op` into a new texture of the same type as `bot`.
///
/// # Returns
///
/// - [`Composite::Created`] with the new texture on success.
/// - [`Composite::Unchanged`] with `bot` if the textures are not power-of-two squares, are
///   stored in unsupported formats, or share no mip size.
///
/// # Errors
///
/// Any failure of the texture host or the block codec once compositing has started.
pub fn apply_binary_op_with_settings<'b, T, U, F>(
    bot: &'b mut T,
    top: &mut U,
    mut op: F,
    settings: &CompositorSettings,
) -> Result<Composite<'b, T>, CompositeError>
where
    T: TransientTexture,
    U: Texture,
    F: FnMut(&PreciseBlock, &PreciseBlock) -> PreciseBlock,
{
    tracing::info!("Processing {}...", bot.name());
    log_texture("Bot", &*bot);
    log_texture("Top", &*top);

    if !are_textures_compatible(&*bot, &*top) {
        tracing::error!("Cannot process: incompatible");
        return Ok(Composite::Unchanged(bot));
    }

    let found = match choose_compatible_mips(&*bot, &*top) {
        Ok(found) => found,
        Err(err) => {
            tracing::warn!("Could not generate new texture, using default: {}", err);
            return Ok(Composite::Unchanged(bot));
        }
    };

    let name = settings.output_name(bot.name());
    let mut out = T::create_transient(&name, found.size_x, found.size_y, OUTPUT_FORMAT)?;

    let (mut size_x, mut size_y) = (found.size_x, found.size_y);
    let mut out_mip = 0;
    while size_x >= settings.min_mip_side()
        && found.bot_mip + out_mip < bot.num_mips()
        && found.top_mip + out_mip < top.num_mips()
    {
        let step = MipStep {
            out_mip,
            bot_mip: found.bot_mip + out_mip,
            top_mip: found.top_mip + out_mip,
            size_x,
            size_y,
        };
        apply_mip(&mut out, bot, top, &step, &mut op)?;

        out_mip += 1;
        size_x >>= 1;
        size_y >>= 1;
    }

    tracing::debug!("Generated {} with {} mips", name, out.num_mips());
    out.update_resource();
    Ok(Composite::Created(out))
}

/// One level of the lockstep walk.
struct MipStep {
    out_mip: usize,
    bot_mip: usize,
    top_mip: usize,
    size_x: usize,
    size_y: usize,
}

fn apply_mip<T, U, F>(
    out: &mut T,
    bot: &mut T,
    top: &mut U,
    step: &MipStep,
    op: &mut F,
) -> Result<(), CompositeError>
where
    T: TransientTexture,
    U: Texture,
    F: FnMut(&PreciseBlock, &PreciseBlock) -> PreciseBlock,
{
    // Mip 0 comes with the transient allocation.
    if step.out_mip > 0 {
        let info = OUTPUT_FORMAT.info();
        let num_bytes = (step.size_x / info.block_size_x)
            * (step.size_y / info.block_size_y)
            * info.block_bytes;
        out.add_mip(step.size_x, step.size_y, num_bytes)?;
    }

    let mut bot_blocks = BlockMapper::open(bot, step.bot_mip)?;
    let mut top_blocks = BlockMapper::open(top, step.top_mip)?;
    let mut out_blocks = BlockMapper::open(out, step.out_mip)?;

    tracing::debug!("Creating mip {}", step.out_mip);
    for y in (0..step.size_y).step_by(CANONICAL_BLOCK_SIDE) {
        for x in (0..step.size_x).step_by(CANONICAL_BLOCK_SIDE) {
            let bot_block = bot_blocks.read_block(x, y)?;
            let top_block = top_blocks.read_block(x, y)?;
            out_blocks.write_block(x, y, &op(&bot_block, &top_block))?;
        }
    }
    tracing::debug!("Done mip {}", step.out_mip);
    Ok(())
}

fn log_texture(role: &str, texture: &dyn Texture) {
    tracing::debug!(
        "{} {} is {}x{}, has {} mips, format {}",
        role,
        texture.name(),
        texture.size_x(),
        texture.size_y(),
        texture.num_mips(),
        texture.pixel_format()
    );
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;

    fn first_pixel(texture: &MemoryTexture, mip: usize) -> [u8; 4] {
        let data = texture.mip(mip).unwrap().data();
        [data[0], data[1], data[2], data[3]]
    }

    #[test]
    fn non_pow2_bot_is_returned_unchanged() {
        let mut bot = MemoryTexture::new("Bot", PixelFormat::B8G8R8A8, 12, 12).unwrap();
        let mut top = MemoryTexture::new("Top", PixelFormat::B8G8R8A8, 16, 16).unwrap();

        let result = apply_binary_op(&mut bot, &mut top, |b, _| *b).unwrap();
        assert!(!result.is_created());
        match result {
            Composite::Unchanged(texture) => assert_eq!(texture.name(), "Bot"),
            Composite::Created(_) => panic!("expected the bot texture back"),
        }
    }

    #[test]
    fn unsupported_format_is_returned_unchanged() {
        let mut bot = MemoryTexture::new("Bot", PixelFormat::Bc7, 16, 16).unwrap();
        let mut top = MemoryTexture::new("Top", PixelFormat::B8G8R8A8, 16, 16).unwrap();

        let result = apply_binary_op(&mut bot, &mut top, |b, _| *b).unwrap();
        assert!(result.created().is_none());
    }

    #[test]
    fn single_4x4_mip_produces_single_output_mip() {
        let mut bot = solid_bgra_texture("Bot", &[4], [0, 0, 255, 255]);
        let mut top = solid_bgra_texture("Top", &[4], [255, 0, 0, 128]);

        let out = apply_binary_op(&mut bot, &mut top, overlay_blocks)
            .unwrap()
            .created()
            .unwrap();

        assert_eq!(out.num_mips(), 1);
        assert_eq!(out.pixel_format(), OUTPUT_FORMAT);
        assert_eq!(out.name(), "Compressed_Bot");
        assert_eq!(out.resource_revision(), 1);

        let expected = PreciseColor::over(
            PreciseColor::from(Color8888::from_bgra_bytes([0, 0, 255, 255])),
            PreciseColor::from(Color8888::from_bgra_bytes([255, 0, 0, 128])),
        )
        .to_color_8888()
        .to_bgra_bytes();
        for pixel in out.mip(0).unwrap().data().chunks_exact(4) {
            assert_eq!(pixel, expected);
        }
    }

    #[test]
    fn mip_chain_follows_smallest_input() {
        let mut bot = solid_bgra_texture("Bot", &[32, 16, 8, 4, 2, 1], [10, 20, 30, 255]);
        let mut top = solid_bgra_texture("Top", &[16, 8, 4], [0, 0, 0, 0]);

        let out = apply_binary_op(&mut bot, &mut top, overlay_blocks)
            .unwrap()
            .created()
            .unwrap();

        // Matched at bot[1] / top[0], top has 3 mips.
        assert_eq!(out.size_x(), 16);
        assert_eq!(out.num_mips(), 3);
        for (mip, side) in [16, 8, 4].into_iter().enumerate() {
            assert_eq!(out.mip_dimensions(mip), Some(MipDimensions::new(side, side)));
            assert_eq!(out.mip(mip).unwrap().data().len(), side * side * 4);
            assert_eq!(first_pixel(&out, mip), [10, 20, 30, 255]);
        }
    }

    #[test]
    fn iteration_stops_below_min_side() {
        let mut bot = solid_bgra_texture("Bot", &[8, 4, 2, 1], [0, 0, 0, 255]);
        let mut top = solid_bgra_texture("Top", &[8, 4, 2, 1], [0, 0, 0, 255]);

        let out = apply_binary_op(&mut bot, &mut top, overlay_blocks)
            .unwrap()
            .created()
            .unwrap();
        assert_eq!(out.num_mips(), 2);

        let settings = CompositorSettingsBuilder::new().min_mip_side(8).build();
        let out = apply_binary_op_with_settings(&mut bot, &mut top, overlay_blocks, &settings)
            .unwrap()
            .created()
            .unwrap();
        assert_eq!(out.num_mips(), 1);
    }

    #[test]
    fn inputs_are_released_after_compositing() {
        let mut bot = solid_bgra_texture("Bot", &[8, 4], [0, 0, 0, 255]);
        let mut top = solid_bgra_texture("Top", &[8, 4], [0, 0, 0, 255]);
        bot.set_bulk_data_flags(1, BulkDataFlags::SINGLE_USE).unwrap();

        apply_binary_op(&mut bot, &mut top, overlay_blocks).unwrap();

        assert_eq!(bot.bulk_data_flags(1), Ok(BulkDataFlags::SINGLE_USE));
        assert_eq!(bot.resident_seconds(), 0.0);
        assert_eq!(top.resident_seconds(), 0.0);
        assert!(!bot.is_locked(0) && !top.is_locked(0));
    }

    #[test]
    fn operator_runs_once_per_block() {
        let mut bot = solid_bgra_texture("Bot", &[8], [0, 0, 0, 255]);
        let mut top = solid_bgra_texture("Top", &[8], [0, 0, 0, 255]);

        let mut calls = 0;
        apply_binary_op(&mut bot, &mut top, |b, _| {
            calls += 1;
            *b
        })
        .unwrap();
        assert_eq!(calls, 4);
    }

    #[test]
    fn compressed_inputs_are_decoded() {
        // Opaque white BC1 under a fully transparent BGRA top.
        let mut bot = MemoryTexture::empty("Bot", PixelFormat::Dxt1, 4, 4).unwrap();
        bot.push_mip(4, 4, vec![0xFF, 0xFF, 0x00, 0x00, 0, 0, 0, 0]).unwrap();
        let mut top = solid_bgra_texture("Top", &[4], [0, 0, 0, 0]);

        let out = apply_binary_op(&mut bot, &mut top, overlay_blocks)
            .unwrap()
            .created()
            .unwrap();
        assert_eq!(first_pixel(&out, 0), [248, 252, 248, 255]);
    }
}
