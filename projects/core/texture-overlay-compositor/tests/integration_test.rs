//! Integration tests for compositing textures held in memory.

use texture_overlay_codec::formats::bc3::alpha_ramp;
use texture_overlay_codec::{BlockMapper, MemoryTexture, Texture};
use texture_overlay_common::color_565::Color565;
use texture_overlay_common::color_8888::Color8888;
use texture_overlay_common::pixel_format::PixelFormat;
use texture_overlay_common::precise_color::PreciseColor;
use texture_overlay_compositor::{choose_compatible_mips, overlay_textures, Composite, MipMatch};

fn chain(name: &str, format: PixelFormat, sides: &[usize]) -> MemoryTexture {
    let mut texture = MemoryTexture::empty(name, format, sides[0], sides[0]).unwrap();
    for &side in sides {
        let bytes = format.info().mip_bytes(side, side);
        texture.push_mip(side, side, vec![0; bytes]).unwrap();
    }
    texture
}

fn bgra_4x4(name: &str, pixels: &[[u8; 4]; 16]) -> MemoryTexture {
    let mut texture = MemoryTexture::empty(name, PixelFormat::B8G8R8A8, 4, 4).unwrap();
    texture.push_mip(4, 4, pixels.concat()).unwrap();
    texture
}

#[test]
fn mip_match_prefers_the_smaller_texture_as_baseline() {
    let bot = chain("Bot", PixelFormat::Dxt1, &[256, 128, 64, 32]);
    let top = chain("Top", PixelFormat::Dxt5, &[128, 64, 32]);

    let found = choose_compatible_mips(&bot, &top).unwrap();
    assert_eq!(
        found,
        MipMatch {
            size_x: 128,
            size_y: 128,
            bot_mip: 1,
            top_mip: 0
        }
    );
}

#[test]
fn single_mip_overlay_matches_per_pixel_over() {
    let mut bot_pixels = [[0u8; 4]; 16];
    let mut top_pixels = [[0u8; 4]; 16];
    for index in 0..16 {
        let value = (index * 16) as u8;
        bot_pixels[index] = [value, 255 - value, 40, 255];
        top_pixels[index] = [200, value, 10, 255];
    }

    let mut bot = bgra_4x4("Bot", &bot_pixels);
    let mut top = bgra_4x4("Top", &top_pixels);

    let out = match overlay_textures(&mut bot, &mut top).unwrap() {
        Composite::Created(out) => out,
        Composite::Unchanged(_) => panic!("textures should be compatible"),
    };

    assert_eq!(out.num_mips(), 1);
    let data = out.mip(0).unwrap().data();
    for index in 0..16 {
        let expected = PreciseColor::over(
            PreciseColor::from(Color8888::from_bgra_bytes(bot_pixels[index])),
            PreciseColor::from(Color8888::from_bgra_bytes(top_pixels[index])),
        )
        .to_color_8888()
        .to_bgra_bytes();
        assert_eq!(&data[index * 4..index * 4 + 4], &expected);
    }
}

#[test]
fn non_pow2_texture_is_returned_unchanged() {
    let mut bot = chain("Bot", PixelFormat::B8G8R8A8, &[6]);
    let mut top = chain("Top", PixelFormat::B8G8R8A8, &[8]);
    let before = bot.clone();

    match overlay_textures(&mut bot, &mut top).unwrap() {
        Composite::Unchanged(texture) => assert_eq!(*texture, before),
        Composite::Created(_) => panic!("a 6x6 texture cannot be composited"),
    }
}

#[test]
fn over_identities() {
    let opaque_top = PreciseColor::new(0.9, 0.1, 0.3, 1.0);
    let clear_top = PreciseColor::new(0.5, 0.5, 0.5, 0.0);

    for bot in [
        PreciseColor::new(0.2, 0.4, 0.6, 0.5),
        PreciseColor::new(0.7, 0.3, 0.9, 0.1),
        PreciseColor::new(0.7, 0.3, 0.9, 0.0),
    ] {
        assert_eq!(PreciseColor::over(bot, opaque_top), opaque_top);
        assert_eq!(PreciseColor::over(bot, clear_top), bot);
    }
}

#[test]
fn bc1_palette_averages_through_mapper() {
    // c0 = 0xF800 (red) > c1 = 0x001F (blue); indices 0, 1, 2, 3 in every row.
    let mut texture = MemoryTexture::empty("Bc1", PixelFormat::Dxt1, 4, 4).unwrap();
    texture
        .push_mip(4, 4, vec![0x00, 0xF8, 0x1F, 0x00, 0xE4, 0xE4, 0xE4, 0xE4])
        .unwrap();

    let c0 = Color565::from_raw(0xF800).to_precise(255);
    let c1 = Color565::from_raw(0x001F).to_precise(255);

    let mut mapper = BlockMapper::open(&mut texture, 0).unwrap();
    let block = mapper.read_block(0, 0).unwrap();
    assert_eq!(block.get(2, 1), Some(PreciseColor::average(&[c0, c0, c1])));
    assert_eq!(block.get(3, 1), Some(PreciseColor::average(&[c0, c1, c1])));
}

#[test]
fn bc1_three_colour_code_3_is_transparent_black() {
    let mut texture = MemoryTexture::empty("Bc1", PixelFormat::Dxt1, 4, 4).unwrap();
    texture
        .push_mip(4, 4, vec![0x1F, 0x00, 0x00, 0xF8, 0xFF, 0xFF, 0xFF, 0xFF])
        .unwrap();

    let mut mapper = BlockMapper::open(&mut texture, 0).unwrap();
    let block = mapper.read_block(0, 0).unwrap();
    assert!(block.pixels.iter().all(|&p| p == PreciseColor::TRANSPARENT));
}

#[test]
fn bc3_alpha_ramp_is_strictly_monotonic() {
    let (a0, a1) = (200u8, 40u8);
    let ramp = alpha_ramp(a0, a1);

    assert_eq!(ramp[0], a0 as f64 / 255.0);
    assert_eq!(ramp[1], a1 as f64 / 255.0);
    // Codes 2..=7 step from a0 towards a1.
    let mut previous = ramp[0];
    for &value in &ramp[2..8] {
        assert!(value < previous);
        assert!(value > ramp[1]);
        previous = value;
    }
}

#[test]
fn bgra8_decode_then_encode_is_identity() {
    let mut pixels = [[0u8; 4]; 16];
    for (index, pixel) in pixels.iter_mut().enumerate() {
        let value = (index * 17) as u8;
        *pixel = [value, 255 - value, value / 2, 255 - value / 3];
    }
    let mut texture = bgra_4x4("Bgra", &pixels);
    let before = texture.mip(0).unwrap().data().to_vec();

    {
        let mut mapper = BlockMapper::open(&mut texture, 0).unwrap();
        let block = mapper.read_block(0, 0).unwrap();
        mapper.write_block(0, 0, &block).unwrap();
    }

    assert_eq!(texture.mip(0).unwrap().data(), before.as_slice());
}
