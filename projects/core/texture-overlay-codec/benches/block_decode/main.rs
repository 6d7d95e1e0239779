use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;
use texture_overlay_codec::{BlockMapper, MemoryTexture};
use texture_overlay_common::pixel_format::PixelFormat;

const SIZE: usize = 512;

fn patterned_texture(format: PixelFormat) -> MemoryTexture {
    let bytes = format.info().mip_bytes(SIZE, SIZE);
    let mut texture = MemoryTexture::empty("Bench", format, SIZE, SIZE).unwrap();

    // Simple repeating pattern, real data has more variety.
    let data = (0..bytes).map(|i| (i % 255) as u8).collect();
    texture.push_mip(SIZE, SIZE, data).unwrap();
    texture
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Decode Canonical Blocks");

    for format in [
        PixelFormat::Dxt1,
        PixelFormat::Dxt5,
        PixelFormat::B8G8R8A8,
        PixelFormat::FloatRgba,
    ] {
        let mut texture = patterned_texture(format);
        group.throughput(Throughput::Bytes(format.info().mip_bytes(SIZE, SIZE) as u64));

        group.bench_function(format.info().name, |b| {
            let mut mapper = BlockMapper::open(&mut texture, 0).unwrap();
            b.iter(|| {
                for y in (0..SIZE).step_by(4) {
                    for x in (0..SIZE).step_by(4) {
                        black_box(mapper.read_block(x, y).unwrap());
                    }
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
