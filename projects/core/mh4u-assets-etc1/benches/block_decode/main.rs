use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mh4u_assets_common::decoded_4x4_block::Decoded4x4Block;
use mh4u_assets_etc1::{
    decode_etc1_block_from_slice, decode_etc1a4_block_from_slice, ETC1A4_BLOCK_SIZE,
    ETC1_BLOCK_SIZE,
};

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

// Mix of individual/differential and flipped/unflipped blocks with varied indices.
fn generate_blocks(num_blocks: usize, block_size: usize) -> Vec<u8> {
    let mut data = vec![0u8; num_blocks * block_size];
    for (block_idx, block) in data.chunks_exact_mut(block_size).enumerate() {
        let color = &mut block[block_size - ETC1_BLOCK_SIZE..];
        for (i, byte) in color[..4].iter_mut().enumerate() {
            *byte = ((block_idx * (i + 3)) % 255) as u8;
        }
        color[4] = (block_idx % 4) as u8 | ((block_idx % 64) as u8) << 2;
        color[5] = 0x40 + (block_idx % 32) as u8;
        color[6] = 0x84;
        color[7] = 0xC8 - (block_idx % 16) as u8;
    }
    data
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("ETC1 Decode Blocks (ETC1 -> RGBA8888)");

    // 1024x1024 texture
    let blocks_count = 65536;
    let etc1 = generate_blocks(blocks_count, ETC1_BLOCK_SIZE);
    let etc1a4 = generate_blocks(blocks_count, ETC1A4_BLOCK_SIZE);
    let mut output = vec![Decoded4x4Block::default(); blocks_count];

    group.throughput(criterion::Throughput::Bytes(etc1.len() as u64));
    group.bench_function("decode_etc1_blocks", |b| {
        b.iter(|| {
            for (block, out) in etc1.chunks_exact(ETC1_BLOCK_SIZE).zip(output.iter_mut()) {
                if let Some(decoded) = decode_etc1_block_from_slice(black_box(block)) {
                    *out = decoded;
                }
            }
        })
    });

    group.throughput(criterion::Throughput::Bytes(etc1a4.len() as u64));
    group.bench_function("decode_etc1a4_blocks", |b| {
        b.iter(|| {
            for (block, out) in etc1a4
                .chunks_exact(ETC1A4_BLOCK_SIZE)
                .zip(output.iter_mut())
            {
                if let Some(decoded) = decode_etc1a4_block_from_slice(black_box(block)) {
                    *out = decoded;
                }
            }
        })
    });

    group.bench_function("has_identical_pixels", |b| {
        b.iter(|| {
            let identical_count = output
                .iter()
                .filter(|block| block.has_identical_pixels())
                .count();
            black_box(identical_count)
        })
    });

    group.finish();
}

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(not(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
