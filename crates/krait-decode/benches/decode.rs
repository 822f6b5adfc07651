//! Benchmarks for decode throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use krait_decode::{decode, IsaMode};

/// A realistic mix of words: function prologue/epilogue, arithmetic, memory
/// traffic, branches, and a couple of FP/SIMD operations.
const A64_WORDS: &[u32] = &[
    0xA9BF_7BFD, // stp x29, x30, [sp, #-16]!
    0x9100_03FD, // mov x29, sp (add x29, sp, #0)
    0x2A00_03E8, // mov w8, w0
    0x1100_0500, // add w0, w8, #1
    0xB940_0441, // ldr w1, [x2, #4]
    0xF900_0BE0, // str x0, [sp, #16]
    0x8B02_0020, // add x0, x1, x2
    0xF100_003F, // cmp x1, #0
    0x5400_0101, // b.ne +0x20
    0x9400_0040, // bl +0x100
    0x1E62_2820, // fadd d0, d1, d2
    0x4EA2_8420, // add v0.4s, v1.4s, v2.4s
    0xA8C1_7BFD, // ldp x29, x30, [sp], #16
    0xD65F_03C0, // ret
];

/// Repeats the sample block up to `len` words.
fn generate_block(len: usize) -> Vec<u32> {
    A64_WORDS.iter().copied().cycle().take(len).collect()
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("a64_decode");

    group.bench_function("single_word", |b| {
        b.iter(|| decode(IsaMode::A64, 0x1000, black_box(0x1100_0500)))
    });

    group.bench_function("small_function", |b| {
        b.iter(|| {
            for (i, &word) in A64_WORDS.iter().enumerate() {
                black_box(decode(IsaMode::A64, 0x1000 + 4 * i as u64, black_box(word)));
            }
        })
    });

    for len in [1024usize, 16384, 262144] {
        let words = generate_block(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("throughput", len), &words, |b, words| {
            b.iter(|| {
                for (i, &word) in words.iter().enumerate() {
                    black_box(decode(IsaMode::A64, 4 * i as u64, black_box(word)));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
