//! Construction benchmarks for both build paths.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use repeat_suffix_tree::{BuildStrategy, CompactSuffixTree, TextBuffer};

const BASES: [u8; 4] = *b"ACGT";

fn random_sequence(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| BASES[rng.gen_range(0..BASES.len())]).collect()
}

fn bench_single_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_string");
    for len in [256usize, 1024, 4096] {
        let sequence = random_sequence(len, 7);
        let text = TextBuffer::framed(&sequence, b'$').unwrap();
        group.bench_with_input(BenchmarkId::new("direct", len), &text, |b, text| {
            b.iter(|| CompactSuffixTree::build(black_box(text.clone()), BuildStrategy::Direct))
        });
        if len <= 1024 {
            group.bench_with_input(BenchmarkId::new("generalized", len), &text, |b, text| {
                b.iter(|| CompactSuffixTree::build(black_box(text.clone()), BuildStrategy::Generalized))
            });
        }
    }
    group.finish();
}

fn bench_several_strings(c: &mut Criterion) {
    let mut text = TextBuffer::new();
    for seed in 0..8 {
        text.push_framed(&random_sequence(128, seed), b'$').unwrap();
    }
    c.bench_function("several_strings/generalized", |b| {
        b.iter(|| CompactSuffixTree::build(black_box(text.clone()), BuildStrategy::Generalized))
    });
    c.bench_function("several_strings/direct", |b| {
        b.iter(|| CompactSuffixTree::build(black_box(text.clone()), BuildStrategy::Direct))
    });
}

criterion_group!(benches, bench_single_string, bench_several_strings);
criterion_main!(benches);
