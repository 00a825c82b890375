use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rotation::strategy::{
    rotate_with, BitPacked, Bidirectional, Forward, RandomAccess,
};
use rotation::PackedBits;

const LEN: usize = 100_000;

pub fn elements(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let data: Vec<u64> = (0..LEN).map(|_| rng.gen()).collect();
    let mut g = c.benchmark_group("elements");

    for middle in [1, LEN / 3, LEN / 2] {
        g.bench_with_input(BenchmarkId::new("forward", middle), &middle, |b, &m| {
            let mut v = data.clone();
            b.iter(|| rotate_with::<Forward, _>(black_box(&mut v), 0, m, LEN))
        });
        g.bench_with_input(
            BenchmarkId::new("bidirectional", middle),
            &middle,
            |b, &m| {
                let mut v = data.clone();
                b.iter(|| {
                    rotate_with::<Bidirectional, _>(black_box(&mut v), 0, m, LEN)
                })
            },
        );
        g.bench_with_input(
            BenchmarkId::new("random-access", middle),
            &middle,
            |b, &m| {
                let mut v = data.clone();
                b.iter(|| {
                    rotate_with::<RandomAccess, _>(black_box(&mut v), 0, m, LEN)
                })
            },
        );
    }

    g.finish();
}

pub fn bits(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let data = PackedBits::random(&mut rng, LEN);
    let mut g = c.benchmark_group("bits");

    for middle in [3, LEN / 3 + 5, LEN / 2] {
        g.bench_with_input(BenchmarkId::new("packed", middle), &middle, |b, &m| {
            let mut bits = data.clone();
            b.iter(|| rotate_with::<BitPacked, _>(black_box(&mut bits), 0, m, LEN))
        });
        g.bench_with_input(
            BenchmarkId::new("per-bit", middle),
            &middle,
            |b, &m| {
                let mut bits = data.clone();
                b.iter(|| {
                    rotate_with::<RandomAccess, _>(black_box(&mut bits), 0, m, LEN)
                })
            },
        );
    }

    g.finish();
}

criterion_group!(rotation_comparison, elements, bits);
criterion_main!(rotation_comparison);
