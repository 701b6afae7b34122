//! bn254 group operation benchmarks.

use bn254::{Fr, G1Projective, G2Projective};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_g1(c: &mut Criterion) {
    let mut group = c.benchmark_group("g1");
    let p = G1Projective::GENERATOR * Fr::from(7u64);
    let q = G1Projective::GENERATOR * Fr::from(11u64);
    let k = Fr::from_be_hex("26b46609e75849ed9680875d1870eaafea4b5d35cb8888a2dbdef8488190cfec");

    group.bench_function("add", |b| b.iter(|| black_box(p) + black_box(q)));
    group.bench_function("double", |b| b.iter(|| black_box(p).double()));
    group.bench_function("mul", |b| b.iter(|| black_box(p) * black_box(k)));
    group.bench_function("to_affine", |b| b.iter(|| black_box(p).to_affine()));
    group.finish();
}

fn bench_g2(c: &mut Criterion) {
    let mut group = c.benchmark_group("g2");
    let p = G2Projective::GENERATOR * Fr::from(7u64);
    let q = G2Projective::GENERATOR * Fr::from(11u64);
    let k = Fr::from_be_hex("26b46609e75849ed9680875d1870eaafea4b5d35cb8888a2dbdef8488190cfec");

    group.bench_function("add", |b| b.iter(|| black_box(p) + black_box(q)));
    group.bench_function("double", |b| b.iter(|| black_box(p).double()));
    group.bench_function("mul", |b| b.iter(|| black_box(p) * black_box(k)));
    group.finish();
}

criterion_group!(benches, bench_g1, bench_g2);
criterion_main!(benches);
