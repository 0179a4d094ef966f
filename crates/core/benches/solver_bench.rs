//! Benchmarks for the prefix proof-of-work solver

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pow_core::{NonceHasher, Solver, SolverConfig, message_digest};

fn bench_digest(c: &mut Criterion) {
    let mut hasher = NonceHasher::new(b"benchmark prefix for the pow solver");

    c.bench_function("nonce_digest", |b| {
        let mut nonce: u64 = 0;
        b.iter(|| {
            nonce = nonce.wrapping_add(1);
            hasher.digest(black_box(nonce))
        })
    });

    c.bench_function("message_digest_one_shot", |b| {
        b.iter(|| message_digest(black_box("benchmark prefix for the pow solver"), black_box(123_456)))
    });
}

fn bench_solve(c: &mut Criterion) {
    let solver = Solver::new(SolverConfig::new("abc", 12)).unwrap();

    c.bench_function("solve_abc_12", |b| b.iter(|| black_box(&solver).solve()));
}

criterion_group!(benches, bench_digest, bench_solve);
criterion_main!(benches);
