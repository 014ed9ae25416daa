//! Basic benchmarks for the `simple_vec` crate.
#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;
use std::iter;
use std::time::Instant;

use criterion::{Criterion, criterion_group, criterion_main};
use simple_vec::{SimpleVec, reserve};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

type TestItem = usize;
const TEST_VALUE: TestItem = 1024;

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("sv_basic");

    group.bench_function("build_empty", |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                drop(black_box(SimpleVec::<TestItem>::new()));
            }

            start.elapsed()
        });
    });

    group.bench_function("push_first", |b| {
        b.iter_custom(|iters| {
            let mut sequences = iter::repeat_with(SimpleVec::<TestItem>::new)
                .take(usize::try_from(iters).unwrap())
                .collect::<Vec<_>>();

            let start = Instant::now();

            for sequence in &mut sequences {
                sequence.push_back(black_box(TEST_VALUE));
            }

            start.elapsed()
        });
    });

    group.bench_function("push_reserved", |b| {
        b.iter_custom(|iters| {
            let mut sequences = iter::repeat_with(|| SimpleVec::<TestItem>::from(reserve(1)))
                .take(usize::try_from(iters).unwrap())
                .collect::<Vec<_>>();

            let start = Instant::now();

            for sequence in &mut sequences {
                sequence.push_back(black_box(TEST_VALUE));
            }

            start.elapsed()
        });
    });

    group.bench_function("at", |b| {
        b.iter_custom(|iters| {
            let sequence = SimpleVec::from_elem(100, TEST_VALUE);

            let start = Instant::now();

            for _ in 0..iters {
                _ = black_box(sequence.at(black_box(50)));
            }

            start.elapsed()
        });
    });

    group.bench_function("insert_front_of_100", |b| {
        b.iter_custom(|iters| {
            let mut sequences = iter::repeat_with(|| {
                let mut sequence = SimpleVec::from_elem(100, TEST_VALUE);
                sequence.reserve(101);
                sequence
            })
            .take(usize::try_from(iters).unwrap())
            .collect::<Vec<_>>();

            let start = Instant::now();

            for sequence in &mut sequences {
                _ = black_box(sequence.insert(0, black_box(TEST_VALUE)));
            }

            start.elapsed()
        });
    });

    group.bench_function("erase_front_of_100", |b| {
        b.iter_custom(|iters| {
            let mut sequences = iter::repeat_with(|| SimpleVec::from_elem(100, TEST_VALUE))
                .take(usize::try_from(iters).unwrap())
                .collect::<Vec<_>>();

            let start = Instant::now();

            for sequence in &mut sequences {
                _ = black_box(sequence.erase(0));
            }

            start.elapsed()
        });
    });

    group.finish();

    let mut group = c.benchmark_group("sv_slow");

    group.bench_function("push_10k", |b| {
        b.iter(|| {
            let mut sequence = SimpleVec::<TestItem>::new();

            for _ in 0..10_000 {
                sequence.push_back(black_box(TEST_VALUE));
            }

            sequence
        });
    });

    group.bench_function("clone_10k", |b| {
        let sequence = SimpleVec::from_elem(10_000, TEST_VALUE);

        b.iter(|| black_box(&sequence).clone());
    });

    group.finish();
}
