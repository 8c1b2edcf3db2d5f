//! Combinator chain benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use strand::*;

fn benchmark_filter_chain(c: &mut Criterion) {
    c.bench_function("filter_chain_10k", |b| {
        b.iter(|| {
            let evens = filter(from_iter(0u64..10_000), (), |_, n: u64| {
                (n % 2 == 0).then_some(n)
            });
            let scaled = filter(evens, 3u64, |k, n: u64| Some(n * *k));
            let mut bounded = filter_control(scaled, (), |_, upstream| {
                upstream.enumerate().filter(|&n| n < 25_000)
            });
            let mut sum = 0u64;
            while let Some(n) = bounded.enumerate() {
                sum += n;
            }
            black_box(sum)
        });
    });
}

fn benchmark_nested_sparse(c: &mut Criterion) {
    c.bench_function("nested_sparse_10k", |b| {
        b.iter(|| {
            let flat = nested(from_iter(0u32..10_000), (), |_, n: u32| {
                if n % 10 == 0 {
                    Some(from_iter(vec![n; 3]).boxed())
                } else {
                    Some(empty().boxed())
                }
            });
            black_box(flat.into_iter().count())
        });
    });
}

criterion_group!(benches, benchmark_filter_chain, benchmark_nested_sparse);
criterion_main!(benches);
