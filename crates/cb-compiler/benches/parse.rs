//! Benchmarks for filter list parsing throughput.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use cb_compiler::parse_list;

/// Generate a synthetic filter list mixing the supported rule shapes.
fn generate_list(lines: usize) -> String {
    (0..lines)
        .map(|i| match i % 4 {
            0 => format!("||ads{i}.example.com^"),
            1 => format!("||cdn.example.net/banner{i}/*.js^"),
            2 => format!("site{i}.example##.ad-slot-{i}"),
            _ => format!("! comment {i}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_list");

    for size in [1_000, 10_000, 100_000] {
        let list = generate_list(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &list, |b, list| {
            b.iter(|| black_box(parse_list(list)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
