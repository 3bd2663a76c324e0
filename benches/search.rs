use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use searching_rs::{
    count_subrange, find_bytes, find_subrange, find_subrange_indexed, group, uniq,
    BoyerMooreFinder, InputRange,
};

/// Generate English-like text with the needle only at the very end
fn generate_text(size: usize) -> Vec<u8> {
    let pattern = b"the quick brown fox jumps over the lazy dog ";
    let mut result: Vec<u8> = pattern.iter().copied().cycle().take(size).collect();
    result.extend_from_slice(b"needle in a haystack");
    result
}

/// Generate low-entropy data made of long runs
fn generate_runs(size: usize) -> Vec<u8> {
    let mut result = Vec::with_capacity(size);
    let mut seed = 12345u64;

    while result.len() < size {
        // Simple LCG random
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        let value = (seed >> 16) as u8 % 4;
        let run = 1 + (seed >> 24) as usize % 16;
        result.extend(std::iter::repeat(value).take(run));
    }
    result.truncate(size);
    result
}

fn bench_subrange_search(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 100_000];
    let needle = b"needle in a haystack";
    let mut group = c.benchmark_group("subrange_search");

    for size in sizes.iter() {
        let data = generate_text(*size);

        group.bench_with_input(BenchmarkId::new("generic", size), &data, |b, data| {
            b.iter(|| find_subrange(black_box(&data[..]), black_box(&needle[..])).len())
        });

        group.bench_with_input(BenchmarkId::new("indexed", size), &data, |b, data| {
            b.iter(|| find_subrange_indexed(black_box(&data[..]), black_box(&needle[..])).len())
        });

        group.bench_with_input(BenchmarkId::new("boyer_moore", size), &data, |b, data| {
            let finder = BoyerMooreFinder::new(needle);
            b.iter(|| finder.find_in(black_box(&data[..])).len())
        });

        group.bench_with_input(BenchmarkId::new("memmem", size), &data, |b, data| {
            b.iter(|| find_bytes(black_box(data), black_box(needle)).len())
        });
    }

    group.finish();
}

fn bench_counting(c: &mut Criterion) {
    let data = generate_text(100_000);

    c.bench_function("count_subrange_100k", |b| {
        b.iter(|| count_subrange(black_box(&data[..]), black_box(&b"the"[..])))
    });
}

fn bench_grouping(c: &mut Criterion) {
    let sizes = [1_000, 100_000];
    let mut group_bench = c.benchmark_group("grouping");

    for size in sizes.iter() {
        let data = generate_runs(*size);

        group_bench.bench_with_input(BenchmarkId::new("uniq", size), &data, |b, data| {
            b.iter(|| uniq(black_box(&data[..])).elements().count())
        });

        group_bench.bench_with_input(BenchmarkId::new("group", size), &data, |b, data| {
            b.iter(|| group(black_box(&data[..])).elements().count())
        });
    }

    group_bench.finish();
}

criterion_group!(benches, bench_subrange_search, bench_counting, bench_grouping);
criterion_main!(benches);
