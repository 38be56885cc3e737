//! Criterion benchmarks for loading and querying a config store.
//!
//! Run with:
//! ```bash
//! cargo bench --package kvconf-core --bench parse_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kvconf_core::format::{parse_entries, serialize_entries};
use kvconf_core::{ConfigStore, MemoryBackend};

fn make_text(entries: usize) -> String {
    (0..entries)
        .map(|i| format!("  key_{i} = value number {i}\r\n"))
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_entries");
    for size in [10usize, 100, 1_000] {
        let text = make_text(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| parse_entries(black_box(text)))
        });
    }
    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let entries = parse_entries(&make_text(1_000));
    c.bench_function("serialize_entries_1000", |b| {
        b.iter(|| serialize_entries(black_box(&entries)))
    });
}

fn bench_typed_lookup(c: &mut Criterion) {
    let backend = MemoryBackend::new();
    backend.insert("bench.conf", "width=1920\nratio=1.777778\nfullscreen=yes\n");
    let store = ConfigStore::with_backend("bench.conf", backend);

    c.bench_function("get_int", |b| {
        b.iter(|| store.get_int(black_box("width"), 0))
    });
    c.bench_function("get_double", |b| {
        b.iter(|| store.get_double(black_box("ratio"), 0.0))
    });
    c.bench_function("get_bool", |b| {
        b.iter(|| store.get_bool(black_box("fullscreen"), false))
    });
}

criterion_group!(benches, bench_parse, bench_serialize, bench_typed_lookup);
criterion_main!(benches);
