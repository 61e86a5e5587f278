//! Benchmark for ledger growth and read paths.
//!
//! Run with: cargo bench --package stockledger_core --bench ledger_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use stockledger_core::StockLedger;

const FILL: usize = 4096;

fn filled_ledger() -> StockLedger {
    let mut ledger = StockLedger::with_capacity(1).unwrap();
    for i in 0..FILL {
        // Scatter the values so the sort bench sees unordered input.
        let value = i32::try_from((i * 2_654_435_761) % 100_000).unwrap();
        ledger.append(value).unwrap();
    }
    ledger
}

fn benchmark_append_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");
    group.throughput(Throughput::Elements(FILL as u64));
    group.bench_function("append_from_capacity_one", |b| {
        b.iter(|| {
            let mut ledger = StockLedger::with_capacity(1).unwrap();
            for i in 0..FILL {
                ledger.append(black_box(i as i32)).unwrap();
            }
            black_box(ledger.capacity())
        });
    });
    group.finish();
}

fn benchmark_sort(c: &mut Criterion) {
    let ledger = filled_ledger();
    c.bench_function("sort_ascending", |b| {
        b.iter(|| {
            let mut scratch = ledger.clone();
            scratch.sort_ascending();
            black_box(scratch.items()[0])
        });
    });
}

fn benchmark_find_and_stats(c: &mut Criterion) {
    let ledger = filled_ledger();
    c.bench_function("find_absent", |b| {
        b.iter(|| black_box(ledger.find(black_box(-1))));
    });
    c.bench_function("stats", |b| {
        b.iter(|| black_box(ledger.stats().unwrap()));
    });
}

criterion_group!(
    benches,
    benchmark_append_growth,
    benchmark_sort,
    benchmark_find_and_stats
);
criterion_main!(benches);
