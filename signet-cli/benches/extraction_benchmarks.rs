use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use signet_core::config::SignetConfig;
use signet_core::types::InteractionRecord;
use signet_core::NetworkExtractor;

use criterion_config::configure_criterion;

/// Build a synthetic interaction table with a realistic mix of undirected,
/// unpolarized, contradictory, and duplicate records.
fn synthetic_records(count: usize) -> Vec<InteractionRecord> {
    (0..count)
        .map(|i| InteractionRecord {
            source: format!("G{}", i % 997),
            target: format!("G{}", (i * 31 + 7) % 997),
            is_directed: i % 3 != 0,
            is_stimulation: i % 2 == 0,
            is_inhibition: i % 5 == 0,
        })
        .collect()
}

fn bench_extraction(c: &mut Criterion) {
    let extractor = NetworkExtractor::new(SignetConfig::default());

    let mut group = c.benchmark_group("extract_records");
    for size in [1_000usize, 10_000, 100_000] {
        let records = synthetic_records(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| extractor.extract_records(black_box(records)));
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = configure_criterion();
    targets = bench_extraction
}
criterion_main!(benches);
