//! Benchmarks for query classification and listing comparison.
//!
//! Both paths run synchronously on every chat message, so they should stay
//! well under a millisecond on the bundled catalog.

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use homescout_chat::{ComparisonEngine, ComparisonTable, IntentClassifier};
use homescout_core::{Catalog, Listing};

const QUERIES: &[&str] = &[
    "Show me houses under $500k",
    "3 bedroom homes",
    "What's available in Austin?",
    "Family homes with good schools",
    "Short commute to downtown",
    "Best investment properties",
    "Tell me something nice",
];

fn bench_classify(c: &mut Criterion) {
    let catalog = Catalog::sample().expect("bundled catalog");
    let classifier = IntentClassifier::default();

    let mut group = c.benchmark_group("classify");
    group.measurement_time(Duration::from_secs(5));
    group.bench_function("mixed_queries", |b| {
        b.iter(|| {
            for query in QUERIES {
                let _ = black_box(classifier.classify(black_box(query), &catalog, &[]));
            }
        })
    });
    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let catalog = Catalog::sample().expect("bundled catalog");
    let selection: Vec<Listing> = catalog.iter().take(3).cloned().collect();
    let engine = ComparisonEngine::default();

    let mut group = c.benchmark_group("compare");
    group.bench_function("three_listings", |b| {
        b.iter(|| black_box(engine.compare(black_box(&selection))))
    });
    group.bench_function("three_listings_with_table", |b| {
        b.iter(|| {
            if let Ok(report) = engine.compare(black_box(&selection)) {
                black_box(ComparisonTable::build(&report, engine.formatter()));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_classify, bench_compare);
criterion_main!(benches);
