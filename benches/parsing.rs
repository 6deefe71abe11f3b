//! Benchmarks for chatlens parsing and aggregation.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- parse`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatlens::core::corpus::build_corpus;
use chatlens::core::filter::{FilterConfig, apply_filters};
use chatlens::core::output::to_text;
use chatlens::core::stats::ChatStats;
use chatlens::enrich::enrich_all;
use chatlens::parser::LineParser;
use chatlens::{AnalysisConfig, StatsConfig, analyze};

// =============================================================================
// Test Data Generators
// =============================================================================

fn generate_export(count: usize) -> String {
    let senders = ["Alice", "Bob", "Charlie", "Иван"];
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let sender = senders[i % senders.len()];
        let day = (i / 1440) % 28 + 1;
        let month = (i / (1440 * 28)) % 12 + 1;
        let hour = (i / 60) % 24;
        let minute = i % 60;
        let body = match i % 10 {
            0 => "<Media omitted>".to_string(),
            1 => format!("see https://example.com/{}", i),
            2 => format!("first line {}\nsecond line", i),
            _ => format!("Message number {} with a few words", i),
        };
        lines.push(format!(
            "[{:02}/{:02}/23, {:02}:{:02}:00] {}: {}",
            day, month, hour, minute, sender, body
        ));
    }
    lines.join("\n")
}

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let parser = LineParser::new();

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let txt = generate_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let log = parser.parse_str(black_box(txt)).unwrap();
                black_box(log)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Aggregation Benchmarks
// =============================================================================

fn bench_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("stats");
    let config = StatsConfig::default();

    for size in [1_000_usize, 10_000, 100_000] {
        let log = LineParser::new().parse_str(&generate_export(size)).unwrap();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &log.records, |b, records| {
            b.iter(|| {
                let enriched = enrich_all(records.clone());
                black_box(ChatStats::compute(&enriched, &config))
            });
        });
    }

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    let filter = FilterConfig::new()
        .with_sender("Bob")
        .with_date_from("2023-02-01")
        .unwrap();

    for size in [1_000_usize, 10_000, 100_000] {
        let log = LineParser::new().parse_str(&generate_export(size)).unwrap();
        let records = enrich_all(log.records);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| black_box(apply_filters(records.clone(), &filter).unwrap()));
        });
    }

    group.finish();
}

fn bench_corpus(c: &mut Criterion) {
    let mut group = c.benchmark_group("corpus");

    for size in [1_000_usize, 10_000] {
        let log = LineParser::new().parse_str(&generate_export(size)).unwrap();
        let records = enrich_all(log.records);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| {
                let corpus = build_corpus(black_box(records));
                black_box(corpus.most_common_words(20))
            });
        });
    }

    group.finish();
}

// =============================================================================
// End-to-end Benchmarks
// =============================================================================

fn bench_full_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_report");
    let config = AnalysisConfig::default();

    for size in [1_000_usize, 10_000] {
        let txt = generate_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let report = analyze(black_box(txt), &config).unwrap();
                black_box(to_text(&report))
            });
        });
    }

    group.finish();
}

criterion_group!(parsing, bench_parse);
criterion_group!(aggregation, bench_stats, bench_filter, bench_corpus);
criterion_group!(end_to_end, bench_full_report);
criterion_main!(parsing, aggregation, end_to_end);
