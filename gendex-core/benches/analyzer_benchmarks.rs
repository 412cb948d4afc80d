//! Throughput benchmarks for the analyzer
//!
//! Run with: cargo bench --bench analyzer_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gendex_core::{aggregate, tokenize, Config, GenderAnalyzer, Lexicon};
use std::hint::black_box;

/// Generate text of roughly `size` bytes mixing all four categories
fn generate_text(size: usize) -> String {
    let base = "He walked to the market. Her sister bought bread. \
                The weather was mild. My brother and sister waved. ";
    let mut text = base.repeat(size / base.len() + 1);
    text.truncate(size);
    text
}

fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");
    let analyzer = GenderAnalyzer::new();

    for size in [1024, 10_240, 102_400, 1_024_000] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("analyze", size), &text, |b, text| {
            b.iter(|| analyzer.analyze(black_box(text)));
        });
    }

    group.finish();
}

fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");
    let text = generate_text(102_400);
    let sentences = tokenize(&text);

    group.bench_function("tokenize", |b| b.iter(|| tokenize(black_box(&text))));
    group.bench_function("aggregate", |b| {
        b.iter(|| aggregate(black_box(&sentences), Lexicon::builtin()))
    });

    group.finish();
}

fn bench_batch_threads(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_threads");
    let texts: Vec<String> = (0..256).map(|_| generate_text(4096)).collect();

    for threads in [1, 2, 4, 8] {
        let config = Config::builder().threads(Some(threads)).build().unwrap();
        let analyzer = GenderAnalyzer::with_config(config).unwrap();

        group.throughput(Throughput::Elements(texts.len() as u64));
        group.bench_with_input(BenchmarkId::new("threads", threads), &texts, |b, texts| {
            b.iter(|| analyzer.analyze_batch(black_box(texts)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_text_sizes, bench_stages, bench_batch_threads);
criterion_main!(benches);
