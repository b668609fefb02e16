//! Benchmarks for keyrank

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use keyrank::*;

/// Sample abstract for benchmarking
const SAMPLE_TEXT: &str = r#"
Adaptive routing in packet switched networks has been studied with both
statistical and evolutionary techniques. We present a comparison of keyword
extraction models over a corpus of scientific abstracts, combining term
frequency, inverse document frequency, and positional signals into a single
importance score for candidate phrases.

Degree based extraction treats stopwords as phrase boundaries and scores the
surviving content phrases by word co-occurrence. The two approaches are
evaluated against human assigned keyword sets, reporting average, best, and
worst precision per corpus pass.
"#;

fn sample_corpus() -> Corpus {
    Corpus::from_documents(
        (0..8)
            .map(|i| Document::new(format!("doc{}.abstr", i), SAMPLE_TEXT))
            .collect(),
    )
}

fn benchmark_ngram_generation(c: &mut Criterion) {
    let stopwords = StopwordFilter::english();
    let generator = NgramGenerator::new(&stopwords);

    let mut group = c.benchmark_group("ngrams_by_order");
    for n in [1usize, 2, 3].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            b.iter(|| generator.ngrams(black_box(SAMPLE_TEXT), n))
        });
    }
    group.finish();

    let mut group = c.benchmark_group("ngrams_by_size");
    for size in [1, 5, 10].iter() {
        let text = SAMPLE_TEXT.repeat(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| generator.ngrams(black_box(text), 2))
        });
    }
    group.finish();
}

fn benchmark_statistical_scoring(c: &mut Criterion) {
    let corpus = sample_corpus();
    let stopwords = StopwordFilter::english();
    let scorer =
        StatisticalScorer::for_ngrams(&corpus, &stopwords, 2, ExtractionConfig::default())
            .unwrap();

    c.bench_function("statistical_score_document", |b| {
        b.iter(|| scorer.score_document(black_box(0)).unwrap())
    });
}

fn benchmark_rake_scoring(c: &mut Criterion) {
    let stopwords = StopwordFilter::english();

    c.bench_function("rake_score_phrases", |b| {
        b.iter(|| scoring::rake::score_phrases(black_box(SAMPLE_TEXT), &stopwords))
    });
}

fn benchmark_full_evaluation(c: &mut Criterion) {
    let corpus = sample_corpus();
    let references = ReferenceSet::from_keywords(
        (0..corpus.len())
            .map(|_| vec!["adaptive routing".to_string(), "keyword extraction".to_string()])
            .collect(),
    );
    let stopwords = StopwordFilter::english();
    let config = ExtractionConfig::default();

    c.bench_function("run_all_models", |b| {
        b.iter(|| run_all_models(&corpus, &references, &stopwords, black_box(&config)).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_ngram_generation,
    benchmark_statistical_scoring,
    benchmark_rake_scoring,
    benchmark_full_evaluation
);
criterion_main!(benches);
