use criterion::{criterion_group, criterion_main, Criterion};
use normaudit::analysis::{analyze_normalization_patterns, analyze_script_preservation};
use normaudit::loader::Record;
use normaudit::script::{classify, scripts_in_text};
use std::hint::black_box;

const SAMPLES: [(&str, &str); 6] = [
    ("Иван Петров", "Ivan Petrov"),
    ("山田太郎", "山田太郎"),
    ("Smith, John", "John Smith"),
    ("ACME PUBLISHING LTD", "ACME"),
    ("Ελένη Παπαδοπούλου", "Eleni Papadopoulou"),
    ("Beyoncé Knowles", "Beyonce Knowles"),
];

fn build_records(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            let (raw, clean) = SAMPLES[i % SAMPLES.len()];
            Record::new(raw, clean)
        })
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let text: Vec<char> = SAMPLES.iter().flat_map(|(raw, _)| raw.chars()).collect();
    c.bench_function("classify_chars", |b| {
        b.iter(|| {
            for &ch in &text {
                black_box(classify(black_box(ch)));
            }
        })
    });
}

fn bench_extract(c: &mut Criterion) {
    c.bench_function("scripts_in_text", |b| {
        b.iter(|| {
            for (raw, _) in SAMPLES {
                black_box(scripts_in_text(black_box(raw)));
            }
        })
    });
}

fn bench_analyzers(c: &mut Criterion) {
    let records = build_records(20_000);
    c.bench_function("script_preservation_10k", |b| {
        b.iter(|| black_box(analyze_script_preservation(&records, 10_000)))
    });
    c.bench_function("normalization_patterns_10k", |b| {
        b.iter(|| black_box(analyze_normalization_patterns(&records, 10_000).unwrap()))
    });
}

criterion_group!(benches, bench_classify, bench_extract, bench_analyzers);
criterion_main!(benches);
