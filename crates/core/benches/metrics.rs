use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use mensura_core::{Dictionaries, compute_metrics, count_syllables, extract_article, segment_sentences, tokenize_words};

fn fixture_text() -> String {
    let article = std::fs::read_to_string("../../tests/fixtures/texts/101.txt").unwrap();
    article.repeat(200)
}

fn bench_tokenize(c: &mut Criterion) {
    let text = fixture_text();

    let mut group = c.benchmark_group("tokenize");
    group.bench_with_input(BenchmarkId::new("sentences", text.len()), &text, |b, text| {
        b.iter(|| segment_sentences(black_box(text)))
    });
    group.bench_with_input(BenchmarkId::new("words", text.len()), &text, |b, text| {
        b.iter(|| tokenize_words(black_box(text)))
    });
    group.finish();
}

fn bench_syllables(c: &mut Criterion) {
    c.bench_function("count_syllables", |b| {
        b.iter(|| count_syllables(black_box("internationalization")))
    });
}

fn bench_metrics(c: &mut Criterion) {
    let dictionaries = Dictionaries::from_data_dir("../../tests/fixtures/data").unwrap();
    let text = fixture_text();

    c.bench_function("compute_metrics", |b| {
        b.iter(|| compute_metrics(black_box(&text), black_box(&dictionaries)))
    });
}

fn bench_extract(c: &mut Criterion) {
    let html = std::fs::read_to_string("../../tests/fixtures/article.html").unwrap();

    c.bench_function("extract_article", |b| b.iter(|| extract_article(black_box(&html))));
}

criterion_group!(benches, bench_tokenize, bench_syllables, bench_metrics, bench_extract);
criterion_main!(benches);
