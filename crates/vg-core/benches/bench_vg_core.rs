use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vg_core::Language;

fn sample(size_kb: usize) -> String {
    let base = "Attack at dawn, hold the bridge until 1200 and then fall back to the river. ";
    let mut text = String::with_capacity(size_kb * 1024);
    while text.len() < size_kb * 1024 {
        text.push_str(base);
    }
    text.truncate(size_kb * 1024);
    text
}

fn bench_index_of(c: &mut Criterion) {
    let alphabet = Language::Russian.alphabet();
    let symbols: Vec<char> = "съешьже ещё этих мягких французских булок 0123".chars().collect();
    c.bench_function("index_of_russian", |b| {
        b.iter(|| {
            for &s in &symbols {
                black_box(alphabet.index_of(black_box(s)));
            }
        })
    });
}

fn bench_filter(c: &mut Criterion) {
    let alphabet = Language::English.alphabet();
    let text_10k = sample(10);
    let text_100k = sample(100);
    c.bench_function("filter_english_10kb", |b| {
        b.iter(|| black_box(alphabet.filter(black_box(&text_10k))))
    });
    c.bench_function("filter_english_100kb", |b| {
        b.iter(|| black_box(alphabet.filter(black_box(&text_100k))))
    });
}

criterion_group!(benches, bench_index_of, bench_filter);
criterion_main!(benches);
