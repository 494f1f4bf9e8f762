use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fonema_core::{LexiconSource, Phonemizer, Punctuation, UkUaPhonemizer, DEFAULT_UK_PUNCTUATIONS};
use std::sync::Arc;

fn lexicon_phonemizer() -> UkUaPhonemizer {
    let source = LexiconSource::from_entries([
        ("це", vec!["t͡s", "ɛ"]),
        ("тестове", vec!["t", "ɛ", "s", "t", "ˈɔ", "w", "ɛ"]),
        ("речення", vec!["r", "ˈɛ", "t͡ʃ", "ɛ", "nʲː", "a"]),
        ("для", vec!["dʲ", "l", "ʲa"]),
        ("перевірки", vec!["p", "ɛ", "r", "ɛ", "ˈʋ", "i", "r", "k", "ɪ"]),
    ]);
    UkUaPhonemizer::new(Arc::new(source))
}

fn bench_phonemize(c: &mut Criterion) {
    let phonemizer = lexicon_phonemizer();
    let mut group = c.benchmark_group("phonemize");

    let sentence = "Це тестове речення для перевірки.";
    let test_texts = vec![
        ("short", "Це речення".to_string()),
        ("sentence", sentence.to_string()),
        ("long", format!("{sentence} ").repeat(20)),
    ];

    for (name, text) in &test_texts {
        group.bench_with_input(BenchmarkId::new("plain", name), text, |b, text| {
            let stripped = Punctuation::new(DEFAULT_UK_PUNCTUATIONS).strip(text);
            b.iter(|| black_box(phonemizer.phonemize(black_box(&stripped), "|", None).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("with_punctuation", name), text, |b, text| {
            b.iter(|| black_box(phonemizer.phonemize_with_punctuation(black_box(text), "|").unwrap()));
        });
    }

    group.finish();
}

fn bench_punctuation(c: &mut Criterion) {
    let punctuation = Punctuation::new(DEFAULT_UK_PUNCTUATIONS);
    let text = "(Так), звісно! Це тестове речення; для перевірки: чи працює?";

    c.bench_function("strip_to_restore", |b| {
        b.iter(|| black_box(punctuation.strip_to_restore(black_box(text))));
    });
}

criterion_group!(benches, bench_phonemize, bench_punctuation);
criterion_main!(benches);
