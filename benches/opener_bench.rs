use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use wordle_assistant::opener::best_starting_pair;
use wordle_assistant::LetterOccurrences;

/// Deterministic pseudo-words so the bench needs no dictionary file.
fn synthetic_words(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            (0..5)
                .map(|p| char::from(b'a' + ((i * (p + 7) + p * 3) % 26) as u8))
                .collect()
        })
        .collect()
}

fn bench_pair_search(c: &mut Criterion) {
    let words = synthetic_words(250);
    let occurrences = LetterOccurrences::tally(&words);

    c.bench_function("best_starting_pair_250", |b| {
        b.iter(|| best_starting_pair(black_box(&words), black_box(&occurrences)))
    });
}

criterion_group!(benches, bench_pair_search);
criterion_main!(benches);
