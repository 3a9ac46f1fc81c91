//! Opening-guess recommendations based on letter coverage.
//!
//! A word is worth the sum of the occurrence counts of its distinct letters,
//! so a strong opener probes as much of the dictionary's letter mass as
//! possible. The pair search scores the union of both words' letter sets the
//! same way.

use rayon::prelude::*;

use crate::frequency::{LetterOccurrences, ALPHABET_LEN};

/// Coverage value of a single word: each distinct letter contributes its
/// global occurrence count once, however often it repeats in the word.
pub fn word_value(word: &str, occurrences: &LetterOccurrences) -> u32 {
    mask_value(letter_mask(word), occurrences)
}

/// The word of highest coverage value. Ties go to the first word in
/// dictionary order.
pub fn best_starting_word<'a, S: AsRef<str>>(
    words: &'a [S],
    occurrences: &LetterOccurrences,
) -> Option<&'a str> {
    let mut best: Option<(&str, u32)> = None;
    for word in words {
        let word = word.as_ref();
        let value = word_value(word, occurrences);
        if best.map_or(true, |(_, best_value)| value > best_value) {
            best = Some((word, value));
        }
    }
    best.map(|(word, _)| word)
}

/// One (i, j) pair under consideration during the exhaustive search.
#[derive(Debug, Clone, Copy)]
struct PairCandidate {
    i: usize,
    j: usize,
    value: u32,
    best_single: u32,
}

/// Does `a` beat `b` under the pair ranking?
///
/// Higher combined value wins; on equal value the pair whose stronger
/// member has the higher individual value wins; remaining ties go to the
/// earlier (i, j) in scan order.
fn beats(a: &PairCandidate, b: &PairCandidate) -> bool {
    if a.value != b.value {
        return a.value > b.value;
    }
    if a.best_single != b.best_single {
        return a.best_single > b.best_single;
    }
    (a.i, a.j) < (b.i, b.j)
}

/// The unordered pair of distinct words with the highest combined coverage.
///
/// Exhaustive over all pairs, which is quadratic in the dictionary size and
/// noticeably slow on large lists; the outer loop is partitioned across the
/// rayon pool and reduced with the same ranking the sequential scan uses,
/// so the winner is identical either way. The returned pair is ordered by
/// descending individual value; on equal values the second word comes first.
pub fn best_starting_pair<'a, S: AsRef<str> + Sync>(
    words: &'a [S],
    occurrences: &LetterOccurrences,
) -> Option<(&'a str, &'a str)> {
    if words.len() < 2 {
        return None;
    }

    let masks: Vec<u32> = words.iter().map(|w| letter_mask(w.as_ref())).collect();
    let singles: Vec<u32> = masks.iter().map(|&m| mask_value(m, occurrences)).collect();

    let best = (0..words.len() - 1)
        .into_par_iter()
        .map(|i| {
            let mut local: Option<PairCandidate> = None;
            for j in i + 1..words.len() {
                let candidate = PairCandidate {
                    i,
                    j,
                    value: mask_value(masks[i] | masks[j], occurrences),
                    best_single: singles[i].max(singles[j]),
                };
                if local.map_or(true, |current| beats(&candidate, &current)) {
                    local = Some(candidate);
                }
            }
            local
        })
        .reduce(
            || None,
            |a, b| match (a, b) {
                (Some(a), Some(b)) => Some(if beats(&a, &b) { a } else { b }),
                (winner, None) | (None, winner) => winner,
            },
        )?;

    let (first, second) = (words[best.i].as_ref(), words[best.j].as_ref());
    if singles[best.i] > singles[best.j] {
        Some((first, second))
    } else {
        Some((second, first))
    }
}

/// 26-bit set of the distinct letters in a word.
fn letter_mask(word: &str) -> u32 {
    let mut mask = 0u32;
    for b in word.bytes().filter(u8::is_ascii_lowercase) {
        mask |= 1 << (b - b'a');
    }
    mask
}

/// Sum the occurrence counts of every letter present in the mask.
fn mask_value(mask: u32, occurrences: &LetterOccurrences) -> u32 {
    (0..ALPHABET_LEN)
        .filter(|i| mask & (1 << i) != 0)
        .map(|i| occurrences.count(char::from(b'a' + i as u8)))
        .sum()
}
