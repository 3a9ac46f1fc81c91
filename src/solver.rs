//! Accumulated feedback constraints and candidate filtering.
//!
//! `ConstraintState` carries everything learned from the rounds played so
//! far and compiles into a matching predicate. The candidate set is always
//! recomputed from the full dictionary against the whole accumulated state,
//! never maintained incrementally.

use crate::feedback::{Feedback, RoundInput};

/// Knowledge accumulated across all accepted rounds.
///
/// All parts grow monotonically: letters are only ever added to the
/// forbidden, required and per-position misplaced sets, and a position's
/// known-correct letter is never unset.
///
/// A letter marked absent at one position joins the GLOBAL forbidden set
/// even when the same round marks it correct or misplaced elsewhere. Such
/// words stay matchable anyway: a known-correct position is checked by
/// equality alone, and the required-letter check is independent of the
/// per-position exclusions. This mirrors the inherent duplicate-letter
/// ambiguity of the feedback encoding.
#[derive(Debug, Clone)]
pub struct ConstraintState {
    word_length: usize,
    known_correct: Vec<Option<char>>,
    forbidden: Vec<char>,
    misplaced_at: Vec<Vec<char>>,
    required: Vec<char>,
}

impl ConstraintState {
    /// An empty state for words of the given length.
    pub fn new(word_length: usize) -> Self {
        Self {
            word_length,
            known_correct: vec![None; word_length],
            forbidden: Vec::new(),
            misplaced_at: vec![Vec::new(); word_length],
            required: Vec::new(),
        }
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Fold one accepted round into the state.
    pub fn apply(&mut self, input: &RoundInput) {
        debug_assert_eq!(input.marks().len(), self.word_length);

        for (pos, letter, mark) in input.entries() {
            match mark {
                Feedback::Absent => push_unique(&mut self.forbidden, letter),
                Feedback::Misplaced => {
                    push_unique(&mut self.required, letter);
                    push_unique(&mut self.misplaced_at[pos], letter);
                }
                Feedback::Correct => self.known_correct[pos] = Some(letter),
            }
        }
    }

    /// Does a word satisfy every accumulated constraint?
    pub fn matches(&self, word: &str) -> bool {
        if word.chars().count() != self.word_length {
            return false;
        }

        for (pos, letter) in word.chars().enumerate() {
            match self.known_correct[pos] {
                Some(required) => {
                    if letter != required {
                        return false;
                    }
                }
                None => {
                    if self.forbidden.contains(&letter)
                        || self.misplaced_at[pos].contains(&letter)
                    {
                        return false;
                    }
                }
            }
        }

        self.required.iter().all(|&letter| word.contains(letter))
    }

    /// The subsequence of `words` consistent with the state, in the order
    /// given. Pure in (words, state); running it again returns the same
    /// sequence.
    pub fn filter_candidates<'a, S: AsRef<str>>(&self, words: &'a [S]) -> Vec<&'a str> {
        words
            .iter()
            .map(AsRef::as_ref)
            .filter(|word| self.matches(word))
            .collect()
    }

    pub fn known_correct(&self) -> &[Option<char>] {
        &self.known_correct
    }

    pub fn forbidden_letters(&self) -> &[char] {
        &self.forbidden
    }

    pub fn required_letters(&self) -> &[char] {
        &self.required
    }

    /// Letters known to be in the word but not at this position.
    pub fn misplaced_at(&self, pos: usize) -> &[char] {
        &self.misplaced_at[pos]
    }
}

fn push_unique(letters: &mut Vec<char>, letter: char) {
    if !letters.contains(&letter) {
        letters.push(letter);
    }
}
