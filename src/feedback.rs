//! Per-round feedback entry and its line format.
//!
//! One round of input is a guessed word plus a feedback mask, entered as
//! `"chair _y__g"`: `_` marks a letter as absent, `y` as present but
//! misplaced, `g` as correctly placed, aligned position by position with
//! the word.

use thiserror::Error;

/// Feedback for a single letter of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// The letter does not occur at this position (gray)
    Absent,
    /// The letter occurs in the word, but elsewhere (yellow)
    Misplaced,
    /// The letter occurs exactly here (green)
    Correct,
}

impl Feedback {
    /// Parse from a mask character (`_`, `y` or `g`).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '_' => Some(Feedback::Absent),
            'y' => Some(Feedback::Misplaced),
            'g' => Some(Feedback::Correct),
            _ => None,
        }
    }

    /// The mask character this feedback is written as.
    pub fn to_char(self) -> char {
        match self {
            Feedback::Absent => '_',
            Feedback::Misplaced => 'y',
            Feedback::Correct => 'g',
        }
    }
}

/// Why an input line was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseInputError {
    #[error("expected a word and a feedback mask separated by a single space")]
    MissingSeparator,
    #[error("the word must be exactly {0} lowercase letters")]
    BadWord(usize),
    #[error("the feedback mask must be exactly {0} characters drawn from '_', 'y' and 'g'")]
    BadMask(usize),
}

/// A validated round of input: the guessed word and one feedback per
/// position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundInput {
    word: String,
    marks: Vec<Feedback>,
}

impl RoundInput {
    /// Parse and validate a `"<word> <mask>"` line for the given word
    /// length. The line is lowercased first, so `"CHAIR _Y__G"` is accepted.
    pub fn parse(line: &str, word_length: usize) -> Result<Self, ParseInputError> {
        let line = line.trim().to_lowercase();
        let (word, mask) = line
            .split_once(' ')
            .ok_or(ParseInputError::MissingSeparator)?;

        if word.chars().count() != word_length || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(ParseInputError::BadWord(word_length));
        }

        let marks: Vec<Feedback> = mask
            .chars()
            .map(Feedback::from_char)
            .collect::<Option<_>>()
            .ok_or(ParseInputError::BadMask(word_length))?;
        if marks.len() != word_length {
            return Err(ParseInputError::BadMask(word_length));
        }

        Ok(Self {
            word: word.to_string(),
            marks,
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn marks(&self) -> &[Feedback] {
        &self.marks
    }

    /// Iterate the round as (position, letter, feedback) triples.
    pub fn entries(&self) -> impl Iterator<Item = (usize, char, Feedback)> + '_ {
        self.word
            .chars()
            .zip(self.marks.iter().copied())
            .enumerate()
            .map(|(pos, (letter, mark))| (pos, letter, mark))
    }
}
