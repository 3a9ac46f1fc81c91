//! # Wordle Assistant
//!
//! An interactive helper for word-guessing games: it narrows a dictionary of
//! fixed-length words down to the candidates consistent with the letter
//! feedback accumulated across rounds, and recommends strong opening guesses
//! from a one-time letter-frequency analysis of the dictionary.

pub mod dictionary;
pub mod feedback;
pub mod frequency;
pub mod opener;
pub mod solver;

pub use feedback::{Feedback, ParseInputError, RoundInput};
pub use frequency::LetterOccurrences;
pub use solver::ConstraintState;

/// Default word length when none is configured
pub const DEFAULT_WORD_LENGTH: usize = 5;
