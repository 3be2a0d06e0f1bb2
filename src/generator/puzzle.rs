//! Generated puzzle representation

use crate::core::{Pattern, Word};
use serde::Serialize;

/// Number of guesses a finished puzzle presents
pub const GUESSES_PER_PUZZLE: usize = 4;

/// A guess word together with its feedback against the answer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuessRecord {
    /// The guessed word
    pub word: Word,
    /// Feedback the guess receives against the puzzle's answer
    pub pattern: Pattern,
}

impl GuessRecord {
    #[must_use]
    pub const fn new(word: Word, pattern: Pattern) -> Self {
        Self { word, pattern }
    }
}

/// Whether the guesses pin the answer uniquely
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PuzzleStatus {
    /// Exactly one word survives the guesses: the answer
    Optimal,
    /// More than one word survives; the puzzle is playable but ambiguous
    Ambiguous,
}

/// A generated puzzle: the secret answer plus the guesses shown to the player
///
/// Serializes with the answer as a plain string, guesses as
/// `{word, pattern}` objects in selection order, and patterns as arrays of
/// `"green" | "yellow" | "gray"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Puzzle {
    /// The secret answer word
    pub answer: Word,
    /// Guesses in selection order, normally four
    pub guesses: Vec<GuessRecord>,
    /// How many dictionary words are consistent with every guess (≥ 1)
    pub remaining_candidates: usize,
    /// Optimal when `remaining_candidates == 1`
    pub status: PuzzleStatus,
}

impl Puzzle {
    pub(crate) fn new(answer: Word, guesses: Vec<GuessRecord>, remaining_candidates: usize) -> Self {
        let status = if remaining_candidates == 1 {
            PuzzleStatus::Optimal
        } else {
            PuzzleStatus::Ambiguous
        };

        Self {
            answer,
            guesses,
            remaining_candidates,
            status,
        }
    }

    /// True when the guesses identify the answer uniquely
    #[inline]
    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.status == PuzzleStatus::Optimal
    }
}
