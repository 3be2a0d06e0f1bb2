//! Word and guess scoring
//!
//! Letter statistics are computed once over the dictionary; every word then
//! gets a static score combining positional letter frequency, letter
//! diversity and the external word-frequency boost. During the search each
//! candidate guess additionally receives a composite score that folds in
//! the information it would gain against the current candidate set.

use super::config::ScoreWeights;
use crate::core::{ALPHABET_LEN, Dictionary, FrequencyTable, Pattern, WORD_LEN, Word, letter_index};

/// Scale divisor applied to raw frequency weights before boosting.
const FREQUENCY_SCALE: f64 = 100.0;

/// Cap on the scaled frequency, so extremely common words cannot dominate.
const FREQUENCY_CAP: f64 = 10.0;

/// Strength of the frequency boost.
const FREQUENCY_BETA: f64 = 0.5;

/// Letter frequencies over a dictionary
///
/// Tracks, for each letter, the fraction of words containing it and the
/// fraction of words carrying it at each position.
#[derive(Debug, Clone)]
pub struct LetterStats {
    letter_freq: [f64; ALPHABET_LEN],
    position_freq: [[f64; WORD_LEN]; ALPHABET_LEN],
}

impl LetterStats {
    /// Compute statistics over every word of the dictionary
    #[must_use]
    pub fn from_dictionary(dictionary: &Dictionary) -> Self {
        let mut containing = [0usize; ALPHABET_LEN];
        let mut at_position = [[0usize; WORD_LEN]; ALPHABET_LEN];

        for word in dictionary.words() {
            for (i, &ch) in word.chars().iter().enumerate() {
                at_position[letter_index(ch)][i] += 1;
            }
            for letter in 0..ALPHABET_LEN {
                if word.counts()[letter] > 0 {
                    containing[letter] += 1;
                }
            }
        }

        let total = dictionary.len() as f64;
        let mut letter_freq = [0.0; ALPHABET_LEN];
        let mut position_freq = [[0.0; WORD_LEN]; ALPHABET_LEN];
        for letter in 0..ALPHABET_LEN {
            letter_freq[letter] = containing[letter] as f64 / total;
            for i in 0..WORD_LEN {
                position_freq[letter][i] = at_position[letter][i] as f64 / total;
            }
        }

        Self {
            letter_freq,
            position_freq,
        }
    }

    /// Fraction of dictionary words containing a letter
    #[inline]
    #[must_use]
    pub const fn letter(&self, letter: u8) -> f64 {
        self.letter_freq[letter_index(letter)]
    }

    /// Fraction of dictionary words with a letter at a position (0-4)
    #[inline]
    #[must_use]
    pub const fn at_position(&self, letter: u8, position: usize) -> f64 {
        self.position_freq[letter_index(letter)][position]
    }

    /// Static score of a word before the frequency boost
    ///
    /// Positional frequency is weighted double; each distinct letter adds
    /// its overall frequency once, so repeated letters earn no extra credit.
    #[must_use]
    pub fn base_score(&self, word: &Word) -> f64 {
        let positional: f64 = word
            .chars()
            .iter()
            .enumerate()
            .map(|(i, &ch)| 2.0 * self.at_position(ch, i))
            .sum();

        let diversity: f64 = (0..ALPHABET_LEN)
            .filter(|&letter| word.counts()[letter] > 0)
            .map(|letter| self.letter_freq[letter])
            .sum();

        positional + diversity
    }
}

/// Full static word score: base score times the frequency boost
///
/// Words absent from the table get a boost factor of exactly 1.
#[must_use]
pub fn word_score(stats: &LetterStats, frequencies: &FrequencyTable, word: &Word) -> f64 {
    let scaled = (frequencies.get(word) / FREQUENCY_SCALE).min(FREQUENCY_CAP);
    stats.base_score(word) * (1.0 + FREQUENCY_BETA * scaled)
}

/// Composite score of a candidate guess during the search
///
/// `info_gain` is the candidate-set shrinkage the guess achieves,
/// `pattern` its feedback against the answer, `frequency_score` the
/// precomputed [`word_score`], and `shared_letters` how many distinct
/// letters it has in common with earlier guesses.
#[must_use]
pub(crate) fn composite_score(
    weights: &ScoreWeights,
    info_gain: usize,
    pattern: Pattern,
    frequency_score: f64,
    shared_letters: u32,
) -> f64 {
    let constraint = weights.green * pattern.count_greens() as f64
        + weights.yellow * pattern.count_yellows() as f64;

    weights.info_gain * info_gain as f64 + constraint + weights.frequency * frequency_score
        - weights.diversity * f64::from(shared_letters)
}
