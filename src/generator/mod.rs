//! Puzzle generation
//!
//! The [`Generator`] owns everything a search needs: the dictionary, the
//! frequency table, letter statistics, precomputed word scores, the curated
//! guess pool and a seedable RNG. One generator produces any number of
//! puzzles; every `generate` call runs an independent search with its own
//! memo cache. Generators are cheap enough to build per thread, and all
//! inputs stay immutable after construction, so running several in
//! parallel only requires giving each its own instance.

pub mod config;
pub mod filter;
pub mod scoring;

mod cache;
mod curator;
mod puzzle;
mod search;

pub use config::{GeneratorConfig, ScoreWeights};
pub use puzzle::{GUESSES_PER_PUZZLE, GuessRecord, Puzzle, PuzzleStatus};
pub use scoring::LetterStats;

use crate::core::{Dictionary, FrequencyTable, Pattern, Word, WordError, WordId};
use rand::SeedableRng;
use rand::rngs::StdRng;
use search::SearchDriver;
use std::fmt;

/// Error type for puzzle generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// The requested answer is not a valid five-letter word
    InvalidAnswer(WordError),
    /// The requested answer is valid but not in the dictionary
    UnknownAnswer(String),
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAnswer(err) => write!(f, "Invalid answer word: {err}"),
            Self::UnknownAnswer(text) => {
                write!(f, "Answer '{text}' is not in the dictionary")
            }
        }
    }
}

impl std::error::Error for GeneratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidAnswer(err) => Some(err),
            Self::UnknownAnswer(_) => None,
        }
    }
}

/// Standalone feedback helper for the request layer
///
/// # Errors
/// Returns `WordError` when either argument is not a valid five-letter word.
///
/// # Examples
/// ```
/// use wordle_forge::core::Color;
/// use wordle_forge::generator::feedback;
///
/// let pattern = feedback("crane", "slate").unwrap();
/// assert_eq!(pattern.color_at(2), Color::Green);
/// ```
pub fn feedback(guess: &str, answer: &str) -> Result<Pattern, WordError> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;
    Ok(Pattern::calculate(&guess, &answer))
}

/// Puzzle generator
///
/// Construction precomputes letter statistics, word scores and the curated
/// pool; generation afterwards allocates only per-call state.
pub struct Generator {
    dictionary: Dictionary,
    frequencies: FrequencyTable,
    stats: LetterStats,
    scores: Vec<f64>,
    pool: Vec<WordId>,
    config: GeneratorConfig,
    rng: StdRng,
}

impl Generator {
    /// Build a generator over a dictionary and frequency table
    ///
    /// With `config.seed` set, generation for a fixed answer is fully
    /// deterministic.
    #[must_use]
    pub fn new(
        dictionary: Dictionary,
        frequencies: FrequencyTable,
        config: GeneratorConfig,
    ) -> Self {
        let stats = LetterStats::from_dictionary(&dictionary);
        let scores: Vec<f64> = dictionary
            .words()
            .iter()
            .map(|word| scoring::word_score(&stats, &frequencies, word))
            .collect();

        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or_else(rand::random));
        let pool = curator::curate_pool(&dictionary, &scores, &config, &mut rng);

        Self {
            dictionary,
            frequencies,
            stats,
            scores,
            pool,
            config,
            rng,
        }
    }

    /// Generate a puzzle
    ///
    /// With `answer` given, that word becomes the secret; otherwise one is
    /// drawn weighted by the frequency table. The returned puzzle always
    /// carries the guesses in selection order and the exact number of
    /// dictionary words consistent with all of them.
    ///
    /// A search that never pins the answer uniquely is not an error: the
    /// best attempt is returned with `remaining_candidates > 1` and status
    /// [`PuzzleStatus::Ambiguous`].
    ///
    /// # Errors
    /// Returns [`GeneratorError`] when the requested answer is malformed or
    /// not a dictionary word.
    pub fn generate(&mut self, answer: Option<&str>) -> Result<Puzzle, GeneratorError> {
        let driver = SearchDriver {
            dictionary: &self.dictionary,
            frequencies: &self.frequencies,
            scores: &self.scores,
            pool: &self.pool,
            config: &self.config,
        };

        let answer_id = match answer {
            Some(text) => {
                let word = Word::new(text).map_err(GeneratorError::InvalidAnswer)?;
                self.dictionary
                    .id_of(word.text())
                    .ok_or_else(|| GeneratorError::UnknownAnswer(word.text().to_string()))?
            }
            None => driver.pick_answer(&mut self.rng),
        };

        Ok(driver.run(answer_id, &mut self.rng))
    }

    /// Dictionary words consistent with every given record, in lexicographic
    /// order for stable client display
    #[must_use]
    pub fn filter_dictionary(&self, records: &[GuessRecord]) -> Vec<Word> {
        let ids = filter::filter_all(&self.dictionary, records);
        let mut words: Vec<Word> = ids
            .into_iter()
            .map(|id| self.dictionary.word(id).clone())
            .collect();
        words.sort_by(|a, b| a.text().cmp(b.text()));
        words
    }

    /// The dictionary this generator draws from
    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The frequency table in use
    #[must_use]
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// Letter statistics over the dictionary
    #[must_use]
    pub fn letter_stats(&self) -> &LetterStats {
        &self.stats
    }

    /// The active configuration
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The curated guess pool, most informative words first
    #[must_use]
    pub fn curated_pool(&self) -> &[WordId] {
        &self.pool
    }
}
