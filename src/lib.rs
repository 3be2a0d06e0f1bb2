//! Wordle Forge
//!
//! Generates puzzles for a Wordle variant: a secret five-letter answer plus
//! four pre-played guesses whose color patterns, taken together, identify
//! the answer (ideally uniquely). The search is greedy and restartable,
//! scoring candidate guesses by information gain, feedback strength, letter
//! frequency and diversity.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_forge::core::{Dictionary, FrequencyTable};
//! use wordle_forge::generator::{Generator, GeneratorConfig};
//! use wordle_forge::wordlists::{WORDS, loader::words_from_slice};
//!
//! let dictionary = Dictionary::from_words(words_from_slice(WORDS)).unwrap();
//! let config = GeneratorConfig::seeded(7);
//! let mut generator = Generator::new(dictionary, FrequencyTable::default(), config);
//!
//! let puzzle = generator.generate(Some("crane")).unwrap();
//! assert_eq!(puzzle.answer.text(), "crane");
//! assert!(puzzle.remaining_candidates >= 1);
//! ```

// Core domain types
pub mod core;

// Puzzle generation
pub mod generator;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
