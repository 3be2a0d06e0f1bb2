//! Word list and frequency file loading
//!
//! Two line-oriented formats feed the generator: a dictionary file with one
//! lowercase five-letter word per line, and a frequency file with
//! whitespace-separated `word weight` pairs. Lines that do not match the
//! format are rejected rather than guessed at.

use crate::core::{WORD_LEN, Word};
use std::fs;
use std::io;
use std::path::Path;

/// True for exactly five lowercase ASCII letters
fn is_dictionary_word(text: &str) -> bool {
    text.len() == WORD_LEN && text.bytes().all(|b| b.is_ascii_lowercase())
}

/// Load a dictionary file: one lowercase five-letter word per line
///
/// Lines that are not exactly five a-z letters are rejected (skipped).
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_forge::wordlists::loader::load_dictionary;
///
/// let words = load_dictionary("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if is_dictionary_word(trimmed) {
                Word::new(trimmed).ok()
            } else {
                None
            }
        })
        .collect();

    Ok(words)
}

/// Load a frequency file: whitespace-separated `word weight` pairs
///
/// Words that are not five letters are ignored; lines with a missing or
/// unparsable weight, extra fields, or a negative weight are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_frequencies<P: AsRef<Path>>(path: P) -> io::Result<Vec<(String, f64)>> {
    let content = fs::read_to_string(path)?;

    let pairs = content
        .lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let word = fields.next()?;
            let weight: f64 = fields.next()?.parse().ok()?;
            if fields.next().is_some() {
                return None;
            }
            (word.len() == WORD_LEN && weight >= 0.0).then(|| (word.to_string(), weight))
        })
        .collect();

    Ok(pairs)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_forge::wordlists::loader::words_from_slice;
/// use wordle_forge::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
