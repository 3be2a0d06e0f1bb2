//! Indexed dictionary of five-letter words
//!
//! Load order is preserved so that word ids are stable and generation is
//! deterministic for a given input list.

use super::Word;
use super::word::WORD_LEN;
use rustc_hash::FxHashMap;
use std::fmt;
use std::ops::Range;

/// Integer id of a word inside a [`Dictionary`]
pub type WordId = u32;

/// Error type for dictionary construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// The word list contained no valid five-letter words
    Empty,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Dictionary contains no five-letter words"),
        }
    }
}

impl std::error::Error for DictionaryError {}

/// An ordered, indexable set of five-letter words
///
/// Words keep their load order; duplicates after the first occurrence are
/// dropped so every text maps to exactly one id.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashMap<[u8; WORD_LEN], WordId>,
}

impl Dictionary {
    /// Build a dictionary from an ordered word list
    ///
    /// # Errors
    /// Returns [`DictionaryError::Empty`] if the list has no words, which is
    /// a precondition violation on the caller.
    ///
    /// # Examples
    /// ```
    /// use wordle_forge::core::{Dictionary, Word};
    ///
    /// let words = vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()];
    /// let dictionary = Dictionary::from_words(words).unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// assert_eq!(dictionary.id_of("slate"), Some(1));
    /// ```
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Result<Self, DictionaryError> {
        let mut unique = Vec::new();
        let mut index = FxHashMap::default();

        for word in words {
            if !index.contains_key(word.chars()) {
                index.insert(*word.chars(), unique.len() as WordId);
                unique.push(word);
            }
        }

        if unique.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self {
            words: unique,
            index,
        })
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the dictionary holds no words
    ///
    /// Construction rejects an empty list, so this is false for any
    /// successfully built dictionary.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The word with the given id
    ///
    /// # Panics
    /// Panics if `id` was not produced by this dictionary.
    #[inline]
    #[must_use]
    pub fn word(&self, id: WordId) -> &Word {
        &self.words[id as usize]
    }

    /// All words in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// All word ids in load order
    #[inline]
    pub fn ids(&self) -> Range<WordId> {
        0..self.words.len() as WordId
    }

    /// Look up the id of a word by text
    ///
    /// Returns `None` for text that is not a five-letter word or is not in
    /// the dictionary.
    #[must_use]
    pub fn id_of(&self, text: &str) -> Option<WordId> {
        let chars: [u8; WORD_LEN] = text.as_bytes().try_into().ok()?;
        self.index.get(&chars).copied()
    }

    /// Check whether a word is present
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.id_of(text).is_some()
    }
}
