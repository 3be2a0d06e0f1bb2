//! External word-frequency data
//!
//! Maps words to a non-negative occurrence weight. Words absent from the
//! table weigh 0, so a missing or empty frequency file degrades to uniform
//! behavior everywhere the table is consulted.

use super::Word;
use super::word::WORD_LEN;
use rustc_hash::FxHashMap;

/// Word → occurrence weight table
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    weights: FxHashMap<[u8; WORD_LEN], f64>,
}

impl FrequencyTable {
    /// Build a table from `(word, weight)` pairs
    ///
    /// Entries that are not valid five-letter words or carry a negative
    /// weight are skipped. A later entry for the same word overwrites an
    /// earlier one.
    ///
    /// # Examples
    /// ```
    /// use wordle_forge::core::{FrequencyTable, Word};
    ///
    /// let table = FrequencyTable::from_pairs([("about", 920.0), ("crane", 3.5)]);
    /// let crane = Word::new("crane").unwrap();
    /// let slate = Word::new("slate").unwrap();
    ///
    /// assert!((table.get(&crane) - 3.5).abs() < f64::EPSILON);
    /// assert!(table.get(&slate).abs() < f64::EPSILON); // absent words weigh 0
    /// ```
    #[must_use]
    pub fn from_pairs<S, I>(pairs: I) -> Self
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (S, f64)>,
    {
        let mut weights = FxHashMap::default();

        for (text, weight) in pairs {
            if weight < 0.0 {
                continue;
            }
            if let Ok(word) = Word::new(text.as_ref()) {
                weights.insert(*word.chars(), weight);
            }
        }

        Self { weights }
    }

    /// The weight of a word, 0 when absent
    #[inline]
    #[must_use]
    pub fn get(&self, word: &Word) -> f64 {
        self.weights.get(word.chars()).copied().unwrap_or(0.0)
    }

    /// True when no word carries a weight
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Number of weighted words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Percentile (by word count, ascending) of the strictly positive weights
    ///
    /// Returns `None` when no word has a positive weight.
    #[must_use]
    pub fn percentile_of_positive(&self, percentile: f64) -> Option<f64> {
        let mut positive: Vec<f64> = self
            .weights
            .values()
            .copied()
            .filter(|&w| w > 0.0)
            .collect();

        if positive.is_empty() {
            return None;
        }

        positive.sort_by(f64::total_cmp);
        let rank = ((positive.len() as f64) * percentile / 100.0).floor() as usize;
        Some(positive[rank.min(positive.len() - 1)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn table_default_is_empty() {
        let table = FrequencyTable::default();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!(table.get(&word("crane")).abs() < f64::EPSILON);
    }

    #[test]
    fn table_skips_invalid_entries() {
        let table = FrequencyTable::from_pairs([
            ("crane", 10.0),
            ("toolong", 5.0),
            ("abc", 5.0),
            ("slate", -1.0),
        ]);

        assert_eq!(table.len(), 1);
        assert!((table.get(&word("crane")) - 10.0).abs() < f64::EPSILON);
        assert!(table.get(&word("slate")).abs() < f64::EPSILON);
    }

    #[test]
    fn table_later_entry_wins() {
        let table = FrequencyTable::from_pairs([("crane", 1.0), ("crane", 7.0)]);
        assert!((table.get(&word("crane")) - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn percentile_of_positive_ignores_zeros() {
        let table = FrequencyTable::from_pairs([
            ("aback", 0.0),
            ("crane", 1.0),
            ("slate", 2.0),
            ("grate", 3.0),
            ("irate", 4.0),
            ("trace", 5.0),
        ]);

        // Five positive weights; the 20th percentile by count is the second
        // smallest (one word strictly below it)
        let threshold = table.percentile_of_positive(20.0).unwrap();
        assert!((threshold - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn percentile_of_positive_none_when_all_zero() {
        let table = FrequencyTable::from_pairs([("crane", 0.0)]);
        assert!(table.percentile_of_positive(20.0).is_none());

        let empty = FrequencyTable::default();
        assert!(empty.percentile_of_positive(20.0).is_none());
    }

    #[test]
    fn percentile_of_positive_single_value() {
        let table = FrequencyTable::from_pairs([("crane", 4.5)]);
        let threshold = table.percentile_of_positive(20.0).unwrap();
        assert!((threshold - 4.5).abs() < f64::EPSILON);
    }
}
