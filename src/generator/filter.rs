//! Constraint filtering
//!
//! A candidate word is consistent with a guess record exactly when the
//! guess, played against the candidate, would reproduce the observed
//! pattern. [`satisfies`] implements the equivalent decomposed check
//! (greens, position vetoes, per-letter count bounds), which avoids
//! recomputing feedback per candidate; the equivalence with
//! `Pattern::calculate(guess, candidate) == pattern` is pinned by tests.

use super::puzzle::GuessRecord;
use crate::core::{ALPHABET_LEN, Color, Dictionary, Pattern, WORD_LEN, Word, WordId, letter_index};

/// Check whether a candidate is consistent with one guess and its pattern
///
/// # Examples
/// ```
/// use wordle_forge::core::{Pattern, Word};
/// use wordle_forge::generator::filter::satisfies;
///
/// let guess = Word::new("crane").unwrap();
/// let answer = Word::new("slate").unwrap();
/// let pattern = Pattern::calculate(&guess, &answer);
///
/// // The answer is always consistent with its own feedback
/// assert!(satisfies(&answer, &guess, pattern));
/// // A word that reuses a grayed letter is not
/// assert!(!satisfies(&Word::new("crumb").unwrap(), &guess, pattern));
/// ```
#[must_use]
pub fn satisfies(candidate: &Word, guess: &Word, pattern: Pattern) -> bool {
    // Greens and yellows claimed per letter
    let mut required = [0u8; ALPHABET_LEN];
    // A gray on a letter caps its total count at the claimed copies
    let mut capped = [false; ALPHABET_LEN];

    for i in 0..WORD_LEN {
        let letter = guess.char_at(i);
        match pattern.color_at(i) {
            Color::Green => {
                if candidate.char_at(i) != letter {
                    return false;
                }
                required[letter_index(letter)] += 1;
            }
            Color::Yellow => {
                if candidate.char_at(i) == letter {
                    return false;
                }
                required[letter_index(letter)] += 1;
            }
            Color::Gray => {
                if candidate.char_at(i) == letter {
                    return false;
                }
                capped[letter_index(letter)] = true;
            }
        }
    }

    for letter in 0..ALPHABET_LEN {
        let have = candidate.counts()[letter];
        if capped[letter] {
            // The guess held more copies than the answer: the candidate
            // must carry exactly the claimed number
            if have != required[letter] {
                return false;
            }
        } else if have < required[letter] {
            return false;
        }
    }

    true
}

/// Check whether a candidate is consistent with a guess record
#[inline]
#[must_use]
pub fn matches_record(candidate: &Word, record: &GuessRecord) -> bool {
    satisfies(candidate, &record.word, record.pattern)
}

/// Narrow a candidate id set by one guess, preserving order
#[must_use]
pub fn filter_ids(
    dictionary: &Dictionary,
    candidates: &[WordId],
    guess: &Word,
    pattern: Pattern,
) -> Vec<WordId> {
    candidates
        .iter()
        .copied()
        .filter(|&id| satisfies(dictionary.word(id), guess, pattern))
        .collect()
}

/// Candidates of the whole dictionary consistent with every record
///
/// Records are applied in order; filtering stops early once nothing
/// survives.
#[must_use]
pub fn filter_all(dictionary: &Dictionary, records: &[GuessRecord]) -> Vec<WordId> {
    let mut survivors: Vec<WordId> = dictionary.ids().collect();

    for record in records {
        survivors = filter_ids(dictionary, &survivors, &record.word, record.pattern);
        if survivors.is_empty() {
            break;
        }
    }

    survivors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn dictionary(texts: &[&str]) -> Dictionary {
        Dictionary::from_words(texts.iter().map(|t| word(t))).unwrap()
    }

    /// The defining property: satisfies(w, g, feedback(g, a)) iff
    /// feedback(g, w) == feedback(g, a)
    fn check_equivalence(guess: &str, answer: &str, candidates: &[&str]) {
        let guess = word(guess);
        let answer = word(answer);
        let pattern = Pattern::calculate(&guess, &answer);

        for text in candidates {
            let candidate = word(text);
            let direct = Pattern::calculate(&guess, &candidate) == pattern;
            assert_eq!(
                satisfies(&candidate, &guess, pattern),
                direct,
                "divergence for guess={guess} answer={answer} candidate={candidate}"
            );
        }
    }

    #[test]
    fn satisfies_equals_feedback_equality_simple() {
        check_equivalence(
            "crane",
            "slate",
            &["slate", "crane", "plate", "grate", "slant", "blaze", "stale"],
        );
    }

    #[test]
    fn satisfies_equals_feedback_equality_duplicates() {
        check_equivalence(
            "llama",
            "salad",
            &["salad", "llama", "madam", "alarm", "small", "banal", "canal"],
        );
        check_equivalence(
            "eerie",
            "crane",
            &["crane", "eerie", "erase", "where", "sheet", "theme", "verge"],
        );
        check_equivalence(
            "sassy",
            "salad",
            &["salad", "sassy", "stash", "glass", "essay", "asses"],
        );
    }

    #[test]
    fn satisfies_answer_always_survives_own_feedback() {
        let words = ["sassy", "eerie", "llama", "crane", "salad", "speed"];
        for guess in words {
            for answer in words {
                let g = word(guess);
                let a = word(answer);
                let pattern = Pattern::calculate(&g, &a);
                assert!(
                    satisfies(&a, &g, pattern),
                    "answer {answer} eliminated by guess {guess}"
                );
            }
        }
    }

    #[test]
    fn satisfies_green_positions_are_fixed() {
        let guess = word("crane");
        let answer = word("crate");
        // C, R, A green; N gray; E green
        let pattern = Pattern::calculate(&guess, &answer);

        assert!(satisfies(&word("crate"), &guess, pattern));
        // Wrong letter at the green 'c' position
        assert!(!satisfies(&word("grate"), &guess, pattern));
    }

    #[test]
    fn satisfies_yellow_vetoes_position() {
        let guess = word("crane");
        let answer = word("alert");
        // R, A, E yellow; C, N gray
        let pattern = Pattern::calculate(&guess, &answer);

        assert!(satisfies(&word("alert"), &guess, pattern));
        // "braid" puts the yellow 'a' right back at its guessed position
        assert!(!satisfies(&word("braid"), &guess, pattern));
    }

    #[test]
    fn satisfies_gray_caps_letter_count() {
        // Guess with three Es against an answer with one: the green E at the
        // last position claims it, the leading Es go gray, so survivors
        // carry exactly one E
        let guess = word("eerie");
        let answer = word("crane");
        let pattern = Pattern::calculate(&guess, &answer);

        assert!(satisfies(&word("crane"), &guess, pattern));
        // "crepe" meets every positional constraint but carries two Es,
        // which the gray cap rejects
        assert!(!satisfies(&word("crepe"), &guess, pattern));
    }

    #[test]
    fn filter_ids_narrows_and_preserves_order() {
        let dict = dictionary(&["slate", "crate", "grate", "crane", "plate"]);
        let guess = word("crane");
        let answer = word("slate");
        let pattern = Pattern::calculate(&guess, &answer);

        let all: Vec<WordId> = dict.ids().collect();
        let survivors = filter_ids(&dict, &all, &guess, pattern);

        // Survivors keep dictionary order
        let texts: Vec<&str> = survivors.iter().map(|&id| dict.word(id).text()).collect();
        assert!(texts.contains(&"slate"));
        assert!(!texts.contains(&"crane"));
        let mut sorted = survivors.clone();
        sorted.sort_unstable();
        assert_eq!(survivors, sorted);
    }

    #[test]
    fn filter_all_applies_records_in_conjunction() {
        let dict = dictionary(&["slate", "crate", "grate", "irate", "crane"]);
        let answer = word("grate");

        let guess1 = word("crane");
        let record1 = GuessRecord::new(guess1.clone(), Pattern::calculate(&guess1, &answer));
        let guess2 = word("slate");
        let record2 = GuessRecord::new(guess2.clone(), Pattern::calculate(&guess2, &answer));

        let survivors = filter_all(&dict, &[record1.clone(), record2.clone()]);
        let texts: Vec<&str> = survivors.iter().map(|&id| dict.word(id).text()).collect();
        assert!(texts.contains(&"grate"));

        // Monotonicity: the prefix filter is a superset of the full filter
        let prefix = filter_all(&dict, &[record1]);
        assert!(survivors.iter().all(|id| prefix.contains(id)));
        assert!(prefix.len() >= survivors.len());
    }

    #[test]
    fn filter_all_empty_records_is_identity() {
        let dict = dictionary(&["slate", "crate"]);
        let survivors = filter_all(&dict, &[]);
        assert_eq!(survivors.len(), dict.len());
    }

    #[test]
    fn filter_all_impossible_records_empty_out() {
        let dict = dictionary(&["slate", "crate"]);
        // Claim all greens for a word not in the dictionary's survivors
        let record = GuessRecord::new(word("zzzzz"), Pattern::ALL_GREEN);
        assert!(filter_all(&dict, &[record]).is_empty());
    }
}
