//! Dictionary filtering command
//!
//! Applies `WORD=PATTERN` guess records to the dictionary and lists the
//! words consistent with all of them.

use crate::core::{Pattern, Word};
use crate::generator::{Generator, GuessRecord};

/// Parse a `WORD=PATTERN` argument into a guess record
///
/// The pattern side accepts the letters G/Y/- (or emoji tiles), e.g.
/// `crane=--G-G`.
///
/// # Errors
///
/// Returns an error message for a missing `=`, an invalid word, or an
/// invalid pattern.
pub fn parse_record(arg: &str) -> Result<GuessRecord, String> {
    let (word_text, pattern_text) = arg
        .split_once('=')
        .ok_or_else(|| format!("Expected WORD=PATTERN, got '{arg}'"))?;

    let word = Word::new(word_text).map_err(|e| format!("Invalid word '{word_text}': {e}"))?;
    let pattern = Pattern::parse(pattern_text)
        .ok_or_else(|| format!("Invalid pattern '{pattern_text}' (use G, Y and -)"))?;

    Ok(GuessRecord::new(word, pattern))
}

/// Filter the dictionary by a list of `WORD=PATTERN` records
///
/// Returns the surviving words in lexicographic order.
///
/// # Errors
///
/// Returns an error message when any record fails to parse.
pub fn run_filter(generator: &Generator, args: &[String]) -> Result<Vec<Word>, String> {
    let records: Vec<GuessRecord> = args
        .iter()
        .map(|arg| parse_record(arg))
        .collect::<Result<_, _>>()?;

    Ok(generator.filter_dictionary(&records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, Dictionary, FrequencyTable};
    use crate::generator::GeneratorConfig;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    fn generator() -> Generator {
        let dictionary = Dictionary::from_words(words_from_slice(WORDS)).unwrap();
        Generator::new(
            dictionary,
            FrequencyTable::default(),
            GeneratorConfig::seeded(1),
        )
    }

    #[test]
    fn parse_record_valid() {
        let record = parse_record("crane=--G-G").unwrap();
        assert_eq!(record.word.text(), "crane");
        assert_eq!(record.pattern.color_at(2), Color::Green);
        assert_eq!(record.pattern.color_at(0), Color::Gray);
    }

    #[test]
    fn parse_record_invalid() {
        assert!(parse_record("crane").is_err()); // no '='
        assert!(parse_record("toolong=GGGGG").is_err());
        assert!(parse_record("crane=GGXGG").is_err());
        assert!(parse_record("crane=GGG").is_err());
    }

    #[test]
    fn run_filter_narrows_dictionary() {
        let generator = generator();

        // CRANE vs SLATE feedback: gray gray green gray green
        let survivors = run_filter(&generator, &["crane=--G-G".to_string()]).unwrap();

        assert!(survivors.iter().any(|w| w.text() == "slate"));
        assert!(survivors.iter().all(|w| w.text() != "crane"));
        // Lexicographic order for stable display
        for window in survivors.windows(2) {
            assert!(window[0].text() < window[1].text());
        }
    }

    #[test]
    fn run_filter_conjunction_shrinks() {
        let generator = generator();

        let one = run_filter(&generator, &["crane=--G-G".to_string()]).unwrap();
        let two = run_filter(
            &generator,
            &["crane=--G-G".to_string(), "slate=GGGGG".to_string()],
        )
        .unwrap();

        assert!(two.len() <= one.len());
        assert_eq!(two.len(), 1);
        assert_eq!(two[0].text(), "slate");
    }

    #[test]
    fn run_filter_bad_record_is_error() {
        let generator = generator();
        assert!(run_filter(&generator, &["bogus".to_string()]).is_err());
    }
}
