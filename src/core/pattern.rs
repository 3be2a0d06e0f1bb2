//! Wordle feedback pattern calculation and representation
//!
//! A pattern holds one color per position. The feedback rule is the
//! standard two-pass algorithm: exact matches claim letters first, then
//! remaining letters are handed out as yellows left to right. For compact
//! keys the five colors also pack into a single base-3 byte (0..=242).

use super::Word;
use super::word::{WORD_LEN, letter_index};
use serde::Serialize;

/// A single tile color
///
/// Serializes as the lowercase strings `"gray"`, `"yellow"`, `"green"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Letter does not appear in the answer (beyond claimed copies)
    Gray,
    /// Letter appears in the answer at a different position
    Yellow,
    /// Letter is in the correct position
    Green,
}

impl Color {
    /// Base-3 digit used by [`Pattern::packed`]
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Gray => 0,
            Self::Yellow => 1,
            Self::Green => 2,
        }
    }
}

/// Feedback pattern for a guess: one color per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Pattern {
    colors: [Color; WORD_LEN],
}

impl Pattern {
    /// All greens (the guess is the answer)
    pub const ALL_GREEN: Self = Self {
        colors: [Color::Green; WORD_LEN],
    };

    /// Create a pattern from explicit colors
    #[inline]
    #[must_use]
    pub const fn new(colors: [Color; WORD_LEN]) -> Self {
        Self { colors }
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters: if the answer contains a letter k times, exactly k
    /// copies of it across the guess receive green or yellow (greens first),
    /// and any remaining copies stay gray.
    ///
    /// # Examples
    /// ```
    /// use wordle_forge::core::{Color, Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// assert_eq!(
    ///     pattern.colors(),
    ///     [Color::Gray, Color::Gray, Color::Green, Color::Gray, Color::Green]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut colors = [Color::Gray; WORD_LEN];
        // Letters of the answer not yet claimed by a green or yellow
        let mut available = *answer.counts();

        // First pass: exact position matches claim their letter
        for i in 0..WORD_LEN {
            if guess.char_at(i) == answer.char_at(i) {
                colors[i] = Color::Green;
                available[letter_index(guess.char_at(i))] -= 1;
            }
        }

        // Second pass: remaining letters become yellows while copies last
        for i in 0..WORD_LEN {
            if colors[i] == Color::Green {
                continue;
            }
            let remaining = &mut available[letter_index(guess.char_at(i))];
            if *remaining > 0 {
                colors[i] = Color::Yellow;
                *remaining -= 1;
            }
        }

        Self { colors }
    }

    /// The five colors in position order
    #[inline]
    #[must_use]
    pub const fn colors(self) -> [Color; WORD_LEN] {
        self.colors
    }

    /// Color at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn color_at(self, position: usize) -> Color {
        self.colors[position]
    }

    /// Check if every position is green
    #[inline]
    #[must_use]
    pub fn is_all_green(self) -> bool {
        self.colors.iter().all(|&c| c == Color::Green)
    }

    /// Count the number of green positions
    #[must_use]
    pub fn count_greens(self) -> usize {
        self.colors.iter().filter(|&&c| c == Color::Green).count()
    }

    /// Count the number of yellow positions
    #[must_use]
    pub fn count_yellows(self) -> usize {
        self.colors.iter().filter(|&&c| c == Color::Yellow).count()
    }

    /// Pack the pattern into a single base-3 byte (0..=242)
    ///
    /// Position 0 is the least-significant digit. There are 3^5 = 243
    /// possible patterns, so the packed value fits any of them.
    #[must_use]
    pub fn packed(self) -> u8 {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for color in self.colors {
            value += color.digit() * multiplier;
            if multiplier < 81 {
                multiplier *= 3;
            }
        }
        value
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/⬜ for gray
    ///
    /// # Examples
    /// ```
    /// use wordle_forge::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY-GY").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LEN {
            return None;
        }

        let mut colors = [Color::Gray; WORD_LEN];
        for (i, ch) in chars.into_iter().enumerate() {
            colors[i] = match ch {
                'G' | 'g' | '🟩' => Color::Green,
                'Y' | 'y' | '🟨' => Color::Yellow,
                '-' | '_' | '⬜' => Color::Gray,
                _ => return None,
            };
        }

        Some(Self { colors })
    }

    /// Convert pattern to emoji string
    ///
    /// Returns a string like "🟩🟨⬜🟩🟨" representing the pattern.
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.colors
            .iter()
            .map(|color| match color {
                Color::Green => '🟩',
                Color::Yellow => '🟨',
                Color::Gray => '⬜',
            })
            .collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}
