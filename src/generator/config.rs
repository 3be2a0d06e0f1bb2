//! Generation tunables
//!
//! Every constant the search relies on lives here so callers can adjust
//! the policy without touching the driver.

/// Weights of the per-guess composite score
///
/// A candidate guess scores
/// `info_gain·gain + green·greens + yellow·yellows + frequency·word_score
/// − diversity·shared_letters`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Weight of the candidate-set reduction (default: 20)
    pub info_gain: f64,

    /// Weight per green position in the guess's own pattern (default: 5)
    pub green: f64,

    /// Weight per yellow position in the guess's own pattern (default: 2)
    pub yellow: f64,

    /// Weight of the precomputed word score (default: 100)
    pub frequency: f64,

    /// Penalty per letter shared with earlier guesses (default: 20)
    pub diversity: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            info_gain: 20.0,
            green: 5.0,
            yellow: 2.0,
            frequency: 100.0,
            diversity: 20.0,
        }
    }
}

/// Configuration for puzzle generation
///
/// The defaults reproduce the reference search policy; any field can be
/// overridden before constructing a generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    /// Maximum search attempts before settling for the best result (default: 500)
    pub max_attempts: usize,

    /// Size of the curated working pool (default: 2000, sensible range 2000-5000)
    pub pool_size: usize,

    /// Share of the curated pool filled with top-scored words, the rest is
    /// a random tail (default: 0.7)
    pub informative_share: f64,

    /// Candidate pool per attempt during the first half of the attempts:
    /// the highest-scored head of the curated pool (default: 300)
    pub focused_pool_size: usize,

    /// Candidate pool per attempt during the second half of the attempts:
    /// a fresh random sample over the whole dictionary (default: 400)
    pub exploration_pool_size: usize,

    /// Below this many surviving candidates the per-guess pool narrows to
    /// the survivors plus high-score fillers (default: 10)
    pub narrow_threshold: usize,

    /// Number of high-score fillers mixed into a narrowed pool (default: 100)
    pub narrow_fillers: usize,

    /// Guesses after the first must shrink the candidate set by at least
    /// this fraction to be considered (default: 0.1)
    pub min_gain_ratio: f64,

    /// Frequency threshold fallback for answer selection when the table has
    /// no positive weights (default: 0.1)
    pub frequency_floor: f64,

    /// Composite score weights
    pub weights: ScoreWeights,

    /// RNG seed; `None` draws a fresh seed per generator
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: 500,
            pool_size: 2000,
            informative_share: 0.7,
            focused_pool_size: 300,
            exploration_pool_size: 400,
            narrow_threshold: 10,
            narrow_fillers: 100,
            min_gain_ratio: 0.1,
            frequency_floor: 0.1,
            weights: ScoreWeights::default(),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Config with a fixed seed, otherwise defaults
    ///
    /// A seeded generator with a fixed answer produces identical puzzles
    /// across runs.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_policy() {
        let config = GeneratorConfig::default();

        assert_eq!(config.max_attempts, 500);
        assert_eq!(config.pool_size, 2000);
        assert!((config.informative_share - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.focused_pool_size, 300);
        assert_eq!(config.exploration_pool_size, 400);
        assert!((config.min_gain_ratio - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn default_weights() {
        let weights = ScoreWeights::default();

        assert!((weights.info_gain - 20.0).abs() < f64::EPSILON);
        assert!((weights.green - 5.0).abs() < f64::EPSILON);
        assert!((weights.yellow - 2.0).abs() < f64::EPSILON);
        assert!((weights.frequency - 100.0).abs() < f64::EPSILON);
        assert!((weights.diversity - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn seeded_sets_only_the_seed() {
        let config = GeneratorConfig::seeded(42);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.max_attempts, GeneratorConfig::default().max_attempts);
    }
}
