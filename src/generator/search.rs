//! Greedy, randomized, restartable puzzle search
//!
//! One attempt picks four guesses greedily: every candidate from the
//! attempt's pool is scored by how much it shrinks the surviving
//! candidate set, its own feedback strength, the static word score and a
//! penalty for reusing letters; the best candidate is committed and the
//! survivors narrow. Attempts restart with fresh pools until the guesses
//! pin the answer uniquely or the attempt budget runs out, at which point
//! the best attempt seen wins.

use super::cache::{FilterCache, GuessSet};
use super::config::GeneratorConfig;
use super::filter::filter_ids;
use super::puzzle::{GUESSES_PER_PUZZLE, GuessRecord, Puzzle};
use super::scoring::composite_score;
use crate::core::{Dictionary, FrequencyTable, Pattern, WordId};
use rand::Rng;
use rand::rngs::StdRng;

/// Percentile (by word count) of the positive frequencies that bounds the
/// answer pool from below.
const ANSWER_POOL_PERCENTILE: f64 = 20.0;

/// How one attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AttemptOutcome {
    /// Four guesses chosen and exactly the answer survives
    Solved,
    /// Four guesses chosen but several candidates survive
    Ambiguous,
    /// The pool ran dry before four guesses were chosen
    Aborted,
}

/// Result of one attempt: the guesses committed so far and the survivors
#[derive(Debug)]
struct Attempt {
    records: Vec<GuessRecord>,
    survivors: Vec<WordId>,
    outcome: AttemptOutcome,
}

/// The best candidate found while scanning a pool for one guess slot
#[derive(Debug, Clone, Copy)]
struct BestPick {
    id: WordId,
    pattern: Pattern,
    score: f64,
    remaining: usize,
}

/// Borrowed view of the generator's immutable state driving one search
pub(crate) struct SearchDriver<'a> {
    pub dictionary: &'a Dictionary,
    pub frequencies: &'a FrequencyTable,
    pub scores: &'a [f64],
    pub pool: &'a [WordId],
    pub config: &'a GeneratorConfig,
}

impl SearchDriver<'_> {
    /// Pick an answer weighted by word frequency
    ///
    /// Words at or above the 20th percentile of the positive frequencies
    /// form the answer pool (the whole dictionary when that pool is empty),
    /// and each is drawn with probability proportional to its weight plus
    /// one. An empty frequency table therefore degrades to a uniform draw.
    pub(crate) fn pick_answer(&self, rng: &mut StdRng) -> WordId {
        let threshold = self
            .frequencies
            .percentile_of_positive(ANSWER_POOL_PERCENTILE)
            .unwrap_or(self.config.frequency_floor);

        let mut candidates: Vec<WordId> = self
            .dictionary
            .ids()
            .filter(|&id| self.frequencies.get(self.dictionary.word(id)) >= threshold)
            .collect();
        if candidates.is_empty() {
            candidates = self.dictionary.ids().collect();
        }

        let total: f64 = candidates
            .iter()
            .map(|&id| self.frequencies.get(self.dictionary.word(id)) + 1.0)
            .sum();
        let mut target = rng.random_range(0.0..total);

        for &id in &candidates {
            let weight = self.frequencies.get(self.dictionary.word(id)) + 1.0;
            if target < weight {
                return id;
            }
            target -= weight;
        }

        // Floating-point tail: the draw landed on the accumulated error
        candidates[candidates.len() - 1]
    }

    /// Run the full search for a fixed answer
    pub(crate) fn run(&self, answer_id: WordId, rng: &mut StdRng) -> Puzzle {
        let answer = self.dictionary.word(answer_id).clone();
        let mut cache = FilterCache::new();

        // Best complete attempt across restarts; partial attempts are kept
        // separately and only returned when nothing completes
        let mut best_attempt: Option<Attempt> = None;
        let mut last_partial: Option<Attempt> = None;

        let focused_len = self.config.focused_pool_size.min(self.pool.len());

        for attempt in 0..self.config.max_attempts {
            let exploration;
            let pool: &[WordId] = if attempt < self.config.max_attempts / 2 {
                &self.pool[..focused_len]
            } else {
                exploration = self.sample_exploration_pool(rng);
                &exploration
            };

            let result = self.run_attempt(answer_id, pool, &mut cache);
            match result.outcome {
                AttemptOutcome::Solved => {
                    return Puzzle::new(answer, result.records, 1);
                }
                AttemptOutcome::Ambiguous => {
                    if best_attempt
                        .as_ref()
                        .is_none_or(|best| result.survivors.len() < best.survivors.len())
                    {
                        best_attempt = Some(result);
                    }
                }
                AttemptOutcome::Aborted => last_partial = Some(result),
            }
        }

        match best_attempt.or(last_partial) {
            Some(attempt) => {
                let remaining = attempt.survivors.len();
                Puzzle::new(answer, attempt.records, remaining)
            }
            // Zero attempts configured: no guesses, everything survives
            None => Puzzle::new(answer, Vec::new(), self.dictionary.len()),
        }
    }

    /// A fresh uniform sample over the whole dictionary
    fn sample_exploration_pool(&self, rng: &mut StdRng) -> Vec<WordId> {
        let amount = self.config.exploration_pool_size.min(self.dictionary.len());
        rand::seq::index::sample(rng, self.dictionary.len(), amount)
            .into_iter()
            .map(|index| index as WordId)
            .collect()
    }

    /// One greedy attempt: pick four guesses from `pool`
    fn run_attempt(&self, answer_id: WordId, pool: &[WordId], cache: &mut FilterCache) -> Attempt {
        let answer = self.dictionary.word(answer_id);

        let mut chosen: Vec<WordId> = Vec::with_capacity(GUESSES_PER_PUZZLE);
        let mut records: Vec<GuessRecord> = Vec::with_capacity(GUESSES_PER_PUZZLE);
        let mut used_letters: u32 = 0;
        let mut survivors: Vec<WordId> = self.dictionary.ids().collect();

        for guess_number in 1..=GUESSES_PER_PUZZLE {
            let narrowed;
            let scan: &[WordId] = if survivors.len() < self.config.narrow_threshold {
                narrowed = self.narrowed_pool(pool, &survivors, answer_id);
                &narrowed
            } else {
                pool
            };

            // Best selection so far for this guess slot only; the
            // across-attempts best lives in `run`
            let mut best: Option<BestPick> = None;

            for &candidate_id in scan {
                if candidate_id == answer_id || chosen.contains(&candidate_id) {
                    continue;
                }
                let candidate = self.dictionary.word(candidate_id);

                let shared = (candidate.letter_mask() & used_letters).count_ones();
                if shared > 3 && guess_number < 2 {
                    continue;
                }

                let pattern = Pattern::calculate(candidate, answer);

                let key = GuessSet::new(&chosen, candidate_id);
                let remaining = match cache.get(&key) {
                    Some(count) => count,
                    None => {
                        let count =
                            filter_ids(self.dictionary, &survivors, candidate, pattern).len();
                        cache.insert(key, count);
                        count
                    }
                };

                if remaining == 0 {
                    // Cannot happen while feedback and filter agree; skip
                    continue;
                }

                let info_gain = survivors.len() - remaining;
                // Later guesses must still pay their way, except once the
                // answer is already pinned: the puzzle carries four guesses
                // regardless, so zero-gain picks are acceptable then
                if guess_number > 1
                    && survivors.len() > 1
                    && (info_gain as f64) / (survivors.len() as f64) < self.config.min_gain_ratio
                {
                    continue;
                }

                let score = composite_score(
                    &self.config.weights,
                    info_gain,
                    pattern,
                    self.scores[candidate_id as usize],
                    shared,
                );

                let improves = best.as_ref().is_none_or(|current| {
                    score > current.score
                        || (score == current.score && remaining < current.remaining)
                });
                if improves {
                    best = Some(BestPick {
                        id: candidate_id,
                        pattern,
                        score,
                        remaining,
                    });
                }
            }

            let Some(pick) = best else {
                return Attempt {
                    records,
                    survivors,
                    outcome: AttemptOutcome::Aborted,
                };
            };

            let word = self.dictionary.word(pick.id).clone();
            survivors = filter_ids(self.dictionary, &survivors, &word, pick.pattern);
            assert!(
                survivors.binary_search(&answer_id).is_ok(),
                "internal inconsistency: answer eliminated by its own feedback"
            );

            used_letters |= word.letter_mask();
            chosen.push(pick.id);
            records.push(GuessRecord::new(word, pick.pattern));
        }

        let outcome = if survivors.len() == 1 {
            AttemptOutcome::Solved
        } else {
            AttemptOutcome::Ambiguous
        };

        Attempt {
            records,
            survivors,
            outcome,
        }
    }

    /// Pool restriction once few candidates survive: the pool members still
    /// alive, topped up with high-score fillers from the curated pool
    fn narrowed_pool(&self, pool: &[WordId], survivors: &[WordId], answer_id: WordId) -> Vec<WordId> {
        let mut narrowed: Vec<WordId> = pool
            .iter()
            .copied()
            .filter(|id| survivors.binary_search(id).is_ok())
            .collect();

        for &id in self.pool.iter().take(self.config.narrow_fillers) {
            if id != answer_id && !narrowed.contains(&id) {
                narrowed.push(id);
            }
        }

        narrowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FrequencyTable, Word};
    use crate::generator::curator::curate_pool;
    use crate::generator::filter::filter_all;
    use crate::generator::scoring::{LetterStats, word_score};
    use rand::SeedableRng;

    struct Fixture {
        dictionary: Dictionary,
        frequencies: FrequencyTable,
        scores: Vec<f64>,
        pool: Vec<WordId>,
        config: GeneratorConfig,
    }

    impl Fixture {
        fn new(texts: &[&str], frequencies: FrequencyTable, config: GeneratorConfig) -> Self {
            let dictionary =
                Dictionary::from_words(texts.iter().map(|t| Word::new(*t).unwrap())).unwrap();
            let stats = LetterStats::from_dictionary(&dictionary);
            let scores: Vec<f64> = dictionary
                .words()
                .iter()
                .map(|w| word_score(&stats, &frequencies, w))
                .collect();
            let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or(0));
            let pool = curate_pool(&dictionary, &scores, &config, &mut rng);
            Self {
                dictionary,
                frequencies,
                scores,
                pool,
                config,
            }
        }

        fn driver(&self) -> SearchDriver<'_> {
            SearchDriver {
                dictionary: &self.dictionary,
                frequencies: &self.frequencies,
                scores: &self.scores,
                pool: &self.pool,
                config: &self.config,
            }
        }
    }

    const WORDS: &[&str] = &[
        "slate", "crane", "crate", "grate", "irate", "trace", "plant", "plane", "place", "pride",
        "prime", "print", "sound", "south", "mouse", "house", "horse", "stone", "store", "storm",
        "cloud", "count", "court", "light", "night", "might", "fight", "brick", "black", "block",
        "bloom", "dream", "bread", "break", "beach", "chair", "charm", "chart", "world", "woman",
    ];

    #[test]
    fn search_produces_four_distinct_guesses() {
        let fixture = Fixture::new(
            WORDS,
            FrequencyTable::default(),
            GeneratorConfig::seeded(11),
        );
        let driver = fixture.driver();
        let answer_id = fixture.dictionary.id_of("plant").unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        let puzzle = driver.run(answer_id, &mut rng);

        assert_eq!(puzzle.guesses.len(), GUESSES_PER_PUZZLE);
        assert_eq!(puzzle.answer.text(), "plant");
        for record in &puzzle.guesses {
            assert_ne!(record.word.text(), "plant");
        }
        let mut texts: Vec<&str> = puzzle.guesses.iter().map(|r| r.word.text()).collect();
        texts.sort_unstable();
        texts.dedup();
        assert_eq!(texts.len(), GUESSES_PER_PUZZLE);
    }

    #[test]
    fn search_patterns_match_recomputed_feedback() {
        let fixture = Fixture::new(
            WORDS,
            FrequencyTable::default(),
            GeneratorConfig::seeded(23),
        );
        let driver = fixture.driver();
        let answer_id = fixture.dictionary.id_of("stone").unwrap();
        let mut rng = StdRng::seed_from_u64(23);

        let puzzle = driver.run(answer_id, &mut rng);

        let answer = &puzzle.answer;
        for record in &puzzle.guesses {
            assert_eq!(record.pattern, Pattern::calculate(&record.word, answer));
        }
    }

    #[test]
    fn search_remaining_count_matches_filter() {
        let fixture = Fixture::new(
            WORDS,
            FrequencyTable::default(),
            GeneratorConfig::seeded(5),
        );
        let driver = fixture.driver();
        let answer_id = fixture.dictionary.id_of("house").unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        let puzzle = driver.run(answer_id, &mut rng);

        let survivors = filter_all(&fixture.dictionary, &puzzle.guesses);
        assert_eq!(survivors.len(), puzzle.remaining_candidates);
        assert!(survivors.contains(&answer_id));
    }

    #[test]
    fn search_two_word_dictionary_stays_well_formed() {
        // Pathological case: only one legal guess exists, so attempts abort
        // before four guesses; the partial attempt is still returned
        let fixture = Fixture::new(
            &["abcde", "abcdf"],
            FrequencyTable::default(),
            GeneratorConfig {
                max_attempts: 20,
                ..GeneratorConfig::seeded(3)
            },
        );
        let driver = fixture.driver();
        let answer_id = fixture.dictionary.id_of("abcde").unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        let puzzle = driver.run(answer_id, &mut rng);

        assert!(puzzle.remaining_candidates >= 1);
        assert!(puzzle.remaining_candidates <= 2);
        assert!(puzzle.guesses.len() < GUESSES_PER_PUZZLE);
    }

    #[test]
    fn search_is_deterministic_for_equal_seeds() {
        let run = || {
            let fixture = Fixture::new(
                WORDS,
                FrequencyTable::default(),
                GeneratorConfig::seeded(42),
            );
            let driver = fixture.driver();
            let answer_id = fixture.dictionary.id_of("crate").unwrap();
            let mut rng = StdRng::seed_from_u64(42);
            driver.run(answer_id, &mut rng)
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn pick_answer_excludes_rare_words() {
        let frequencies = FrequencyTable::from_pairs([
            ("world", 900.0),
            ("woman", 890.0),
            ("house", 870.0),
            ("sound", 850.0),
            ("light", 820.0),
            ("night", 800.0),
            ("stone", 750.0),
            ("plant", 700.0),
            ("slate", 2.0),
            ("crane", 1.0),
        ]);
        let fixture = Fixture::new(WORDS, frequencies, GeneratorConfig::seeded(9));
        let driver = fixture.driver();
        let mut rng = StdRng::seed_from_u64(9);

        // Ten positive weights: the 20th percentile by count lands on the
        // third smallest (700), cutting "slate" and "crane" out of the pool
        let threshold = fixture.frequencies.percentile_of_positive(20.0).unwrap();
        assert!((threshold - 700.0).abs() < f64::EPSILON);

        for _ in 0..50 {
            let id = driver.pick_answer(&mut rng);
            let word = fixture.dictionary.word(id);
            assert!(
                fixture.frequencies.get(word) >= threshold,
                "drew {}",
                word.text()
            );
        }
    }

    #[test]
    fn pick_answer_uniform_without_frequencies() {
        let fixture = Fixture::new(
            WORDS,
            FrequencyTable::default(),
            GeneratorConfig::seeded(17),
        );
        let driver = fixture.driver();
        let mut rng = StdRng::seed_from_u64(17);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(driver.pick_answer(&mut rng));
        }
        // A uniform draw over 40 words hits many distinct answers
        assert!(seen.len() > 10);
    }
}
