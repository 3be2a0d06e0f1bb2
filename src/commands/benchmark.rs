//! Benchmark command
//!
//! Generates a batch of puzzles and aggregates quality and timing
//! statistics. Each puzzle gets its own seeded generator, so the batch
//! fans out across the rayon pool with no shared mutable state.

use crate::core::{Dictionary, FrequencyTable};
use crate::generator::{Generator, GeneratorConfig};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total: usize,
    pub optimal: usize,
    pub average_remaining: f64,
    pub worst_remaining: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

impl BenchmarkResult {
    /// Share of puzzles whose guesses pin the answer uniquely
    #[must_use]
    pub fn optimal_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.optimal as f64 / self.total as f64
    }
}

/// Generate `count` puzzles and collect statistics
///
/// Seeds run from `base_seed` upward, one per puzzle, so a benchmark is
/// reproducible and each worker owns its generator, RNG and cache.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
#[must_use]
pub fn run_benchmark(
    dictionary: &Dictionary,
    frequencies: &FrequencyTable,
    config: &GeneratorConfig,
    count: usize,
    base_seed: u64,
) -> BenchmarkResult {
    let progress = ProgressBar::new(count as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let remaining_counts: Vec<usize> = (0..count)
        .into_par_iter()
        .map(|index| {
            let seeded = GeneratorConfig {
                seed: Some(base_seed + index as u64),
                ..*config
            };
            let mut generator =
                Generator::new(dictionary.clone(), frequencies.clone(), seeded);
            let puzzle = generator
                .generate(None)
                .expect("generation without a fixed answer cannot fail");

            progress.inc(1);
            puzzle.remaining_candidates
        })
        .collect();

    let duration = start.elapsed();
    progress.finish_and_clear();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut optimal = 0;
    let mut worst_remaining = 0;
    let mut remaining_sum = 0;

    for &remaining in &remaining_counts {
        *distribution.entry(remaining).or_insert(0) += 1;
        if remaining == 1 {
            optimal += 1;
        }
        worst_remaining = worst_remaining.max(remaining);
        remaining_sum += remaining;
    }

    BenchmarkResult {
        total: count,
        optimal,
        average_remaining: if count == 0 {
            0.0
        } else {
            remaining_sum as f64 / count as f64
        },
        worst_remaining,
        distribution,
        duration,
        puzzles_per_second: if duration.as_secs_f64() > 0.0 {
            count as f64 / duration.as_secs_f64()
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn benchmark_aggregates_counts() {
        let dictionary = Dictionary::from_words(words_from_slice(WORDS)).unwrap();
        let frequencies = FrequencyTable::default();
        let config = GeneratorConfig {
            max_attempts: 40,
            ..GeneratorConfig::default()
        };

        let result = run_benchmark(&dictionary, &frequencies, &config, 4, 100);

        assert_eq!(result.total, 4);
        assert_eq!(result.distribution.values().sum::<usize>(), 4);
        assert!(result.optimal <= result.total);
        assert!(result.average_remaining >= 1.0);
        assert!(result.worst_remaining >= 1);
        assert!(result.optimal_rate() >= 0.0 && result.optimal_rate() <= 1.0);
    }

    #[test]
    fn benchmark_empty_batch() {
        let dictionary = Dictionary::from_words(words_from_slice(WORDS)).unwrap();
        let result = run_benchmark(
            &dictionary,
            &FrequencyTable::default(),
            &GeneratorConfig::default(),
            0,
            0,
        );

        assert_eq!(result.total, 0);
        assert_eq!(result.optimal, 0);
        assert!(result.optimal_rate().abs() < f64::EPSILON);
    }
}
