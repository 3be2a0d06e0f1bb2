//! Puzzle generation command
//!
//! Generates one puzzle and reports how long the search took.

use crate::generator::{Generator, GeneratorError, Puzzle};
use std::time::{Duration, Instant};

/// Result of a generation run
pub struct GenerateReport {
    pub puzzle: Puzzle,
    pub duration: Duration,
}

/// Generate a puzzle, optionally with a fixed answer
///
/// # Errors
///
/// Returns [`GeneratorError`] when the requested answer is malformed or not
/// in the dictionary.
pub fn run_generate(
    generator: &mut Generator,
    answer: Option<&str>,
) -> Result<GenerateReport, GeneratorError> {
    let start = Instant::now();
    let puzzle = generator.generate(answer)?;
    let duration = start.elapsed();

    Ok(GenerateReport { puzzle, duration })
}
