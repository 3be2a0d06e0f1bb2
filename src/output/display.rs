//! Display functions for command results

use super::formatters::{create_progress_bar, pattern_to_emoji, tile_row};
use crate::commands::{BenchmarkResult, FeedbackResult, GenerateReport};
use crate::core::Word;
use crate::generator::PuzzleStatus;
use colored::Colorize;

/// Print a generated puzzle with colored tiles
pub fn print_generate_report(report: &GenerateReport, reveal: bool) {
    let puzzle = &report.puzzle;

    println!("\n{}", "─".repeat(60).cyan());
    if reveal {
        println!(
            "Answer: {}",
            puzzle.answer.text().to_uppercase().bright_yellow().bold()
        );
    } else {
        println!("Answer: {}", "hidden (pass --reveal to show)".dimmed());
    }
    println!("{}", "─".repeat(60).cyan());
    println!();

    for (i, record) in puzzle.guesses.iter().enumerate() {
        println!(
            "Guess {}: {}   {}",
            i + 1,
            tile_row(record.word.text(), record.pattern),
            pattern_to_emoji(record.pattern)
        );
    }

    println!();
    match puzzle.status {
        PuzzleStatus::Optimal => println!(
            "{}",
            "✅ Optimal: the guesses identify the answer uniquely"
                .green()
                .bold()
        ),
        PuzzleStatus::Ambiguous => println!(
            "{}",
            format!(
                "⚠️  Ambiguous: {} candidates remain consistent",
                puzzle.remaining_candidates
            )
            .yellow()
            .bold()
        ),
    }
    println!(
        "Generated in {}",
        format!("{:.1?}", report.duration).bright_cyan()
    );
}

/// Print a feedback pattern for a guess/answer pair
pub fn print_feedback_result(result: &FeedbackResult) {
    println!();
    println!(
        "{} vs {}",
        result.guess.to_uppercase().bold(),
        result.answer.to_uppercase().bold()
    );
    println!(
        "{}   {}",
        tile_row(&result.guess, result.pattern),
        pattern_to_emoji(result.pattern)
    );
}

/// Print surviving words after filtering
pub fn print_filter_result(survivors: &[Word]) {
    println!(
        "\n{} {}",
        survivors.len().to_string().bright_yellow().bold(),
        if survivors.len() == 1 {
            "word remains"
        } else {
            "words remain"
        }
    );

    for chunk in survivors.chunks(10) {
        let line: Vec<&str> = chunk.iter().map(Word::text).collect();
        println!("  {}", line.join(" "));
    }
}

/// Print aggregated benchmark statistics
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\nPuzzles:       {}", result.total);
    println!(
        "Optimal:       {} ({:.1}%)",
        result.optimal.to_string().green().bold(),
        result.optimal_rate() * 100.0
    );
    println!("Avg remaining: {:.2}", result.average_remaining);
    println!("Worst case:    {} candidates", result.worst_remaining);
    println!(
        "Throughput:    {:.1} puzzles/s over {:.1?}",
        result.puzzles_per_second, result.duration
    );

    if result.distribution.is_empty() {
        return;
    }

    println!("\nRemaining-candidate distribution:");
    let max_count = result.distribution.values().copied().max().unwrap_or(1);
    let mut buckets: Vec<(usize, usize)> = result
        .distribution
        .iter()
        .map(|(&remaining, &count)| (remaining, count))
        .collect();
    buckets.sort_unstable();

    for (remaining, count) in buckets {
        println!(
            "  {:>4} │ {} {}",
            remaining,
            create_progress_bar(count as f64, max_count as f64, 30),
            count
        );
    }
}
