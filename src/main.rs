//! Wordle Forge - CLI
//!
//! Generates Wordle-variant puzzles: an answer word plus four guesses whose
//! combined color patterns identify it.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_forge::{
    commands::{run_benchmark, run_feedback, run_filter, run_generate},
    core::{Dictionary, FrequencyTable},
    generator::{Generator, GeneratorConfig},
    output::{
        print_benchmark_result, print_feedback_result, print_filter_result, print_generate_report,
    },
    wordlists::{
        FREQUENCIES, WORDS,
        loader::{load_dictionary, load_frequencies, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_forge",
    about = "Wordle puzzle generator using greedy information-gain search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file (one five-letter word per line); embedded demo list when omitted
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Frequency file (word and weight per line); embedded sample when omitted
    #[arg(short = 'f', long, global = true)]
    frequencies: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a puzzle (default)
    Generate {
        /// Fix the answer word instead of drawing one by frequency
        #[arg(short, long)]
        answer: Option<String>,

        /// RNG seed for reproducible puzzles
        #[arg(short, long)]
        seed: Option<u64>,

        /// Maximum search attempts
        #[arg(long)]
        attempts: Option<usize>,

        /// Print the puzzle as JSON instead of tiles
        #[arg(long)]
        json: bool,

        /// Show the answer in the tile output
        #[arg(long)]
        reveal: bool,
    },

    /// Compute the color pattern for a guess against an answer
    Feedback {
        /// The guessed word
        guess: String,

        /// The answer word
        answer: String,
    },

    /// List dictionary words consistent with WORD=PATTERN records
    Filter {
        /// Records like crane=--G-G (G green, Y yellow, - gray)
        records: Vec<String>,

        /// Print the survivors as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate many puzzles and report quality statistics
    Benchmark {
        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value = "25")]
        count: usize,

        /// Base RNG seed; puzzle i uses seed + i
        #[arg(short, long, default_value = "0")]
        seed: u64,
    },
}

/// Load the dictionary from the -w flag or fall back to the embedded list
fn load_words(wordlist: Option<&PathBuf>) -> Result<Dictionary> {
    let words = match wordlist {
        Some(path) => load_dictionary(path)?,
        None => words_from_slice(WORDS),
    };
    Ok(Dictionary::from_words(words)?)
}

/// Load frequencies from the -f flag or fall back to the embedded sample
fn load_weights(frequencies: Option<&PathBuf>) -> Result<FrequencyTable> {
    match frequencies {
        Some(path) => Ok(FrequencyTable::from_pairs(load_frequencies(path)?)),
        None => Ok(FrequencyTable::from_pairs(FREQUENCIES.iter().copied())),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_words(cli.wordlist.as_ref())?;
    let frequencies = load_weights(cli.frequencies.as_ref())?;

    // Default to puzzle generation if no command given
    let command = cli.command.unwrap_or(Commands::Generate {
        answer: None,
        seed: None,
        attempts: None,
        json: false,
        reveal: false,
    });

    match command {
        Commands::Generate {
            answer,
            seed,
            attempts,
            json,
            reveal,
        } => {
            let mut config = GeneratorConfig {
                seed,
                ..GeneratorConfig::default()
            };
            if let Some(attempts) = attempts {
                config.max_attempts = attempts;
            }

            let mut generator = Generator::new(dictionary, frequencies, config);
            let report = run_generate(&mut generator, answer.as_deref())?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report.puzzle)?);
            } else {
                print_generate_report(&report, reveal || answer.is_some());
            }
            Ok(())
        }
        Commands::Feedback { guess, answer } => {
            let result = run_feedback(&guess, &answer).map_err(|e| anyhow::anyhow!(e))?;
            print_feedback_result(&result);
            Ok(())
        }
        Commands::Filter { records, json } => {
            let generator = Generator::new(dictionary, frequencies, GeneratorConfig::default());
            let survivors =
                run_filter(&generator, &records).map_err(|e| anyhow::anyhow!(e))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&survivors)?);
            } else {
                print_filter_result(&survivors);
            }
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            let config = GeneratorConfig::default();
            let result = run_benchmark(&dictionary, &frequencies, &config, count, seed);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
