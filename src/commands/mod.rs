//! Command implementations

pub mod benchmark;
pub mod feedback;
pub mod filter;
pub mod generate;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use feedback::{FeedbackResult, run_feedback};
pub use filter::{parse_record, run_filter};
pub use generate::{GenerateReport, run_generate};
