//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_feedback_result, print_filter_result, print_generate_report,
};
