//! Word lists and frequency data
//!
//! Provides the embedded demo data plus loaders for external files.

mod embedded;
pub mod loader;

pub use embedded::{FREQUENCIES, WORDS};
