//! Feedback command
//!
//! Computes the color pattern one word receives against another.

use crate::core::Pattern;
use crate::generator::feedback;

/// Result of a feedback computation
pub struct FeedbackResult {
    pub guess: String,
    pub answer: String,
    pub pattern: Pattern,
}

/// Compute feedback for a guess/answer pair
///
/// # Errors
///
/// Returns an error message when either word is not five letters.
pub fn run_feedback(guess: &str, answer: &str) -> Result<FeedbackResult, String> {
    let pattern = feedback(guess, answer).map_err(|e| format!("Invalid word: {e}"))?;

    Ok(FeedbackResult {
        guess: guess.to_lowercase(),
        answer: answer.to_lowercase(),
        pattern,
    })
}
