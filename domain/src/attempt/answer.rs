//! Answer parsing and validation

use thiserror::Error;

/// Why a submitted answer was rejected
///
/// All variants are recoverable: the same question is asked again and the
/// tally is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnswerError {
    #[error("'{input}' is not a number")]
    NotANumber { input: String },

    #[error("choice {choice} is outside 1-{max}")]
    OutOfRange { choice: i64, max: usize },

    #[error("no question is awaiting an answer")]
    NotAwaitingAnswer,
}

/// Parse raw input as a 1-based choice for a question with `option_count` options
///
/// Surrounding whitespace is ignored. Anything that is not a whole integer
/// in `1..=option_count` is rejected.
pub fn parse_choice(raw: &str, option_count: usize) -> Result<usize, AnswerError> {
    let trimmed = raw.trim();
    let choice: i64 = trimmed.parse().map_err(|_| AnswerError::NotANumber {
        input: trimmed.to_string(),
    })?;

    if choice < 1 || choice as u64 > option_count as u64 {
        return Err(AnswerError::OutOfRange {
            choice,
            max: option_count,
        });
    }

    Ok(choice as usize)
}
