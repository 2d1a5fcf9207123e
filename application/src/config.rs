//! Application-level configuration.
//!
//! This module provides configuration types that control how the quiz use
//! case behaves, independent of where the values were loaded from.

use std::time::Duration;

/// Default pause after an accepted answer before the next question.
pub const DEFAULT_ANSWER_PAUSE: Duration = Duration::from_millis(500);

/// Quiz behavior configuration.
#[derive(Debug, Clone)]
pub struct QuizBehavior {
    /// Cosmetic pause after an accepted answer. Zero disables it.
    pub answer_pause: Duration,
}

impl Default for QuizBehavior {
    fn default() -> Self {
        Self {
            answer_pause: DEFAULT_ANSWER_PAUSE,
        }
    }
}

impl QuizBehavior {
    /// Creates a QuizBehavior with the pause given in milliseconds.
    pub fn with_pause_millis(millis: u64) -> Self {
        Self {
            answer_pause: Duration::from_millis(millis),
        }
    }

    /// No pause between questions (used by tests and piped input).
    pub fn immediate() -> Self {
        Self {
            answer_pause: Duration::ZERO,
        }
    }
}
