//! Quiz configuration from TOML (`[quiz]` section)

use serde::{Deserialize, Serialize};
use warband_application::QuizBehavior;

/// Raw quiz configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizConfig {
    /// Path to the JSON question bank
    pub questions_path: String,
    /// Path of the result summary, overwritten after every attempt
    pub result_path: String,
    /// Pause after an accepted answer, in milliseconds
    pub answer_pause_ms: u64,
}

impl Default for FileQuizConfig {
    fn default() -> Self {
        Self {
            questions_path: "warhammer_questions.json".to_string(),
            result_path: "result.txt".to_string(),
            answer_pause_ms: 500,
        }
    }
}

impl FileQuizConfig {
    pub fn to_behavior(&self) -> QuizBehavior {
        QuizBehavior::with_pause_millis(self.answer_pause_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_to_behavior() {
        let config = FileQuizConfig {
            answer_pause_ms: 0,
            ..Default::default()
        };
        assert!(config.to_behavior().answer_pause.is_zero());

        let config = FileQuizConfig::default();
        assert_eq!(config.to_behavior().answer_pause, Duration::from_millis(500));
    }
}
