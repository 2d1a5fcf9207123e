//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types where
//! needed.

mod output;
mod quiz;

pub use output::FileOutputConfig;
pub use quiz::FileQuizConfig;

use serde::{Deserialize, Serialize};

/// Severity of a configuration issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The value will be used but is probably a mistake
    Warning,
    /// The value cannot work
    Error,
}

/// A problem detected in the loaded configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted key, e.g. `quiz.result_path`
    pub field: String,
    pub message: String,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Quiz data and behavior settings
    pub quiz: FileQuizConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.quiz.questions_path.trim().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                field: "quiz.questions_path".to_string(),
                message: "quiz.questions_path must not be empty".to_string(),
            });
        }

        if self.quiz.result_path.trim().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                field: "quiz.result_path".to_string(),
                message: "quiz.result_path must not be empty".to_string(),
            });
        }

        if self.quiz.answer_pause_ms > 10_000 {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                field: "quiz.answer_pause_ms".to_string(),
                message: format!(
                    "quiz.answer_pause_ms is {}ms; every answer will stall that long",
                    self.quiz.answer_pause_ms
                ),
            });
        }

        if self.output.typewriter && self.output.typewriter_delay_ms > 1_000 {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                field: "output.typewriter_delay_ms".to_string(),
                message: format!(
                    "output.typewriter_delay_ms is {}ms per character",
                    self.output.typewriter_delay_ms
                ),
            });
        }

        issues
    }

    /// True if any issue is an error
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[quiz]
questions_path = "data/questions.json"
result_path = "out/result.txt"
answer_pause_ms = 0

[output]
color = false
typewriter = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.quiz.questions_path, "data/questions.json");
        assert_eq!(config.quiz.result_path, "out/result.txt");
        assert_eq!(config.quiz.answer_pause_ms, 0);
        assert!(!config.output.color);
        assert!(!config.output.typewriter);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[quiz]
result_path = "alignment.txt"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.quiz.result_path, "alignment.txt");
        // Defaults should apply
        assert_eq!(config.quiz.questions_path, "warhammer_questions.json");
        assert_eq!(config.quiz.answer_pause_ms, 500);
        assert!(config.output.color);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.quiz.questions_path, "warhammer_questions.json");
        assert_eq!(config.quiz.result_path, "result.txt");
        assert!(config.output.typewriter);
        assert_eq!(config.output.typewriter_delay_ms, 20);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_empty_paths() {
        let mut config = FileConfig::default();
        config.quiz.questions_path = "  ".to_string();
        config.quiz.result_path = String::new();

        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(FileConfig::has_errors(&issues));
        assert_eq!(issues[0].field, "quiz.questions_path");
    }

    #[test]
    fn test_validate_slow_settings_are_warnings() {
        let mut config = FileConfig::default();
        config.quiz.answer_pause_ms = 60_000;
        config.output.typewriter_delay_ms = 5_000;

        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(!FileConfig::has_errors(&issues));
    }
}
