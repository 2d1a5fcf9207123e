//! Domain error types

use thiserror::Error;

/// Domain-level errors raised while building the question bank
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Question bank contains no questions")]
    EmptyQuestionBank,

    #[error("Question {0} has no options")]
    NoOptions(u32),

    #[error("Duplicate question id: {0}")]
    DuplicateQuestionId(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DomainError::NoOptions(4).to_string(),
            "Question 4 has no options"
        );
        assert_eq!(
            DomainError::DuplicateQuestionId(2).to_string(),
            "Duplicate question id: 2"
        );
    }
}
