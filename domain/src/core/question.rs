//! Question entities and the question bank

use super::category::Category;
use super::error::DomainError;
use serde::Deserialize;
use std::collections::HashSet;

/// A selectable answer for a question (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnswerOption {
    /// Text shown next to the option number
    pub text: String,
    /// Category credited when this option is chosen
    pub category: Category,
}

impl AnswerOption {
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }
}

/// A multiple-choice question
///
/// Options are kept in presentation order; option `n` (1-based) in the
/// prompt corresponds to `options[n - 1]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub id: u32,
    #[serde(rename = "question")]
    pub text: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn new(id: u32, text: impl Into<String>, options: Vec<AnswerOption>) -> Self {
        Self {
            id,
            text: text.into(),
            options,
        }
    }

    /// Number of selectable options (the upper bound of a valid choice)
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Resolve a 1-based choice to its option
    pub fn option(&self, choice: usize) -> Option<&AnswerOption> {
        choice.checked_sub(1).and_then(|i| self.options.get(i))
    }
}

/// Immutable, ordered sequence of questions
///
/// Constructed once at startup. The constructor enforces the shape checks:
/// at least one question, unique ids, and a non-empty option list for
/// every question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self, DomainError> {
        if questions.is_empty() {
            return Err(DomainError::EmptyQuestionBank);
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id) {
                return Err(DomainError::DuplicateQuestionId(question.id));
            }
            if question.options.is_empty() {
                return Err(DomainError::NoOptions(question.id));
            }
        }

        Ok(Self { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question(id: u32) -> Question {
        Question::new(
            id,
            "Pick a side",
            vec![
                AnswerOption::new("Green", Category::Ork),
                AnswerOption::new("Pointy ears", Category::Eldar),
            ],
        )
    }

    #[test]
    fn test_option_lookup_is_one_based() {
        let q = sample_question(1);
        assert_eq!(q.option(1).unwrap().category, Category::Ork);
        assert_eq!(q.option(2).unwrap().category, Category::Eldar);
        assert!(q.option(0).is_none());
        assert!(q.option(3).is_none());
    }

    #[test]
    fn test_bank_preserves_order() {
        let bank = QuestionBank::new(vec![sample_question(2), sample_question(1)]).unwrap();
        let ids: Vec<_> = bank.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(bank.len(), 2);
    }

    #[test]
    fn test_bank_rejects_empty() {
        assert_eq!(
            QuestionBank::new(vec![]),
            Err(DomainError::EmptyQuestionBank)
        );
    }

    #[test]
    fn test_bank_rejects_duplicate_ids() {
        let result = QuestionBank::new(vec![sample_question(7), sample_question(7)]);
        assert_eq!(result, Err(DomainError::DuplicateQuestionId(7)));
    }

    #[test]
    fn test_bank_rejects_question_without_options() {
        let result = QuestionBank::new(vec![Question::new(3, "Empty", vec![])]);
        assert_eq!(result, Err(DomainError::NoOptions(3)));
    }

    #[test]
    fn test_deserialize_file_shape() {
        let json = r#"{
            "id": 1,
            "question": "What do you do with a captured enemy?",
            "options": [
                { "text": "Krump 'em", "category": "Ork" },
                { "text": "Interrogate them", "category": "Imperial Guard" }
            ]
        }"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.text, "What do you do with a captured enemy?");
        assert_eq!(q.option_count(), 2);
        assert_eq!(q.options[1].category, Category::ImperialGuard);
    }
}
