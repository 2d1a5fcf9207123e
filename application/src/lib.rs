//! Application layer for warband-quiz
//!
//! This crate contains the quiz use case, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::QuizBehavior;
pub use ports::{
    answer_input::{AnswerInput, AnswerInputError, InputEvent, ScriptedInput},
    presenter::{NoPresenter, QuizPresenter},
    question_source::{QuestionSource, QuestionSourceError},
    result_sink::{ResultSink, ResultSinkError},
};
pub use use_cases::run_quiz::{QuizOutcome, RunQuizError, RunQuizUseCase, wants_restart};
