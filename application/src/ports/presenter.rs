//! Quiz presentation port
//!
//! Defines the callbacks the quiz use case fires as it moves through an
//! attempt. Implementations live in the presentation layer and decide how
//! things look (colors, typewriter effect). The use case never depends on
//! any of that.

use super::result_sink::ResultSinkError;
use async_trait::async_trait;
use warband_domain::{AcceptedAnswer, AlignmentReport, AnswerError, Question};

/// Callbacks for rendering the quiz
#[async_trait]
pub trait QuizPresenter: Send + Sync {
    /// Called once before the first attempt. May animate.
    async fn on_intro(&self, _question_count: usize) {}

    /// Render a question and its numbered options
    ///
    /// Not called again for the same question after an invalid answer.
    fn on_question(&self, question: &Question);

    /// Show the answer prompt for a question with `option_count` options
    fn on_answer_prompt(&self, option_count: usize);

    fn on_answer_accepted(&self, answer: &AcceptedAnswer);

    fn on_invalid_answer(&self, error: &AnswerError, option_count: usize);

    /// Render the final breakdown, dominant category and quote
    fn on_report(&self, report: &AlignmentReport);

    fn on_result_saved(&self, _location: &str) {}

    fn on_result_save_failed(&self, _error: &ResultSinkError) {}

    fn on_restart_prompt(&self);

    fn on_farewell(&self) {}

    fn on_cancelled(&self) {}
}

/// No-op presenter for when nothing should be rendered
pub struct NoPresenter;

#[async_trait]
impl QuizPresenter for NoPresenter {
    fn on_question(&self, _question: &Question) {}
    fn on_answer_prompt(&self, _option_count: usize) {}
    fn on_answer_accepted(&self, _answer: &AcceptedAnswer) {}
    fn on_invalid_answer(&self, _error: &AnswerError, _option_count: usize) {}
    fn on_report(&self, _report: &AlignmentReport) {}
    fn on_restart_prompt(&self) {}
}
