//! Console presenter for the quiz use case

use super::console::ConsoleFormatter;
use super::typewriter::type_out;
use crate::config::OutputConfig;
use async_trait::async_trait;
use colored::Colorize;
use std::io::{self, Write};
use warband_application::{QuizPresenter, ResultSinkError};
use warband_domain::{AcceptedAnswer, AlignmentReport, AnswerError, Question};

/// Renders quiz progress to stdout
pub struct ConsolePresenter {
    config: OutputConfig,
}

impl ConsolePresenter {
    pub fn new(config: OutputConfig) -> Self {
        if !config.color {
            colored::control::set_override(false);
        }
        Self { config }
    }

    /// Print without a trailing newline and flush so the cursor stays on the prompt
    fn prompt(text: &str) {
        print!("{}", text);
        let _ = io::stdout().flush();
    }
}

impl Default for ConsolePresenter {
    fn default() -> Self {
        Self::new(OutputConfig::default())
    }
}

#[async_trait]
impl QuizPresenter for ConsolePresenter {
    async fn on_intro(&self, question_count: usize) {
        let intro = ConsoleFormatter::intro(question_count);
        if type_out(&intro, self.config.typewriter_delay).await.is_err() {
            // stdout is gone; nothing else will render either
            return;
        }
        println!("{}", "Press Esc to exit".bright_black());
    }

    fn on_question(&self, question: &Question) {
        print!("{}", ConsoleFormatter::question(question));
    }

    fn on_answer_prompt(&self, option_count: usize) {
        Self::prompt(&ConsoleFormatter::answer_prompt(option_count));
    }

    fn on_answer_accepted(&self, answer: &AcceptedAnswer) {
        println!();
        println!("{}", ConsoleFormatter::accepted(answer));
    }

    fn on_invalid_answer(&self, _error: &AnswerError, option_count: usize) {
        println!("{}", ConsoleFormatter::invalid(option_count));
    }

    fn on_report(&self, report: &AlignmentReport) {
        print!("{}", ConsoleFormatter::report(report));
    }

    fn on_result_saved(&self, location: &str) {
        println!("{}", format!("Results saved to {}", location).bright_black());
    }

    fn on_result_save_failed(&self, error: &ResultSinkError) {
        eprintln!("{} {}", "Could not save results:".red().bold(), error);
    }

    fn on_restart_prompt(&self) {
        Self::prompt(&ConsoleFormatter::restart_prompt());
    }

    fn on_farewell(&self) {
        println!("{}", "Good Luck.".bright_black());
    }

    fn on_cancelled(&self) {
        println!("{}", "\nExiting questionnaire...".red());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use warband_application::{
        QuizBehavior, QuizOutcome, ResultSink, RunQuizUseCase, ScriptedInput,
    };
    use warband_domain::{AnswerOption, Category, QuestionBank};

    #[derive(Default)]
    struct LastSummary(Mutex<Option<String>>);

    impl ResultSink for LastSummary {
        fn persist(&self, summary: &str) -> Result<(), ResultSinkError> {
            *self.0.lock().unwrap() = Some(summary.to_string());
            Ok(())
        }

        fn location(&self) -> String {
            "memory".to_string()
        }
    }

    fn bank() -> QuestionBank {
        QuestionBank::new(vec![Question::new(
            1,
            "Pick a weapon",
            vec![
                AnswerOption::new("Choppa", Category::Ork),
                AnswerOption::new("Lasgun", Category::ImperialGuard),
            ],
        )])
        .unwrap()
    }

    #[test]
    fn test_plain_config_disables_color() {
        let presenter = ConsolePresenter::new(OutputConfig::plain());
        assert!(!presenter.config.color);
        assert!(presenter.config.typewriter_delay.is_none());
    }

    #[tokio::test]
    async fn test_full_run_through_console() {
        let presenter = ConsolePresenter::new(OutputConfig::plain());
        let mut quiz = RunQuizUseCase::new(
            bank(),
            ScriptedInput::new(["7", "2", "n"]),
            LastSummary::default(),
        )
        .with_behavior(QuizBehavior::immediate());

        let outcome = quiz.execute_with_presenter(&presenter).await.unwrap();

        assert_eq!(outcome, QuizOutcome::Finished { attempts: 1 });
    }

    #[tokio::test]
    async fn test_cancelled_run_through_console() {
        let presenter = ConsolePresenter::new(OutputConfig::plain());
        let mut quiz = RunQuizUseCase::new(bank(), ScriptedInput::default(), LastSummary::default())
            .with_behavior(QuizBehavior::immediate());

        let outcome = quiz.execute_with_presenter(&presenter).await.unwrap();

        assert_eq!(outcome, QuizOutcome::Cancelled);
    }
}
