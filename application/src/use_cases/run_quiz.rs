//! Run Quiz use case
//!
//! Drives the question-by-question loop: present, read, validate, score,
//! then report and offer a restart.
//!
//! ```text
//! intro ─> start attempt ─┬─> render question (skipped after invalid answer)
//!                         │      │
//!                         │   prompt ─> read line ─┬─ valid ───> pause ─> next question
//!                         │                        └─ invalid ─> error ─> prompt again
//!                         │
//!                         └─> report ─> persist ─> restart? ── yes ─> start attempt
//!                                                            └─ no ──> farewell
//! ```
//!
//! A cancel signal at any read (or during the pause) ends the run
//! immediately without producing a report.

use crate::config::QuizBehavior;
use crate::ports::answer_input::{AnswerInput, AnswerInputError, InputEvent};
use crate::ports::presenter::{NoPresenter, QuizPresenter};
use crate::ports::question_source::{QuestionSource, QuestionSourceError};
use crate::ports::result_sink::ResultSink;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use warband_domain::{AlignmentReport, Attempt, QuestionBank};

/// Errors that end a quiz run
#[derive(Error, Debug)]
pub enum RunQuizError {
    #[error("Question bank error: {0}")]
    DataFormat(#[from] QuestionSourceError),

    #[error("Failed to read answer: {0}")]
    Input(#[from] AnswerInputError),
}

/// How a quiz run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizOutcome {
    /// The user declined to retake the quiz
    Finished {
        /// Completed attempts
        attempts: usize,
    },
    /// The user aborted at a prompt
    Cancelled,
}

/// Use case for running the interactive quiz
pub struct RunQuizUseCase<I: AnswerInput, S: ResultSink> {
    bank: QuestionBank,
    input: I,
    sink: S,
    behavior: QuizBehavior,
    cancellation: CancellationToken,
}

impl<I: AnswerInput, S: ResultSink> RunQuizUseCase<I, S> {
    pub fn new(bank: QuestionBank, input: I, sink: S) -> Self {
        Self {
            bank,
            input,
            sink,
            behavior: QuizBehavior::default(),
            cancellation: CancellationToken::new(),
        }
    }

    /// Load the question bank from `source`, failing fast on bad data
    pub fn from_source(
        source: &dyn QuestionSource,
        input: I,
        sink: S,
    ) -> Result<Self, RunQuizError> {
        let bank = source.load()?;
        info!(
            "Loaded {} questions from {}",
            bank.len(),
            source.location()
        );
        Ok(Self::new(bank, input, sink))
    }

    pub fn with_behavior(mut self, behavior: QuizBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Cancel the run from outside (e.g. a Ctrl+C handler)
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Execute without rendering anything
    pub async fn execute(&mut self) -> Result<QuizOutcome, RunQuizError> {
        self.execute_with_presenter(&NoPresenter).await
    }

    /// Execute the quiz, firing presenter callbacks along the way
    pub async fn execute_with_presenter(
        &mut self,
        presenter: &dyn QuizPresenter,
    ) -> Result<QuizOutcome, RunQuizError> {
        let bank = &self.bank;
        let input = &mut self.input;
        let token = &self.cancellation;

        presenter.on_intro(bank.len()).await;
        input.discard_pending();

        let mut attempt = Attempt::new();
        let mut attempts = 0;

        loop {
            attempt.start();
            info!("Starting attempt {}", attempts + 1);

            while let Some(question) = attempt.current_question(bank) {
                if attempt.should_render_question() {
                    presenter.on_question(question);
                }
                let option_count = question.option_count();
                presenter.on_answer_prompt(option_count);

                let Some(raw) = next_line(input, token).await? else {
                    return Ok(cancelled(presenter));
                };

                match attempt.submit(bank, &raw) {
                    Ok(accepted) => {
                        debug!(
                            "Question {} answered with {} ({})",
                            question.id, accepted.choice, accepted.option.category
                        );
                        presenter.on_answer_accepted(&accepted);
                        if !pause(&self.behavior, token).await {
                            return Ok(cancelled(presenter));
                        }
                        // Keys typed during the pause belong to no question
                        input.discard_pending();
                    }
                    Err(e) => {
                        debug!("Rejected answer for question {}: {}", question.id, e);
                        presenter.on_invalid_answer(&e, option_count);
                    }
                }
            }

            attempts += 1;
            let report = AlignmentReport::from_tally(attempt.tally());
            info!(
                "Attempt {} complete: dominant {} ({} answers)",
                attempts, report.dominant, report.total
            );
            presenter.on_report(&report);

            match self.sink.persist(&report.summary_text()) {
                Ok(()) => presenter.on_result_saved(&self.sink.location()),
                Err(e) => {
                    warn!("{}", e);
                    presenter.on_result_save_failed(&e);
                }
            }

            presenter.on_restart_prompt();
            let Some(answer) = next_line(input, token).await? else {
                return Ok(cancelled(presenter));
            };

            if !wants_restart(&answer) {
                presenter.on_farewell();
                return Ok(QuizOutcome::Finished { attempts });
            }
        }
    }
}

/// `y` or `yes` in any case restarts; anything else ends the run
pub fn wants_restart(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    answer == "y" || answer == "yes"
}

/// Read the next line, or `None` if the run was cancelled
async fn next_line<I: AnswerInput>(
    input: &mut I,
    token: &CancellationToken,
) -> Result<Option<String>, RunQuizError> {
    let event = tokio::select! {
        biased;
        _ = token.cancelled() => InputEvent::Cancelled,
        event = input.read_line() => event?,
    };

    Ok(match event {
        InputEvent::Line(line) => Some(line),
        InputEvent::Cancelled => {
            token.cancel();
            None
        }
    })
}

/// Cosmetic pause after an accepted answer. Returns false if cancelled.
async fn pause(behavior: &QuizBehavior, token: &CancellationToken) -> bool {
    if behavior.answer_pause.is_zero() {
        return !token.is_cancelled();
    }

    tokio::select! {
        biased;
        _ = token.cancelled() => false,
        _ = tokio::time::sleep(behavior.answer_pause) => true,
    }
}

fn cancelled(presenter: &dyn QuizPresenter) -> QuizOutcome {
    info!("Quiz cancelled by user");
    presenter.on_cancelled();
    QuizOutcome::Cancelled
}
