//! Quiz attempt state machine
//!
//! ```text
//! Idle ──start()──> AwaitingAnswer ──submit(valid)──> AwaitingAnswer (next question)
//!                        │   ▲                              │
//!                        │   └──submit(invalid)── Retrying  └──last question──> Completed
//!                        │
//!                        └──────────────start()  (restart from any phase)
//! ```
//!
//! The attempt owns its [`ScoreTally`], so resetting an attempt can never
//! leave scores behind from a previous run.

use super::answer::{AnswerError, parse_choice};
use crate::core::question::{AnswerOption, Question, QuestionBank};
use crate::scoring::ScoreTally;

/// Phase of the attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptPhase {
    /// Not started yet
    Idle,
    /// Waiting for an answer to the question at `current_index`
    AwaitingAnswer,
    /// Every question has been answered
    Completed,
}

/// A valid answer that was applied to the tally
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedAnswer {
    /// The 1-based choice as typed
    pub choice: usize,
    /// The option that was selected
    pub option: AnswerOption,
    /// Whether this answer finished the attempt
    pub completed: bool,
}

/// State of one pass through the question bank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    phase: AttemptPhase,
    current_index: usize,
    last_answer_invalid: bool,
    tally: ScoreTally,
}

impl Default for Attempt {
    fn default() -> Self {
        Self::new()
    }
}

impl Attempt {
    pub fn new() -> Self {
        Self {
            phase: AttemptPhase::Idle,
            current_index: 0,
            last_answer_invalid: false,
            tally: ScoreTally::new(),
        }
    }

    /// Start or restart: index to 0, invalid flag cleared, tally zeroed
    pub fn start(&mut self) {
        self.current_index = 0;
        self.last_answer_invalid = false;
        self.tally.reset();
        self.phase = AttemptPhase::AwaitingAnswer;
    }

    pub fn phase(&self) -> AttemptPhase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn last_answer_invalid(&self) -> bool {
        self.last_answer_invalid
    }

    pub fn tally(&self) -> &ScoreTally {
        &self.tally
    }

    pub fn is_completed(&self) -> bool {
        self.phase == AttemptPhase::Completed
    }

    /// The question awaiting an answer, if any
    pub fn current_question<'a>(&self, bank: &'a QuestionBank) -> Option<&'a Question> {
        match self.phase {
            AttemptPhase::AwaitingAnswer => bank.get(self.current_index),
            _ => None,
        }
    }

    /// Whether the current question body should be shown
    ///
    /// False right after an invalid answer: only the error and the prompt
    /// are repeated.
    pub fn should_render_question(&self) -> bool {
        !self.last_answer_invalid
    }

    /// Validate `raw` against the current question and apply it
    ///
    /// On success the tally is incremented exactly once and the attempt
    /// moves to the next question (or completes). On failure nothing but the
    /// invalid flag changes.
    pub fn submit(&mut self, bank: &QuestionBank, raw: &str) -> Result<AcceptedAnswer, AnswerError> {
        let question = self
            .current_question(bank)
            .ok_or(AnswerError::NotAwaitingAnswer)?;

        let choice = match parse_choice(raw, question.option_count()) {
            Ok(choice) => choice,
            Err(e) => {
                self.last_answer_invalid = true;
                return Err(e);
            }
        };

        let option = question
            .option(choice)
            .cloned()
            .ok_or(AnswerError::OutOfRange {
                choice: choice as i64,
                max: question.option_count(),
            })?;

        self.tally.increment(option.category);
        self.last_answer_invalid = false;
        self.current_index += 1;

        let completed = self.current_index >= bank.len();
        if completed {
            self.phase = AttemptPhase::Completed;
        }

        Ok(AcceptedAnswer {
            choice,
            option,
            completed,
        })
    }
}
