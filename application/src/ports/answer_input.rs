//! Answer input port
//!
//! Abstracts where answers come from. The interactive adapter lives in the
//! presentation layer; [`ScriptedInput`] replays a fixed list of lines.
//!
//! # Cancellation
//!
//! Adapters report an out-of-band cancel (Esc key, end of input) as
//! [`InputEvent::Cancelled`] rather than an error. The use case treats it
//! as an immediate abort with no report.

use async_trait::async_trait;
use std::collections::VecDeque;
use thiserror::Error;

/// One unit of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A full line of text, without the trailing newline
    Line(String),
    /// The user asked to abort
    Cancelled,
}

/// Failure while reading from the input device
#[derive(Error, Debug)]
pub enum AnswerInputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Port for reading answer lines
#[async_trait]
pub trait AnswerInput: Send {
    /// Wait for the next line or a cancel signal
    async fn read_line(&mut self) -> Result<InputEvent, AnswerInputError>;

    /// Drop anything typed before now (e.g. during the intro animation)
    fn discard_pending(&mut self) {}
}

/// Replays a fixed sequence of lines, then reports cancellation
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not yet consumed
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

#[async_trait]
impl AnswerInput for ScriptedInput {
    async fn read_line(&mut self) -> Result<InputEvent, AnswerInputError> {
        Ok(match self.lines.pop_front() {
            Some(line) => InputEvent::Line(line),
            None => InputEvent::Cancelled,
        })
    }
}
