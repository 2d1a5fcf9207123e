//! Answer input adapters
//!
//! [`ConsoleInput::detect`] picks raw-mode key reading when stdin is a
//! terminal and plain line reading otherwise.

mod line_buffer;
mod piped;
mod terminal;

pub use line_buffer::{KeyOutcome, LineBuffer};
pub use piped::PipedInput;
pub use terminal::TerminalInput;

use async_trait::async_trait;
use std::io::IsTerminal;
use warband_application::{AnswerInput, AnswerInputError, InputEvent};

/// Stdin-backed answer input
pub enum ConsoleInput {
    Terminal(TerminalInput),
    Piped(PipedInput),
}

impl ConsoleInput {
    pub fn detect() -> Self {
        if std::io::stdin().is_terminal() {
            ConsoleInput::Terminal(TerminalInput::new())
        } else {
            ConsoleInput::Piped(PipedInput::new())
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, ConsoleInput::Terminal(_))
    }
}

#[async_trait]
impl AnswerInput for ConsoleInput {
    async fn read_line(&mut self) -> Result<InputEvent, AnswerInputError> {
        match self {
            ConsoleInput::Terminal(input) => input.read_line().await,
            ConsoleInput::Piped(input) => input.read_line().await,
        }
    }

    fn discard_pending(&mut self) {
        if let ConsoleInput::Terminal(input) = self {
            input.discard_pending();
        }
    }
}
