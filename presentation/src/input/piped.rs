//! Line input for non-interactive stdin (pipes, redirected files)

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use warband_application::{AnswerInput, AnswerInputError, InputEvent};

/// Reads answers line by line; end of input counts as cancellation
pub struct PipedInput {
    lines: Lines<BufReader<Stdin>>,
}

impl PipedInput {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for PipedInput {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnswerInput for PipedInput {
    async fn read_line(&mut self) -> Result<InputEvent, AnswerInputError> {
        Ok(match self.lines.next_line().await? {
            Some(line) => {
                // Keep the transcript readable when answers are not echoed
                println!("{}", line);
                InputEvent::Line(line)
            }
            None => InputEvent::Cancelled,
        })
    }
}
